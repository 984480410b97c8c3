// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Recurring costs: the fixed-cost budget, the variable-cost estimate and the
//! monthly cost structure with its breakeven point.

use super::capital::sum_line_items;
use crate::error::{EngineError, EngineResult};
use crate::models::CostLineItem;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: Decimal = dec!(12);

// Reference month used to turn per-barrel and per-unit costs into a ratio.
const REFERENCE_REVENUE: Decimal = dec!(50000);
const REFERENCE_BARRELS: Decimal = dec!(100);
const REFERENCE_PACKAGED_UNITS: Decimal = dec!(500);
const PACKAGING_MULTIPLIER: Decimal = dec!(31);
const FEDERAL_EXCISE_PER_BARREL: Decimal = dec!(3.50);
const CARD_REVENUE_SHARE: Decimal = dec!(0.30);
const DISTRIBUTED_REVENUE_SHARE: Decimal = dec!(0.40);

pub fn compute_monthly_fixed_cost(items: &[CostLineItem]) -> Decimal {
    sum_line_items(items)
}

pub fn annualize(monthly: Decimal) -> Decimal {
    monthly * MONTHS_PER_YEAR
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableCostAssumptions {
    pub ingredients_per_barrel: Decimal,
    pub packaging_per_unit: Decimal,
    pub card_fee_percent: Decimal,
    pub distribution_percent: Decimal,
}

impl Default for VariableCostAssumptions {
    fn default() -> Self {
        Self {
            ingredients_per_barrel: dec!(80),
            packaging_per_unit: dec!(0.60),
            card_fee_percent: dec!(2.8),
            distribution_percent: dec!(20),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableCostEstimate {
    pub reference_revenue: Decimal,
    pub reference_barrels: Decimal,
    pub ingredients: Decimal,
    pub packaging: Decimal,
    pub excise_tax: Decimal,
    pub card_fees: Decimal,
    pub distribution: Decimal,
    pub total: Decimal,
    pub ratio: Decimal,
}

impl VariableCostEstimate {
    pub fn percent(&self) -> Decimal {
        self.ratio * dec!(100)
    }
}

/// Variable costs of the reference month, itemised, and their share of its revenue.
pub fn estimate_variable_costs(a: &VariableCostAssumptions) -> VariableCostEstimate {
    let ingredients = REFERENCE_BARRELS * a.ingredients_per_barrel;
    let packaging = REFERENCE_PACKAGED_UNITS * a.packaging_per_unit * PACKAGING_MULTIPLIER;
    let excise_tax = REFERENCE_BARRELS * FEDERAL_EXCISE_PER_BARREL;
    let card_fees = REFERENCE_REVENUE * CARD_REVENUE_SHARE * (a.card_fee_percent / dec!(100));
    let distribution =
        REFERENCE_REVENUE * DISTRIBUTED_REVENUE_SHARE * (a.distribution_percent / dec!(100));
    let total = ingredients + packaging + excise_tax + card_fees + distribution;
    VariableCostEstimate {
        reference_revenue: REFERENCE_REVENUE,
        reference_barrels: REFERENCE_BARRELS,
        ingredients,
        packaging,
        excise_tax,
        card_fees,
        distribution,
        total,
        ratio: total / REFERENCE_REVENUE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostStructure {
    pub revenue: Decimal,
    pub variable_costs: Decimal,
    pub fixed_costs: Decimal,
    pub total_costs: Decimal,
    pub net_profit: Decimal,
    pub margin_percent: Decimal,
    pub breakeven_revenue: Option<Decimal>,
    /// How far `revenue` sits above (positive) or below (negative) breakeven, in percent.
    pub vs_breakeven_percent: Option<Decimal>,
}

impl CostStructure {
    pub fn annual_breakeven_revenue(&self) -> Option<Decimal> {
        self.breakeven_revenue.map(annualize)
    }
}

/// Monthly revenue at which fixed costs are covered. `None` when variable
/// costs eat the whole of revenue.
pub fn breakeven_revenue(
    monthly_fixed_cost: Decimal,
    variable_cost_ratio: Decimal,
) -> EngineResult<Option<Decimal>> {
    check_ratio(variable_cost_ratio)?;
    let contribution = Decimal::ONE - variable_cost_ratio;
    if contribution.is_zero() {
        return Ok(None);
    }
    Ok(Some(monthly_fixed_cost / contribution))
}

/// Units that must be sold at `unit_price` to reach `revenue`.
pub fn breakeven_units(revenue: Decimal, unit_price: Decimal) -> Option<Decimal> {
    if unit_price.is_zero() {
        None
    } else {
        Some(revenue / unit_price)
    }
}

pub fn analyze_cost_structure(
    revenue: Decimal,
    monthly_fixed_cost: Decimal,
    variable_cost_ratio: Decimal,
) -> EngineResult<CostStructure> {
    let breakeven = breakeven_revenue(monthly_fixed_cost, variable_cost_ratio)?;
    let variable_costs = revenue * variable_cost_ratio;
    let total_costs = monthly_fixed_cost + variable_costs;
    let net_profit = revenue - total_costs;
    let margin_percent = if revenue > Decimal::ZERO {
        net_profit / revenue * dec!(100)
    } else {
        Decimal::ZERO
    };
    let vs_breakeven_percent = breakeven
        .filter(|b| !b.is_zero())
        .map(|b| (revenue / b - Decimal::ONE) * dec!(100));
    Ok(CostStructure {
        revenue,
        variable_costs,
        fixed_costs: monthly_fixed_cost,
        total_costs,
        net_profit,
        margin_percent,
        breakeven_revenue: breakeven,
        vs_breakeven_percent,
    })
}

pub(crate) fn check_ratio(variable_cost_ratio: Decimal) -> EngineResult<()> {
    if variable_cost_ratio < Decimal::ZERO || variable_cost_ratio > Decimal::ONE {
        return Err(EngineError::invalid(
            "variable_cost_ratio",
            format!("must be within [0, 1], got {}", variable_cost_ratio),
        ));
    }
    Ok(())
}
