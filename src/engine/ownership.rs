// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{EngineError, EngineResult, ValidationWarning};
use crate::models::{OwnershipSplit, PartnerOutcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Allowed distance of the ownership total from 100.
pub const SPLIT_TOLERANCE: Decimal = dec!(0.01);

/// Revenue multiple used for the equity estimate.
pub const DEFAULT_VALUATION_MULTIPLE: Decimal = dec!(2.0);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub partners: Vec<PartnerOutcome>,
    pub total_distributable: Decimal,
    pub estimated_valuation: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<ValidationWarning>,
}

pub fn validate_split(split: &OwnershipSplit) -> EngineResult<Option<ValidationWarning>> {
    for pct in split.percentages {
        if pct < Decimal::ZERO || pct > dec!(100) {
            return Err(EngineError::invalid(
                "ownership_percent",
                format!("must be within [0, 100], got {}", pct),
            ));
        }
    }
    let total = split.total();
    if (total - dec!(100)).abs() > SPLIT_TOLERANCE {
        tracing::warn!(total = %total, "ownership split does not sum to 100");
        return Ok(Some(ValidationWarning::OwnershipSumMismatch { total }));
    }
    Ok(None)
}

fn share(amount: Decimal, pct: Decimal) -> Decimal {
    amount * (pct / dec!(100))
}

fn too_large(name: &'static str) -> EngineError {
    EngineError::invalid(name, "result exceeds the representable range")
}

/// Splits capital, distributed profit and estimated equity across the three
/// partners. An ownership total other than 100 is reported in
/// `Allocation::warning` and the figures are still computed from the given split.
pub fn allocate(
    total_capital: Decimal,
    split: &OwnershipSplit,
    profit_series: &[Decimal],
    distribution_percent: Decimal,
    valuation_multiple: Decimal,
    final_year_revenue: Decimal,
) -> EngineResult<Allocation> {
    if distribution_percent < Decimal::ZERO || distribution_percent > dec!(100) {
        return Err(EngineError::invalid(
            "distribution_percent",
            format!("must be within [0, 100], got {}", distribution_percent),
        ));
    }
    let warning = validate_split(split)?;

    let total_profit = profit_series
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(*p))
        .ok_or_else(|| too_large("profit_series"))?;
    let total_distributable = share(total_profit, distribution_percent);
    let estimated_valuation = final_year_revenue
        .checked_mul(valuation_multiple)
        .ok_or_else(|| too_large("valuation_multiple"))?;
    let years = Decimal::from(profit_series.len()) / dec!(12);

    let partners = split
        .percentages
        .iter()
        .enumerate()
        .map(|(idx, &pct)| -> EngineResult<PartnerOutcome> {
            let initial_investment = share(total_capital, pct);
            let cash_distributed = share(total_distributable, pct);
            let cash_roi_percent = if initial_investment > Decimal::ZERO {
                cash_distributed
                    .checked_div(initial_investment)
                    .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
                    .and_then(|gain| gain.checked_mul(dec!(100)))
                    .ok_or_else(|| too_large("cash_roi_percent"))?
            } else {
                Decimal::ZERO
            };
            let average_annual_roi_percent = if years.is_zero() {
                Decimal::ZERO
            } else {
                cash_roi_percent
                    .checked_div(years)
                    .ok_or_else(|| too_large("cash_roi_percent"))?
            };
            Ok(PartnerOutcome {
                partner_id: idx as u8 + 1,
                ownership_percent: pct,
                initial_investment,
                cash_distributed,
                equity_value_estimate: share(estimated_valuation, pct),
                cash_roi_percent,
                average_annual_roi_percent,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(Allocation {
        partners,
        total_distributable,
        estimated_valuation,
        warning,
    })
}

/// Average monthly payout per partner over the first year, only when that
/// year was profitable.
pub fn year_one_monthly_distributions(
    year_one_profit: Decimal,
    distribution_percent: Decimal,
    split: &OwnershipSplit,
) -> Option<Vec<Decimal>> {
    if year_one_profit <= Decimal::ZERO {
        return None;
    }
    let distributable = share(year_one_profit / dec!(12), distribution_percent);
    Some(
        split
            .percentages
            .iter()
            .map(|&pct| share(distributable, pct))
            .collect(),
    )
}
