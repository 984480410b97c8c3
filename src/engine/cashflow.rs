// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::costs::check_ratio;
use super::revenue::{growth_factor, overflow};
use crate::error::{EngineError, EngineResult};
use crate::models::CashflowPoint;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const DEFAULT_HORIZON_MONTHS: u32 = 36;

/// Growth slows as the venture matures: the full base rate for the first
/// year, 60% of it in year two and 40% from year three on.
pub fn phase_rate_percent(base_growth_rate_percent: Decimal, month: u32) -> Decimal {
    match month {
        0..=12 => base_growth_rate_percent,
        13..=24 => base_growth_rate_percent * dec!(0.6),
        _ => base_growth_rate_percent * dec!(0.4),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowInputs {
    pub initial_capital: Decimal,
    pub starting_monthly_revenue: Decimal,
    pub monthly_fixed_cost: Decimal,
    pub variable_cost_ratio: Decimal,
    pub base_growth_rate_percent: Decimal,
    pub horizon_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowProjection {
    pub initial_capital: Decimal,
    pub points: Vec<CashflowPoint>,
    pub breakeven_month: Option<u32>,
}

impl CashflowProjection {
    pub fn profits(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.profit).collect()
    }

    pub fn total_profit(&self) -> Decimal {
        self.points.iter().map(|p| p.profit).sum()
    }

    /// Profit of projection year `year` (1-indexed, twelve months each).
    pub fn year_profit(&self, year: u32) -> Decimal {
        self.year_slice(year).iter().map(|p| p.profit).sum()
    }

    pub fn year_revenue(&self, year: u32) -> Decimal {
        self.year_slice(year).iter().map(|p| p.revenue).sum()
    }

    /// Revenue of the last twelve months of the horizon.
    pub fn final_year_revenue(&self) -> Decimal {
        let skip = self.points.len().saturating_sub(12);
        self.points[skip..].iter().map(|p| p.revenue).sum()
    }

    pub fn years(&self) -> u32 {
        (self.points.len() as u32).div_ceil(12)
    }

    fn year_slice(&self, year: u32) -> &[CashflowPoint] {
        if year == 0 {
            return &[];
        }
        let start = ((year - 1) as usize * 12).min(self.points.len());
        let end = (year as usize * 12).min(self.points.len());
        &self.points[start..end]
    }
}

/// Month-by-month revenue, expenses and running cash position starting from
/// the sunk initial capital.
///
/// Month `m` compounds the starting revenue by the rate of whichever growth
/// phase `m` falls in, raised to `m - 1`. The exponent is not re-based at
/// phase boundaries, so the curve changes slope at months 13 and 25.
pub fn project_cashflow(inputs: &CashflowInputs) -> EngineResult<CashflowProjection> {
    check_ratio(inputs.variable_cost_ratio)?;
    if inputs.horizon_months == 0 {
        return Err(EngineError::invalid("horizon_months", "must be at least 1"));
    }

    let mut points = Vec::with_capacity(inputs.horizon_months as usize);
    let mut cumulative = -inputs.initial_capital;
    let mut revenue_to_date = Decimal::ZERO;
    for month in 1..=inputs.horizon_months {
        let overflowed = || overflow("horizon_months", month);
        let rate = phase_rate_percent(inputs.base_growth_rate_percent, month);
        let revenue = inputs
            .starting_monthly_revenue
            .checked_mul(growth_factor(rate, month)?)
            .ok_or_else(overflowed)?;
        let total_expenses = revenue
            .checked_mul(inputs.variable_cost_ratio)
            .and_then(|variable| variable.checked_add(inputs.monthly_fixed_cost))
            .ok_or_else(overflowed)?;
        let profit = revenue.checked_sub(total_expenses).ok_or_else(overflowed)?;
        cumulative = cumulative.checked_add(profit).ok_or_else(overflowed)?;
        revenue_to_date = revenue_to_date.checked_add(revenue).ok_or_else(overflowed)?;
        points.push(CashflowPoint {
            month,
            revenue,
            total_expenses,
            profit,
            cumulative_cashflow: cumulative,
        });
    }

    let breakeven_month = points
        .iter()
        .find(|p| p.cumulative_cashflow >= Decimal::ZERO)
        .map(|p| p.month);
    tracing::debug!(
        months = inputs.horizon_months,
        breakeven = ?breakeven_month,
        "cashflow projected"
    );
    Ok(CashflowProjection {
        initial_capital: inputs.initial_capital,
        points,
        breakeven_month,
    })
}
