// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Financial projection engine. Every function here is a pure computation
//! over its arguments; nothing is cached between calls.

pub mod capital;
pub mod cashflow;
pub mod costs;
pub mod ownership;
pub mod revenue;

use crate::config::Scenario;
use crate::error::EngineResult;
use crate::models::RevenuePoint;
use cashflow::{CashflowInputs, CashflowProjection};
use ownership::Allocation;
use revenue::ForecastSummary;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub total_capital: Decimal,
    pub monthly_fixed_cost: Decimal,
    pub annual_fixed_cost: Decimal,
    pub revenue_forecast: Vec<RevenuePoint>,
    pub forecast_summary: ForecastSummary,
    pub cashflow: CashflowProjection,
    pub allocation: Allocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_one_monthly_distributions: Option<Vec<Decimal>>,
}

fn cashflow_inputs_from(scenario: &Scenario, forecast: &[RevenuePoint]) -> CashflowInputs {
    let starting_monthly_revenue = if scenario.cashflow.seed_from_forecast {
        forecast.first().map(|p| p.total_revenue).unwrap_or_default()
    } else {
        scenario.cashflow.starting_monthly_revenue
    };
    CashflowInputs {
        initial_capital: capital::compute_total_capital(&scenario.capital),
        starting_monthly_revenue,
        monthly_fixed_cost: costs::compute_monthly_fixed_cost(&scenario.fixed_costs),
        variable_cost_ratio: scenario.cashflow.variable_cost_ratio,
        base_growth_rate_percent: scenario.cashflow.growth_rate_percent,
        horizon_months: scenario.cashflow.horizon_months,
    }
}

/// Runs the calculators in dependency order: aggregates, revenue forecast,
/// cashflow, then the partner allocation.
pub fn evaluate(scenario: &Scenario) -> EngineResult<Evaluation> {
    let total_capital = capital::compute_total_capital(&scenario.capital);
    let monthly_fixed_cost = costs::compute_monthly_fixed_cost(&scenario.fixed_costs);

    let revenue_forecast = revenue::project_revenue(
        &scenario.channels,
        scenario.forecast.growth_rate_percent,
        scenario.forecast.horizon_months,
    )?;
    let forecast_summary = revenue::summarize_forecast(&revenue_forecast);

    let cashflow = cashflow::project_cashflow(&cashflow_inputs_from(scenario, &revenue_forecast))?;

    let own = &scenario.ownership;
    let allocation = ownership::allocate(
        total_capital,
        &own.split,
        &cashflow.profits(),
        own.distribution_percent,
        own.valuation_multiple,
        cashflow.final_year_revenue(),
    )?;
    let year_one_monthly_distributions = ownership::year_one_monthly_distributions(
        cashflow.year_profit(1),
        own.distribution_percent,
        &own.split,
    );

    tracing::debug!(
        scenario = %scenario.name,
        capital = %total_capital,
        fixed = %monthly_fixed_cost,
        breakeven = ?cashflow.breakeven_month,
        "scenario evaluated"
    );
    Ok(Evaluation {
        total_capital,
        monthly_fixed_cost,
        annual_fixed_cost: costs::annualize(monthly_fixed_cost),
        revenue_forecast,
        forecast_summary,
        cashflow,
        allocation,
        year_one_monthly_distributions,
    })
}
