// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{decimal_arg, output_flags};
use crate::config::{CashflowSettings, Scenario};
use crate::engine::cashflow::CashflowProjection;
use crate::engine::evaluate;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CashflowReport {
    pub projection: CashflowProjection,
    pub year_profits: Vec<Decimal>,
    pub total_profit: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_one_monthly_distributions: Option<Vec<Decimal>>,
}

pub fn with_overrides(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<Scenario> {
    let current = &scenario.cashflow;
    let start = decimal_arg(sub, "start-revenue")?;
    let cashflow = CashflowSettings {
        starting_monthly_revenue: start.unwrap_or(current.starting_monthly_revenue),
        seed_from_forecast: current.seed_from_forecast && start.is_none(),
        growth_rate_percent: decimal_arg(sub, "growth")?.unwrap_or(current.growth_rate_percent),
        horizon_months: sub
            .get_one::<u32>("months")
            .copied()
            .unwrap_or(current.horizon_months),
        ..current.clone()
    };
    Ok(Scenario {
        cashflow,
        ..scenario.clone()
    })
}

pub fn report(scenario: &Scenario) -> Result<CashflowReport> {
    let eval = evaluate(scenario)?;
    let projection = eval.cashflow;
    let year_profits = (1..=projection.years())
        .map(|y| projection.year_profit(y))
        .collect();
    Ok(CashflowReport {
        total_profit: projection.total_profit(),
        year_profits,
        projection,
        year_one_monthly_distributions: eval.year_one_monthly_distributions,
    })
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let scenario = with_overrides(scenario, sub)?;
    let r = report(&scenario)?;
    if maybe_print_json(json_flag, jsonl_flag, &r)? {
        return Ok(());
    }

    let rows = r
        .projection
        .points
        .iter()
        .map(|p| {
            vec![
                p.month.to_string(),
                fmt_money(&p.revenue),
                fmt_money(&p.total_expenses),
                fmt_money(&p.profit),
                fmt_money(&p.cumulative_cashflow),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Revenue", "Expenses", "Profit", "Cumulative"],
            rows
        )
    );

    match r.projection.breakeven_month {
        Some(m) => println!("Breakeven: month {}", m),
        None => println!(
            "Breakeven: after month {}",
            r.projection.points.len()
        ),
    }
    for (idx, profit) in r.year_profits.iter().enumerate() {
        println!("Year {} net profit: {}", idx + 1, fmt_money(profit));
    }

    if let Some(dists) = &r.year_one_monthly_distributions {
        let split = &scenario.ownership.split.percentages;
        let rows = dists
            .iter()
            .zip(split.iter())
            .enumerate()
            .map(|(idx, (amt, pct))| {
                vec![
                    format!("Partner {}", idx + 1),
                    format!("{:.2}%", pct),
                    format!("{}/month", fmt_money(amt)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Partner", "Ownership", "Avg distribution (year 1)"], rows)
        );
    }
    Ok(())
}
