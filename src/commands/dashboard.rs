// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::output_flags;
use crate::config::Scenario;
use crate::engine::costs::{CostStructure, analyze_cost_structure};
use crate::engine::evaluate;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub initial_capital: Decimal,
    pub monthly_fixed_cost: Decimal,
    pub variable_cost_ratio: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven_revenue: Option<Decimal>,
    pub investment_per_partner: Vec<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven_month: Option<u32>,
    pub sample_month: CostStructure,
}

pub fn report(scenario: &Scenario) -> Result<Dashboard> {
    let eval = evaluate(scenario)?;
    let ratio = scenario.cashflow.variable_cost_ratio;
    let sample_month = analyze_cost_structure(
        scenario.analysis.dashboard_sample_revenue,
        eval.monthly_fixed_cost,
        ratio,
    )?;
    Ok(Dashboard {
        initial_capital: eval.total_capital,
        monthly_fixed_cost: eval.monthly_fixed_cost,
        variable_cost_ratio: ratio,
        breakeven_revenue: sample_month.breakeven_revenue,
        investment_per_partner: eval
            .allocation
            .partners
            .iter()
            .map(|p| p.initial_investment)
            .collect(),
        breakeven_month: eval.cashflow.breakeven_month,
        sample_month,
    })
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let d = report(scenario)?;
    if maybe_print_json(json_flag, jsonl_flag, &d)? {
        return Ok(());
    }

    println!("{}", scenario.name);
    let breakeven = d
        .breakeven_revenue
        .map(|b| format!("{}/mo", fmt_money(&b)))
        .unwrap_or_else(|| "never".into());
    let month = d
        .breakeven_month
        .map(|m| format!("month {}", m))
        .unwrap_or_else(|| "beyond horizon".into());
    let mut rows = vec![
        vec!["Initial capital required".into(), fmt_money(&d.initial_capital)],
        vec!["Monthly fixed costs".into(), fmt_money(&d.monthly_fixed_cost)],
        vec![
            format!("Breakeven revenue ({} variable)", fmt_percent(&(d.variable_cost_ratio * Decimal::from(100)))),
            breakeven,
        ],
        vec!["Cumulative cashflow breakeven".into(), month],
    ];
    for (idx, inv) in d.investment_per_partner.iter().enumerate() {
        rows.push(vec![format!("Investment, partner {}", idx + 1), fmt_money(inv)]);
    }
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let s = &d.sample_month;
    let pl = vec![
        vec!["Monthly revenue".into(), fmt_money(&s.revenue)],
        vec!["Variable costs".into(), format!("({})", fmt_money(&s.variable_costs))],
        vec!["Fixed operating costs".into(), format!("({})", fmt_money(&s.fixed_costs))],
        vec!["Net profit".into(), fmt_money(&s.net_profit)],
        vec!["Profit margin".into(), fmt_percent(&s.margin_percent)],
    ];
    println!("{}", pretty_table(&["Sample P&L", "Amount"], pl));
    Ok(())
}
