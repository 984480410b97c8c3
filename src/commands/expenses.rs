// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{decimal_arg, output_flags};
use crate::config::Scenario;
use crate::engine::costs::{
    CostStructure, VariableCostEstimate, analyze_cost_structure, annualize, breakeven_units,
    compute_monthly_fixed_cost, estimate_variable_costs,
};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FixedCostRow {
    pub label: String,
    pub monthly: Decimal,
    pub annual: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ExpenseReport {
    pub fixed: Vec<FixedCostRow>,
    pub monthly_fixed_total: Decimal,
    pub annual_fixed_total: Decimal,
    pub variable_estimate: VariableCostEstimate,
    /// Cost structure at the estimated variable-cost ratio.
    pub structure: CostStructure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven_units: Option<Decimal>,
}

pub fn report(scenario: &Scenario, revenue: Decimal) -> Result<ExpenseReport> {
    let monthly_fixed_total = compute_monthly_fixed_cost(&scenario.fixed_costs);
    let fixed = scenario
        .fixed_costs
        .iter()
        .map(|i| FixedCostRow {
            label: i.label.clone(),
            monthly: i.amount,
            annual: annualize(i.amount),
        })
        .collect();
    let variable_estimate = estimate_variable_costs(&scenario.variable_costs);
    let structure = analyze_cost_structure(revenue, monthly_fixed_total, variable_estimate.ratio)?;
    let units = structure
        .breakeven_revenue
        .and_then(|b| breakeven_units(b, scenario.analysis.average_unit_price));
    Ok(ExpenseReport {
        fixed,
        monthly_fixed_total,
        annual_fixed_total: annualize(monthly_fixed_total),
        variable_estimate,
        structure,
        breakeven_units: units,
    })
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let revenue = decimal_arg(sub, "revenue")?.unwrap_or(scenario.analysis.revenue);
    let r = report(scenario, revenue)?;
    if maybe_print_json(json_flag, jsonl_flag, &r)? {
        return Ok(());
    }

    let mut fixed: Vec<Vec<String>> = r
        .fixed
        .iter()
        .map(|f| vec![f.label.clone(), fmt_money(&f.monthly), fmt_money(&f.annual)])
        .collect();
    fixed.push(vec![
        "TOTAL".into(),
        fmt_money(&r.monthly_fixed_total),
        fmt_money(&r.annual_fixed_total),
    ]);
    println!("{}", pretty_table(&["Fixed expense", "Monthly", "Annual"], fixed));

    let v = &r.variable_estimate;
    println!(
        "Estimated variable costs: {} of revenue (on {} / {} BBL)",
        fmt_percent(&v.percent()),
        fmt_money(&v.reference_revenue),
        v.reference_barrels
    );
    let var_rows = vec![
        vec!["Ingredients".into(), fmt_money(&v.ingredients)],
        vec!["Packaging".into(), fmt_money(&v.packaging)],
        vec!["Federal excise tax".into(), fmt_money(&v.excise_tax)],
        vec!["Card fees".into(), fmt_money(&v.card_fees)],
        vec!["Distribution".into(), fmt_money(&v.distribution)],
        vec!["TOTAL".into(), fmt_money(&v.total)],
    ];
    println!("{}", pretty_table(&["Variable cost", "Amount"], var_rows));

    let s = &r.structure;
    let structure_rows = vec![
        vec!["Revenue".into(), fmt_money(&s.revenue)],
        vec!["Variable costs".into(), fmt_money(&s.variable_costs)],
        vec!["Fixed costs".into(), fmt_money(&s.fixed_costs)],
        vec!["Net profit".into(), fmt_money(&s.net_profit)],
        vec!["Margin".into(), fmt_percent(&s.margin_percent)],
    ];
    println!("{}", pretty_table(&["Monthly P&L", "Amount"], structure_rows));

    match (s.breakeven_revenue, s.annual_breakeven_revenue()) {
        (Some(monthly), Some(annual)) => {
            println!("Breakeven revenue: {}/month ({}/year)", fmt_money(&monthly), fmt_money(&annual));
            if let Some(units) = r.breakeven_units {
                println!(
                    "Breakeven units at {}: {:.0}/month (~{:.0}/day)",
                    fmt_money(&scenario.analysis.average_unit_price),
                    units.round_dp(0),
                    (units / Decimal::from(30)).round_dp(0)
                );
            }
            if let Some(pct) = s.vs_breakeven_percent {
                let side = if pct >= Decimal::ZERO { "above" } else { "below" };
                println!("Revenue is {} {} breakeven", fmt_percent(&pct.abs()), side);
            }
        }
        _ => println!("Breakeven revenue: never (variable costs consume all revenue)"),
    }
    Ok(())
}
