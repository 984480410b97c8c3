// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{decimal_arg, output_flags};
use crate::config::{OwnershipSettings, Scenario};
use crate::engine::evaluate;
use crate::engine::ownership::Allocation;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_split, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoiReport {
    pub total_capital: Decimal,
    pub total_profit: Decimal,
    pub allocation: Allocation,
}

pub fn with_overrides(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<Scenario> {
    let current = &scenario.ownership;
    let split = match sub.get_one::<String>("split") {
        Some(raw) => parse_split(raw)?,
        None => current.split,
    };
    let ownership = OwnershipSettings {
        distribution_percent: decimal_arg(sub, "distribution")?
            .unwrap_or(current.distribution_percent),
        split,
        ..current.clone()
    };
    Ok(Scenario {
        ownership,
        ..scenario.clone()
    })
}

pub fn report(scenario: &Scenario) -> Result<RoiReport> {
    let eval = evaluate(scenario)?;
    Ok(RoiReport {
        total_capital: eval.total_capital,
        total_profit: eval.cashflow.total_profit(),
        allocation: eval.allocation,
    })
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let scenario = with_overrides(scenario, sub)?;
    let r = report(&scenario)?;
    if let Some(w) = &r.allocation.warning {
        eprintln!("warning: {}", w);
    }
    if maybe_print_json(json_flag, jsonl_flag, &r)? {
        return Ok(());
    }

    let rows = r
        .allocation
        .partners
        .iter()
        .map(|p| {
            vec![
                format!("Partner {}", p.partner_id),
                format!("{:.2}%", p.ownership_percent),
                fmt_money(&p.initial_investment),
                fmt_money(&p.cash_distributed),
                fmt_money(&p.equity_value_estimate),
                fmt_percent(&p.cash_roi_percent),
                fmt_percent(&p.average_annual_roi_percent),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Partner",
                "Ownership",
                "Investment",
                "Cash distributed",
                "Equity value (est.)",
                "Cash ROI",
                "Avg annual ROI",
            ],
            rows
        )
    );
    println!("Total initial capital: {}", fmt_money(&r.total_capital));
    println!("Total profit over horizon: {}", fmt_money(&r.total_profit));
    println!(
        "Distributed to partners: {}",
        fmt_money(&r.allocation.total_distributable)
    );
    println!(
        "Estimated business value: {}",
        fmt_money(&r.allocation.estimated_valuation)
    );
    Ok(())
}
