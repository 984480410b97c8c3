// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::output_flags;
use crate::config::Scenario;
use crate::engine::capital::compute_total_capital;
use crate::models::CostLineItem;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CapitalReport {
    pub items: Vec<CostLineItem>,
    pub total: Decimal,
}

pub fn report(scenario: &Scenario) -> CapitalReport {
    CapitalReport {
        items: scenario.capital.clone(),
        total: compute_total_capital(&scenario.capital),
    }
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let r = report(scenario);
    if maybe_print_json(json_flag, jsonl_flag, &r)? {
        return Ok(());
    }
    let mut data: Vec<Vec<String>> = r
        .items
        .iter()
        .map(|i| vec![i.label.clone(), fmt_money(&i.amount)])
        .collect();
    data.push(vec!["TOTAL".into(), fmt_money(&r.total)]);
    println!("{}", pretty_table(&["Startup cost", "Amount"], data));
    Ok(())
}
