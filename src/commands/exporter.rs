// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Scenario;
use crate::engine::{Evaluation, evaluate};
use anyhow::{Context, Result, anyhow};
use serde_json::json;
use std::path::Path;

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let series = sub.get_one::<String>("series").unwrap();
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let eval = evaluate(scenario)?;
    export(&eval, series, &fmt, Path::new(out))?;
    println!("Exported {} to {}", series, out);
    Ok(())
}

const SERIES: [&str; 3] = ["revenue", "cashflow", "partners"];

pub fn export(eval: &Evaluation, series: &str, fmt: &str, out: &Path) -> Result<()> {
    if !SERIES.contains(&series) {
        return Err(anyhow!("Unknown series: {} (use revenue|cashflow|partners)", series));
    }
    match fmt {
        "csv" => write_csv(eval, series, out)?,
        "json" => {
            let value = match series {
                "revenue" => serde_json::to_value(&eval.revenue_forecast)?,
                "cashflow" => json!({
                    "initial_capital": eval.cashflow.initial_capital,
                    "breakeven_month": eval.cashflow.breakeven_month,
                    "points": eval.cashflow.points,
                }),
                "partners" => serde_json::to_value(&eval.allocation)?,
                other => return Err(anyhow!("Unknown series: {} (use revenue|cashflow|partners)", other)),
            };
            std::fs::write(out, serde_json::to_string_pretty(&value)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        other => return Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    }
    tracing::info!(series, format = fmt, path = %out.display(), "exported");
    Ok(())
}

fn write_csv(eval: &Evaluation, series: &str, out: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("Create {}", out.display()))?;
    match series {
        "revenue" => {
            let channels: Vec<String> = eval
                .revenue_forecast
                .first()
                .map(|p| p.channels.iter().map(|c| c.channel.clone()).collect())
                .unwrap_or_default();
            let mut header = vec!["month".to_string()];
            header.extend(channels.iter().cloned());
            header.push("total_revenue".into());
            wtr.write_record(&header)?;
            for p in &eval.revenue_forecast {
                let mut rec = vec![p.month.to_string()];
                rec.extend(p.channels.iter().map(|c| format!("{:.2}", c.revenue)));
                rec.push(format!("{:.2}", p.total_revenue));
                wtr.write_record(&rec)?;
            }
        }
        "cashflow" => {
            wtr.write_record(["month", "revenue", "total_expenses", "profit", "cumulative_cashflow"])?;
            for p in &eval.cashflow.points {
                wtr.write_record([
                    p.month.to_string(),
                    format!("{:.2}", p.revenue),
                    format!("{:.2}", p.total_expenses),
                    format!("{:.2}", p.profit),
                    format!("{:.2}", p.cumulative_cashflow),
                ])?;
            }
        }
        "partners" => {
            wtr.write_record([
                "partner",
                "ownership_percent",
                "initial_investment",
                "cash_distributed",
                "equity_value_estimate",
                "cash_roi_percent",
            ])?;
            for p in &eval.allocation.partners {
                wtr.write_record([
                    p.partner_id.to_string(),
                    format!("{:.2}", p.ownership_percent),
                    format!("{:.2}", p.initial_investment),
                    format!("{:.2}", p.cash_distributed),
                    format!("{:.2}", p.equity_value_estimate),
                    format!("{:.2}", p.cash_roi_percent),
                ])?;
            }
        }
        other => return Err(anyhow!("Unknown series: {} (use revenue|cashflow|partners)", other)),
    }
    wtr.flush()?;
    Ok(())
}
