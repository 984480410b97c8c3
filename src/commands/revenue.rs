// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{decimal_arg, output_flags};
use crate::config::{ForecastSettings, Scenario};
use crate::engine::revenue::{
    ChannelShare, ForecastSummary, ProductionEstimate, channel_shares, estimate_production,
    gross_margin_percent, project_revenue, summarize_forecast,
};
use crate::models::RevenuePoint;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductMargin {
    pub channel: String,
    pub product: String,
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
    pub monthly_volume: u64,
    pub monthly_revenue: Decimal,
    pub margin_percent: Decimal,
}

#[derive(Debug, Serialize)]
pub struct RevenueReport {
    pub growth_rate_percent: Decimal,
    pub products: Vec<ProductMargin>,
    pub channels: Vec<ChannelShare>,
    pub base_monthly_revenue: Decimal,
    pub production: ProductionEstimate,
    pub forecast: Vec<RevenuePoint>,
    pub summary: ForecastSummary,
}

pub fn report(scenario: &Scenario) -> Result<RevenueReport> {
    let products = scenario
        .channels
        .iter()
        .filter(|c| c.enabled)
        .flat_map(|c| {
            c.products.iter().map(move |p| ProductMargin {
                channel: c.name.clone(),
                product: p.label.clone(),
                unit_price: p.unit_price,
                unit_cost: p.unit_cost,
                monthly_volume: p.monthly_volume,
                monthly_revenue: p.monthly_revenue(),
                margin_percent: gross_margin_percent(p.unit_price, p.unit_cost),
            })
        })
        .collect();
    let channels = channel_shares(&scenario.channels);
    let base_monthly_revenue = channels.iter().map(|c| c.base_revenue).sum();
    let forecast = project_revenue(
        &scenario.channels,
        scenario.forecast.growth_rate_percent,
        scenario.forecast.horizon_months,
    )?;
    let summary = summarize_forecast(&forecast);
    Ok(RevenueReport {
        growth_rate_percent: scenario.forecast.growth_rate_percent,
        products,
        channels,
        base_monthly_revenue,
        production: estimate_production(&scenario.channels),
        forecast,
        summary,
    })
}

/// Scenario with the forecast flags of this invocation applied.
pub fn with_overrides(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<Scenario> {
    let forecast = ForecastSettings {
        growth_rate_percent: decimal_arg(sub, "growth")?
            .unwrap_or(scenario.forecast.growth_rate_percent),
        horizon_months: sub
            .get_one::<u32>("months")
            .copied()
            .unwrap_or(scenario.forecast.horizon_months),
    };
    Ok(Scenario {
        forecast,
        ..scenario.clone()
    })
}

pub fn handle(scenario: &Scenario, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub);
    let scenario = with_overrides(scenario, sub)?;
    let r = report(&scenario)?;
    if maybe_print_json(json_flag, jsonl_flag, &r)? {
        return Ok(());
    }

    let product_rows = r
        .products
        .iter()
        .map(|p| {
            let margin = if p.unit_cost.is_zero() {
                "-".to_string()
            } else {
                fmt_percent(&p.margin_percent)
            };
            vec![
                p.channel.clone(),
                p.product.clone(),
                format!("{:.2}", p.unit_price),
                p.monthly_volume.to_string(),
                fmt_money(&p.monthly_revenue),
                margin,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Channel", "Product", "Price", "Units/mo", "Revenue/mo", "Gross margin"],
            product_rows
        )
    );

    let share_rows = r
        .channels
        .iter()
        .map(|c| vec![c.channel.clone(), fmt_money(&c.base_revenue), fmt_percent(&c.share_percent)])
        .collect();
    println!("{}", pretty_table(&["Channel", "Revenue/mo", "Share"], share_rows));
    println!(
        "Projected monthly revenue: {} ({}/year)",
        fmt_money(&r.base_monthly_revenue),
        fmt_money(&(r.base_monthly_revenue * Decimal::from(12)))
    );

    let p = &r.production;
    println!(
        "Production requirement: ~{:.0} BBL/month ({:.0} BBL/year)",
        p.barrels_per_month.round_dp(0),
        p.barrels_per_year.round_dp(0)
    );
    let system_rows = p
        .systems
        .iter()
        .map(|s| {
            vec![
                format!("{}-BBL", s.system_bbl),
                format!("{:.1}", s.brews_per_month.round_dp(1)),
                format!("{:.1}", s.brews_per_week.round_dp(1)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["System", "Brews/month", "Brews/week"], system_rows));

    let channel_names: Vec<String> = r.channels.iter().map(|c| c.channel.clone()).collect();
    let mut headers: Vec<&str> = vec!["Month"];
    headers.extend(channel_names.iter().map(String::as_str));
    headers.push("Total");
    let forecast_rows = r
        .forecast
        .iter()
        .map(|pt| {
            let mut row = vec![format!("Month {}", pt.month)];
            row.extend(pt.channels.iter().map(|c| fmt_money(&c.revenue)));
            row.push(fmt_money(&pt.total_revenue));
            row
        })
        .collect();
    println!("{}", pretty_table(&headers, forecast_rows));
    println!(
        "Growth {}/month | total {} | average {} | final month {}",
        fmt_percent(&r.growth_rate_percent),
        fmt_money(&r.summary.total_revenue),
        fmt_money(&r.summary.average_monthly_revenue),
        fmt_money(&r.summary.final_month_revenue)
    );
    Ok(())
}
