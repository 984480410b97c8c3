// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use brewplan::config::Scenario;
use brewplan::engine::revenue::{
    channel_shares, estimate_production, gross_margin_percent, project_revenue,
    summarize_forecast,
};
use brewplan::models::{ChannelUnitEconomics, ProductKind, SalesChannel};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

fn channel(name: &str, products: &[(ProductKind, Decimal, u64)]) -> SalesChannel {
    SalesChannel {
        name: name.to_string(),
        enabled: true,
        products: products
            .iter()
            .map(|(kind, price, volume)| ChannelUnitEconomics {
                label: format!("{:?}", kind),
                kind: *kind,
                unit_price: *price,
                unit_cost: Decimal::ZERO,
                monthly_volume: *volume,
            })
            .collect(),
    }
}

#[test]
fn default_channels_base_revenue() {
    let s = Scenario::default();
    let shares = channel_shares(&s.channels);
    assert_eq!(shares.len(), 2, "food channel is disabled by default");
    assert_eq!(shares[0].channel, "taproom");
    assert_eq!(shares[0].base_revenue, dec!(28550));
    assert_eq!(shares[1].channel, "wholesale");
    assert_eq!(shares[1].base_revenue, dec!(9200));
}

#[test]
fn month_one_is_unscaled_base() {
    let s = Scenario::default();
    let points = project_revenue(&s.channels, dec!(3), 12).unwrap();
    assert_eq!(points.len(), 12);
    let first = &points[0];
    assert_eq!(first.month, 1);
    assert_eq!(first.channel("taproom"), Some(dec!(28550)));
    assert_eq!(first.channel("wholesale"), Some(dec!(9200)));
    assert_eq!(first.total_revenue, dec!(37750));
}

#[test]
fn total_revenue_compounds_geometrically() {
    let s = Scenario::default();
    let g = dec!(3);
    let points = project_revenue(&s.channels, g, 12).unwrap();
    let base = points[0].total_revenue;
    for p in &points {
        let expected = base * (Decimal::ONE + g / dec!(100)).powu(u64::from(p.month - 1));
        assert_eq!(p.total_revenue.round_dp(8), expected.round_dp(8), "month {}", p.month);
        let channel_sum: Decimal = p.channels.iter().map(|c| c.revenue).sum();
        assert_eq!(channel_sum, p.total_revenue);
    }
    assert_eq!(points[1].total_revenue, dec!(38882.50));
}

#[test]
fn zero_and_negative_growth() {
    let chans = vec![channel("taproom", &[(ProductKind::Pint, dec!(7), 1000)])];
    let flat = project_revenue(&chans, Decimal::ZERO, 6).unwrap();
    assert!(flat.iter().all(|p| p.total_revenue == dec!(7000)));

    let declining = project_revenue(&chans, dec!(-10), 3).unwrap();
    assert_eq!(declining[1].total_revenue, dec!(6300));
    assert_eq!(declining[2].total_revenue, dec!(5670));
}

#[test]
fn zero_horizon_is_rejected() {
    let s = Scenario::default();
    let err = project_revenue(&s.channels, dec!(3), 0).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn disabled_channel_contributes_nothing() {
    let mut s = Scenario::default();
    s.channels[2].enabled = true;
    let with_food = project_revenue(&s.channels, Decimal::ZERO, 1).unwrap();
    assert_eq!(with_food[0].channel("food"), Some(dec!(8000)));
    assert_eq!(with_food[0].total_revenue, dec!(45750));

    s.channels[2].enabled = false;
    let without = project_revenue(&s.channels, Decimal::ZERO, 1).unwrap();
    assert_eq!(without[0].channel("food"), None);
}

#[test]
fn forecast_summary() {
    let chans = vec![channel("wholesale", &[(ProductKind::Keg, dec!(200), 10)])];
    let points = project_revenue(&chans, dec!(10), 3).unwrap();
    let summary = summarize_forecast(&points);
    // 2000 + 2200 + 2420
    assert_eq!(summary.total_revenue, dec!(6620));
    assert_eq!(summary.final_month_revenue, dec!(2420));
    assert_eq!(summary.average_monthly_revenue.round_dp(2), dec!(2206.67));
    assert_eq!(summarize_forecast(&[]).average_monthly_revenue, Decimal::ZERO);
}

#[test]
fn unit_margins_guard_zero_price() {
    assert_eq!(gross_margin_percent(dec!(200), dec!(40)), dec!(80));
    assert_eq!(gross_margin_percent(dec!(7), dec!(1)).round_dp(1), dec!(85.7));
    assert_eq!(gross_margin_percent(dec!(5), dec!(6)), dec!(-20));
    assert_eq!(gross_margin_percent(Decimal::ZERO, dec!(1)), Decimal::ZERO);
}

#[test]
fn production_estimate_for_default_volumes() {
    let s = Scenario::default();
    let p = estimate_production(&s.channels);
    // 3000/248 + 31.25 + 75 + 465 + 75
    assert_eq!(p.barrels_per_month.round_dp(2), dec!(658.35));
    assert_eq!(p.barrels_per_year.round_dp(0), dec!(7900));
    let sizes: Vec<u32> = p.systems.iter().map(|s| s.system_bbl).collect();
    assert_eq!(sizes, vec![7, 10, 15]);
    assert_eq!(p.systems[1].brews_per_month.round_dp(2), dec!(65.83));
    assert_eq!(
        p.systems[0].brews_per_week,
        p.systems[0].brews_per_month / dec!(4)
    );
}

#[test]
fn barrel_conversions() {
    assert_eq!(ProductKind::Pint.barrels(248), Decimal::ONE);
    assert_eq!(ProductKind::Flight.barrels(32), dec!(5));
    assert_eq!(ProductKind::Growler.barrels(2), Decimal::ONE);
    assert_eq!(ProductKind::Keg.barrels(2), dec!(31));
    assert_eq!(ProductKind::Case.barrels(4), dec!(3));
    assert_eq!(ProductKind::Merchandise.barrels(1000), Decimal::ZERO);
}

#[test]
fn long_horizon_overflow_is_invalid_parameter() {
    let channels = Scenario::default().channels;
    let err = project_revenue(&channels, dec!(15), 420).unwrap_err();
    assert!(err.is_invalid_parameter());

    // 2^199 does not fit in a Decimal, so the growth factor itself fails
    let err = project_revenue(&channels, dec!(100), 200).unwrap_err();
    assert!(err.is_invalid_parameter());

    assert_eq!(project_revenue(&channels, dec!(15), 120).unwrap().len(), 120);
}
