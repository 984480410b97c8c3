// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use brewplan::config::Scenario;
use brewplan::engine::evaluate;
use brewplan::models::OwnershipSplit;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn default_scenario_headline_figures() {
    let eval = evaluate(&Scenario::default()).unwrap();
    assert_eq!(eval.total_capital, dec!(338000));
    assert_eq!(eval.monthly_fixed_cost, dec!(29000));
    assert_eq!(eval.annual_fixed_cost, dec!(348000));
    assert_eq!(eval.revenue_forecast.len(), 12);
    assert_eq!(eval.revenue_forecast[0].total_revenue, dec!(37750));
    assert_eq!(eval.cashflow.points.len(), 36);
    // cashflow starts from its own 35,000 assumption, not the forecast
    assert_eq!(eval.cashflow.points[0].revenue, dec!(35000));
    assert_eq!(eval.cashflow.points[0].profit, dec!(-2750));
    assert_eq!(eval.cashflow.points[0].cumulative_cashflow, dec!(-340750));
    assert_eq!(eval.cashflow.breakeven_month, None);
    assert!(eval.allocation.warning.is_none());
    assert_eq!(eval.allocation.partners.len(), 3);
    assert_eq!(eval.allocation.partners[2].initial_investment, dec!(112689.2));
}

#[test]
fn allocation_is_seeded_by_cashflow() {
    let eval = evaluate(&Scenario::default()).unwrap();
    let expected_distributable = eval.cashflow.total_profit() * dec!(70) / dec!(100);
    assert_eq!(eval.allocation.total_distributable, expected_distributable);
    assert_eq!(
        eval.allocation.estimated_valuation,
        eval.cashflow.final_year_revenue() * dec!(2.0)
    );
    let dists = eval.year_one_monthly_distributions.expect("year one is profitable");
    assert_eq!(dists.len(), 3);
    assert!(dists.iter().all(|d| *d > Decimal::ZERO));
}

#[test]
fn cashflow_can_be_seeded_from_forecast() {
    let mut s = Scenario::default();
    s.cashflow.seed_from_forecast = true;
    let eval = evaluate(&s).unwrap();
    assert_eq!(eval.cashflow.points[0].revenue, dec!(37750));
}

#[test]
fn evaluation_is_idempotent() {
    let s = Scenario::default();
    assert_eq!(evaluate(&s).unwrap(), evaluate(&s).unwrap());
}

#[test]
fn ownership_mismatch_flows_through_evaluation() {
    let mut s = Scenario::default();
    s.ownership.split = OwnershipSplit::new(dec!(33), dec!(33), dec!(33.5));
    let eval = evaluate(&s).unwrap();
    assert!(eval.allocation.warning.is_some());
    let invested: Decimal = eval
        .allocation
        .partners
        .iter()
        .map(|p| p.initial_investment)
        .sum();
    assert_eq!(invested, dec!(338000) * dec!(0.995));
}

#[test]
fn invalid_variable_ratio_rejects_evaluation() {
    let mut s = Scenario::default();
    s.cashflow.variable_cost_ratio = dec!(1.1);
    assert!(evaluate(&s).unwrap_err().is_invalid_parameter());
}
