// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use brewplan::cli;
use brewplan::commands::{cashflow, exporter, init, revenue, roi};
use brewplan::config::Scenario;
use brewplan::engine::evaluate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let m = cli::build_cli().try_get_matches_from(args).unwrap();
    let (_, sub) = m.subcommand().unwrap();
    sub.clone()
}

#[test]
fn cashflow_flags_override_scenario() {
    let sub = sub_matches(&[
        "brewplan",
        "cashflow",
        "--growth",
        "4.0",
        "--start-revenue",
        "35000",
        "--months",
        "24",
    ]);
    let mut base = Scenario::default();
    base.cashflow.seed_from_forecast = true;
    let s = cashflow::with_overrides(&base, &sub).unwrap();
    assert_eq!(s.cashflow.horizon_months, 24);
    assert!(!s.cashflow.seed_from_forecast);
    let r = cashflow::report(&s).unwrap();
    assert_eq!(r.projection.points.len(), 24);
    assert_eq!(r.year_profits.len(), 2);
    assert_eq!(r.projection.points[0].revenue, dec!(35000));
}

#[test]
fn roi_split_flag_reports_warning() {
    let sub = sub_matches(&["brewplan", "roi", "--split", "33,33,33.5", "--distribution", "50"]);
    let s = roi::with_overrides(&Scenario::default(), &sub).unwrap();
    assert_eq!(s.ownership.distribution_percent, dec!(50));
    let r = roi::report(&s).unwrap();
    assert!(r.allocation.warning.is_some());
    assert_eq!(r.allocation.partners[2].ownership_percent, dec!(33.5));
}

#[test]
fn revenue_flags_override_forecast() {
    let sub = sub_matches(&["brewplan", "revenue", "--growth", "0", "--months", "6"]);
    let s = revenue::with_overrides(&Scenario::default(), &sub).unwrap();
    let r = revenue::report(&s).unwrap();
    assert_eq!(r.forecast.len(), 6);
    assert_eq!(r.summary.total_revenue, dec!(37750) * Decimal::from(6));
    assert_eq!(r.base_monthly_revenue, dec!(37750));
    let pint = r.products.iter().find(|p| p.product.starts_with("Pint")).unwrap();
    assert_eq!(pint.margin_percent.round_dp(1), dec!(85.7));
}

#[test]
fn bad_decimal_flag_is_an_error() {
    let sub = sub_matches(&["brewplan", "cashflow", "--growth", "fast"]);
    assert!(cashflow::with_overrides(&Scenario::default(), &sub).is_err());
}

#[test]
fn export_cashflow_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("cashflow.csv");
    let eval = evaluate(&Scenario::default()).unwrap();
    exporter::export(&eval, "cashflow", "csv", &out).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["month", "revenue", "total_expenses", "profit", "cumulative_cashflow"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 36);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][3], "-2750.00");
    assert_eq!(&rows[0][4], "-340750.00");
}

#[test]
fn export_revenue_csv_has_channel_columns() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("revenue.csv");
    let eval = evaluate(&Scenario::default()).unwrap();
    exporter::export(&eval, "revenue", "csv", &out).unwrap();
    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["month", "taproom", "wholesale", "total_revenue"]
    );
    assert_eq!(rdr.records().count(), 12);
}

#[test]
fn export_partners_json() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("partners.json");
    let eval = evaluate(&Scenario::default()).unwrap();
    exporter::export(&eval, "partners", "json", &out).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["partners"].as_array().unwrap().len(), 3);
    assert!(v.get("warning").is_none());
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let eval = evaluate(&Scenario::default()).unwrap();
    assert!(exporter::export(&eval, "cashflow", "xlsx", &dir.path().join("x")).is_err());
}

#[test]
fn export_unknown_series_leaves_no_file() {
    let dir = tempdir().unwrap();
    let eval = evaluate(&Scenario::default()).unwrap();
    for fmt in ["csv", "json"] {
        let out = dir.path().join(format!("budget.{}", fmt));
        assert!(exporter::export(&eval, "budget", fmt, &out).is_err());
        assert!(!out.exists());
    }
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("scenario.toml");
    let out = path.to_str().unwrap();

    init::handle(&sub_matches(&["brewplan", "init", "--out", out])).unwrap();
    assert_eq!(Scenario::load(&path).unwrap(), Scenario::default());

    assert!(init::handle(&sub_matches(&["brewplan", "init", "--out", out])).is_err());
    init::handle(&sub_matches(&["brewplan", "init", "--out", out, "--force"])).unwrap();
}
