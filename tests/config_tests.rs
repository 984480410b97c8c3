// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use brewplan::config::Scenario;
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[test]
fn default_scenario_survives_toml_round_trip() {
    let s = Scenario::default();
    let text = s.to_toml_string().unwrap();
    assert!(text.contains("Brewing equipment"));
    let back = Scenario::from_toml_str(&text).unwrap();
    assert_eq!(back, s);
}

#[test]
fn partial_file_keeps_defaults() {
    let s = Scenario::from_toml_str(
        r#"
name = "Lean launch"

[cashflow]
growth_rate_percent = 2.5

[[capital]]
label = "Used brewhouse"
amount = 90000

[[capital]]
label = "Contingency"
amount = "15000.50"
"#,
    )
    .unwrap();
    assert_eq!(s.name, "Lean launch");
    assert_eq!(s.capital.len(), 2);
    assert_eq!(s.capital[1].amount, dec!(15000.50));
    assert_eq!(s.cashflow.growth_rate_percent, dec!(2.5));
    assert_eq!(s.cashflow.variable_cost_ratio, dec!(0.25));
    assert_eq!(s.cashflow.starting_monthly_revenue, dec!(35000));
    assert_eq!(s.fixed_costs, Scenario::default().fixed_costs);
    assert_eq!(s.channels.len(), 3);
    assert_eq!(s.ownership.distribution_percent, dec!(70));
}

#[test]
fn channel_products_parse_from_toml() {
    let s = Scenario::from_toml_str(
        r#"
[[channels]]
name = "taproom"

[[channels.products]]
label = "Pint"
kind = "pint"
unit_price = 8
unit_cost = 1
monthly_volume = 2000
"#,
    )
    .unwrap();
    assert_eq!(s.channels.len(), 1);
    assert!(s.channels[0].enabled);
    assert_eq!(s.channels[0].base_revenue(), dec!(16000));
}

#[test]
fn unknown_product_kind_is_an_error() {
    let err = Scenario::from_toml_str(
        r#"
[[channels]]
name = "taproom"

[[channels.products]]
label = "Cider"
kind = "cider"
unit_price = 8
monthly_volume = 10
"#,
    );
    assert!(err.is_err());
}

#[test]
fn save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("scenario.toml");
    let mut s = Scenario::default();
    s.name = "Saved".into();
    s.ownership.distribution_percent = dec!(55);
    s.save(&path).unwrap();
    let loaded = Scenario::load(&path).unwrap();
    assert_eq!(loaded, s);
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(Scenario::resolve(Some(&missing)).is_err());
}
