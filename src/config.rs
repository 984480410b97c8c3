// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Scenario file: every input the calculators consume, read once per run.

use crate::engine::costs::VariableCostAssumptions;
use crate::engine::ownership::DEFAULT_VALUATION_MULTIPLE;
use crate::models::{ChannelUnitEconomics, CostLineItem, OwnershipSplit, ProductKind, SalesChannel};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Brewplan", "brewplan"));

pub const SCENARIO_ENV: &str = "BREWPLAN_SCENARIO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    pub growth_rate_percent: Decimal,
    pub horizon_months: u32,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            growth_rate_percent: dec!(3.0),
            horizon_months: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashflowSettings {
    pub starting_monthly_revenue: Decimal,
    /// Start from month 1 of the revenue forecast instead of `starting_monthly_revenue`.
    pub seed_from_forecast: bool,
    pub growth_rate_percent: Decimal,
    pub variable_cost_ratio: Decimal,
    pub horizon_months: u32,
}

impl Default for CashflowSettings {
    fn default() -> Self {
        Self {
            starting_monthly_revenue: dec!(35000),
            seed_from_forecast: false,
            growth_rate_percent: dec!(4.0),
            variable_cost_ratio: dec!(0.25),
            horizon_months: crate::engine::cashflow::DEFAULT_HORIZON_MONTHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipSettings {
    pub distribution_percent: Decimal,
    pub valuation_multiple: Decimal,
    pub split: OwnershipSplit,
}

impl Default for OwnershipSettings {
    fn default() -> Self {
        Self {
            distribution_percent: dec!(70),
            valuation_multiple: DEFAULT_VALUATION_MULTIPLE,
            split: OwnershipSplit::equal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Monthly revenue examined by the cost-structure report.
    pub revenue: Decimal,
    /// Average ticket used to express breakeven revenue in units sold.
    pub average_unit_price: Decimal,
    pub dashboard_sample_revenue: Decimal,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            revenue: dec!(50000),
            average_unit_price: dec!(7),
            dashboard_sample_revenue: dec!(50000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub forecast: ForecastSettings,
    pub cashflow: CashflowSettings,
    pub ownership: OwnershipSettings,
    pub analysis: AnalysisSettings,
    pub variable_costs: VariableCostAssumptions,
    pub capital: Vec<CostLineItem>,
    pub fixed_costs: Vec<CostLineItem>,
    pub channels: Vec<SalesChannel>,
}

fn product(
    label: &str,
    kind: ProductKind,
    unit_price: Decimal,
    unit_cost: Decimal,
    monthly_volume: u64,
) -> ChannelUnitEconomics {
    ChannelUnitEconomics {
        label: label.to_string(),
        kind,
        unit_price,
        unit_cost,
        monthly_volume,
    }
}

impl Default for Scenario {
    fn default() -> Self {
        let capital = vec![
            CostLineItem::new("Brewing equipment", dec!(150000)),
            CostLineItem::new("Facility build-out", dec!(50000)),
            CostLineItem::new("Licensing & legal", dec!(10000)),
            CostLineItem::new("POS system & technology", dec!(8000)),
            CostLineItem::new("Initial inventory", dec!(15000)),
            CostLineItem::new("Kegs, canning/bottling", dec!(30000)),
            CostLineItem::new("Taproom furniture & bar", dec!(35000)),
            CostLineItem::new("Contingency fund", dec!(40000)),
        ];
        let fixed_costs = vec![
            CostLineItem::new("Rent/lease", dec!(5000)),
            CostLineItem::new("Payroll", dec!(15000)),
            CostLineItem::new("Insurance", dec!(1500)),
            CostLineItem::new("Utilities", dec!(2500)),
            CostLineItem::new("Marketing", dec!(3000)),
            CostLineItem::new("Other (accounting, maintenance)", dec!(2000)),
        ];
        let channels = vec![
            SalesChannel {
                name: "taproom".into(),
                enabled: true,
                products: vec![
                    product("Pint (16 oz)", ProductKind::Pint, dec!(7.00), dec!(1.00), 3000),
                    product("Flight (4 x 5 oz)", ProductKind::Flight, dec!(12.00), Decimal::ZERO, 200),
                    product("Growler fill (64 oz)", ProductKind::Growler, dec!(16.00), Decimal::ZERO, 150),
                    product("Brewery tour", ProductKind::Tour, dec!(15.00), Decimal::ZERO, 100),
                    product("Merchandise", ProductKind::Merchandise, dec!(25.00), Decimal::ZERO, 50),
                ],
            },
            SalesChannel {
                name: "wholesale".into(),
                enabled: true,
                products: vec![
                    product("Keg (1/2 BBL)", ProductKind::Keg, dec!(200.00), dec!(40.00), 30),
                    product("Case (24 cans)", ProductKind::Case, dec!(32.00), Decimal::ZERO, 100),
                ],
            },
            SalesChannel {
                name: "food".into(),
                enabled: false,
                products: vec![product("Food sales", ProductKind::Food, dec!(8000), Decimal::ZERO, 1)],
            },
        ];
        Self {
            name: "Charlotte-Concord micro brewery".into(),
            forecast: ForecastSettings::default(),
            cashflow: CashflowSettings::default(),
            ownership: OwnershipSettings::default(),
            analysis: AnalysisSettings::default(),
            variable_costs: VariableCostAssumptions::default(),
            capital,
            fixed_costs,
            channels,
        }
    }
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid scenario file")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read scenario at {}", path.display()))?;
        let scenario = Self::from_toml_str(&raw)
            .with_context(|| format!("Parse scenario at {}", path.display()))?;
        tracing::info!(path = %path.display(), name = %scenario.name, "scenario loaded");
        Ok(scenario)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Write scenario to {}", path.display()))
    }

    /// Resolves the scenario for this run: an explicit path must exist, the
    /// env var or platform default may be absent, in which case built-in
    /// defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(SCENARIO_ENV) {
            return Self::load(Path::new(&path));
        }
        match default_scenario_path() {
            Ok(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no scenario file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_scenario_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("scenario.toml"))
}
