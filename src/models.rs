// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub label: String,
    pub amount: Decimal,
}

impl CostLineItem {
    pub fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}

/// What a product line physically is. Drives the barrel conversion used by
/// the capacity check; financial figures never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Pint,
    Flight,
    Growler,
    Tour,
    Merchandise,
    Keg,
    Case,
    Food,
}

impl ProductKind {
    /// Barrels of beer needed for `volume` units sold in a month.
    pub fn barrels(self, volume: u64) -> Decimal {
        let v = Decimal::from(volume);
        match self {
            ProductKind::Pint => v / dec!(248),
            // 4 x 5 oz samples per flight
            ProductKind::Flight => v * dec!(4) * dec!(5) / dec!(128),
            ProductKind::Growler => v * dec!(64) / dec!(128),
            ProductKind::Keg => v * dec!(15.5),
            ProductKind::Case => v * dec!(0.75),
            ProductKind::Tour | ProductKind::Merchandise | ProductKind::Food => Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelUnitEconomics {
    pub label: String,
    pub kind: ProductKind,
    pub unit_price: Decimal,
    #[serde(default)]
    pub unit_cost: Decimal,
    pub monthly_volume: u64,
}

impl ChannelUnitEconomics {
    pub fn monthly_revenue(&self) -> Decimal {
        self.unit_price * Decimal::from(self.monthly_volume)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub products: Vec<ChannelUnitEconomics>,
}

fn default_enabled() -> bool {
    true
}

impl SalesChannel {
    /// Base monthly revenue, summed across the channel's product lines.
    pub fn base_revenue(&self) -> Decimal {
        if !self.enabled {
            return Decimal::ZERO;
        }
        self.products.iter().map(|p| p.monthly_revenue()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRevenue {
    pub channel: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: u32,
    pub channels: Vec<ChannelRevenue>,
    pub total_revenue: Decimal,
}

impl RevenuePoint {
    pub fn channel(&self, name: &str) -> Option<Decimal> {
        self.channels
            .iter()
            .find(|c| c.channel == name)
            .map(|c| c.revenue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowPoint {
    pub month: u32,
    pub revenue: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
    pub cumulative_cashflow: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnershipSplit {
    pub percentages: [Decimal; 3],
}

impl OwnershipSplit {
    pub fn new(p1: Decimal, p2: Decimal, p3: Decimal) -> Self {
        Self {
            percentages: [p1, p2, p3],
        }
    }

    /// The equal split used by the partnership agreement; the odd hundredth
    /// goes to partner 3 so the total is exactly 100.
    pub fn equal() -> Self {
        Self::new(dec!(33.33), dec!(33.33), dec!(33.34))
    }

    pub fn total(&self) -> Decimal {
        self.percentages.iter().copied().sum()
    }
}

impl Default for OwnershipSplit {
    fn default() -> Self {
        Self::equal()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerOutcome {
    pub partner_id: u8,
    pub ownership_percent: Decimal,
    pub initial_investment: Decimal,
    pub cash_distributed: Decimal,
    pub equity_value_estimate: Decimal,
    pub cash_roi_percent: Decimal,
    pub average_annual_roi_percent: Decimal,
}
