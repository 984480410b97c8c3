// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{EngineError, EngineResult};
use crate::models::{ChannelRevenue, RevenuePoint, SalesChannel};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Brewhouse sizes (BBL per brew) reported by the capacity check.
pub const SYSTEM_SIZES_BBL: [u32; 3] = [7, 10, 15];

/// Compound growth factor for a 1-indexed month: month 1 is unscaled.
pub(crate) fn growth_factor(rate_percent: Decimal, month: u32) -> EngineResult<Decimal> {
    let base = Decimal::ONE + rate_percent / dec!(100);
    base.checked_powu(u64::from(month.saturating_sub(1)))
        .ok_or_else(|| {
            EngineError::invalid(
                "growth_rate_percent",
                format!("{}% compounded over {} months overflows", rate_percent, month),
            )
        })
}

pub(crate) fn overflow(name: &'static str, month: u32) -> EngineError {
    EngineError::invalid(name, format!("projection overflows at month {}", month))
}

/// Channel-split revenue for months `1..=horizon_months`, each channel grown
/// geometrically from its base monthly revenue.
pub fn project_revenue(
    channels: &[SalesChannel],
    monthly_growth_rate_percent: Decimal,
    horizon_months: u32,
) -> EngineResult<Vec<RevenuePoint>> {
    if horizon_months == 0 {
        return Err(EngineError::invalid("horizon_months", "must be at least 1"));
    }
    let bases: Vec<(&str, Decimal)> = channels
        .iter()
        .filter(|c| c.enabled)
        .map(|c| (c.name.as_str(), c.base_revenue()))
        .collect();

    let mut points = Vec::with_capacity(horizon_months as usize);
    // Kept so that summing the whole forecast afterwards cannot overflow.
    let mut revenue_to_date = Decimal::ZERO;
    for month in 1..=horizon_months {
        let overflowed = || overflow("horizon_months", month);
        let factor = growth_factor(monthly_growth_rate_percent, month)?;
        let channels = bases
            .iter()
            .map(|(name, base)| -> EngineResult<ChannelRevenue> {
                let revenue = base.checked_mul(factor).ok_or_else(overflowed)?;
                Ok(ChannelRevenue {
                    channel: name.to_string(),
                    revenue,
                })
            })
            .collect::<EngineResult<Vec<ChannelRevenue>>>()?;
        let total_revenue = channels
            .iter()
            .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.revenue))
            .ok_or_else(overflowed)?;
        revenue_to_date = revenue_to_date
            .checked_add(total_revenue)
            .ok_or_else(overflowed)?;
        points.push(RevenuePoint {
            month,
            channels,
            total_revenue,
        });
    }
    tracing::debug!(
        months = horizon_months,
        growth = %monthly_growth_rate_percent,
        "revenue projected"
    );
    Ok(points)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub total_revenue: Decimal,
    pub average_monthly_revenue: Decimal,
    pub final_month_revenue: Decimal,
}

pub fn summarize_forecast(points: &[RevenuePoint]) -> ForecastSummary {
    let total_revenue: Decimal = points.iter().map(|p| p.total_revenue).sum();
    let average_monthly_revenue = if points.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(points.len())
    };
    ForecastSummary {
        total_revenue,
        average_monthly_revenue,
        final_month_revenue: points.last().map(|p| p.total_revenue).unwrap_or_default(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelShare {
    pub channel: String,
    pub base_revenue: Decimal,
    pub share_percent: Decimal,
}

pub fn channel_shares(channels: &[SalesChannel]) -> Vec<ChannelShare> {
    let total: Decimal = channels.iter().map(|c| c.base_revenue()).sum();
    channels
        .iter()
        .filter(|c| c.enabled)
        .map(|c| {
            let base = c.base_revenue();
            let share_percent = if total.is_zero() {
                Decimal::ZERO
            } else {
                base / total * dec!(100)
            };
            ChannelShare {
                channel: c.name.clone(),
                base_revenue: base,
                share_percent,
            }
        })
        .collect()
}

/// (price - cost) / price as a percentage; zero when the price is zero.
pub fn gross_margin_percent(unit_price: Decimal, unit_cost: Decimal) -> Decimal {
    if unit_price.is_zero() {
        return Decimal::ZERO;
    }
    (unit_price - unit_cost) / unit_price * dec!(100)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemLoad {
    pub system_bbl: u32,
    pub brews_per_month: Decimal,
    pub brews_per_week: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionEstimate {
    pub barrels_per_month: Decimal,
    pub barrels_per_year: Decimal,
    pub systems: Vec<SystemLoad>,
}

/// Informational capacity check. Never fed back into revenue or cost figures.
pub fn estimate_production(channels: &[SalesChannel]) -> ProductionEstimate {
    let barrels_per_month: Decimal = channels
        .iter()
        .filter(|c| c.enabled)
        .flat_map(|c| c.products.iter())
        .map(|p| p.kind.barrels(p.monthly_volume))
        .sum();
    let systems = SYSTEM_SIZES_BBL
        .iter()
        .map(|&size| {
            let brews_per_month = barrels_per_month / Decimal::from(size);
            SystemLoad {
                system_bbl: size,
                brews_per_month,
                brews_per_week: brews_per_month / dec!(4),
            }
        })
        .collect();
    ProductionEstimate {
        barrels_per_month,
        barrels_per_year: barrels_per_month * dec!(12),
        systems,
    }
}
