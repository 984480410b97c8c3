// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CostLineItem;
use rust_decimal::Decimal;

/// Total one-time startup capital. An empty budget is zero.
pub fn compute_total_capital(items: &[CostLineItem]) -> Decimal {
    sum_line_items(items)
}

pub(crate) fn sum_line_items(items: &[CostLineItem]) -> Decimal {
    items.iter().map(|i| i.amount).sum()
}
