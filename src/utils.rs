// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::OwnershipSplit;
use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parses "A,B,C" into a three-way ownership split.
pub fn parse_split(s: &str) -> Result<OwnershipSplit> {
    let parts = s
        .split(',')
        .map(parse_decimal)
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [a, b, c] => Ok(OwnershipSplit::new(*a, *b, *c)),
        _ => Err(anyhow::anyhow!(
            "Invalid split '{}', expected three comma-separated percentages",
            s
        )),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `-$398,750`.
pub fn fmt_money(d: &Decimal) -> String {
    let rounded = d.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(fmt_money(&dec!(358000)), "$358,000");
        assert_eq!(fmt_money(&dec!(-398750)), "-$398,750");
        assert_eq!(fmt_money(&dec!(999.6)), "$1,000");
        assert_eq!(fmt_money(&dec!(0)), "$0");
        assert_eq!(fmt_money(&dec!(-0.2)), "$0");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(fmt_percent(&dec!(85.714285)), "85.7%");
        assert_eq!(fmt_percent(&dec!(-2.5)), "-2.5%");
    }

    #[test]
    fn split_needs_three_parts() {
        let s = parse_split("50, 25,25").unwrap();
        assert_eq!(s.total(), dec!(100));
        assert!(parse_split("50,50").is_err());
        assert!(parse_split("a,b,c").is_err());
    }
}
