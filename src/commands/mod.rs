// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod capital;
pub mod expenses;
pub mod revenue;
pub mod cashflow;
pub mod roi;
pub mod dashboard;
pub mod exporter;
pub mod init;

use crate::utils::parse_decimal;
use anyhow::Result;
use rust_decimal::Decimal;

pub(crate) fn decimal_arg(sub: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    sub.get_one::<String>(name)
        .map(|raw| parse_decimal(raw))
        .transpose()
}

pub(crate) fn output_flags(sub: &clap::ArgMatches) -> (bool, bool) {
    (sub.get_flag("json"), sub.get_flag("jsonl"))
}
