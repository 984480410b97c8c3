// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Scenario, default_scenario_path};
use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let path = match sub.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => default_scenario_path()?,
    };
    if path.exists() && !sub.get_flag("force") {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    Scenario::default().save(&path)?;
    println!("Scenario written to {}", path.display());
    Ok(())
}
