// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use brewplan::{cli, commands, config::Scenario};

fn init_logging() {
    let filter = EnvFilter::try_from_env("BREWPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    if let Some(("init", sub)) = matches.subcommand() {
        return commands::init::handle(sub);
    }

    let scenario_path = matches.get_one::<String>("scenario").map(Path::new);
    let scenario = Scenario::resolve(scenario_path)?;

    match matches.subcommand() {
        Some(("capital", sub)) => commands::capital::handle(&scenario, sub)?,
        Some(("expenses", sub)) => commands::expenses::handle(&scenario, sub)?,
        Some(("revenue", sub)) => commands::revenue::handle(&scenario, sub)?,
        Some(("cashflow", sub)) => commands::cashflow::handle(&scenario, sub)?,
        Some(("roi", sub)) => commands::roi::handle(&scenario, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&scenario, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&scenario, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
