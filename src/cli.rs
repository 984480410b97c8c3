// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn months_arg(help: &'static str) -> Arg {
    Arg::new("months")
        .long("months")
        .value_parser(value_parser!(u32))
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("brewplan")
        .version(crate_version!())
        .about("Micro brewery feasibility calculator for a three-partner venture")
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .short('s')
                .global(true)
                .help("Scenario file (TOML); defaults to $BREWPLAN_SCENARIO or the config dir"),
        )
        .subcommand(
            Command::new("init")
                .about("Write the default scenario file")
                .arg(Arg::new("out").long("out").help("Destination path"))
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite an existing file"),
                ),
        )
        .subcommand(output_flags(
            Command::new("capital").about("Itemised startup capital"),
        ))
        .subcommand(output_flags(
            Command::new("expenses")
                .about("Fixed and variable costs, cost structure and breakeven")
                .arg(
                    Arg::new("revenue")
                        .long("revenue")
                        .help("Monthly revenue to analyse"),
                ),
        ))
        .subcommand(output_flags(
            Command::new("revenue")
                .about("Unit margins, channel mix, capacity check and revenue forecast")
                .arg(
                    Arg::new("growth")
                        .long("growth")
                        .help("Month-over-month growth rate in percent"),
                )
                .arg(months_arg("Forecast horizon in months")),
        ))
        .subcommand(output_flags(
            Command::new("cashflow")
                .about("Cashflow projection with breakeven month")
                .arg(
                    Arg::new("growth")
                        .long("growth")
                        .help("Base monthly growth rate in percent (phased down after year 1)"),
                )
                .arg(
                    Arg::new("start-revenue")
                        .long("start-revenue")
                        .help("Revenue in month 1"),
                )
                .arg(months_arg("Projection horizon in months")),
        ))
        .subcommand(output_flags(
            Command::new("roi")
                .about("Per-partner investment, distributions and cash ROI")
                .arg(
                    Arg::new("distribution")
                        .long("distribution")
                        .help("Percent of profit distributed to partners"),
                )
                .arg(
                    Arg::new("split")
                        .long("split")
                        .help("Ownership percentages as A,B,C"),
                ),
        ))
        .subcommand(output_flags(
            Command::new("dashboard").about("Headline metrics"),
        ))
        .subcommand(
            Command::new("export")
                .about("Write a projection series to a file")
                .arg(
                    Arg::new("series")
                        .required(true)
                        .value_parser(["revenue", "cashflow", "partners"]),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}
