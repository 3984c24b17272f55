// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use custos::harness;

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { json, element } => {
            std::process::exit(run_checks(json, element.as_deref()));
        }
        Commands::List => {
            for check in harness::builtin() {
                println!(
                    "{}",
                    display::list_line(check.element, check.number, check.name)
                );
            }
        }
    }
}

/// Run the (optionally filtered) suite and return the process exit status.
fn run_checks(json: bool, element: Option<&str>) -> i32 {
    let mut checks = harness::builtin();
    if let Some(wanted) = element {
        checks.retain(|check| check.element == wanted);
        if checks.is_empty() {
            eprintln!("no built-in checks for element type '{}'", wanted);
            return 2;
        }
    }

    if json {
        let summary = harness::run(&checks);
        let doc = serde_json::to_string_pretty(&summary).expect("serialize summary");
        println!("{}", doc);
        return summary.exit_code();
    }

    display::section_top("CHECKS");
    let summary = harness::run_with(&checks, |case| {
        display::row(&display::case_line(case));
    });
    display::section_bot();
    display::print_summary(&summary);

    summary.exit_code()
}
