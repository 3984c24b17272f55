// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the custos command-line interface.
//!
//! Two subcommands: `check` runs the built-in drill suite against the
//! checked cursor types and reports pass/fail per element type and case
//! number, `list` shows the suite without running it. `check --json` emits
//! the run summary as a JSON document for pipelines.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "custos",
    about = "Run-time range-checked cursor drill harness",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in check suite
    Check {
        /// Emit the run summary as JSON instead of human-readable output
        #[arg(long)]
        json: bool,

        /// Only run checks for one element type (e.g. "i32" or "Probe")
        #[arg(long)]
        element: Option<String>,
    },

    /// List the built-in checks without running them
    List,
}
