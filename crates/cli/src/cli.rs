// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Recompute the numeric claims of the Recursive Language Models paper
#[derive(Parser, Debug)]
#[command(name = "claimcheck", version, about)]
pub struct Cli {
    /// Configuration file (TOML, or JSON when the name ends in .json)
    #[arg(long, env = "CLAIMCHECK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to save the JSON report
    #[arg(
        long,
        short = 'o',
        env = "CLAIMCHECK_OUTPUT",
        value_name = "PATH",
        default_value = "results.json"
    )]
    pub output: PathBuf,

    /// Rendering written to stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Do not write the JSON report file
    #[arg(long)]
    pub no_save: bool,

    /// Suppress progress lines on stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Stdout rendering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
