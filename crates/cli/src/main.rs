// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! claimcheck binary entry point.

use clap::Parser;

use claimcheck::cli::{Cli, OutputFormat};
use claimcheck::config::VerifierConfig;
use claimcheck::output_diagnostic::{print_error, print_section_failure, print_status};
use claimcheck::pipeline::{self, SECTION_COUNT};

fn main() {
    let cli = Cli::parse();

    let config = match VerifierConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let report = pipeline::run(&config, |step, name| {
        if !cli.quiet {
            print_status(step, SECTION_COUNT, name);
        }
    });

    for (section, error) in report.sections().failures() {
        print_section_failure(section, error);
    }

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        },
    }

    if cli.no_save {
        return;
    }
    if let Err(e) = report.write_json(&cli.output) {
        print_error(e);
        std::process::exit(1);
    }
    if !cli.quiet {
        eprintln!("Results saved to {}", cli.output.display());
    }
}
