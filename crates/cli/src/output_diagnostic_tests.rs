// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::VerifierConfig;
use crate::pipeline;

fn captured(write: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    write(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn config_error_plain_text_when_not_terminal() {
    let err = VerifierConfig::load(std::path::Path::new("/nonexistent/claimcheck.toml"))
        .unwrap_err();
    let output = captured(|buf| write_error(buf, &err, false));
    assert!(output.starts_with("Error: Failed to read config file: "));
    assert!(output.ends_with('\n'));
}

#[test]
fn config_error_with_ansi_when_terminal() {
    let mut config = VerifierConfig::default();
    config.summary.total_possible = 0;
    let err = config.validate().unwrap_err();
    let output = captured(|buf| write_error(buf, &err, true));
    assert_eq!(
        output,
        "\x1b[31mError: Validation error: summary.total_possible must be at least 1\x1b[0m\n"
    );
}

#[test]
fn failed_section_is_a_plain_warning_when_not_terminal() {
    let mut config = VerifierConfig::default();
    config.simulation.context_window = 0;
    let report = pipeline::run(&config, |_, _| {});
    let failures = report.sections().failures();
    assert_eq!(failures.len(), 1);

    let (section, error) = failures[0];
    let output = captured(|buf| write_section_failure(buf, section, error, false));
    assert_eq!(
        output,
        "Warning: rlm_simulation failed: Validation error: simulation.context_window must be at least 1\n"
    );
}

#[test]
fn failed_section_is_yellow_when_terminal() {
    let output = captured(|buf| {
        write_section_failure(
            buf,
            "ablation_verification",
            "missing ablation claim for OOLONG",
            true,
        )
    });
    assert_eq!(
        output,
        "\x1b[33mWarning: ablation_verification failed: missing ablation claim for OOLONG\x1b[0m\n"
    );
}

#[test]
fn status_plain_text_when_not_terminal() {
    let output =
        captured(|buf| write_status(buf, 2, pipeline::SECTION_COUNT, "Ablation study", false));
    assert_eq!(output, "[2/4] Ablation study\n");
}

#[test]
fn status_dims_counter_when_terminal() {
    let output = captured(|buf| {
        write_status(buf, 1, pipeline::SECTION_COUNT, "Mathematical verification", true)
    });
    assert_eq!(output, "\x1b[2m[1/4]\x1b[0m Mathematical verification\n");
}
