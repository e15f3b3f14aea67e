// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for configuration files.
//!
//! Unknown keys are rejected through `#[serde(deny_unknown_fields)]`.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn claimcheck_with(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("claimcheck").unwrap();
    cmd.env_remove("CLAIMCHECK_OUTPUT")
        .env_remove("CLAIMCHECK_CONFIG")
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "--no-save",
            "--quiet",
        ]);
    cmd
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = write_config("");
    claimcheck_with(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("9/11 claims verified"));
}

#[test]
fn test_total_possible_changes_the_score() {
    let config = write_config(
        r#"
        [summary]
        total_possible = 9
        "#,
    );
    claimcheck_with(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("9/9 claims verified (score 10.0/10)"));
}

#[test]
fn test_small_demo_leaves_scaling_claim_unverified() {
    let config = write_config(
        r#"
        [simulation]
        demo_multiplier = 10
        "#,
    );
    claimcheck_with(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("8/11 claims verified"));
}

#[test]
fn test_unknown_field_rejected() {
    let config = write_config(
        r#"
        [tolerance]
        percentage = 2.0
        "#,
    );
    claimcheck_with(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("percentage").or(predicate::str::contains("unknown field")),
        );
}

#[test]
fn test_zero_context_window_rejected() {
    let config = write_config(
        r#"
        [simulation]
        context_window = 0
        "#,
    );
    claimcheck_with(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "simulation.context_window must be at least 1",
        ));
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("claimcheck").unwrap();
    cmd.env_remove("CLAIMCHECK_CONFIG")
        .args(["--config", "/nonexistent/claimcheck.toml", "--no-save"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_oversized_simulation_rejected() {
    let config = write_config(
        r#"
        [simulation]
        demo_multiplier = 9223372036854775807
        "#,
    );
    claimcheck_with(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("simulation.demo_multiplier"));
}
