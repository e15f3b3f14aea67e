// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;
use yare::parameterized;

fn write_config(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_defaults_match_paper_check() {
    let config = VerifierConfig::default();
    assert_eq!(config.tolerance.percent, 1.0);
    assert_eq!(config.tolerance.ratio, 0.5);
    assert_eq!(config.summary.total_possible, 11);
    assert_eq!(config.simulation.context_window, 1000);
    assert_eq!(config.simulation.demo_multiplier, 100);
    assert_eq!(config.simulation.decomposition_input, 5000);
    assert_eq!(config.simulation.max_recursion_depth, 1);
    config.validate().unwrap();
}

#[test]
fn test_empty_toml_is_default() {
    let config: VerifierConfig = toml::from_str("").unwrap();
    assert_eq!(config, VerifierConfig::default());
}

#[test]
fn test_partial_table_keeps_other_defaults() {
    let config: VerifierConfig = toml::from_str(
        r#"
[tolerance]
percent = 2.5
"#,
    )
    .unwrap();
    assert_eq!(config.tolerance.percent, 2.5);
    assert_eq!(config.tolerance.ratio, 0.5);
    assert_eq!(config.simulation, SimulationConfig::default());
}

#[test]
fn test_unknown_field_rejected() {
    let err = toml::from_str::<VerifierConfig>(
        r#"
[tolerance]
percnt = 2.0
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("percnt"));
}

#[parameterized(
    zero_percent = { "[tolerance]\npercent = 0.0", "tolerance.percent" },
    negative_ratio = { "[tolerance]\nratio = -1.0", "tolerance.ratio" },
    zero_total = { "[summary]\ntotal_possible = 0", "summary.total_possible" },
    zero_window = { "[simulation]\ncontext_window = 0", "simulation.context_window" },
    zero_multiplier = { "[simulation]\ndemo_multiplier = 0", "simulation.demo_multiplier" },
    overflowing_multiplier = { "[simulation]\ndemo_multiplier = 9223372036854775807", "simulation.demo_multiplier" },
    oversized_demo = { "[simulation]\ncontext_window = 100000\ndemo_multiplier = 101", "simulation.demo_multiplier" },
    oversized_decomposition = { "[simulation]\ndecomposition_input = 10000001", "simulation.decomposition_input" },
)]
fn validation_rejects(content: &str, field: &str) {
    let file = write_config(content, ".toml");
    match VerifierConfig::load(file.path()) {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains(field), "{}", msg),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_load_toml_file() {
    let file = write_config(
        r#"
[summary]
total_possible = 14

[simulation]
context_window = 128
"#,
        ".toml",
    );
    let config = VerifierConfig::load(file.path()).unwrap();
    assert_eq!(config.summary.total_possible, 14);
    assert_eq!(config.simulation.window().unwrap().get(), 128);
}

#[test]
fn test_load_json_file() {
    let file = write_config(r#"{ "tolerance": { "ratio": 0.25 } }"#, ".json");
    let config = VerifierConfig::load(file.path()).unwrap();
    assert_eq!(config.tolerance.ratio, 0.25);
    assert_eq!(config.tolerance().ratio, 0.25);
    assert_eq!(config.tolerance().percent, 1.0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = VerifierConfig::load(Path::new("/nonexistent/claimcheck.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_or_default_without_path() {
    let config = VerifierConfig::load_or_default(None).unwrap();
    assert_eq!(config, VerifierConfig::default());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = write_config("[tolerance\npercent = ", ".toml");
    let err = VerifierConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_largest_usize_multiplier_rejected_from_json() {
    let file = write_config(
        r#"{ "simulation": { "demo_multiplier": 18446744073709551615 } }"#,
        ".json",
    );
    match VerifierConfig::load(file.path()) {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("10000000"), "{}", msg),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_simulated_input_limit_is_inclusive() {
    let mut config = VerifierConfig::default();
    config.simulation.context_window = 100_000;
    config.simulation.demo_multiplier = 100;
    config.simulation.decomposition_input = MAX_SIMULATED_INPUT;
    config.validate().unwrap();
}
