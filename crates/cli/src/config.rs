// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verifier configuration loaded from TOML or JSON files.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! paper check exactly.

use claimcheck_core::{Tolerance, PERCENT_TOLERANCE, RATIO_TOLERANCE, TOTAL_POSSIBLE};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

/// Default simulated context window, in characters
pub const DEFAULT_CONTEXT_WINDOW: usize = 1000;
/// Default input size for the scaling demonstration, in context windows
pub const DEFAULT_DEMO_MULTIPLIER: usize = 100;
/// Default input length for the decomposition example
pub const DEFAULT_DECOMPOSITION_INPUT: usize = 5000;
/// Largest simulated input, in characters
pub const MAX_SIMULATED_INPUT: usize = 10_000_000;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level verifier configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VerifierConfig {
    #[serde(default)]
    pub tolerance: ToleranceConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Match tolerances
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToleranceConfig {
    /// Percent claims (default: 1.0)
    #[serde(default = "default_percent")]
    pub percent: f64,

    /// Ratio claims such as "3x cheaper" (default: 0.5)
    #[serde(default = "default_ratio")]
    pub ratio: f64,
}

fn default_percent() -> f64 {
    PERCENT_TOLERANCE
}

fn default_ratio() -> f64 {
    RATIO_TOLERANCE
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            percent: PERCENT_TOLERANCE,
            ratio: RATIO_TOLERANCE,
        }
    }
}

impl From<&ToleranceConfig> for Tolerance {
    fn from(config: &ToleranceConfig) -> Self {
        Tolerance {
            percent: config.percent,
            ratio: config.ratio,
        }
    }
}

/// Scoring
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    /// Denominator of the 0-10 score (default: 11)
    #[serde(default = "default_total_possible")]
    pub total_possible: usize,
}

fn default_total_possible() -> usize {
    TOTAL_POSSIBLE
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            total_possible: TOTAL_POSSIBLE,
        }
    }
}

/// Toy recursive-model simulation
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    #[serde(default = "default_demo_multiplier")]
    pub demo_multiplier: usize,

    #[serde(default = "default_decomposition_input")]
    pub decomposition_input: usize,

    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: usize,
}

fn default_context_window() -> usize {
    DEFAULT_CONTEXT_WINDOW
}

fn default_demo_multiplier() -> usize {
    DEFAULT_DEMO_MULTIPLIER
}

fn default_decomposition_input() -> usize {
    DEFAULT_DECOMPOSITION_INPUT
}

fn default_max_recursion_depth() -> usize {
    1
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            demo_multiplier: DEFAULT_DEMO_MULTIPLIER,
            decomposition_input: DEFAULT_DECOMPOSITION_INPUT,
            max_recursion_depth: default_max_recursion_depth(),
        }
    }
}

impl SimulationConfig {
    /// Context window as a nonzero size. Only valid after `validate`.
    pub fn window(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.context_window).ok_or_else(|| {
            ConfigError::Validation("simulation.context_window must be at least 1".to_string())
        })
    }

    /// Both simulated inputs must stay within `MAX_SIMULATED_INPUT` characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window()?;
        if self.demo_multiplier == 0 {
            return Err(ConfigError::Validation(
                "simulation.demo_multiplier must be at least 1".to_string(),
            ));
        }
        let demo_input = self
            .context_window
            .checked_mul(self.demo_multiplier)
            .filter(|n| *n <= MAX_SIMULATED_INPUT);
        if demo_input.is_none() {
            return Err(ConfigError::Validation(format!(
                "simulation.context_window * simulation.demo_multiplier must not exceed {}",
                MAX_SIMULATED_INPUT
            )));
        }
        if self.decomposition_input > MAX_SIMULATED_INPUT {
            return Err(ConfigError::Validation(format!(
                "simulation.decomposition_input must not exceed {}, got {}",
                MAX_SIMULATED_INPUT, self.decomposition_input
            )));
        }
        Ok(())
    }
}

impl VerifierConfig {
    /// Load a config file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: VerifierConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("tolerance.percent", self.tolerance.percent),
            ("tolerance.ratio", self.tolerance.ratio),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.summary.total_possible == 0 {
            return Err(ConfigError::Validation(
                "summary.total_possible must be at least 1".to_string(),
            ));
        }
        self.simulation.validate()
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance::from(&self.tolerance)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
