// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of claimed-improvement text such as `+1,350%` or `3x cheaper`.

use regex::Regex;
use serde::Serialize;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Signed decimal with optional thousands separators, then an optional unit.
static CLAIMED_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*
        (?P<sign>[+-])?\s*
        (?P<number>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)
        \s*
        (?P<unit>%|(?:x|×)(?:\s*cheaper)?)?
        \s*$",
    )
    .ok()
});

/// Errors from reading a claimed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no numeric value in claimed text '{text}'")]
    NoNumber { text: String },

    #[error("invalid number '{number}' in claimed text '{text}'")]
    InvalidNumber { text: String, number: String },

    #[error("claimed-value grammar failed to compile")]
    Grammar,
}

/// A claimed improvement, tagged by its unit
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum ClaimedValue {
    /// `+28.4%`, `385`, `-3.5%`
    Percent { value: f64 },
    /// `3x`, `2.5× cheaper`
    Ratio { value: f64, cheaper: bool },
}

impl ClaimedValue {
    /// Parse claimed text into a tagged value.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let regex = CLAIMED_REGEX.as_ref().ok_or(ParseError::Grammar)?;
        let caps = regex.captures(text).ok_or_else(|| ParseError::NoNumber {
            text: text.to_string(),
        })?;

        let digits = caps
            .name("number")
            .map(|m| m.as_str().replace(',', ""))
            .ok_or_else(|| ParseError::NoNumber {
                text: text.to_string(),
            })?;
        let magnitude: f64 = digits.parse().map_err(|_| ParseError::InvalidNumber {
            text: text.to_string(),
            number: digits.clone(),
        })?;
        let value = match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => -magnitude,
            _ => magnitude,
        };

        let unit = caps.name("unit").map(|m| m.as_str().to_lowercase());
        Ok(match unit.as_deref() {
            None | Some("%") => ClaimedValue::Percent { value },
            Some(ratio) => ClaimedValue::Ratio {
                value,
                cheaper: ratio.ends_with("cheaper"),
            },
        })
    }

    /// The bare number, whatever its unit.
    pub fn value(&self) -> f64 {
        match self {
            ClaimedValue::Percent { value } | ClaimedValue::Ratio { value, .. } => *value,
        }
    }

    pub fn is_ratio(&self) -> bool {
        matches!(self, ClaimedValue::Ratio { .. })
    }
}

impl FromStr for ClaimedValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ClaimedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimedValue::Percent { value } => write!(f, "{}%", value),
            ClaimedValue::Ratio {
                value,
                cheaper: true,
            } => write!(f, "{}x cheaper", value),
            ClaimedValue::Ratio { value, .. } => write!(f, "{}x", value),
        }
    }
}

#[cfg(test)]
#[path = "claimed_tests.rs"]
mod tests;
