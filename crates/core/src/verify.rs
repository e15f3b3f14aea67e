// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recomputation of improvement claims.
//!
//! A claim such as "58.00 vs 0.04 F1 = +1350%" can be read several ways. The
//! verifier computes each reading from the stated values and reports the
//! first one that lands within tolerance of the claimed figure:
//!
//! 1. relative percent: `(measured - baseline) / baseline * 100`
//! 2. multiplier-based percent: `(measured / baseline - 1) * 100`
//!
//! Ratio claims (`3x`, `3x cheaper`) are compared against the growth or cost
//! ratio instead, with the looser ratio tolerance.

use crate::claimed::{ClaimedValue, ParseError};
use crate::number_serde;
use serde::Serialize;

/// Default tolerance for percent claims, in percent.
pub const PERCENT_TOLERANCE: f64 = 1.0;
/// Default tolerance for ratio claims.
pub const RATIO_TOLERANCE: f64 = 0.5;

/// Maximum absolute difference for an interpretation to count as a match
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tolerance {
    pub percent: f64,
    pub ratio: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            percent: PERCENT_TOLERANCE,
            ratio: RATIO_TOLERANCE,
        }
    }
}

/// How the baseline shaped the computation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Calculated,
    /// Zero baseline, positive measurement
    Infinite,
    /// Zero baseline, zero or negative measurement
    Undefined,
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Calculated => write!(f, "CALCULATED"),
            Status::Infinite => write!(f, "INFINITE"),
            Status::Undefined => write!(f, "UNDEFINED"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// Interpretation that reconciled the claim
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    StandardRelativePct,
    MultiplierMinusBaseline,
    /// `measured / baseline` against an `Nx` claim
    GrowthRatio,
    /// `baseline / measured` against an `Nx cheaper` claim
    CostRatio,
    Unknown,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::StandardRelativePct => write!(f, "standard_relative_pct"),
            Method::MultiplierMinusBaseline => write!(f, "multiplier_minus_baseline"),
            Method::GrowthRatio => write!(f, "growth_ratio"),
            Method::CostRatio => write!(f, "cost_ratio"),
            Method::Unknown => write!(f, "unknown"),
        }
    }
}

/// Every reading of "improvement" computed from one baseline/measured pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Interpretations {
    /// `+inf` for a zero baseline with a positive measurement, `0` when undefined.
    #[serde(rename = "actual_relative_pct", with = "number_serde")]
    pub relative_pct: f64,
    #[serde(rename = "actual_multiplier", with = "number_serde::option")]
    pub multiplier: Option<f64>,
    #[serde(rename = "multiplier_based_pct", with = "number_serde::option")]
    pub multiplier_pct: Option<f64>,
    #[serde(with = "number_serde")]
    pub absolute_diff: f64,
}

impl Interpretations {
    /// Compute all interpretations and the status they imply.
    pub fn compute(baseline: f64, measured: f64) -> (Self, Status) {
        let absolute_diff = measured - baseline;

        if baseline == 0.0 {
            let (relative_pct, status) = if measured > 0.0 {
                (f64::INFINITY, Status::Infinite)
            } else {
                (0.0, Status::Undefined)
            };
            return (
                Self {
                    relative_pct,
                    multiplier: None,
                    multiplier_pct: None,
                    absolute_diff,
                },
                status,
            );
        }

        let multiplier = measured / baseline;
        (
            Self {
                relative_pct: (measured - baseline) / baseline * 100.0,
                multiplier: Some(multiplier),
                multiplier_pct: Some((multiplier - 1.0) * 100.0),
                absolute_diff,
            },
            Status::Calculated,
        )
    }
}

/// Outcome of checking one claimed figure
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerificationResult {
    #[serde(with = "number_serde")]
    pub baseline: f64,
    #[serde(with = "number_serde")]
    pub measured: f64,
    pub claimed: ClaimedValue,
    #[serde(flatten)]
    pub interpretations: Interpretations,
    pub matches: bool,
    pub method: Method,
    pub status: Status,
    pub note: String,
}

impl VerificationResult {
    /// Gap between the claim and the relative-percent reading.
    pub fn discrepancy(&self) -> f64 {
        (self.claimed.value() - self.interpretations.relative_pct).abs()
    }
}

fn within(actual: f64, claimed: f64, tolerance: f64) -> bool {
    (actual - claimed).abs() < tolerance
}

fn multiplier_note(baseline: f64, interpretations: &Interpretations) -> String {
    match interpretations.multiplier {
        Some(m) if baseline > 0.0 => format!(
            "Multiplier: {:.1}× = {:.0}% improvement",
            m,
            (m - 1.0) * 100.0
        ),
        _ => "N/A".to_string(),
    }
}

/// Outcome of checking a cost-ratio claim
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostRatioResult {
    #[serde(with = "number_serde")]
    pub measured_cost: f64,
    #[serde(with = "number_serde")]
    pub baseline_cost: f64,
    #[serde(with = "number_serde::option")]
    pub actual_ratio: Option<f64>,
    #[serde(with = "number_serde")]
    pub claimed_ratio: f64,
    pub matches: bool,
    pub status: Status,
    pub interpretation: String,
}

/// Claim checker with fixed tolerances
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Verifier {
    tolerance: Tolerance,
}

impl Verifier {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Parse `claimed_text` and check it against the stated values.
    ///
    /// A claim that matches no interpretation is an `Ok` result with
    /// `matches == false`; only unparseable text is an error.
    pub fn verify(
        &self,
        baseline: f64,
        measured: f64,
        claimed_text: &str,
    ) -> Result<VerificationResult, ParseError> {
        let claimed = ClaimedValue::parse(claimed_text)?;
        Ok(self.verify_value(baseline, measured, claimed))
    }

    /// Check an already parsed claim.
    pub fn verify_value(
        &self,
        baseline: f64,
        measured: f64,
        claimed: ClaimedValue,
    ) -> VerificationResult {
        let (interpretations, status) = Interpretations::compute(baseline, measured);

        let method = match claimed {
            ClaimedValue::Percent { value } => {
                if within(interpretations.relative_pct, value, self.tolerance.percent) {
                    Method::StandardRelativePct
                } else if interpretations
                    .multiplier_pct
                    .is_some_and(|pct| within(pct, value, self.tolerance.percent))
                {
                    Method::MultiplierMinusBaseline
                } else {
                    Method::Unknown
                }
            }
            ClaimedValue::Ratio { value, cheaper } => {
                let (actual, method) = if cheaper {
                    let inverse = (measured != 0.0).then(|| baseline / measured);
                    (inverse, Method::CostRatio)
                } else {
                    (interpretations.multiplier, Method::GrowthRatio)
                };
                if actual.is_some_and(|ratio| within(ratio, value, self.tolerance.ratio)) {
                    method
                } else {
                    Method::Unknown
                }
            }
        };

        VerificationResult {
            baseline,
            measured,
            claimed,
            interpretations,
            matches: method != Method::Unknown,
            method,
            status,
            note: multiplier_note(baseline, &interpretations),
        }
    }

    /// Check a "N× cheaper" claim from raw costs.
    ///
    /// A zero measured cost cannot produce a ratio; that is reported as an
    /// `error` status rather than failing the call.
    pub fn verify_cost_ratio(
        &self,
        measured_cost: f64,
        baseline_cost: f64,
        claimed_text: &str,
    ) -> Result<CostRatioResult, ParseError> {
        let claimed_ratio = ClaimedValue::parse(claimed_text)?.value();

        if measured_cost == 0.0 {
            return Ok(CostRatioResult {
                measured_cost,
                baseline_cost,
                actual_ratio: None,
                claimed_ratio,
                matches: false,
                status: Status::Error,
                interpretation: "Measured cost cannot be zero".to_string(),
            });
        }

        let actual_ratio = baseline_cost / measured_cost;
        Ok(CostRatioResult {
            measured_cost,
            baseline_cost,
            actual_ratio: Some(actual_ratio),
            claimed_ratio,
            matches: within(actual_ratio, claimed_ratio, self.tolerance.ratio),
            status: Status::Calculated,
            interpretation: format!(
                "Baseline is {:.2}x more expensive than the measured system",
                actual_ratio
            ),
        })
    }
}

/// Check a claim with the default tolerances.
pub fn verify(
    baseline: f64,
    measured: f64,
    claimed_text: &str,
) -> Result<VerificationResult, ParseError> {
    Verifier::default().verify(baseline, measured, claimed_text)
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
