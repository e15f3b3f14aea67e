// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal claims and their isolated verification outcomes.

use crate::verify::{Status, VerificationResult, Verifier};
use serde::Serialize;

/// A numeric claim copied out of a paper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Claim {
    id: &'static str,
    description: &'static str,
    baseline: f64,
    measured: f64,
    claimed: &'static str,
}

impl Claim {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        baseline: f64,
        measured: f64,
        claimed: &'static str,
    ) -> Self {
        Self {
            id,
            description,
            baseline,
            measured,
            claimed,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn measured(&self) -> f64 {
        self.measured
    }

    /// Claimed improvement as written, e.g. `+1350%`
    pub fn claimed(&self) -> &'static str {
        self.claimed
    }

    /// Verify this claim, turning a parse failure into an error entry so the
    /// caller can keep going with the remaining claims.
    pub fn check(&self, verifier: &Verifier) -> ClaimOutcome {
        let verdict = match verifier.verify(self.baseline, self.measured, self.claimed) {
            Ok(result) => Verdict::Checked(result),
            Err(e) => Verdict::Failed(FailedCheck {
                status: Status::Error,
                matches: false,
                claimed_text: self.claimed.to_string(),
                error: e.to_string(),
            }),
        };
        ClaimOutcome {
            id: self.id,
            claim: self.description,
            verdict,
        }
    }
}

/// Verification outcome for one claim identifier
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClaimOutcome {
    #[serde(skip)]
    pub id: &'static str,
    pub claim: &'static str,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Verdict {
    Checked(VerificationResult),
    Failed(FailedCheck),
}

/// Entry recorded when a claim could not be checked at all
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FailedCheck {
    pub status: Status,
    pub matches: bool,
    pub claimed_text: String,
    pub error: String,
}

impl ClaimOutcome {
    pub fn matches(&self) -> bool {
        match &self.verdict {
            Verdict::Checked(result) => result.matches,
            Verdict::Failed(_) => false,
        }
    }

    pub fn status(&self) -> Status {
        match &self.verdict {
            Verdict::Checked(result) => result.status,
            Verdict::Failed(failed) => failed.status,
        }
    }

    pub fn result(&self) -> Option<&VerificationResult> {
        match &self.verdict {
            Verdict::Checked(result) => Some(result),
            Verdict::Failed(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "claim_tests.rs"]
mod tests;
