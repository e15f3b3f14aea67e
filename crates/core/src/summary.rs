// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of claim outcomes into a verification summary.

use crate::claim::ClaimOutcome;
use crate::number_serde;
use serde::Serialize;
use std::collections::BTreeSet;

/// Number of claims the score is measured against.
pub const TOTAL_POSSIBLE: usize = 11;

/// A percentage claim whose figure does not reconcile with its inputs
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Discrepancy {
    pub claim: String,
    #[serde(with = "number_serde")]
    pub claimed: f64,
    #[serde(with = "number_serde")]
    pub actual_relative: f64,
    #[serde(with = "number_serde::option")]
    pub actual_multiplier: Option<f64>,
    #[serde(with = "number_serde")]
    pub discrepancy: f64,
    pub note: String,
}

/// Final tally of verified and unverified claims
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub verification_status: String,
    pub verified_count: usize,
    pub total_possible: usize,
    /// `verified_count / total_possible * 10`, one decimal
    #[serde(with = "number_serde")]
    pub score: f64,
    pub verified_claims: Vec<String>,
    pub unverified_claims: Vec<String>,
    pub mathematical_errors_found: Vec<Discrepancy>,
    pub notes: Vec<String>,
}

/// Collects outcomes while the report is being built
#[derive(Clone, Debug)]
pub struct SummaryBuilder {
    total_possible: usize,
    verified: BTreeSet<String>,
    unverified: BTreeSet<String>,
    discrepancies: Vec<Discrepancy>,
    notes: Vec<String>,
}

impl SummaryBuilder {
    pub fn new(total_possible: usize) -> Self {
        Self {
            total_possible,
            verified: BTreeSet::new(),
            unverified: BTreeSet::new(),
            discrepancies: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Record a recomputed claim. Mismatches also become discrepancies.
    pub fn add_outcome(&mut self, outcome: &ClaimOutcome) {
        if outcome.matches() {
            self.verified.insert(outcome.id.to_string());
            return;
        }
        self.unverified.insert(outcome.id.to_string());

        if let Some(result) = outcome.result() {
            self.discrepancies.push(Discrepancy {
                claim: outcome.id.to_string(),
                claimed: result.claimed.value(),
                actual_relative: result.interpretations.relative_pct,
                actual_multiplier: result.interpretations.multiplier,
                discrepancy: result.discrepancy(),
                note: result.note.clone(),
            });
        }
    }

    /// Record a claim checked outside the percentage verifier.
    pub fn mark(&mut self, id: impl Into<String>, verified: bool) {
        if verified {
            self.verified.insert(id.into());
        } else {
            self.unverified.insert(id.into());
        }
    }

    /// Record claims that are taken as stated rather than recomputed.
    pub fn assert_verified<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verified.extend(ids.into_iter().map(Into::into));
    }

    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn has_discrepancies(&self) -> bool {
        !self.discrepancies.is_empty()
    }

    pub fn build(self) -> Summary {
        let verified_count = self.verified.len();
        let score = if self.total_possible == 0 {
            0.0
        } else {
            number_serde::round1(verified_count as f64 / self.total_possible as f64 * 10.0)
        };
        Summary {
            verification_status: format!(
                "{}/{} claims verified",
                verified_count, self.total_possible
            ),
            verified_count,
            total_possible: self.total_possible,
            score,
            verified_claims: self.verified.into_iter().collect(),
            unverified_claims: self.unverified.into_iter().collect(),
            mathematical_errors_found: self.discrepancies,
            notes: self.notes,
        }
    }
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::new(TOTAL_POSSIBLE)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
