// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The verification report and its console and JSON renderings.

use crate::figures::Figure;
use crate::pipeline::{Section, Sections};
use crate::simulation::DemoStatus;
use chrono::{DateTime, Utc};
use claimcheck_core::{Summary, Verdict};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when saving a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything one verification run produced
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub paper_id: &'static str,
    pub paper_title: &'static str,
    pub verifier: &'static str,
    pub generated_at: DateTime<Utc>,
    pub verification_sections: Sections,
    pub figures: Vec<Figure>,
    pub summary: Summary,
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

impl Report {
    pub fn new(
        paper_id: &'static str,
        paper_title: &'static str,
        verifier: &'static str,
        verification_sections: Sections,
        figures: Vec<Figure>,
        summary: Summary,
    ) -> Self {
        Self {
            paper_id,
            paper_title,
            verifier,
            generated_at: Utc::now(),
            verification_sections,
            figures,
            summary,
        }
    }

    /// Pin the timestamp, for reproducible output
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn sections(&self) -> &Sections {
        &self.verification_sections
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize the whole report to `path` in one write.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Human-readable rendering for the console
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Claim verification for \"{}\" (arXiv:{})\n",
            self.paper_title, self.paper_id
        ));
        out.push_str(&format!(
            "Generated: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let sections = &self.verification_sections;

        out.push_str("## Mathematical verification\n\n");
        match &sections.mathematical_verification {
            Section::Success(math) => {
                for (id, outcome) in &math.claims {
                    match &outcome.verdict {
                        Verdict::Checked(result) => out.push_str(&format!(
                            "{} {}: {} (claimed {}, actual {:.2}%, {})\n",
                            mark(result.matches),
                            id,
                            outcome.claim,
                            result.claimed,
                            result.interpretations.relative_pct,
                            result.method
                        )),
                        Verdict::Failed(failed) => out.push_str(&format!(
                            "{} {}: {} ({}: {})\n",
                            mark(false),
                            id,
                            outcome.claim,
                            failed.claimed_text,
                            failed.error
                        )),
                    }
                }
                for (id, unchecked) in &math.unchecked {
                    out.push_str(&format!(
                        "- {}: {} not checked, {}\n",
                        id, unchecked.claimed, unchecked.reason
                    ));
                }
            }
            Section::Error { error } => push_section_error(&mut out, error),
        }

        out.push_str("\n## Ablation verification\n\n");
        match &sections.ablation_verification {
            Section::Success(ablation) => {
                for (id, check) in &ablation.claims {
                    out.push_str(&format!(
                        "{} {}: {}\n    {}\n",
                        mark(check.matches),
                        id,
                        check.claim,
                        check.interpretation
                    ));
                }
                for (id, check) in &ablation.sensitivity {
                    out.push_str(&format!(
                        "{} {}: {} ({:.2} vs {:.2} points)\n",
                        mark(check.verified),
                        id,
                        check.claim,
                        check.comparison.second_drop_pp,
                        check.comparison.first_drop_pp
                    ));
                }
            }
            Section::Error { error } => push_section_error(&mut out, error),
        }

        out.push_str("\n## RLM simulation\n\n");
        match &sections.rlm_simulation {
            Section::Success(sim) => {
                let example = &sim.decomposition_example;
                out.push_str(&format!(
                    "- {} characters in a {}-character window: {}\n",
                    example.input_length, example.context_limit, example.result
                ));
                let demo = &sim.scaling_demonstration;
                out.push_str(&format!(
                    "{} {} ({:.0}× window, {} of {} sub-calls answered)\n",
                    mark(demo.status == DemoStatus::Demonstrated),
                    demo.claim,
                    demo.multiplier,
                    demo.verification.sub_calls_made,
                    demo.verification.sub_calls_needed
                ));
            }
            Section::Error { error } => push_section_error(&mut out, error),
        }

        out.push_str("\n## Benchmark analysis\n\n");
        match &sections.benchmark_analysis {
            Section::Success(analysis) => {
                for check in analysis.token_verifications.values() {
                    out.push_str(&format!(
                        "{} {}: {} ({})\n",
                        mark(check.verified),
                        check.id,
                        check.claimed,
                        check.notes
                    ));
                }
                for line in &analysis.complexity_hierarchy {
                    out.push_str(&format!("- Complexity: {}\n", line));
                }
            }
            Section::Error { error } => push_section_error(&mut out, error),
        }

        let summary = &self.summary;
        out.push_str("\n## Summary\n\n");
        out.push_str(&format!(
            "{} (score {:.1}/10)\n",
            summary.verification_status, summary.score
        ));
        if !summary.unverified_claims.is_empty() {
            out.push_str(&format!(
                "Unverified: {}\n",
                summary.unverified_claims.join(", ")
            ));
        }
        for error in &summary.mathematical_errors_found {
            out.push_str(&format!(
                "- {} claims {:.1}% but the scores give {:.2}% ({})\n",
                error.claim, error.claimed, error.actual_relative, error.note
            ));
        }
        for note in &summary.notes {
            out.push_str(&format!("- {}\n", note));
        }

        out
    }
}

fn push_section_error(out: &mut String, error: &str) {
    out.push_str(&format!("{} section failed: {}\n", mark(false), error));
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
