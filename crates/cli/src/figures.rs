// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chart datasets for the report.
//!
//! Each figure carries only the data and labels a plotting front end would
//! need. Nothing is rendered here.

use crate::paper::{ABLATION_CLAIMS, PERCENTAGE_CLAIMS, SCALING_CLAIM_ID};
use claimcheck_core::{AblationClaim, Claim};
use serde::Serialize;

/// BrowseComp-Plus score of GPT-5 with RLM; the base model scores zero.
pub const BROWSECOMP_RLM_SCORE: f64 = 91.33;
/// BrowseComp-Plus cost per query with RLM, in USD
pub const BROWSECOMP_RLM_COST: f64 = 0.99;

/// Input sizes plotted in the scaling chart, in context windows
pub const SCALING_MULTIPLIERS: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0];
/// Illustrative capability curves, not measurements
const BASELINE_CAPABILITY: [f64; 7] = [100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
const RLM_CAPABILITY: [f64; 7] = [100.0, 95.0, 90.0, 85.0, 75.0, 65.0, 55.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    GroupedBar,
    Line,
    Scatter,
}

/// One named row of values; `None` marks a missing data point
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    fn new(name: &str, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            name: name.to_string(),
            values: values.into_iter().collect(),
        }
    }

    fn complete(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, values.into_iter().map(Some))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub id: &'static str,
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl Figure {
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

fn claim(id: &str) -> Option<&'static Claim> {
    PERCENTAGE_CLAIMS.iter().find(|c| c.id() == id)
}

fn ablation(category: &str) -> Option<&'static AblationClaim> {
    ABLATION_CLAIMS.iter().find(|c| c.category == category)
}

/// Baseline vs RLM for every percentage claim, annotated with the claimed figure.
pub fn improvement_magnitudes() -> Figure {
    Figure {
        id: "improvement_magnitudes",
        title: "Baseline vs RLM Performance per Claim".to_string(),
        kind: ChartKind::GroupedBar,
        x_label: "Claim".to_string(),
        y_label: "Score".to_string(),
        categories: PERCENTAGE_CLAIMS
            .iter()
            .map(|c| c.description().to_string())
            .collect(),
        series: vec![
            Series::complete("Baseline", PERCENTAGE_CLAIMS.iter().map(Claim::baseline)),
            Series::complete("RLM", PERCENTAGE_CLAIMS.iter().map(Claim::measured)),
        ],
        annotations: PERCENTAGE_CLAIMS
            .iter()
            .map(|c| format!("{}: claimed {}", c.id(), c.claimed()))
            .collect(),
    }
}

/// GPT-5 and Qwen3-Coder across multi-hop, quadratic and linear tasks.
pub fn complexity_comparison() -> Figure {
    let score = |id: &str, pick: fn(&Claim) -> f64| claim(id).map(pick);

    Figure {
        id: "complexity_comparison",
        title: "RLM Performance Across Task Complexities".to_string(),
        kind: ChartKind::GroupedBar,
        x_label: "Task Type / Complexity".to_string(),
        y_label: "Performance Score".to_string(),
        categories: vec![
            "BrowseComp-Plus (multi-hop, 6M-11M tokens)".to_string(),
            "OOLONG-Pairs (quadratic, 32K tokens)".to_string(),
            "OOLONG (linear, 131K tokens)".to_string(),
        ],
        series: vec![
            Series::new(
                "GPT-5 Baseline",
                [
                    Some(0.0),
                    score("E2_C2", Claim::baseline),
                    score("E6_C4", Claim::baseline),
                ],
            ),
            Series::new(
                "GPT-5 RLM",
                [
                    Some(BROWSECOMP_RLM_SCORE),
                    score("E2_C2", Claim::measured),
                    score("E6_C4", Claim::measured),
                ],
            ),
            Series::new(
                "Qwen3-Coder Baseline",
                [
                    None,
                    score("E3_C3", Claim::baseline),
                    score("E7_C5", Claim::baseline),
                ],
            ),
            Series::new(
                "Qwen3-Coder RLM",
                [
                    None,
                    score("E3_C3", Claim::measured),
                    score("E7_C5", Claim::measured),
                ],
            ),
        ],
        annotations: vec!["BrowseComp-Plus baseline: 0% (context limit exceeded)".to_string()],
    }
}

/// Full RLM vs RLM without sub-calls.
pub fn ablation_study() -> Figure {
    let order = ["OOLONG", "OOLONG-Pairs"];
    let claims: Vec<Option<&AblationClaim>> = order.iter().map(|c| ablation(c)).collect();

    Figure {
        id: "ablation_study",
        title: "Ablation Study: Impact of Removing Sub-Calls".to_string(),
        kind: ChartKind::GroupedBar,
        x_label: "Benchmark".to_string(),
        y_label: "Performance Score".to_string(),
        categories: vec![
            "OOLONG (linear complexity)".to_string(),
            "OOLONG-Pairs (quadratic complexity)".to_string(),
        ],
        series: vec![
            Series::new(
                "Full RLM (with sub-calls)",
                claims.iter().map(|c| c.map(|c| c.full)),
            ),
            Series::new(
                "RLM without sub-calls",
                claims.iter().map(|c| c.map(|c| c.degraded)),
            ),
        ],
        annotations: claims
            .iter()
            .flatten()
            .map(|c| format!("{}: -{:.2} points", c.category, c.claimed_drop))
            .collect(),
    }
}

/// Illustrative capability as input grows past the context window.
pub fn context_scaling() -> Figure {
    Figure {
        id: "context_scaling",
        title: "Context Scaling: RLM vs Baseline".to_string(),
        kind: ChartKind::Line,
        x_label: "Input Size (× Context Window)".to_string(),
        y_label: "Capability (%)".to_string(),
        categories: SCALING_MULTIPLIERS
            .iter()
            .map(|m| format!("{}x", m))
            .collect(),
        series: vec![
            Series::complete("Baseline LLM", BASELINE_CAPABILITY),
            Series::complete("RLM", RLM_CAPABILITY),
        ],
        annotations: vec![
            "Context limit exceeded beyond 1x".to_string(),
            format!("100× capability ({})", SCALING_CLAIM_ID),
        ],
    }
}

/// Cost per query against accuracy. Costs other than BrowseComp-Plus are estimates.
pub fn cost_vs_accuracy() -> Figure {
    let accuracy = |id: &str, pick: fn(&Claim) -> f64| claim(id).map(pick);
    let points: [(&str, f64, Option<f64>); 6] = [
        ("Base GPT-5 OOLONG", 1.5, accuracy("E6_C4", Claim::baseline)),
        ("RLM GPT-5 OOLONG", 1.5, accuracy("E6_C4", Claim::measured)),
        ("Base GPT-5 OOLONG-Pairs", 0.5, accuracy("E2_C2", Claim::baseline)),
        ("RLM GPT-5 OOLONG-Pairs", 0.5, accuracy("E2_C2", Claim::measured)),
        (
            "RLM GPT-5 BrowseComp-Plus",
            BROWSECOMP_RLM_COST,
            Some(BROWSECOMP_RLM_SCORE),
        ),
        ("Summary Agent (3× more expensive)", 3.0, Some(50.0)),
    ];

    Figure {
        id: "cost_vs_accuracy",
        title: "Cost vs Accuracy Trade-off".to_string(),
        kind: ChartKind::Scatter,
        x_label: "Cost (USD)".to_string(),
        y_label: "Accuracy (%)".to_string(),
        categories: points.iter().map(|(label, _, _)| label.to_string()).collect(),
        series: vec![
            Series::complete("Cost (USD)", points.iter().map(|(_, cost, _)| *cost)),
            Series::new("Accuracy (%)", points.iter().map(|(_, _, acc)| *acc)),
        ],
        annotations: vec![
            "OOLONG and OOLONG-Pairs costs are estimates".to_string(),
            "BrowseComp-Plus: $0.99 at 91.33% accuracy".to_string(),
        ],
    }
}

/// Every figure, in report order.
pub fn all() -> Vec<Figure> {
    vec![
        improvement_magnitudes(),
        complexity_comparison(),
        ablation_study(),
        context_scaling(),
        cost_vs_accuracy(),
    ]
}

#[cfg(test)]
#[path = "figures_tests.rs"]
mod tests;
