// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numbers copied out of "Recursive Language Models" (arXiv:2512.24601).
//!
//! These are literal transcriptions. A claim that does not reconcile is
//! reported as such; the values here are never adjusted to make it match.

use claimcheck_core::{AblationClaim, Claim};

pub const PAPER_ID: &str = "2512.24601";
pub const PAPER_TITLE: &str = "Recursive Language Models";
/// Name recorded as the verifier in the report
pub const VERIFIER: &str = "claimcheck";

/// Improvement claims, baseline vs RLM score
pub const PERCENTAGE_CLAIMS: [Claim; 4] = [
    Claim::new(
        "E2_C2",
        "OOLONG-Pairs GPT-5: 58.00 vs 0.04 F1",
        0.04,
        58.00,
        "+1350%",
    ),
    Claim::new(
        "E3_C3",
        "OOLONG-Pairs Qwen3-Coder: 23.11 vs 0.06 F1",
        0.06,
        23.11,
        "+385%",
    ),
    Claim::new(
        "E6_C4",
        "OOLONG GPT-5: 56.50% vs 44.00%",
        44.00,
        56.50,
        "+28.4%",
    ),
    Claim::new(
        "E7_C5",
        "OOLONG Qwen3-Coder: 48.00% vs 36.00%",
        36.00,
        48.00,
        "+33.3%",
    ),
];

/// Score drops when recursive sub-calls are removed
pub const ABLATION_CLAIMS: [AblationClaim; 2] = [
    AblationClaim {
        id: "E15",
        description: "OOLONG: RLM 56.50% vs No-SubCalls 36.00%",
        category: "OOLONG",
        component: "sub-calls",
        full: 56.50,
        degraded: 36.00,
        claimed_drop: 20.5,
    },
    AblationClaim {
        id: "E16",
        description: "OOLONG-Pairs: RLM 58.00% vs No-SubCalls 17.34%",
        category: "OOLONG-Pairs",
        component: "sub-calls",
        full: 58.00,
        degraded: 17.34,
        claimed_drop: 40.66,
    },
];

/// Quadratic tasks lose more than linear ones without sub-calls
pub const SENSITIVITY_CLAIM_ID: &str = "C12";
pub const SENSITIVITY_CLAIM: &str =
    "Impact is more dramatic on quadratic (OOLONG-Pairs) than linear (OOLONG) tasks";

/// RLMs handle inputs 100x beyond their context window
pub const SCALING_CLAIM_ID: &str = "E1";
pub const SCALING_CLAIM: &str = "E1: RLMs can handle inputs 100× beyond context windows";
/// Smallest input/window multiplier that demonstrates the scaling claim
pub const SCALING_TARGET: f64 = 100.0;

/// Cost claim stated without cost data in the paper
pub const COST_CLAIM_ID: &str = "E13";
pub const COST_CLAIM_TEXT: &str = "3x cheaper";
