// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark metadata reported in the paper.
//!
//! Token counts here are taken as stated. The only check performed is that
//! each asserted count agrees with the benchmark table it refers to.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Task complexity class, ordered from easiest to hardest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Constant,
    Linear,
    Quadratic,
    MultiHop,
    /// Not placed on the hierarchy
    CodeUnderstanding,
}

impl Complexity {
    pub fn on_hierarchy(&self) -> bool {
        !matches!(self, Complexity::CodeUnderstanding)
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Constant => write!(f, "constant"),
            Complexity::Linear => write!(f, "linear"),
            Complexity::Quadratic => write!(f, "quadratic"),
            Complexity::MultiHop => write!(f, "multi-hop"),
            Complexity::CodeUnderstanding => write!(f, "code understanding"),
        }
    }
}

/// Input size of a benchmark
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSpan {
    Count(u64),
    Range { min: u64, max: u64 },
    Unknown,
}

/// Render a token count the way the paper writes it: `131K`, `4.2M`.
pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 1_000_000 {
        let m = tokens as f64 / 1_000_000.0;
        if tokens % 1_000_000 == 0 {
            format!("{}M", tokens / 1_000_000)
        } else {
            format!("{:.1}M", m)
        }
    } else if tokens >= 1_000 && tokens % 1_000 == 0 {
        format!("{}K", tokens / 1_000)
    } else {
        tokens.to_string()
    }
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSpan::Count(n) => write!(f, "{}", format_tokens(*n)),
            TokenSpan::Range { min, max } => {
                write!(f, "{}-{}", format_tokens(*min), format_tokens(*max))
            }
            TokenSpan::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for TokenSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenSpan::Count(n) => serializer.serialize_u64(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// One benchmark as described in the paper
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BenchmarkProfile {
    #[serde(skip)]
    pub name: &'static str,
    pub complexity: Complexity,
    pub task: &'static str,
    pub tokens: TokenSpan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<u32>,
    pub description: &'static str,
}

pub const BENCHMARKS: [BenchmarkProfile; 5] = [
    BenchmarkProfile {
        name: "S-NIAH",
        complexity: Complexity::Constant,
        task: "needle in haystack",
        tokens: TokenSpan::Unknown,
        documents: None,
        description: "Finding single needles - constant complexity",
    },
    BenchmarkProfile {
        name: "BrowseComp-Plus",
        complexity: Complexity::MultiHop,
        task: "multi-hop reasoning across documents",
        tokens: TokenSpan::Range {
            min: 6_000_000,
            max: 11_000_000,
        },
        documents: Some(1000),
        description: "Requires reasoning across 1K documents",
    },
    BenchmarkProfile {
        name: "OOLONG",
        complexity: Complexity::Linear,
        task: "information aggregation",
        tokens: TokenSpan::Count(131_000),
        documents: None,
        description: "Linear complexity aggregation tasks",
    },
    BenchmarkProfile {
        name: "OOLONG-Pairs",
        complexity: Complexity::Quadratic,
        task: "pairwise reasoning",
        tokens: TokenSpan::Count(32_000),
        documents: None,
        description: "Quadratic complexity pairwise tasks",
    },
    BenchmarkProfile {
        name: "LongBench-v2-CodeQA",
        complexity: Complexity::CodeUnderstanding,
        task: "code comprehension",
        tokens: TokenSpan::Range {
            min: 23_000,
            max: 4_200_000,
        },
        documents: None,
        description: "Code understanding at scale",
    },
];

/// A token-count statement from the paper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenClaim {
    pub id: &'static str,
    pub key: &'static str,
    pub benchmark: &'static str,
    pub claimed: TokenSpan,
    pub notes: &'static str,
}

pub const TOKEN_CLAIMS: [TokenClaim; 3] = [
    TokenClaim {
        id: "E9",
        key: "E9_OOLONG_131K",
        benchmark: "OOLONG",
        claimed: TokenSpan::Count(131_000),
        notes: "131K tokens for linear complexity tasks",
    },
    TokenClaim {
        id: "E10",
        key: "E10_OOLONG_Pairs_32K",
        benchmark: "OOLONG-Pairs",
        claimed: TokenSpan::Count(32_000),
        notes: "32K tokens for quadratic complexity tasks",
    },
    TokenClaim {
        id: "E8",
        key: "E8_BrowseComp_6M_11M",
        benchmark: "BrowseComp-Plus",
        claimed: TokenSpan::Range {
            min: 6_000_000,
            max: 11_000_000,
        },
        notes: "6-11M tokens across 1K documents",
    },
];

/// Outcome of cross-checking one token claim
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenVerification {
    #[serde(skip)]
    pub id: &'static str,
    pub claimed: TokenSpan,
    pub verified: bool,
    pub notes: &'static str,
}

/// Benchmark section of the report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkAnalysis {
    pub benchmarks: BTreeMap<&'static str, BenchmarkProfile>,
    pub token_verifications: BTreeMap<&'static str, TokenVerification>,
    pub complexity_hierarchy: Vec<String>,
}

impl BenchmarkAnalysis {
    /// Ids whose token claims agree with the benchmark table.
    pub fn verified_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.token_verifications
            .values()
            .filter(|v| v.verified)
            .map(|v| v.id)
    }

    pub fn unverified_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.token_verifications
            .values()
            .filter(|v| !v.verified)
            .map(|v| v.id)
    }
}

pub fn find(name: &str) -> Option<&'static BenchmarkProfile> {
    BENCHMARKS.iter().find(|b| b.name == name)
}

/// Check a token claim against the profile of the benchmark it names.
pub fn verify_token_claim(claim: &TokenClaim) -> TokenVerification {
    let verified = find(claim.benchmark).is_some_and(|b| b.tokens == claim.claimed);
    TokenVerification {
        id: claim.id,
        claimed: claim.claimed,
        verified,
        notes: claim.notes,
    }
}

/// `constant (S-NIAH) < linear (OOLONG) < ...`, ordered by complexity.
pub fn complexity_hierarchy(profiles: &[BenchmarkProfile]) -> String {
    let mut ranked: Vec<&BenchmarkProfile> =
        profiles.iter().filter(|b| b.complexity.on_hierarchy()).collect();
    ranked.sort_by_key(|b| b.complexity);
    ranked
        .iter()
        .map(|b| format!("{} ({})", b.complexity, b.name))
        .collect::<Vec<_>>()
        .join(" < ")
}

pub fn analyze() -> BenchmarkAnalysis {
    BenchmarkAnalysis {
        benchmarks: BENCHMARKS.iter().map(|b| (b.name, *b)).collect(),
        token_verifications: TOKEN_CLAIMS
            .iter()
            .map(|c| (c.key, verify_token_claim(c)))
            .collect(),
        complexity_hierarchy: vec![complexity_hierarchy(&BENCHMARKS)],
    }
}

#[cfg(test)]
#[path = "benchmarks_tests.rs"]
mod tests;
