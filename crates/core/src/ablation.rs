// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ablation deltas: the drop in a score when one component is removed.
//!
//! Sensitivity between task categories is decided purely by comparing
//! absolute drops; no significance testing is done.

use crate::number_serde;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Relative drop requested against a zero full score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("relative drop is undefined for a zero full score")]
pub struct DivisionError;

/// `(full - degraded) / full * 100`
pub fn relative_drop_pct(full: f64, degraded: f64) -> Result<f64, DivisionError> {
    if full == 0.0 {
        return Err(DivisionError);
    }
    Ok((full - degraded) / full * 100.0)
}

/// Relative drop, or `undefined` when the full score is zero
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RelativeDrop {
    Percent(f64),
    Undefined,
}

impl RelativeDrop {
    pub fn percent(&self) -> Option<f64> {
        match self {
            RelativeDrop::Percent(p) => Some(*p),
            RelativeDrop::Undefined => None,
        }
    }
}

impl Serialize for RelativeDrop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RelativeDrop::Percent(p) => number_serde::serialize(p, serializer),
            RelativeDrop::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Score drop between the full system and the ablated one
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AblationDelta {
    #[serde(with = "number_serde")]
    pub full: f64,
    #[serde(with = "number_serde")]
    pub degraded: f64,
    #[serde(with = "number_serde")]
    pub absolute_drop: f64,
    #[serde(rename = "relative_drop_pct")]
    pub relative_drop: RelativeDrop,
}

impl AblationDelta {
    pub fn measure(full: f64, degraded: f64) -> Self {
        let relative_drop = match relative_drop_pct(full, degraded) {
            Ok(p) => RelativeDrop::Percent(p),
            Err(DivisionError) => RelativeDrop::Undefined,
        };
        Self {
            full,
            degraded,
            absolute_drop: full - degraded,
            relative_drop,
        }
    }
}

/// An ablation result stated in a paper, with the drop it claims
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AblationClaim {
    pub id: &'static str,
    pub description: &'static str,
    /// Task category, e.g. `OOLONG`
    pub category: &'static str,
    /// Component that was removed, e.g. `sub-calls`
    pub component: &'static str,
    pub full: f64,
    pub degraded: f64,
    /// Claimed drop in percentage points
    pub claimed_drop: f64,
}

/// Recomputed ablation claim
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AblationCheck {
    #[serde(skip)]
    pub id: &'static str,
    pub claim: &'static str,
    pub category: &'static str,
    #[serde(flatten)]
    pub delta: AblationDelta,
    #[serde(with = "number_serde")]
    pub claimed_drop: f64,
    pub matches: bool,
    pub interpretation: String,
}

impl AblationClaim {
    /// Recompute the drop and compare it to the claimed one.
    pub fn check(&self, tolerance: f64) -> AblationCheck {
        let delta = AblationDelta::measure(self.full, self.degraded);
        let relative = match delta.relative_drop {
            RelativeDrop::Percent(p) => format!("{:.1}% relative drop", p),
            RelativeDrop::Undefined => "relative drop undefined".to_string(),
        };
        AblationCheck {
            id: self.id,
            claim: self.description,
            category: self.category,
            delta,
            claimed_drop: self.claimed_drop,
            matches: (delta.absolute_drop - self.claimed_drop).abs() < tolerance,
            interpretation: format!(
                "Removing {} reduces performance by {:.2} percentage points ({})",
                self.component, delta.absolute_drop, relative
            ),
        }
    }
}

/// Which of two categories loses more when the component is removed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivityComparison {
    pub first: String,
    pub second: String,
    #[serde(with = "number_serde")]
    pub first_drop_pp: f64,
    #[serde(with = "number_serde")]
    pub second_drop_pp: f64,
    /// `second_drop_pp - first_drop_pp`
    #[serde(with = "number_serde")]
    pub difference: f64,
    /// `None` when both drops are equal
    pub more_sensitive: Option<String>,
}

impl SensitivityComparison {
    /// True when the second category dropped strictly more.
    pub fn second_is_more_sensitive(&self) -> bool {
        self.difference > 0.0
    }
}

/// Compare absolute drops of two categories.
pub fn compare(first: &AblationCheck, second: &AblationCheck) -> SensitivityComparison {
    let first_drop = first.delta.absolute_drop;
    let second_drop = second.delta.absolute_drop;
    let more_sensitive = if second_drop > first_drop {
        Some(second.category.to_string())
    } else if first_drop > second_drop {
        Some(first.category.to_string())
    } else {
        None
    };
    SensitivityComparison {
        first: first.category.to_string(),
        second: second.category.to_string(),
        first_drop_pp: first_drop,
        second_drop_pp: second_drop,
        difference: second_drop - first_drop,
        more_sensitive,
    }
}

#[cfg(test)]
#[path = "ablation_tests.rs"]
mod tests;
