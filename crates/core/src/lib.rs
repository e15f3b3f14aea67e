// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Claim verification engine.
//!
//! Recomputes improvement figures reported in a paper from the baseline and
//! measured values it states, and reports which reading of "improvement"
//! (if any) reconciles with the claimed number. Mismatches are ordinary
//! results; only unparseable claim text is an error.

pub mod ablation;
pub mod claim;
pub mod claimed;
mod number_serde;
pub mod summary;
pub mod verify;

pub use ablation::{
    compare, AblationCheck, AblationClaim, AblationDelta, DivisionError, RelativeDrop,
    SensitivityComparison,
};
pub use claim::{Claim, ClaimOutcome, FailedCheck, Verdict};
pub use claimed::{ClaimedValue, ParseError};
pub use summary::{Discrepancy, Summary, SummaryBuilder, TOTAL_POSSIBLE};
pub use verify::{
    verify, CostRatioResult, Interpretations, Method, Status, Tolerance, VerificationResult,
    Verifier, PERCENT_TOLERANCE, RATIO_TOLERANCE,
};
