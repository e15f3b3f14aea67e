// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Claim verification for "Recursive Language Models" (arXiv:2512.24601)
//!
//! Recomputes the paper's reported improvements and ablation drops from the
//! scores it publishes, runs a bookkeeping-only RLM simulation and
//! cross-checks benchmark token counts. The result is one JSON report plus a
//! console rendering.

pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod figures;
pub mod output_diagnostic;
pub mod paper;
pub mod pipeline;
pub mod report;
pub mod simulation;
