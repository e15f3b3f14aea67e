// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use claimcheck_core::{Claim, Status};

fn default_report() -> Report {
    run(&VerifierConfig::default(), |_, _| {})
}

#[test]
fn default_run_verifies_nine_of_eleven() {
    let summary = default_report().summary;

    assert_eq!(summary.verified_count, 9);
    assert_eq!(summary.total_possible, 11);
    assert_eq!(summary.score, 8.2);
    assert_eq!(summary.verification_status, "9/11 claims verified");
    assert_eq!(
        summary.verified_claims,
        vec!["C12", "E1", "E10", "E15", "E16", "E6_C4", "E7_C5", "E8", "E9"]
    );
    assert_eq!(summary.unverified_claims, vec!["E2_C2", "E3_C3"]);
}

#[test]
fn discrepancies_are_reported_not_corrected() {
    let summary = default_report().summary;
    let ids: Vec<_> = summary
        .mathematical_errors_found
        .iter()
        .map(|d| d.claim.as_str())
        .collect();
    assert_eq!(ids, vec!["E2_C2", "E3_C3"]);

    let e2 = &summary.mathematical_errors_found[0];
    assert_eq!(e2.claimed, 1350.0);
    assert!((e2.actual_relative - 144_900.0).abs() < 1e-6);

    assert!(!summary
        .notes
        .iter()
        .any(|n| n == "All percentage calculations are mathematically correct"));
    assert!(summary.notes.contains(
        &"Claimed percentages for E2_C2, E3_C3 do not reconcile with the reported scores"
            .to_string()
    ));
}

#[test]
fn cost_claim_is_a_note_only() {
    let report = default_report();
    assert!(report.summary.notes.contains(
        &"Cost ratio claim E13 (3x cheaper) not verified due to lack of specific cost data"
            .to_string()
    ));
    assert!(!report.summary.verified_claims.contains(&"E13".to_string()));
    assert!(!report.summary.unverified_claims.contains(&"E13".to_string()));

    let math = report.sections().mathematical_verification.success().unwrap();
    assert_eq!(
        math.unchecked["E13"].claimed,
        ClaimedValue::Ratio {
            value: 3.0,
            cheaper: true
        }
    );
}

#[test]
fn mathematical_section_keeps_every_claim() {
    let verifier = Verifier::default();
    let math = mathematical_verification(&verifier).unwrap();
    assert_eq!(math.claims.len(), 4);
    assert!(math.claims["E6_C4"].matches());
    assert!(!math.claims["E2_C2"].matches());
    assert_eq!(math.claims["E2_C2"].status(), Status::Calculated);
}

#[test]
fn quadratic_tasks_are_more_sensitive_to_ablation() {
    let ablation = ablation_verification(1.0).unwrap();
    assert!(ablation.claims["E15"].matches);
    assert!(ablation.claims["E16"].matches);

    let c12 = &ablation.sensitivity["C12"];
    assert!(c12.verified);
    assert_eq!(c12.comparison.more_sensitive.as_deref(), Some("OOLONG-Pairs"));
}

#[test]
fn failed_simulation_section_does_not_stop_the_others() {
    let mut config = VerifierConfig::default();
    config.simulation.context_window = 0;
    let report = run(&config, |_, _| {});

    let failures = report.sections().failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "rlm_simulation");
    assert!(failures[0].1.contains("context_window"));

    assert!(report.sections().benchmark_analysis.success().is_some());
    assert!(report.summary.unverified_claims.contains(&"E1".to_string()));
    assert_eq!(report.summary.verified_count, 8);
}

#[test]
fn small_demo_does_not_demonstrate_scaling() {
    let mut config = VerifierConfig::default();
    config.simulation.demo_multiplier = 50;
    let report = run(&config, |_, _| {});

    let sim = report.sections().rlm_simulation.success().unwrap();
    assert_eq!(sim.scaling_demonstration.status, DemoStatus::Failed);
    assert!(report.summary.unverified_claims.contains(&"E1".to_string()));
    assert!(!report
        .summary
        .notes
        .iter()
        .any(|n| n.starts_with("RLM simulation")));
}

#[test]
fn simulation_uses_configured_sizes() {
    let sim = rlm_simulation(&VerifierConfig::default()).unwrap();
    assert_eq!(sim.decomposition_example.num_chunks, 5);
    assert_eq!(sim.scaling_demonstration.input_size, 100_000);
    assert_eq!(sim.scaling_demonstration.status, DemoStatus::Demonstrated);
}

#[test]
fn progress_reports_each_section_in_order() {
    let mut steps = Vec::new();
    run(&VerifierConfig::default(), |step, name| {
        steps.push((step, name.to_string()))
    });
    assert_eq!(steps.len(), SECTION_COUNT);
    assert_eq!(
        steps.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(steps[1].1, "Ablation study");
}

#[test]
fn sections_serialize_with_status_tag() {
    let mut config = VerifierConfig::default();
    config.simulation.context_window = 0;
    let report = run(&config, |_, _| {});
    let json = serde_json::to_value(report.sections()).unwrap();

    assert_eq!(json["mathematical_verification"]["status"], "success");
    assert_eq!(
        json["mathematical_verification"]["claims"]["E6_C4"]["matches"],
        true
    );
    assert_eq!(json["ablation_verification"]["sensitivity"]["C12"]["verified"], true);
    assert_eq!(json["rlm_simulation"]["status"], "error");
    assert!(json["rlm_simulation"]["error"].is_string());
}

#[test]
fn oversized_demo_is_a_section_error() {
    let mut config = VerifierConfig::default();
    config.simulation.demo_multiplier = usize::MAX;
    let report = run(&config, |_, _| {});

    let failures = report.sections().failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "rlm_simulation");
    assert!(failures[0].1.contains("simulation.demo_multiplier"));
    assert!(report.summary.unverified_claims.contains(&"E1".to_string()));
}

#[test]
fn errored_claim_blocks_the_all_correct_note() {
    let verifier = Verifier::default();
    let good = Claim::new("E6_C4", "OOLONG GPT-5", 44.00, 56.50, "+28.4%");
    let garbled = Claim::new("EX", "garbled", 1.0, 2.0, "n/a");
    let mut claims = BTreeMap::new();
    claims.insert(good.id(), good.check(&verifier));
    claims.insert(garbled.id(), garbled.check(&verifier));

    let sections = Sections {
        mathematical_verification: Section::Success(MathematicalVerification {
            claims,
            unchecked: BTreeMap::new(),
        }),
        ablation_verification: Section::capture(ablation_verification(1.0)),
        rlm_simulation: Section::capture(rlm_simulation(&VerifierConfig::default())),
        benchmark_analysis: Section::capture(benchmark_analysis()),
    };
    let summary = summarize(&sections, 11);

    assert!(!summary
        .notes
        .iter()
        .any(|n| n == "All percentage calculations are mathematically correct"));
    assert!(summary.notes.contains(
        &"Claimed percentages for EX do not reconcile with the reported scores".to_string()
    ));
    assert!(summary.mathematical_errors_found.is_empty());
}

#[test]
fn all_matching_claims_get_the_all_correct_note() {
    let verifier = Verifier::default();
    let good = Claim::new("E6_C4", "OOLONG GPT-5", 44.00, 56.50, "+28.4%");
    let mut claims = BTreeMap::new();
    claims.insert(good.id(), good.check(&verifier));

    let sections = Sections {
        mathematical_verification: Section::Success(MathematicalVerification {
            claims,
            unchecked: BTreeMap::new(),
        }),
        ablation_verification: Section::capture(ablation_verification(1.0)),
        rlm_simulation: Section::capture(rlm_simulation(&VerifierConfig::default())),
        benchmark_analysis: Section::capture(benchmark_analysis()),
    };
    let summary = summarize(&sections, 11);

    assert!(summary
        .notes
        .iter()
        .any(|n| n == "All percentage calculations are mathematically correct"));
}
