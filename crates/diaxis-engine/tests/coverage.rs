use std::collections::BTreeSet;

use diaxis_core::config::CoverageThresholds;
use diaxis_core::models::coverage::CoverageLabel;
use diaxis_core::models::diagnosis::{
    Criterion, DiagnosisCandidate, DiagnosisStatus, Severity,
};
use diaxis_core::models::symptom::SymptomId;
use diaxis_engine::coverage::{analyze, uncovered};
use diaxis_engine::error::EngineError;
use uuid::Uuid;

fn sid(id: &str) -> SymptomId {
    SymptomId::new(id)
}

fn set(names: &[&str]) -> BTreeSet<SymptomId> {
    names.iter().map(|n| sid(n)).collect()
}

fn candidate(
    label: &str,
    status: DiagnosisStatus,
    criteria: &[(&str, f64)],
) -> DiagnosisCandidate {
    DiagnosisCandidate {
        id: Uuid::new_v4(),
        label: label.to_string(),
        code_icd11: None,
        code_dsm5: None,
        criteria: criteria
            .iter()
            .map(|(id, weight)| Criterion {
                symptom_id: sid(id),
                weight: *weight,
            })
            .collect(),
        confidence_pct: 70,
        severity: Severity::Moderate,
        evidence_for: String::new(),
        evidence_against: String::new(),
        status,
        date_onset: None,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn thresholds() -> CoverageThresholds {
    CoverageThresholds::default()
}

#[test]
fn unlisted_symptom_has_zero_ratio_and_is_insufficient() {
    let confirmed = set(&["sadness", "irritability"]);
    let diagnoses = vec![candidate(
        "MDD",
        DiagnosisStatus::Accepted,
        &[("sadness", 1.0)],
    )];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    let irritability = &results[&sid("irritability")];
    assert_eq!(irritability.total_weight, 0.0);
    assert_eq!(irritability.ratio, 0.0);
    assert_eq!(irritability.label, CoverageLabel::Insufficient);
}

#[test]
fn explained_weight_counts_only_accepted_diagnoses() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![
        candidate("MDD", DiagnosisStatus::Accepted, &[("sadness", 1.0)]),
        candidate("GAD", DiagnosisStatus::Proposed, &[("sadness", 0.5)]),
    ];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    let sadness = &results[&sid("sadness")];
    assert_eq!(sadness.total_weight, 1.5);
    assert_eq!(sadness.explained_weight, 1.0);
    assert!((sadness.ratio - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(sadness.label, CoverageLabel::Partial);
}

#[test]
fn withdrawn_diagnoses_claim_nothing() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![candidate(
        "MDD",
        DiagnosisStatus::Withdrawn,
        &[("sadness", 1.0)],
    )];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    let sadness = &results[&sid("sadness")];
    assert_eq!(sadness.total_weight, 0.0);
    assert_eq!(sadness.label, CoverageLabel::Insufficient);
}

#[test]
fn ratio_at_high_threshold_is_complete() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![
        candidate("MDD", DiagnosisStatus::Accepted, &[("sadness", 0.8)]),
        candidate("GAD", DiagnosisStatus::Proposed, &[("sadness", 0.2)]),
    ];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    assert_eq!(results[&sid("sadness")].label, CoverageLabel::Complete);
}

#[test]
fn ratio_below_low_threshold_is_insufficient() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![
        candidate("MDD", DiagnosisStatus::Accepted, &[("sadness", 0.2)]),
        candidate("GAD", DiagnosisStatus::Proposed, &[("sadness", 0.8)]),
    ];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    assert_eq!(results[&sid("sadness")].label, CoverageLabel::Insufficient);
}

#[test]
fn ratios_stay_inside_the_unit_interval() {
    let confirmed = set(&["sadness", "insomnia", "fatigue"]);
    let diagnoses = vec![
        candidate("MDD", DiagnosisStatus::Accepted, &[("sadness", 1.0), ("insomnia", 0.6)]),
        candidate("GAD", DiagnosisStatus::Proposed, &[("insomnia", 0.4)]),
    ];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    for result in results.values() {
        assert!((0.0..=1.0).contains(&result.ratio));
    }
}

#[test]
fn analyze_is_idempotent() {
    let confirmed = set(&["sadness", "insomnia"]);
    let diagnoses = vec![candidate(
        "MDD",
        DiagnosisStatus::Accepted,
        &[("sadness", 1.0), ("insomnia", 0.6)],
    )];

    let first = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    let second = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    assert_eq!(first, second);
}

#[test]
fn stale_criterion_references_abort_with_the_full_list() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![
        candidate("MDD", DiagnosisStatus::Accepted, &[("sadness", 1.0), ("anhedonia", 0.5)]),
        candidate("GAD", DiagnosisStatus::Proposed, &[("worry", 0.7)]),
    ];

    let result = analyze(&confirmed, &diagnoses, thresholds());
    match result {
        Err(EngineError::DataIntegrity(stale)) => {
            let symptoms: Vec<_> = stale.iter().map(|s| s.symptom.as_str()).collect();
            assert_eq!(symptoms, vec!["anhedonia", "worry"]);
        }
        other => panic!("expected DataIntegrity, got {other:?}"),
    }
}

#[test]
fn withdrawn_diagnoses_do_not_trip_the_integrity_check() {
    let confirmed = set(&["sadness"]);
    let diagnoses = vec![candidate(
        "old",
        DiagnosisStatus::Withdrawn,
        &[("gone", 1.0)],
    )];

    assert!(analyze(&confirmed, &diagnoses, thresholds()).is_ok());
}

#[test]
fn uncovered_lists_only_insufficient_symptoms() {
    let confirmed = set(&["sadness", "irritability"]);
    let diagnoses = vec![candidate(
        "MDD",
        DiagnosisStatus::Accepted,
        &[("sadness", 1.0)],
    )];

    let results = analyze(&confirmed, &diagnoses, thresholds()).expect("clean inputs");
    assert_eq!(uncovered(&results), set(&["irritability"]));
}
