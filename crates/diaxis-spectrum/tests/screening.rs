use diaxis_core::config::AggregationPolicy;
use diaxis_core::models::spectrum::Spectrum;
use diaxis_spectrum::domains::CrossCuttingDomain;
use diaxis_spectrum::error::ScreeningError;
use diaxis_spectrum::profile::evaluate_screen;
use diaxis_spectrum::screening::{
    ScreeningResponse, domain_scores, triggered_domains, validate_responses,
};

fn response(domain: CrossCuttingDomain, item: usize, value: u8) -> ScreeningResponse {
    ScreeningResponse {
        domain,
        item,
        value,
    }
}

#[test]
fn domain_score_is_max_item_over_likert_max() {
    let responses = vec![
        response(CrossCuttingDomain::Depression, 0, 2),
        response(CrossCuttingDomain::Depression, 1, 3),
        response(CrossCuttingDomain::Sleep, 0, 1),
    ];

    let scores = domain_scores(&responses);
    assert_eq!(scores[&CrossCuttingDomain::Depression], 0.75);
    assert_eq!(scores[&CrossCuttingDomain::Sleep], 0.25);
    assert_eq!(scores[&CrossCuttingDomain::Anxiety], 0.0);
}

#[test]
fn threshold_breach_triggers_level2_followup() {
    let responses = vec![
        response(CrossCuttingDomain::Depression, 0, 1),
        response(CrossCuttingDomain::Suicidality, 0, 1),
    ];

    let triggered = triggered_domains(&responses);
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].domain, CrossCuttingDomain::Suicidality);
    assert_eq!(triggered[0].level2_instrument, "C-SSRS");
    assert!(triggered[0].safety_critical);
}

#[test]
fn non_safety_trigger_is_not_critical() {
    let responses = vec![response(CrossCuttingDomain::Anxiety, 1, 3)];
    let triggered = triggered_domains(&responses);
    assert_eq!(triggered.len(), 1);
    assert!(!triggered[0].safety_critical);
}

#[test]
fn out_of_catalog_responses_fail_validation() {
    let responses = vec![
        response(CrossCuttingDomain::Sleep, 3, 2),
        response(CrossCuttingDomain::Anger, 0, 7),
    ];

    let errors = validate_responses(&responses);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.contains("item 3"));
    assert!(errors[1].message.contains("score 7"));
}

#[test]
fn evaluate_screen_aborts_on_invalid_input() {
    let responses = vec![response(CrossCuttingDomain::Sleep, 0, 9)];
    let result = evaluate_screen(&responses, AggregationPolicy::TakeMaximum);
    assert!(matches!(result, Err(ScreeningError::Validation(_))));
}

#[test]
fn evaluate_screen_combines_scores_profile_and_triggers() {
    let responses = vec![
        response(CrossCuttingDomain::Depression, 0, 4),
        response(CrossCuttingDomain::Psychosis, 0, 1),
    ];

    let evaluation =
        evaluate_screen(&responses, AggregationPolicy::TakeMaximum).expect("valid screen");
    assert_eq!(
        evaluation.domain_scores[&CrossCuttingDomain::Depression],
        1.0
    );
    assert_eq!(evaluation.profile.score(Spectrum::Internalizing), 1.0);
    assert_eq!(evaluation.profile.score(Spectrum::ThoughtDisorder), 0.25);
    assert_eq!(evaluation.triggered.len(), 2);
}
