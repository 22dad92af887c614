use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use diaxis_core::config::AggregationPolicy;
use diaxis_core::models::spectrum::{Spectrum, SpectrumProfile};

use crate::domains::{CrossCuttingDomain, spectrum_defs};
use crate::error::ScreeningError;
use crate::screening::{
    ScreeningResponse, TriggeredDomain, domain_scores, triggered_domains, validate_responses,
};

/// Aggregate normalized domain scores into the six-spectrum profile.
///
/// Domains absent from `scores` contribute 0; a spectrum whose member
/// domains are all missing scores 0 rather than "unknown". Callers that
/// need an unknown state must track input completeness themselves.
pub fn compute_spectrum_profile(
    scores: &BTreeMap<CrossCuttingDomain, f64>,
    policy: AggregationPolicy,
) -> SpectrumProfile {
    let mut spectra = BTreeMap::new();
    for def in spectrum_defs() {
        let members: Vec<f64> = def
            .domains
            .iter()
            .map(|domain| scores.get(domain).copied().unwrap_or(0.0))
            .collect();
        let score = match policy {
            AggregationPolicy::TakeMaximum => members.iter().copied().fold(0.0, f64::max),
            AggregationPolicy::SumNormalize => {
                members.iter().sum::<f64>() / members.len() as f64
            }
        };
        spectra.insert(def.spectrum, score);
    }

    let general_factor = spectra.values().sum::<f64>() / Spectrum::ALL.len() as f64;
    SpectrumProfile {
        scores: spectra,
        general_factor,
    }
}

/// Everything the presentation layer needs from one screening pass.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenEvaluation {
    pub domain_scores: BTreeMap<CrossCuttingDomain, f64>,
    pub profile: SpectrumProfile,
    pub triggered: Vec<TriggeredDomain>,
}

/// Validate and evaluate a full screening pass in one step. Invalid
/// responses abort the evaluation; missing responses do not.
pub fn evaluate_screen(
    responses: &[ScreeningResponse],
    policy: AggregationPolicy,
) -> Result<ScreenEvaluation, ScreeningError> {
    let errors = validate_responses(responses);
    if let Some(error) = errors.into_iter().next() {
        return Err(ScreeningError::Validation(error));
    }

    let scores = domain_scores(responses);
    let profile = compute_spectrum_profile(&scores, policy);
    let triggered = triggered_domains(responses);
    Ok(ScreenEvaluation {
        domain_scores: scores,
        profile,
        triggered,
    })
}
