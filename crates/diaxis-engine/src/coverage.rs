use std::collections::{BTreeMap, BTreeSet};

use diaxis_core::config::CoverageThresholds;
use diaxis_core::models::coverage::{CoverageLabel, CoverageResult};
use diaxis_core::models::diagnosis::DiagnosisCandidate;
use diaxis_core::models::symptom::SymptomId;
use diaxis_graph::bridge::DiagnosisCluster;

use crate::error::{EngineError, StaleReference};

/// Classify how well each confirmed symptom is explained by the current
/// diagnosis candidates.
///
/// Total weight sums criterion weights over every active candidate;
/// explained weight restricts the sum to accepted ones. A symptom no active
/// candidate lists is Insufficient by definition. Pure and idempotent:
/// identical inputs produce identical maps, nothing is mutated.
pub fn analyze(
    confirmed: &BTreeSet<SymptomId>,
    diagnoses: &[DiagnosisCandidate],
    thresholds: CoverageThresholds,
) -> Result<BTreeMap<SymptomId, CoverageResult>, EngineError> {
    let active: Vec<&DiagnosisCandidate> = diagnoses.iter().filter(|d| d.is_active()).collect();

    let stale: Vec<StaleReference> = active
        .iter()
        .flat_map(|candidate| {
            candidate
                .criteria
                .iter()
                .filter(|criterion| !confirmed.contains(&criterion.symptom_id))
                .map(|criterion| StaleReference {
                    diagnosis: candidate.id,
                    symptom: criterion.symptom_id.clone(),
                })
        })
        .collect();
    if !stale.is_empty() {
        return Err(EngineError::DataIntegrity(stale));
    }

    let mut results = BTreeMap::new();
    for symptom in confirmed {
        let mut total = 0.0;
        let mut explained = 0.0;
        for candidate in &active {
            if let Some(weight) = candidate.criterion_weight(symptom) {
                total += weight;
                if candidate.is_accepted() {
                    explained += weight;
                }
            }
        }

        let ratio = if total > 0.0 { explained / total } else { 0.0 };
        let label = if total == 0.0 || ratio < thresholds.low {
            CoverageLabel::Insufficient
        } else if ratio >= thresholds.high {
            CoverageLabel::Complete
        } else {
            CoverageLabel::Partial
        };

        results.insert(
            symptom.clone(),
            CoverageResult {
                symptom_id: symptom.clone(),
                total_weight: total,
                explained_weight: explained,
                ratio,
                label,
            },
        );
    }
    Ok(results)
}

/// Symptoms the accepted diagnoses leave insufficiently explained.
pub fn uncovered(results: &BTreeMap<SymptomId, CoverageResult>) -> BTreeSet<SymptomId> {
    results
        .iter()
        .filter(|(_, result)| result.label == CoverageLabel::Insufficient)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Criterion clusters of the active candidates, for network queries.
pub fn clusters(diagnoses: &[DiagnosisCandidate]) -> Vec<DiagnosisCluster> {
    diagnoses
        .iter()
        .filter(|d| d.is_active())
        .map(|d| DiagnosisCluster {
            diagnosis: d.id,
            symptoms: d.criteria.iter().map(|c| c.symptom_id.clone()).collect(),
            accepted: d.is_accepted(),
        })
        .collect()
}
