use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::domains::{CrossCuttingDomain, LIKERT_MAX, domain_def, domain_defs};

/// One Likert-scored answer from the Level-1 screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResponse {
    pub domain: CrossCuttingDomain,
    pub item: usize,
    /// 0 (not at all) to 4 (severe).
    pub value: u8,
}

/// A domain whose screening result breached its Level-2 threshold.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriggeredDomain {
    pub domain: CrossCuttingDomain,
    pub max_score: u8,
    pub threshold: u8,
    /// The Level-2 follow-up instrument to administer.
    pub level2_instrument: String,
    /// Threshold-1 domains (suicidality, psychosis, substance) cue an
    /// immediate safety review.
    pub safety_critical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub domain: CrossCuttingDomain,
    pub item: usize,
    pub value: u8,
    pub message: String,
}

/// Validate screening responses against the domain catalog.
pub fn validate_responses(responses: &[ScreeningResponse]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for entry in responses {
        let def = domain_def(entry.domain);
        if entry.item >= def.item_count {
            errors.push(ValidationError {
                domain: entry.domain,
                item: entry.item,
                value: entry.value,
                message: format!(
                    "{}: item {} is beyond the domain's {} item(s)",
                    def.label_key, entry.item, def.item_count,
                ),
            });
        }
        if entry.value > LIKERT_MAX {
            errors.push(ValidationError {
                domain: entry.domain,
                item: entry.item,
                value: entry.value,
                message: format!(
                    "{}: score {} is outside the 0-{} Likert scale",
                    def.label_key, entry.value, LIKERT_MAX,
                ),
            });
        }
    }
    errors
}

/// Per-domain screening score normalized to [0, 1]: max item value over 4.
/// Every domain is present in the result; unanswered domains score 0.
pub fn domain_scores(responses: &[ScreeningResponse]) -> BTreeMap<CrossCuttingDomain, f64> {
    let mut raw: BTreeMap<CrossCuttingDomain, u8> = BTreeMap::new();
    for entry in responses {
        let max = raw.entry(entry.domain).or_insert(0);
        *max = (*max).max(entry.value);
    }

    CrossCuttingDomain::ALL
        .iter()
        .map(|&domain| {
            let max = raw.get(&domain).copied().unwrap_or(0);
            (domain, f64::from(max) / f64::from(LIKERT_MAX))
        })
        .collect()
}

/// Domains whose max raw item score meets the Level-2 threshold, with the
/// follow-up instrument to administer.
pub fn triggered_domains(responses: &[ScreeningResponse]) -> Vec<TriggeredDomain> {
    let mut triggered = Vec::new();
    for def in domain_defs() {
        let max_score = responses
            .iter()
            .filter(|r| r.domain == def.domain)
            .map(|r| r.value)
            .max()
            .unwrap_or(0);
        if max_score >= def.threshold {
            triggered.push(TriggeredDomain {
                domain: def.domain,
                max_score,
                threshold: def.threshold,
                level2_instrument: def.level2_instrument.clone(),
                safety_critical: def.threshold == 1,
            });
        }
    }
    triggered
}
