use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable identifier of a symptom in the association network.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct SymptomId(pub String);

impl SymptomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Axis or instrument a symptom observation originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Axis {
    CrossCuttingScreen,
    ClinicalInterview,
    MedicalSynopsis,
    CollateralReport,
}

/// A symptom observation on the patient record. Identity is immutable; the
/// `confirmed` flag is patient-scoped and set only by submitted clinical
/// input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: SymptomId,
    /// Translation key for the bilingual label layer.
    pub label_key: String,
    pub axis: Axis,
    pub confirmed: bool,
}

/// The ids of the confirmed symptoms in a record snapshot.
pub fn confirmed_ids(symptoms: &[Symptom]) -> BTreeSet<SymptomId> {
    symptoms
        .iter()
        .filter(|s| s.confirmed)
        .map(|s| s.id.clone())
        .collect()
}

/// A literature-derived association between two symptoms. Reference data,
/// not patient state; loaded once per process.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomEdge {
    pub a: SymptomId,
    pub b: SymptomId,
    /// Co-occurrence / causal strength in (0, 1].
    pub weight: f64,
    /// Literature reference id.
    pub reference: String,
}
