use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::symptom::SymptomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisStatus {
    Proposed,
    Accepted,
    /// Withdrawn candidates stay on the record for audit; they no longer
    /// claim coverage weight.
    Withdrawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// One criterion symptom claimed by a diagnosis, with its diagnostic weight.
/// Weights across a diagnosis need not sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub symptom_id: SymptomId,
    pub weight: f64,
}

/// A diagnosis proposed during the workflow, with its criterion symptoms and
/// the clinician's confidence and evidence assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisCandidate {
    pub id: Uuid,
    pub label: String,
    pub code_icd11: Option<String>,
    pub code_dsm5: Option<String>,
    pub criteria: Vec<Criterion>,
    /// Clinician confidence, 0-100.
    pub confidence_pct: u8,
    pub severity: Severity,
    pub evidence_for: String,
    pub evidence_against: String,
    pub status: DiagnosisStatus,
    pub date_onset: Option<jiff::civil::Date>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl DiagnosisCandidate {
    /// Weight this candidate assigns to a symptom, if listed as a criterion.
    pub fn criterion_weight(&self, symptom: &SymptomId) -> Option<f64> {
        self.criteria
            .iter()
            .find(|c| &c.symptom_id == symptom)
            .map(|c| c.weight)
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.status, DiagnosisStatus::Withdrawn)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.status, DiagnosisStatus::Accepted)
    }
}
