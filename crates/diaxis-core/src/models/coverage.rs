use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::symptom::SymptomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CoverageLabel {
    Complete,
    Partial,
    Insufficient,
}

/// How well one confirmed symptom is explained by the current diagnoses.
/// Derived on every query; never stored apart from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoverageResult {
    pub symptom_id: SymptomId,
    /// Sum of criterion weights over all active candidates.
    pub total_weight: f64,
    /// Sum restricted to accepted candidates.
    pub explained_weight: f64,
    /// explained / total, 0 when no active candidate lists the symptom.
    pub ratio: f64,
    pub label: CoverageLabel,
}
