use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::gate::Gate;
use super::symptom::SymptomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlanStatus {
    Open,
    Done,
}

/// A planned follow-up investigation for a symptom the current diagnoses do
/// not explain. Authored by the clinician; the functioning gate requires one
/// per insufficiently covered symptom.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvestigationPlanEntry {
    pub symptom_id: SymptomId,
    pub investigation: String,
    pub specialty: String,
    pub priority: Priority,
    pub status: PlanStatus,
    pub date_added: Option<jiff::civil::Date>,
}

/// Outcome of a differential-exclusion gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExclusionOutcome {
    /// The differential was ruled out.
    RuledOut,
    /// The differential explains the presentation; the workflow records it
    /// and the caller routes the case accordingly.
    ExplainsPresentation,
    /// Not yet resolved.
    Unresolved,
}

/// The recorded result of one exclusion gate's evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExclusionFinding {
    pub gate: Gate,
    pub outcome: ExclusionOutcome,
    pub note: String,
    pub date_recorded: Option<jiff::civil::Date>,
}
