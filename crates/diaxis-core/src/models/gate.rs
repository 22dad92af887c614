use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One sequential step of the categorical differential-diagnosis workflow,
/// in fixed clinical order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gate {
    /// Rule out malingered or factitious presentation.
    PresentationValidity,
    /// Rule out substance-induced etiology.
    SubstanceEtiology,
    /// Rule out a general medical condition as the full explanation.
    MedicalEtiology,
    /// DSM-5 Level-1 cross-cutting screening.
    CrossCuttingScreen,
    /// Disorder-specific criteria matching.
    DisorderSpecific,
    /// Functioning and psychosocial impact.
    FunctionalImpact,
}

impl Gate {
    pub const ALL: [Gate; 6] = [
        Gate::PresentationValidity,
        Gate::SubstanceEtiology,
        Gate::MedicalEtiology,
        Gate::CrossCuttingScreen,
        Gate::DisorderSpecific,
        Gate::FunctionalImpact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Gate> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Translation key for the bilingual label layer.
    pub fn label_key(self) -> &'static str {
        match self {
            Gate::PresentationValidity => "gate1_presentation_validity",
            Gate::SubstanceEtiology => "gate2_substance_etiology",
            Gate::MedicalEtiology => "gate3_medical_etiology",
            Gate::CrossCuttingScreen => "gate4_crosscutting_screen",
            Gate::DisorderSpecific => "gate5_disorder_specific",
            Gate::FunctionalImpact => "gate6_functional_impact",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GateStatus {
    NotStarted,
    InProgress,
    Satisfied,
    /// Previously satisfied, invalidated by an upstream reopen. Must be
    /// re-confirmed before the workflow can pass it again.
    Reopened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GatePosition {
    At(Gate),
    Completed,
}

/// Live position and per-gate status of one reasoning session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GateBoard {
    pub statuses: BTreeMap<Gate, GateStatus>,
    pub position: GatePosition,
    /// Index of the furthest gate ever reached. Never decreases.
    pub highest_reached: usize,
    /// Bumped on every transition; conclusions derived under an older
    /// revision are stale.
    pub revision: u64,
}

impl GateBoard {
    /// A fresh board: first gate in progress, the rest not started.
    pub fn new() -> Self {
        let mut statuses = BTreeMap::new();
        for gate in Gate::ALL {
            statuses.insert(gate, GateStatus::NotStarted);
        }
        statuses.insert(Gate::PresentationValidity, GateStatus::InProgress);
        Self {
            statuses,
            position: GatePosition::At(Gate::PresentationValidity),
            highest_reached: 0,
            revision: 0,
        }
    }

    pub fn status(&self, gate: Gate) -> GateStatus {
        self.statuses
            .get(&gate)
            .copied()
            .unwrap_or(GateStatus::NotStarted)
    }

    pub fn set_status(&mut self, gate: Gate, status: GateStatus) {
        self.statuses.insert(gate, status);
    }

    pub fn all_satisfied(&self) -> bool {
        Gate::ALL
            .iter()
            .all(|gate| self.status(*gate) == GateStatus::Satisfied)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.position, GatePosition::Completed)
    }
}

impl Default for GateBoard {
    fn default() -> Self {
        Self::new()
    }
}
