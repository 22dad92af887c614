use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use diaxis_core::config::ReasoningConfig;
use diaxis_core::models::coverage::CoverageResult;
use diaxis_core::models::diagnosis::DiagnosisCandidate;
use diaxis_core::models::gate::{Gate, GateBoard, GatePosition, GateStatus};
use diaxis_core::models::plan::{ExclusionFinding, ExclusionOutcome, InvestigationPlanEntry};
use diaxis_core::models::symptom::SymptomId;
use diaxis_graph::graph::SymptomGraph;
use diaxis_spectrum::screening::ScreeningResponse;

use crate::coverage;
use crate::error::EngineError;
use crate::events::GateTransition;

/// Snapshot of the patient record one gate decision is evaluated against.
/// Borrowed for a single call; the engine never stores it.
pub struct GateContext<'a> {
    pub confirmed: &'a BTreeSet<SymptomId>,
    pub diagnoses: &'a [DiagnosisCandidate],
    pub findings: &'a [ExclusionFinding],
    pub screening: &'a [ScreeningResponse],
    pub plans: &'a [InvestigationPlanEntry],
    pub graph: &'a SymptomGraph,
}

/// Declared precondition a gate must satisfy before it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Precondition {
    /// A resolved exclusion finding for this gate.
    ExclusionResolved,
    /// At least one Level-1 screening response on record.
    ScreeningRecorded,
    /// An accepted diagnosis at or above the confidence floor.
    AcceptedDiagnosis,
    /// Every insufficiently covered symptom has an investigation plan.
    CoveragePlanned,
}

impl Precondition {
    /// The declared precondition of each gate.
    pub fn for_gate(gate: Gate) -> Precondition {
        match gate {
            Gate::PresentationValidity | Gate::SubstanceEtiology | Gate::MedicalEtiology => {
                Precondition::ExclusionResolved
            }
            Gate::CrossCuttingScreen => Precondition::ScreeningRecorded,
            Gate::DisorderSpecific => Precondition::AcceptedDiagnosis,
            Gate::FunctionalImpact => Precondition::CoveragePlanned,
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Precondition::ExclusionResolved => "a resolved exclusion finding",
            Precondition::ScreeningRecorded => "a recorded cross-cutting screening",
            Precondition::AcceptedDiagnosis => {
                "an accepted diagnosis at or above the confidence floor"
            }
            Precondition::CoveragePlanned => {
                "an investigation plan for every insufficiently covered symptom"
            }
        };
        f.write_str(text)
    }
}

/// Advisory pointer at what to investigate next, derived from the symptom
/// network when coverage is incomplete. Never blocks advancement.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvestigationHint {
    pub uncovered: BTreeSet<SymptomId>,
    pub bridges: BTreeSet<SymptomId>,
    pub centrality: BTreeMap<SymptomId, f64>,
}

/// Result of a successful advance.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Advance {
    pub gate: Gate,
    pub position: GatePosition,
    pub revision: u64,
    pub hint: Option<InvestigationHint>,
}

/// One patient's pass through the sequential diagnostic workflow.
///
/// The session holds the gate board and validated configuration; all
/// clinical facts arrive through the `GateContext` snapshot.
pub struct GateSession {
    board: GateBoard,
    config: ReasoningConfig,
}

impl GateSession {
    /// Start at the presentation-validity gate. Configuration is validated
    /// here, not at query time.
    pub fn new(config: ReasoningConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            board: GateBoard::new(),
            config,
        })
    }

    pub fn board(&self) -> &GateBoard {
        &self.board
    }

    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Coverage of the snapshot under this session's thresholds.
    pub fn coverage(
        &self,
        ctx: &GateContext<'_>,
    ) -> Result<BTreeMap<SymptomId, CoverageResult>, EngineError> {
        coverage::analyze(ctx.confirmed, ctx.diagnoses, self.config.coverage)
    }

    fn precondition_met(&self, gate: Gate, ctx: &GateContext<'_>) -> Result<bool, EngineError> {
        match Precondition::for_gate(gate) {
            Precondition::ExclusionResolved => Ok(ctx
                .findings
                .iter()
                .any(|f| f.gate == gate && f.outcome != ExclusionOutcome::Unresolved)),
            Precondition::ScreeningRecorded => Ok(!ctx.screening.is_empty()),
            Precondition::AcceptedDiagnosis => Ok(ctx.diagnoses.iter().any(|d| {
                d.is_accepted() && d.confidence_pct >= self.config.confidence_floor
            })),
            Precondition::CoveragePlanned => {
                let results = self.coverage(ctx)?;
                let planned: BTreeSet<&SymptomId> =
                    ctx.plans.iter().map(|p| &p.symptom_id).collect();
                Ok(coverage::uncovered(&results)
                    .iter()
                    .all(|symptom| planned.contains(symptom)))
            }
        }
    }

    /// Advisory network hint; `None` when every confirmed symptom is
    /// sufficiently covered.
    fn hint(&self, ctx: &GateContext<'_>) -> Result<Option<InvestigationHint>, EngineError> {
        let results = self.coverage(ctx)?;
        let uncovered = coverage::uncovered(&results);
        if uncovered.is_empty() {
            return Ok(None);
        }

        let clusters = coverage::clusters(ctx.diagnoses);
        let bridges = ctx.graph.find_bridge_symptoms(ctx.confirmed, &clusters);
        let centrality = ctx.graph.centrality(ctx.confirmed);
        Ok(Some(InvestigationHint {
            uncovered,
            bridges,
            centrality,
        }))
    }

    /// Advance the current gate to Satisfied and move to the next.
    ///
    /// Exactly one gate per call; an unmet precondition rejects the
    /// transition and leaves the board untouched. Completed is reached only
    /// when all six gates are satisfied simultaneously.
    pub fn advance(&mut self, ctx: &GateContext<'_>) -> Result<Advance, EngineError> {
        let GatePosition::At(gate) = self.board.position else {
            return Err(EngineError::AlreadyCompleted);
        };

        if !self.precondition_met(gate, ctx)? {
            return Err(EngineError::InvalidTransition {
                gate,
                precondition: Precondition::for_gate(gate),
            });
        }
        let hint = self.hint(ctx)?;

        self.board.set_status(gate, GateStatus::Satisfied);
        let position = match gate.next() {
            Some(next) if !self.board.all_satisfied() => {
                if self.board.status(next) == GateStatus::NotStarted {
                    self.board.set_status(next, GateStatus::InProgress);
                }
                self.board.highest_reached = self.board.highest_reached.max(next.index());
                GatePosition::At(next)
            }
            _ => GatePosition::Completed,
        };
        self.board.position = position;
        self.board.revision += 1;

        GateTransition::advanced(gate, position, self.board.revision, hint.as_ref()).emit();
        Ok(Advance {
            gate,
            position,
            revision: self.board.revision,
            hint,
        })
    }

    /// Return a satisfied gate to InProgress. Every later satisfied gate is
    /// demoted to Reopened and must be re-confirmed; Completed is left.
    pub fn reopen(&mut self, gate: Gate) -> Result<u64, EngineError> {
        if self.board.status(gate) != GateStatus::Satisfied {
            return Err(EngineError::InvalidReopen(gate));
        }

        self.board.set_status(gate, GateStatus::InProgress);
        let mut demoted = Vec::new();
        for later in Gate::ALL.iter().copied().filter(|g| g.index() > gate.index()) {
            if self.board.status(later) == GateStatus::Satisfied {
                self.board.set_status(later, GateStatus::Reopened);
                demoted.push(later);
            }
        }
        self.board.position = GatePosition::At(gate);
        self.board.revision += 1;

        GateTransition::reopened(gate, &demoted, self.board.revision).emit();
        Ok(self.board.revision)
    }
}
