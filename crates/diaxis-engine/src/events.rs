use serde::Serialize;
use tracing::info;

use diaxis_core::models::gate::{Gate, GatePosition};

use crate::gatekeeper::InvestigationHint;

/// A structured audit event for a gate transition.
///
/// Emitted via `tracing`; the host application decides where the log
/// stream goes and serializes the event alongside the patient record.
#[derive(Debug, Clone, Serialize)]
pub struct GateTransition {
    pub action: String,
    pub gate: String,
    pub revision: u64,
    pub details: serde_json::Value,
}

impl GateTransition {
    pub fn advanced(
        gate: Gate,
        position: GatePosition,
        revision: u64,
        hint: Option<&InvestigationHint>,
    ) -> Self {
        Self {
            action: "advance".to_string(),
            gate: gate.to_string(),
            revision,
            details: serde_json::json!({
                "position": position,
                "uncovered": hint.map(|h| h.uncovered.len()).unwrap_or(0),
                "bridges": hint.map(|h| h.bridges.len()).unwrap_or(0),
            }),
        }
    }

    pub fn reopened(gate: Gate, demoted: &[Gate], revision: u64) -> Self {
        Self {
            action: "reopen".to_string(),
            gate: gate.to_string(),
            revision,
            details: serde_json::json!({
                "demoted": demoted.iter().map(|g| g.label_key()).collect::<Vec<_>>(),
            }),
        }
    }

    /// Emit this transition via tracing.
    pub fn emit(&self) {
        info!(
            transition.action = %self.action,
            transition.gate = %self.gate,
            transition.revision = self.revision,
            "gate transition"
        );
    }
}
