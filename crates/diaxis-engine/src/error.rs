use diaxis_core::error::ConfigurationError;
use diaxis_core::models::gate::Gate;
use diaxis_core::models::symptom::SymptomId;
use thiserror::Error;
use uuid::Uuid;

use crate::gatekeeper::Precondition;

/// A criterion reference to a symptom outside the confirmed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleReference {
    pub diagnosis: Uuid,
    pub symptom: SymptomId,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Active diagnoses reference symptoms that are not confirmed. The
    /// full list is reported and nothing is computed.
    #[error("diagnosis criteria reference {} unconfirmed symptom(s)", .0.len())]
    DataIntegrity(Vec<StaleReference>),

    #[error("gate '{gate}' cannot advance: missing {precondition}")]
    InvalidTransition {
        gate: Gate,
        precondition: Precondition,
    },

    #[error("cannot reopen gate '{0}': only a satisfied gate may reopen")]
    InvalidReopen(Gate),

    #[error("workflow is already completed")]
    AlreadyCompleted,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
