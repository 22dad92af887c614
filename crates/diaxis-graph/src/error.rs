use diaxis_core::models::symptom::SymptomId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge '{reference}' references unknown symptom '{symptom}'")]
    UnknownSymptom {
        symptom: SymptomId,
        reference: String,
    },

    #[error("symptom '{0}' declared twice")]
    DuplicateSymptom(SymptomId),

    #[error("self-loop on symptom '{0}'")]
    SelfLoop(SymptomId),

    #[error("edge {a}-{b} has weight {weight}, expected (0, 1]")]
    InvalidWeight {
        a: SymptomId,
        b: SymptomId,
        weight: f64,
    },

    #[error("duplicate edge between '{a}' and '{b}'")]
    DuplicateEdge { a: SymptomId, b: SymptomId },
}
