//! diaxis-graph
//!
//! Literature-seeded symptom association network: load-time validation,
//! bridge-symptom detection, and betweenness centrality. The loaded graph
//! is immutable by construction and shared across reasoning sessions.

pub mod bridge;
pub mod centrality;
pub mod error;
pub mod graph;
