//! diaxis-core
//!
//! Pure domain types and configuration for the diagnostic-reasoning core.
//! No I/O and no patient-state ownership; this is the shared vocabulary of
//! the Diaxis system.

pub mod config;
pub mod error;
pub mod models;
