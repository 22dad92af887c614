//! diaxis-spectrum
//!
//! Dimensional aggregation of DSM-5 Level-1 cross-cutting screening data
//! into the six HiTOP spectra. Pure data and arithmetic: the domain
//! catalog, screening validation, and profile computation under a
//! configurable aggregation policy.

pub mod domains;
pub mod error;
pub mod profile;
pub mod screening;
