use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six HiTOP spectra (Kotov et al., 2017).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Spectrum {
    Internalizing,
    ThoughtDisorder,
    DisinhibitedExternalizing,
    AntagonisticExternalizing,
    Detachment,
    Somatoform,
}

impl Spectrum {
    pub const ALL: [Spectrum; 6] = [
        Spectrum::Internalizing,
        Spectrum::ThoughtDisorder,
        Spectrum::DisinhibitedExternalizing,
        Spectrum::AntagonisticExternalizing,
        Spectrum::Detachment,
        Spectrum::Somatoform,
    ];
}

/// Normalized dimensional summary of the latest screening data. Recomputed
/// from scratch, never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpectrumProfile {
    /// All six spectra, each in [0, 1].
    pub scores: BTreeMap<Spectrum, f64>,
    /// Arithmetic mean of the six spectrum scores.
    pub general_factor: f64,
}

impl SpectrumProfile {
    pub fn score(&self, spectrum: Spectrum) -> f64 {
        self.scores.get(&spectrum).copied().unwrap_or(0.0)
    }
}
