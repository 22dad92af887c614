use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigurationError;

/// How a spectrum score is aggregated from its member domain scores.
///
/// The governing scoring documents disagree on the formula, so both are
/// available by name. `TakeMaximum` is the default: monotone, bounded, and
/// robust to missing sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AggregationPolicy {
    #[default]
    TakeMaximum,
    SumNormalize,
}

/// Ratio bands for coverage classification.
/// Complete at or above `high`, Insufficient below `low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoverageThresholds {
    pub high: f64,
    pub low: f64,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self { high: 0.8, low: 0.3 }
    }
}

/// Tunable parameters of the reasoning core. Validated once at session
/// construction, never at query time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReasoningConfig {
    pub coverage: CoverageThresholds,
    /// Minimum confidence (0-100) an accepted diagnosis needs to satisfy
    /// the disorder-specific gate.
    pub confidence_floor: u8,
    pub aggregation: AggregationPolicy,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            coverage: CoverageThresholds::default(),
            confidence_floor: 50,
            aggregation: AggregationPolicy::default(),
        }
    }
}

impl ReasoningConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for value in [self.coverage.low, self.coverage.high] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::ThresholdRange { value });
            }
        }
        if self.coverage.low >= self.coverage.high {
            return Err(ConfigurationError::ThresholdOrder {
                low: self.coverage.low,
                high: self.coverage.high,
            });
        }
        if self.confidence_floor > 100 {
            return Err(ConfigurationError::ConfidenceFloor(self.confidence_floor));
        }
        Ok(())
    }
}
