use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("coverage threshold {value} is outside [0, 1]")]
    ThresholdRange { value: f64 },

    #[error("low coverage threshold {low} must be below high threshold {high}")]
    ThresholdOrder { low: f64, high: f64 },

    #[error("confidence floor {0} exceeds 100")]
    ConfidenceFloor(u8),
}
