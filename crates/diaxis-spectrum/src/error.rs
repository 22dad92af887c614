use thiserror::Error;

use crate::screening::ValidationError;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
