use thiserror::Error;

use crate::models::Dimension;

/// Errors raised by the scoring engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Invalid base weight {value} for dimension {dimension}")]
    InvalidWeight { dimension: Dimension, value: f64 },

    #[error("Base weights sum to {total}, which cannot be normalised")]
    UnboundedWeights { total: f64 },

    #[error("Unknown zodiac sign: {0}")]
    UnknownZodiacSign(String),
}
