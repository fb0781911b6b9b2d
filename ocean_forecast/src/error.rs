//! Error types for the ocean_forecast crate

use ocean_math::MathError;
use thiserror::Error;

/// Custom error types for the ocean_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Variable identifier outside the supported set
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Error from series math
    #[error("Math error: {0}")]
    MathError(#[from] MathError),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
