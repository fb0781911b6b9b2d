//! # Ocean Math
//!
//! Numeric building blocks for synthetic oceanographic series.
//! This crate provides a reproducible random source and the small pieces of
//! arithmetic the forecast generator is assembled from.

use thiserror::Error;

pub mod rng;
pub mod scaling;
pub mod seasonality;
pub mod stats;

pub use rng::Mulberry32;

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
