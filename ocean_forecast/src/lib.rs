//! # Ocean Forecast
//!
//! Deterministic synthetic time series for oceanographic variables, meant
//! for dashboards and demos rather than real prediction.
//!
//! ## Features
//!
//! - Fixed physical ranges for nine sensor variables
//! - Historical series built from annual and monthly cycles plus noise
//! - Forecast segment with seasonal term, drift and confidence bands
//! - Per-variable and cross-variable narrative text
//! - Reproducible output: the seed is derived from the parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use ocean_forecast::{generate_forecast_data, ForecastParams, Variable};
//!
//! let params = ForecastParams::new(30, "7d", vec![Variable::Temperature])?;
//! let forecast = generate_forecast_data(&params)?;
//!
//! let temperature = &forecast.results[0];
//! assert_eq!(temperature.data.len(), 37);
//! assert_eq!(temperature.data[0].day, "D-30");
//! assert_eq!(temperature.stats.confidence, 44);
//! # Ok::<(), ocean_forecast::ForecastError>(())
//! ```

pub mod data;
pub mod error;
pub mod generator;
pub mod narrative;
pub mod orchestrator;
pub mod params;
pub mod variable;

// Re-export commonly used types
pub use crate::data::{ForecastData, ForecastDataPoint, ForecastResult, ForecastStats, PointKind};
pub use crate::error::{ForecastError, Result};
pub use crate::generator::generate_variable_forecast;
pub use crate::orchestrator::generate_forecast_data;
pub use crate::params::{ForecastParams, Horizon};
pub use crate::variable::{range_of, Variable};
