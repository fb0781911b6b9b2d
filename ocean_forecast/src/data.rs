//! Output records handed to the presentation layer

use crate::error::Result;
use crate::params::ForecastParams;
use crate::variable::Variable;
use ocean_math::scaling::Bounds;
use serde::{Deserialize, Serialize};

/// Which segment a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Historical,
    Forecast,
}

/// One sample of a generated series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDataPoint {
    /// `D-<k>` for history, `D+<k>` for forecast
    pub day: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: PointKind,
    /// `[lower, upper]`, forecast points only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<[f64; 2]>,
}

impl ForecastDataPoint {
    /// Historical point `days_before` days before the forecast boundary
    pub fn historical(days_before: usize, value: f64) -> Self {
        Self {
            day: format!("D-{}", days_before),
            value,
            kind: PointKind::Historical,
            confidence: None,
        }
    }

    /// Forecast point `days_ahead` days past the boundary
    pub fn forecast(days_ahead: usize, value: f64, confidence: [f64; 2]) -> Self {
        Self {
            day: format!("D+{}", days_ahead),
            value,
            kind: PointKind::Forecast,
            confidence: Some(confidence),
        }
    }

    pub fn is_forecast(&self) -> bool {
        self.kind == PointKind::Forecast
    }
}

/// Summary statistics over the forecast segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastStats {
    pub min: f64,
    pub max: f64,
    /// Average daily change across the forecast
    pub trend: f64,
    /// Integer percent; exceeds 100 for windows longer than 100 days
    pub confidence: u32,
    pub narrative: String,
}

/// Generated series for a single variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub variable: Variable,
    /// Historical points followed by forecast points
    pub data: Vec<ForecastDataPoint>,
    pub stats: ForecastStats,
    pub range: Bounds,
}

impl ForecastResult {
    pub fn historical(&self) -> impl Iterator<Item = &ForecastDataPoint> {
        self.data.iter().filter(|p| !p.is_forecast())
    }

    pub fn forecast(&self) -> impl Iterator<Item = &ForecastDataPoint> {
        self.data.iter().filter(|p| p.is_forecast())
    }
}

/// Complete output of a multi-variable run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    pub params: ForecastParams,
    /// One result per requested variable, in request order
    pub results: Vec<ForecastResult>,
    pub narrative: String,
}

impl ForecastData {
    /// First result for `variable`, if it was requested
    pub fn result_for(&self, variable: Variable) -> Option<&ForecastResult> {
        self.results.iter().find(|r| r.variable == variable)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
