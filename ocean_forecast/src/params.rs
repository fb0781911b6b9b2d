//! Generation parameters and horizon resolution

use crate::error::{ForecastError, Result};
use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days used when a horizon is expressed in months or cannot be read
pub const DEFAULT_HORIZON_DAYS: usize = 30;

/// Longest series (history plus forecast) a run may request, one hundred years
pub const MAX_SERIES_DAYS: usize = 36_500;

/// How a horizon descriptor was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonKind {
    /// `"<n>d"`, an explicit day count
    Days(usize),
    /// Anything mentioning "month"
    Month,
    /// Unrecognised descriptor
    Fallback,
}

impl HorizonKind {
    pub fn days(self) -> usize {
        match self {
            HorizonKind::Days(days) => days,
            HorizonKind::Month | HorizonKind::Fallback => DEFAULT_HORIZON_DAYS,
        }
    }
}

/// Forward-looking duration descriptor, e.g. `"7d"` or `"3 months"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horizon(String);

impl Horizon {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the descriptor. Never fails.
    ///
    /// A trailing `d` takes the leading integer as the day count. Otherwise
    /// a descriptor mentioning "month", and anything else, resolves to
    /// [`DEFAULT_HORIZON_DAYS`]. A `d` suffix without a readable leading
    /// integer (`"soon-ish d"`, `"-3d"`) also falls back.
    pub fn kind(&self) -> HorizonKind {
        let descriptor = self.0.as_str();

        if descriptor.ends_with('d') {
            return match leading_integer(descriptor) {
                Some(days) => HorizonKind::Days(days),
                None if descriptor.contains("month") => HorizonKind::Month,
                None => HorizonKind::Fallback,
            };
        }

        if descriptor.contains("month") {
            HorizonKind::Month
        } else {
            HorizonKind::Fallback
        }
    }

    /// Number of forecast days the descriptor resolves to
    pub fn days(&self) -> usize {
        self.kind().days()
    }
}

impl From<&str> for Horizon {
    fn from(descriptor: &str) -> Self {
        Self::new(descriptor)
    }
}

impl From<String> for Horizon {
    fn from(descriptor: String) -> Self {
        Self(descriptor)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unsigned integer at the start of `s`, after leading whitespace and an
/// optional `+`
fn leading_integer(s: &str) -> Option<usize> {
    let trimmed = s.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..end].parse().ok()
}

/// Input configuration for a forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawForecastParams")]
pub struct ForecastParams {
    training_days: usize,
    horizon: Horizon,
    variables: Vec<Variable>,
}

/// Unvalidated shape of [`ForecastParams`] as it appears in JSON
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawForecastParams {
    training_days: usize,
    horizon: Horizon,
    variables: Vec<Variable>,
}

impl TryFrom<RawForecastParams> for ForecastParams {
    type Error = ForecastError;

    fn try_from(raw: RawForecastParams) -> Result<Self> {
        ForecastParams::new(raw.training_days, raw.horizon, raw.variables)
    }
}

impl ForecastParams {
    /// Create validated parameters.
    ///
    /// `training_days` must be positive, at least one variable must be
    /// requested, and history plus forecast may not exceed
    /// [`MAX_SERIES_DAYS`]. Duplicate variables are kept, in order.
    pub fn new(
        training_days: usize,
        horizon: impl Into<Horizon>,
        variables: Vec<Variable>,
    ) -> Result<Self> {
        if training_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Training days must be positive".to_string(),
            ));
        }

        if variables.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "At least one variable must be requested".to_string(),
            ));
        }

        let horizon = horizon.into();
        let series_days = training_days.checked_add(horizon.days());
        if !matches!(series_days, Some(days) if days <= MAX_SERIES_DAYS) {
            return Err(ForecastError::InvalidParameter(format!(
                "Series of {} training days plus horizon '{}' exceeds {} days",
                training_days, horizon, MAX_SERIES_DAYS
            )));
        }

        Ok(Self {
            training_days,
            horizon,
            variables,
        })
    }

    /// Parse parameters from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Length of the historical window
    pub fn training_days(&self) -> usize {
        self.training_days
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    /// Resolved forecast length in days
    pub fn horizon_days(&self) -> usize {
        self.horizon.days()
    }

    /// Requested variables, in request order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("14d"), Some(14));
        assert_eq!(leading_integer("  7 d"), Some(7));
        assert_eq!(leading_integer("d"), None);
        assert_eq!(leading_integer("-3d"), None);
        assert_eq!(leading_integer("+7d"), Some(7));
        assert_eq!(leading_integer("+d"), None);
        assert_eq!(leading_integer("99999999999999999999999d"), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Horizon::from("7d").kind(), HorizonKind::Days(7));
        assert_eq!(Horizon::from("3 months").kind(), HorizonKind::Month);
        assert_eq!(Horizon::from("month-end d").kind(), HorizonKind::Month);
        assert_eq!(Horizon::from("weekly").kind(), HorizonKind::Fallback);
        assert_eq!(Horizon::from("7D").kind(), HorizonKind::Fallback);
    }
}
