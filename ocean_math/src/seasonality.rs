//! Seasonal building blocks
//!
//! Contains the periodic shapes used to synthesise and extrapolate series:
//! - Weighted sinusoidal components
//! - Exponentially damped sinusoids
//! - Seasonal-naive lookback

use crate::{MathError, Result};
use std::f64::consts::PI;

/// Days in the annual cycle
pub const ANNUAL_PERIOD: f64 = 365.0;

/// Days in the monthly cycle
pub const MONTHLY_PERIOD: f64 = 30.0;

/// A single sinusoid with a period (in samples) and an amplitude weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalComponent {
    period: f64,
    weight: f64,
}

impl SeasonalComponent {
    /// Create a component; the period must be positive and finite
    pub fn new(period: f64, weight: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(MathError::InvalidInput(format!(
                "Seasonal period must be positive, got {}",
                period
            )));
        }

        Ok(Self { period, weight })
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Weighted value of the component at position `t`
    pub fn value_at(&self, t: f64) -> f64 {
        self.weight * sinusoid(t, self.period)
    }
}

/// `sin(2πt / period)`
pub fn sinusoid(t: f64, period: f64) -> f64 {
    (2.0 * PI * t / period).sin()
}

/// Sinusoid whose amplitude decays as `exp(-step / decay)`
pub fn damped_sinusoid(t: f64, period: f64, step: f64, decay: f64) -> f64 {
    sinusoid(t, period) * (-step / decay).exp()
}

/// Sum of several components at position `t`
pub fn composite(t: f64, components: &[SeasonalComponent]) -> f64 {
    components.iter().map(|c| c.value_at(t)).sum()
}

/// Value one season before `position`, if it falls inside `history`
pub fn seasonal_naive(history: &[f64], position: usize, period: usize) -> Option<f64> {
    position
        .checked_sub(period)
        .and_then(|index| history.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_component_validation() {
        assert!(SeasonalComponent::new(30.0, 0.25).is_ok());
        assert!(SeasonalComponent::new(0.0, 0.25).is_err());
        assert!(SeasonalComponent::new(-3.0, 0.25).is_err());
        assert!(SeasonalComponent::new(f64::INFINITY, 0.25).is_err());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(7.5, 1.0)]
    #[case(15.0, 0.0)]
    #[case(22.5, -1.0)]
    fn test_sinusoid_quarter_points(#[case] t: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(sinusoid(t, MONTHLY_PERIOD), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_damping() {
        let undamped = damped_sinusoid(7.5, 30.0, 0.0, 30.0);
        let damped = damped_sinusoid(7.5, 30.0, 30.0, 30.0);
        assert_abs_diff_eq!(undamped, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(damped, (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_composite() {
        let components = [
            SeasonalComponent::new(ANNUAL_PERIOD, 0.25).unwrap(),
            SeasonalComponent::new(MONTHLY_PERIOD, 0.25).unwrap(),
        ];
        assert_abs_diff_eq!(composite(0.0, &components), 0.0, epsilon = 1e-12);
        let expected = 0.25 * sinusoid(7.5, ANNUAL_PERIOD) + 0.25;
        assert_abs_diff_eq!(composite(7.5, &components), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_seasonal_naive_lookback() {
        let history: Vec<f64> = (0..40).map(f64::from).collect();

        assert_eq!(seasonal_naive(&history, 35, 30), Some(5.0));
        assert_eq!(seasonal_naive(&history, 30, 30), Some(0.0));
        // Before the first season
        assert_eq!(seasonal_naive(&history, 29, 30), None);
        // Past the end of the recorded window
        assert_eq!(seasonal_naive(&history, 75, 30), None);
    }
}
