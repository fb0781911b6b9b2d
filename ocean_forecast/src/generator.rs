//! Single-variable series synthesis
//!
//! Produces a historical window and an extrapolated forecast for one
//! variable from a seed. The historical window is two sinusoids (annual and
//! monthly) plus a little noise, mapped into the variable's range. The
//! forecast walks forward from the last historical value, adding a seasonal
//! term, a fixed drift and per-step noise, with noise and band width
//! shrinking as the training window grows.
//!
//! The only source of randomness is a [`Mulberry32`] seeded from the caller,
//! so identical inputs always give identical output.

use crate::data::{ForecastDataPoint, ForecastResult, ForecastStats};
use crate::error::Result;
use crate::narrative::variable_narrative;
use crate::params::ForecastParams;
use crate::variable::Variable;
use ocean_math::scaling::Bounds;
use ocean_math::seasonality::{
    composite, damped_sinusoid, seasonal_naive, SeasonalComponent, ANNUAL_PERIOD, MONTHLY_PERIOD,
};
use ocean_math::{stats, Mulberry32};
use tracing::debug;

/// Weight of each historical sinusoid in normalised units
const HISTORY_WAVE_WEIGHT: f64 = 0.25;
/// Full width of historical noise in normalised units
const HISTORY_NOISE_WIDTH: f64 = 0.1;

/// Training windows up to this length use the seasonal-naive lookback
const SEASONAL_NAIVE_MAX_TRAINING: usize = 20;
/// Seasonal amplitude and drift are only enabled above this length
const SEASONAL_MIN_TRAINING: usize = 30;
/// Lookback distance for the seasonal-naive term
const LOOKBACK_DAYS: usize = 30;
/// Decay constant (in forecast steps) of the damped seasonal term
const SEASONAL_DECAY_STEPS: f64 = 30.0;

const SEASONAL_SCALE: f64 = 0.1;
const DRIFT_SCALE: f64 = 0.005;
const NOISE_SCALE: f64 = 0.1;
const BAND_SCALE: f64 = 0.075;
/// Training length at which noise and band width reach zero
const FULL_CERTAINTY_DAYS: f64 = 120.0;

/// Generate the full series, stats and narrative for one variable.
///
/// Only `training_days` and the horizon of `params` are used; its variable
/// list is ignored.
pub fn generate_variable_forecast(
    variable: Variable,
    params: &ForecastParams,
    seed: u64,
) -> Result<ForecastResult> {
    let range = variable.range();
    let training_days = params.training_days();
    let horizon_days = params.horizon_days();
    let mut rng = Mulberry32::new(seed);

    debug!(
        %variable,
        seed,
        training_days,
        horizon_days,
        horizon_kind = ?params.horizon().kind(),
        "generating variable forecast"
    );

    let history = historical_values(&range, training_days, &mut rng)?;
    let (projected, bands) =
        forecast_values(&range, &history, training_days, horizon_days, &mut rng);

    let last_value = history.last().copied().unwrap_or_else(|| range.midpoint());
    let (min, max, trend) = if projected.is_empty() {
        (last_value, last_value, 0.0)
    } else {
        let (min, max) = stats::min_max(&projected)?;
        (min, max, stats::average_change(&projected)?)
    };

    let mut data = Vec::with_capacity(training_days + horizon_days);
    data.extend(
        history
            .iter()
            .enumerate()
            .map(|(i, &value)| ForecastDataPoint::historical(training_days - i, value)),
    );
    data.extend(
        projected
            .iter()
            .zip(bands)
            .enumerate()
            .map(|(i, (&value, band))| ForecastDataPoint::forecast(i + 1, value, band)),
    );

    debug!(%variable, points = data.len(), min, max, trend, "variable forecast ready");

    Ok(ForecastResult {
        variable,
        data,
        stats: ForecastStats {
            min,
            max,
            trend,
            confidence: confidence_percent(training_days),
            narrative: variable_narrative(training_days, min, max, trend),
        },
        range,
    })
}

/// Confidence percent for a training window: `round(days / 100 * 80 + 20)`.
///
/// Not capped; windows longer than 100 days exceed 100%.
pub fn confidence_percent(training_days: usize) -> u32 {
    (training_days as f64 / 100.0 * 80.0 + 20.0).round() as u32
}

/// Factor scaling forecast noise; negative past [`FULL_CERTAINTY_DAYS`]
fn uncertainty_factor(training_days: usize) -> f64 {
    1.0 - training_days as f64 / FULL_CERTAINTY_DAYS
}

fn historical_values(
    range: &Bounds,
    training_days: usize,
    rng: &mut Mulberry32,
) -> Result<Vec<f64>> {
    let waves = [
        SeasonalComponent::new(ANNUAL_PERIOD, HISTORY_WAVE_WEIGHT)?,
        SeasonalComponent::new(MONTHLY_PERIOD, HISTORY_WAVE_WEIGHT)?,
    ];

    Ok((0..training_days)
        .map(|i| {
            let noise = (rng.next_f64() - 0.5) * HISTORY_NOISE_WIDTH;
            let normalized = 0.5 + composite(i as f64, &waves) + noise;
            range.clamp(range.denormalize(normalized))
        })
        .collect())
}

/// Forecast values and their `[lower, upper]` bands
fn forecast_values(
    range: &Bounds,
    history: &[f64],
    training_days: usize,
    horizon_days: usize,
    rng: &mut Mulberry32,
) -> (Vec<f64>, Vec<[f64; 2]>) {
    let span = range.span();
    let uncertainty = uncertainty_factor(training_days);

    let seasonal_amplitude = if training_days > SEASONAL_MIN_TRAINING {
        training_days as f64 / 100.0 * 0.5
    } else {
        0.0
    };
    // Drawn once; the same drift applies at every step
    let drift = if training_days > SEASONAL_MIN_TRAINING {
        rng.next_signed() * span * DRIFT_SCALE
    } else {
        0.0
    };
    // The band collapses rather than inverting for long windows
    let half_width = span * BAND_SCALE * uncertainty.max(0.0);

    let mut last_value = history.last().copied().unwrap_or_else(|| range.midpoint());
    let mut values = Vec::with_capacity(horizon_days);
    let mut bands = Vec::with_capacity(horizon_days);

    for step in 0..horizon_days {
        let position = training_days + step;

        let seasonal = if training_days <= SEASONAL_NAIVE_MAX_TRAINING {
            seasonal_naive(history, position, LOOKBACK_DAYS).unwrap_or(last_value) - last_value
        } else {
            damped_sinusoid(
                position as f64,
                ANNUAL_PERIOD,
                step as f64,
                SEASONAL_DECAY_STEPS,
            ) * span
                * SEASONAL_SCALE
                * seasonal_amplitude
        };

        let noise = rng.next_signed() * span * NOISE_SCALE * uncertainty;
        let next = range.clamp(last_value + seasonal + drift + noise);

        values.push(next);
        bands.push([range.clamp(next - half_width), range.clamp(next + half_width)]);
        last_value = next;
    }

    (values, bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 28)]
    #[case(30, 44)]
    #[case(60, 68)]
    #[case(100, 100)]
    #[case(150, 140)]
    fn test_confidence_percent(#[case] days: usize, #[case] expected: u32) {
        assert_eq!(confidence_percent(days), expected);
    }

    #[test]
    fn test_uncertainty_factor_sign() {
        assert!(uncertainty_factor(60) > 0.0);
        assert_eq!(uncertainty_factor(120), 0.0);
        assert!(uncertainty_factor(180) < 0.0);
    }

    #[test]
    fn test_history_stays_in_range() {
        let range = Variable::Temperature.range();
        let mut rng = Mulberry32::new(1);
        let history = historical_values(&range, 400, &mut rng).unwrap();
        assert_eq!(history.len(), 400);
        assert!(history.iter().all(|v| range.contains(*v)));
    }

    #[test]
    fn test_empty_history_starts_at_midpoint() {
        let range = Variable::Salinity.range();
        let mut rng = Mulberry32::new(3);
        let (values, bands) = forecast_values(&range, &[], 0, 1, &mut rng);

        // One noise step of at most a tenth of the span around the midpoint
        assert_eq!(values.len(), 1);
        assert!((values[0] - range.midpoint()).abs() <= range.span() * NOISE_SCALE);
        assert!(bands[0][0] <= values[0] && values[0] <= bands[0][1]);
    }
}
