use approx::assert_relative_eq;
use ocean_forecast::data::PointKind;
use ocean_forecast::generator::confidence_percent;
use ocean_forecast::{generate_variable_forecast, ForecastParams, ForecastResult, Variable};
use ocean_math::Mulberry32;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn generate(variable: Variable, training_days: usize, horizon: &str, seed: u64) -> ForecastResult {
    let params = ForecastParams::new(training_days, horizon, vec![variable]).unwrap();
    generate_variable_forecast(variable, &params, seed).unwrap()
}

fn assert_within_bounds(result: &ForecastResult) {
    let range = result.range;
    for point in &result.data {
        assert!(
            range.contains(point.value),
            "{} value {} outside {:?}",
            point.day,
            point.value,
            range
        );
        if let Some([lower, upper]) = point.confidence {
            assert!(range.min() <= lower, "{} lower {} below range", point.day, lower);
            assert!(lower <= point.value, "{} lower {} above value", point.day, lower);
            assert!(point.value <= upper, "{} upper {} below value", point.day, upper);
            assert!(upper <= range.max(), "{} upper {} above range", point.day, upper);
        }
    }
}

#[test]
fn test_same_seed_is_reproducible() {
    let first = generate(Variable::Oxygen, 45, "14d", 45);
    let second = generate(Variable::Oxygen, 45, "14d", 45);

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let first = generate(Variable::Oxygen, 45, "14d", 45);
    let second = generate(Variable::Oxygen, 45, "14d", 46);

    assert!(first.data != second.data);
}

#[rstest]
fn test_values_and_bands_within_range(
    #[values(
        Variable::Temperature,
        Variable::Salinity,
        Variable::Ph,
        Variable::Oxygen,
        Variable::Chlorophyll,
        Variable::Nitrate,
        Variable::Bbp700,
        Variable::Cdom,
        Variable::DownwellingPar
    )]
    variable: Variable,
    #[values(1, 10, 20, 25, 35, 90, 120, 200)] training_days: usize,
) {
    let result = generate(variable, training_days, "45d", training_days as u64);
    assert_within_bounds(&result);
}

#[rstest]
#[case(30, "7d", 37)]
#[case(10, "14d", 24)]
#[case(60, "2 months", 90)]
#[case(5, "garbage", 35)]
#[case(12, "0d", 12)]
fn test_series_length(#[case] training_days: usize, #[case] horizon: &str, #[case] expected: usize) {
    let result = generate(Variable::Nitrate, training_days, horizon, 1);
    assert_eq!(result.data.len(), expected);
}

#[test]
fn test_labels_and_ordering() {
    let result = generate(Variable::Cdom, 5, "3d", 5);
    let labels: Vec<&str> = result.data.iter().map(|p| p.day.as_str()).collect();

    assert_eq!(labels, vec!["D-5", "D-4", "D-3", "D-2", "D-1", "D+1", "D+2", "D+3"]);

    let kinds: Vec<PointKind> = result.data.iter().map(|p| p.kind).collect();
    assert!(kinds[..5].iter().all(|k| *k == PointKind::Historical));
    assert!(kinds[5..].iter().all(|k| *k == PointKind::Forecast));

    assert!(result.historical().all(|p| p.confidence.is_none()));
    assert!(result.forecast().all(|p| p.confidence.is_some()));
}

#[test]
fn test_stats_follow_forecast_segment() {
    let result = generate(Variable::Temperature, 40, "10d", 40);
    let values: Vec<f64> = result.forecast().map(|p| p.value).collect();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let trend = (values[values.len() - 1] - values[0]) / values.len() as f64;

    assert_eq!(result.stats.min, min);
    assert_eq!(result.stats.max, max);
    assert_relative_eq!(result.stats.trend, trend);
    assert_eq!(result.stats.confidence, confidence_percent(40));
}

#[test]
fn test_short_window_looks_back_one_season() {
    let training_days = 10;
    let seed = 10;
    let result = generate(Variable::Temperature, training_days, "45d", seed);
    let range = result.range;
    let history: Vec<f64> = result.historical().map(|p| p.value).collect();
    let forecast: Vec<f64> = result.forecast().map(|p| p.value).collect();
    assert_eq!(forecast.len(), 45);

    // One draw per historical day; short windows take no drift draw
    let mut rng = Mulberry32::new(seed);
    for _ in 0..training_days {
        rng.next_f64();
    }
    let uncertainty = 1.0 - training_days as f64 / 120.0;
    let drift = 0.0;

    let mut last = history[history.len() - 1];
    let mut moved_by_lookback = 0;
    for (step, &value) in forecast.iter().enumerate() {
        let noise = rng.next_signed() * range.span() * 0.1 * uncertainty;
        let season_ago = (training_days + step)
            .checked_sub(30)
            .and_then(|index| history.get(index).copied());

        let expected = match season_ago {
            Some(past) => {
                assert!((20..30).contains(&step), "lookback hit at step {}", step);
                let walked = range.clamp(last + (past - last) + drift + noise);
                assert_relative_eq!(walked, range.clamp(past + noise), epsilon = 1e-12);
                if walked != range.clamp(last + noise) {
                    moved_by_lookback += 1;
                }
                walked
            }
            None => {
                assert!(!(20..30).contains(&step), "lookback missed at step {}", step);
                let seasonal = last - last;
                assert_eq!(seasonal, 0.0);
                range.clamp(last + seasonal + drift + noise)
            }
        };

        assert_eq!(value, expected, "step {}", step);
        last = value;
    }

    assert!(moved_by_lookback > 0);
}

#[test]
fn test_zero_day_horizon_uses_last_history_value() {
    let result = generate(Variable::Ph, 8, "0d", 8);
    let last = result.data.last().unwrap().value;

    assert_eq!(result.forecast().count(), 0);
    assert_eq!(result.stats.min, last);
    assert_eq!(result.stats.max, last);
    assert_eq!(result.stats.trend, 0.0);
}

#[test]
fn test_long_training_band_collapses() {
    let result = generate(Variable::Salinity, 200, "7d", 200);

    for point in result.forecast() {
        assert_eq!(point.confidence, Some([point.value, point.value]));
    }
}

#[test]
fn test_range_is_echoed() {
    let result = generate(Variable::DownwellingPar, 30, "7d", 30);
    assert_eq!(result.range.as_array(), [168.58, 226.57]);
}

#[rstest]
#[case(10, 28)]
#[case(60, 68)]
#[case(100, 100)]
fn test_confidence_examples(#[case] training_days: usize, #[case] expected: u32) {
    assert_eq!(generate(Variable::Cdom, training_days, "7d", 0).stats.confidence, expected);
}

#[test]
fn test_confidence_is_monotonic() {
    let percents: Vec<u32> = (1..=300).map(confidence_percent).collect();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
}
