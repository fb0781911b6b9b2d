//! Human-readable summaries of generated forecasts

use crate::data::ForecastResult;
use crate::params::ForecastParams;
use crate::variable::Variable;

/// Trend magnitude, as a percentage of a unit per day, below which a
/// series is described as stable
const STABLE_TREND_PERCENT: f64 = 0.01;

/// Absolute daily change below which salinity is called out as stable
const STABLE_SALINITY_TREND: f64 = 0.001;

/// Qualitative confidence tier derived from the training window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    HighUncertainty,
    Balanced,
    Strong,
}

impl ConfidenceTier {
    pub fn for_training_days(training_days: usize) -> Self {
        match training_days {
            0..=20 => ConfidenceTier::HighUncertainty,
            21..=50 => ConfidenceTier::Balanced,
            _ => ConfidenceTier::Strong,
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            ConfidenceTier::HighUncertainty => {
                "High uncertainty: the short training window leaves a wide confidence band."
            }
            ConfidenceTier::Balanced => {
                "Balanced confidence: the training window supports a moderate confidence band."
            }
            ConfidenceTier::Strong => {
                "Strong confidence: the long training window keeps the confidence band narrow."
            }
        }
    }
}

/// Narrative fragment for a single variable's forecast
pub fn variable_narrative(training_days: usize, min: f64, max: f64, trend: f64) -> String {
    let mut text = String::from(ConfidenceTier::for_training_days(training_days).sentence());

    text.push_str(&format!(
        " Forecast values range from {:.2} to {:.2}",
        min, max
    ));

    if (trend * 100.0).abs() > STABLE_TREND_PERCENT {
        let direction = if trend > 0.0 { "warming" } else { "cooling" };
        text.push_str(&format!(
            " with a {} trend of {:.3} per day.",
            direction,
            trend.abs()
        ));
    } else {
        text.push_str(" and remain stable.");
    }

    text
}

/// Cross-variable summary for a whole run
pub fn overall_narrative(params: &ForecastParams, results: &[ForecastResult]) -> String {
    let mut lines = vec![format!(
        "Forecast over {} based on {} days of training data.",
        params.horizon(),
        params.training_days()
    )];

    let trend_of = |variable: Variable| {
        results
            .iter()
            .find(|r| r.variable == variable)
            .map(|r| r.stats.trend)
    };

    if let Some(trend) = trend_of(Variable::Temperature) {
        lines.push(if trend > 0.0 {
            "• Temperature is expected to rise gradually.".to_string()
        } else {
            "• Temperature is expected to ease slightly.".to_string()
        });
    }

    if let Some(trend) = trend_of(Variable::Chlorophyll) {
        lines.push(if trend > 0.0 {
            "• Chlorophyll is trending up, pointing to increased productivity.".to_string()
        } else {
            "• Chlorophyll is trending down, pointing to reduced productivity.".to_string()
        });
    }

    if let Some(trend) = trend_of(Variable::Oxygen) {
        lines.push(if trend > 0.0 {
            "• Dissolved oxygen is projected to increase.".to_string()
        } else {
            "• Dissolved oxygen is projected to decline.".to_string()
        });
    }

    if let Some(trend) = trend_of(Variable::Salinity) {
        if trend.abs() < STABLE_SALINITY_TREND {
            lines.push("• Salinity remains stable across the horizon.".to_string());
        }
    }

    lines.push(format!(
        "Overall confidence: {}%.",
        average_confidence(results)
    ));

    lines.join("\n")
}

/// Rounded mean of per-variable confidence percentages, 0 for no results
pub fn average_confidence(results: &[ForecastResult]) -> u32 {
    let percents: Vec<f64> = results
        .iter()
        .map(|r| f64::from(r.stats.confidence))
        .collect();

    ocean_math::stats::mean(&percents)
        .map(|mean| mean.round() as u32)
        .unwrap_or(0)
}
