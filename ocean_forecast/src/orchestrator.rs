//! Multi-variable forecast runs

use crate::data::ForecastData;
use crate::error::Result;
use crate::generator::generate_variable_forecast;
use crate::narrative::overall_narrative;
use crate::params::{ForecastParams, HorizonKind};
use tracing::{info, instrument, warn};

/// Seed used for the variable at `index` in the request.
///
/// Derived from the configuration alone, so a run is reproducible for a
/// fixed set of parameters.
pub fn variable_seed(params: &ForecastParams, index: usize) -> u64 {
    (params.training_days() + index) as u64
}

/// Generate every requested variable and the overall narrative
#[instrument(skip(params), fields(
    training_days = params.training_days(),
    horizon = %params.horizon(),
    variables = params.variables().len(),
))]
pub fn generate_forecast_data(params: &ForecastParams) -> Result<ForecastData> {
    if params.horizon().kind() == HorizonKind::Fallback {
        warn!(
            horizon = %params.horizon(),
            "unrecognised horizon, using the default forecast length"
        );
    }

    let results = params
        .variables()
        .iter()
        .enumerate()
        .map(|(index, &variable)| {
            generate_variable_forecast(variable, params, variable_seed(params, index))
        })
        .collect::<Result<Vec<_>>>()?;

    let narrative = overall_narrative(params, &results);

    info!(
        results = results.len(),
        horizon_days = params.horizon_days(),
        "forecast data generated"
    );

    Ok(ForecastData {
        params: params.clone(),
        results,
        narrative,
    })
}
