//! # Ocean Synth
//!
//! `ocean_synth` bundles the workspace crates behind one import:
//!
//! - [`forecast`]: variables, parameters, the series generator and narratives
//! - [`math`]: the seeded random source and series helpers
//!
//! ## Example
//!
//! ```
//! use ocean_synth::forecast::{generate_forecast_data, ForecastParams, Variable};
//!
//! let params = ForecastParams::new(40, "14d", vec![Variable::Temperature, Variable::Salinity])?;
//! let forecast = generate_forecast_data(&params)?;
//! assert_eq!(forecast.results.len(), 2);
//! # Ok::<(), ocean_synth::forecast::ForecastError>(())
//! ```

pub use ocean_forecast as forecast;
pub use ocean_math as math;

pub use ocean_forecast::{
    generate_forecast_data, generate_variable_forecast, ForecastData, ForecastError,
    ForecastParams, ForecastResult, Variable,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_agree() {
        let params = ForecastParams::new(10, "3d", vec![Variable::Ph]).unwrap();
        let direct = generate_variable_forecast(Variable::Ph, &params, 10).unwrap();
        let via_run = generate_forecast_data(&params).unwrap();

        assert_eq!(via_run.results[0], direct);
    }

    #[test]
    fn test_math_reexport() {
        let range = Variable::Temperature.range();
        assert_eq!(range, math::scaling::Bounds::new(26.51, 29.27).unwrap());

        let mut rng = math::Mulberry32::new(42);
        assert_eq!(rng.next_f64(), 2_581_720_956.0 / 4_294_967_296.0);
    }
}
