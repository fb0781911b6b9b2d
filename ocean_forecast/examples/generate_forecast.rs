//! Generate a synthetic forecast and print it as JSON.
//!
//! Usage: `cargo run --example generate_forecast -- [training_days] [horizon] [variables...]`
//!
//! Set `RUST_LOG=ocean_forecast=debug` to see per-variable diagnostics.

use ocean_forecast::{generate_forecast_data, ForecastParams, Variable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let training_days: usize = match args.next() {
        Some(days) => days.parse()?,
        None => 30,
    };
    let horizon = args.next().unwrap_or_else(|| "7d".to_string());
    let mut variables = args
        .map(|name| name.parse::<Variable>())
        .collect::<Result<Vec<_>, _>>()?;
    if variables.is_empty() {
        variables = vec![Variable::Temperature, Variable::Salinity, Variable::Oxygen];
    }

    let params = ForecastParams::new(training_days, horizon, variables)?;
    let forecast = generate_forecast_data(&params)?;

    println!("{}", forecast.to_json_pretty()?);
    println!();
    println!("{}", forecast.narrative);
    for result in &forecast.results {
        println!("{}: {}", result.variable.display_name(), result.stats.narrative);
    }

    Ok(())
}
