//! Oceanographic variables and their physical bounds

use crate::error::ForecastError;
use ocean_math::scaling::Bounds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measured variable the generator can synthesise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Temperature,
    Salinity,
    #[serde(rename = "ph")]
    Ph,
    Oxygen,
    Chlorophyll,
    Nitrate,
    #[serde(rename = "bbp700")]
    Bbp700,
    Cdom,
    DownwellingPar,
}

impl Variable {
    /// Every variable, in table order
    pub const ALL: [Variable; 9] = [
        Variable::Temperature,
        Variable::Salinity,
        Variable::Ph,
        Variable::Oxygen,
        Variable::Chlorophyll,
        Variable::Nitrate,
        Variable::Bbp700,
        Variable::Cdom,
        Variable::DownwellingPar,
    ];

    /// Physically plausible `[min, max]` for the variable
    pub fn range(self) -> Bounds {
        match self {
            Variable::Temperature => Bounds::fixed(26.51, 29.27),
            Variable::Salinity => Bounds::fixed(35.28, 35.70),
            Variable::Ph => Bounds::fixed(7.9297, 8.0356),
            Variable::Oxygen => Bounds::fixed(5.4508, 6.1149),
            Variable::Chlorophyll => Bounds::fixed(0.94599, 1.27193),
            Variable::Nitrate => Bounds::fixed(1.63915, 2.08097),
            Variable::Bbp700 => Bounds::fixed(0.003708, 0.024895),
            Variable::Cdom => Bounds::fixed(0.25337, 0.31673),
            Variable::DownwellingPar => Bounds::fixed(168.58, 226.57),
        }
    }

    /// Canonical identifier, as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Salinity => "salinity",
            Variable::Ph => "ph",
            Variable::Oxygen => "oxygen",
            Variable::Chlorophyll => "chlorophyll",
            Variable::Nitrate => "nitrate",
            Variable::Bbp700 => "bbp700",
            Variable::Cdom => "cdom",
            Variable::DownwellingPar => "downwelling_par",
        }
    }

    /// Human-readable label for narratives
    pub fn display_name(self) -> &'static str {
        match self {
            Variable::Temperature => "Temperature",
            Variable::Salinity => "Salinity",
            Variable::Ph => "pH",
            Variable::Oxygen => "Dissolved oxygen",
            Variable::Chlorophyll => "Chlorophyll",
            Variable::Nitrate => "Nitrate",
            Variable::Bbp700 => "Backscatter (bbp700)",
            Variable::Cdom => "CDOM",
            Variable::DownwellingPar => "Downwelling PAR",
        }
    }
}

/// Shorthand for [`Variable::range`]
pub fn range_of(variable: Variable) -> Bounds {
    variable.range()
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variable {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ForecastError::UnknownVariable(s.to_string()))
    }
}
