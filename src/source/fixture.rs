use chrono::{DateTime, TimeDelta, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::round_to_one_decimal;
use crate::core::{Sample, validate_samples};
use crate::error::{GraphError, GraphResult};

/// Parameter keys of the fixture's `parameterValues` map.
pub mod parameter {
    pub const TEMPERATURE: &str = "TEMPERATURE";
    pub const PRECIPITATION_TOTAL: &str = "PRECIPITATION_TOTAL";
    pub const PRECIPITATION_SNOW: &str = "PRECIPITATION_SNOW";
    pub const CLOUDS_LOW: &str = "CLOUDS_LOW";
    pub const CLOUDS_MEDIUM: &str = "CLOUDS_MEDIUM";
    pub const CLOUDS_HIGH: &str = "CLOUDS_HIGH";
    pub const WIND_SPEED: &str = "WIND_SPEED";
    pub const WIND_DIRECTION: &str = "WIND_DIRECTION";

    pub const REQUIRED: [&str; 8] = [
        TEMPERATURE,
        PRECIPITATION_TOTAL,
        PRECIPITATION_SNOW,
        CLOUDS_LOW,
        CLOUDS_MEDIUM,
        CLOUDS_HIGH,
        WIND_SPEED,
        WIND_DIRECTION,
    ];
}

/// Static hourly forecast: one array per parameter, the first entry at
/// `forecast_time_iso` and one hour between entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastFixture {
    pub forecast_time_iso: DateTime<Utc>,
    pub parameter_values: IndexMap<String, Vec<f64>>,
}

impl ForecastFixture {
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse forecast fixture: {e}")))
    }

    fn series(&self, name: &str) -> GraphResult<&[f64]> {
        self.parameter_values
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::InvalidData(format!("fixture is missing `{name}`")))
    }

    /// Hourly samples with temperature and precipitation rounded to one decimal.
    pub fn to_samples(&self) -> GraphResult<Vec<Sample>> {
        let len = self.series(parameter::TEMPERATURE)?.len();
        for name in parameter::REQUIRED {
            let found = self.series(name)?.len();
            if found != len {
                return Err(GraphError::InvalidData(format!(
                    "fixture parameter `{name}` has {found} values, expected {len}"
                )));
            }
        }

        let temperature = self.series(parameter::TEMPERATURE)?;
        let precipitation_total = self.series(parameter::PRECIPITATION_TOTAL)?;
        let precipitation_snow = self.series(parameter::PRECIPITATION_SNOW)?;
        let clouds_low = self.series(parameter::CLOUDS_LOW)?;
        let clouds_mid = self.series(parameter::CLOUDS_MEDIUM)?;
        let clouds_high = self.series(parameter::CLOUDS_HIGH)?;
        let wind_speed = self.series(parameter::WIND_SPEED)?;
        let wind_direction = self.series(parameter::WIND_DIRECTION)?;

        let mut samples = Vec::with_capacity(len);
        for index in 0..len {
            let timestamp = self.forecast_time_iso + TimeDelta::hours(index as i64);
            let sample = Sample::new(
                timestamp,
                round_to_one_decimal(temperature[index], parameter::TEMPERATURE)?,
            )
            .with_precipitation(
                round_to_one_decimal(precipitation_total[index], parameter::PRECIPITATION_TOTAL)?,
                round_to_one_decimal(precipitation_snow[index], parameter::PRECIPITATION_SNOW)?,
            )
            .with_clouds(clouds_low[index], clouds_mid[index], clouds_high[index])
            .with_wind(wind_speed[index], wind_direction[index]);
            samples.push(sample);
        }

        validate_samples(&samples)?;
        debug!(samples = samples.len(), start = %self.forecast_time_iso, "mapped forecast fixture");
        Ok(samples)
    }
}
