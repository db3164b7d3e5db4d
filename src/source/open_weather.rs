use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::round_to_one_decimal;
use crate::core::{Sample, validate_samples};
use crate::error::{GraphError, GraphResult};

const ONE_CALL_ENDPOINT: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Request URL for the One Call endpoint with metric units and without the
/// minutely block.
#[must_use]
pub fn one_call_url(lat: f64, lon: f64, api_key: &str) -> String {
    format!("{ONE_CALL_ENDPOINT}?lat={lat}&lon={lon}&exclude=minutely&appid={api_key}&units=metric")
}

/// Volume over the last hour, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrecipitationVolume {
    #[serde(rename = "1h", default)]
    pub one_hour: f64,
}

/// One entry of the `hourly` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Unix seconds.
    pub dt: i64,
    pub temp: f64,
    /// Total cloud cover in percent.
    #[serde(default)]
    pub clouds: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_deg: f64,
    #[serde(default)]
    pub rain: Option<PrecipitationVolume>,
    #[serde(default)]
    pub snow: Option<PrecipitationVolume>,
}

impl HourlyForecast {
    /// Maps one hour into a sample.
    ///
    /// The API reports a single total cloud cover; it is assigned to the low
    /// band and the mid/high bands stay clear. Rain and snow volumes add up
    /// to the precipitation total.
    pub fn to_sample(&self) -> GraphResult<Sample> {
        let timestamp = DateTime::<Utc>::from_timestamp(self.dt, 0).ok_or_else(|| {
            GraphError::InvalidData(format!("hourly timestamp {} is out of range", self.dt))
        })?;
        let rain = self.rain.unwrap_or_default().one_hour;
        let snow = self.snow.unwrap_or_default().one_hour;

        Ok(Sample::new(timestamp, round_to_one_decimal(self.temp, "temp")?)
            .with_precipitation(
                round_to_one_decimal(rain + snow, "precipitation")?,
                round_to_one_decimal(snow, "snow")?,
            )
            .with_clouds(self.clouds / 100.0, 0.0, 0.0)
            .with_wind(self.wind_speed, self.wind_deg))
    }
}

/// Subset of the One Call response the chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneCallResponse {
    /// Seconds east of UTC for the requested location.
    #[serde(default)]
    pub timezone_offset: i32,
    #[serde(default)]
    pub hourly: Vec<HourlyForecast>,
}

impl OneCallResponse {
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse one call response: {e}"))
        })
    }

    /// Location offset for the hourly legend, `None` when out of range.
    #[must_use]
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        let offset = FixedOffset::east_opt(self.timezone_offset);
        if offset.is_none() {
            warn!(timezone_offset = self.timezone_offset, "ignoring invalid timezone offset");
        }
        offset
    }

    pub fn to_samples(&self) -> GraphResult<Vec<Sample>> {
        let samples = self
            .hourly
            .iter()
            .map(HourlyForecast::to_sample)
            .collect::<GraphResult<Vec<_>>>()?;
        validate_samples(&samples)?;
        debug!(samples = samples.len(), "mapped one call hourly forecast");
        Ok(samples)
    }
}
