//! Mapping of upstream weather payloads into [`Sample`] series.
//!
//! Only the JSON shapes live here; fetching and file access belong to the
//! host.
//!
//! [`Sample`]: crate::core::Sample

mod fixture;
mod open_weather;

pub use fixture::{ForecastFixture, parameter};
pub use open_weather::{HourlyForecast, OneCallResponse, PrecipitationVolume, one_call_url};
