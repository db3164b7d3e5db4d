use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation, `t = 0` yields `self` and `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Canvas size in pixels, as measured by the hosting layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.is_valid() {
            return Err(GraphError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// One hourly weather observation.
///
/// Cloud fractions are expected in `[0, 1]`; values outside that range are
/// not rejected and simply produce out-of-band cloud geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Temperature in °C.
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub precipitation_total: f64,
    pub precipitation_snow: f64,
    pub cloud_low: f64,
    pub cloud_mid: f64,
    pub cloud_high: f64,
    pub wind_speed: f64,
    /// Bearing in degrees.
    pub wind_direction: f64,
}

impl Sample {
    /// Creates a dry, clear, calm sample.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            value,
            timestamp,
            precipitation_total: 0.0,
            precipitation_snow: 0.0,
            cloud_low: 0.0,
            cloud_mid: 0.0,
            cloud_high: 0.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
        }
    }

    #[must_use]
    pub fn with_precipitation(mut self, total: f64, snow: f64) -> Self {
        self.precipitation_total = total;
        self.precipitation_snow = snow;
        self
    }

    #[must_use]
    pub fn with_clouds(mut self, low: f64, mid: f64, high: f64) -> Self {
        self.cloud_low = low;
        self.cloud_mid = mid;
        self.cloud_high = high;
        self
    }

    #[must_use]
    pub fn with_wind(mut self, speed: f64, direction: f64) -> Self {
        self.wind_speed = speed;
        self.wind_direction = direction;
        self
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("value", self.value),
            ("precipitation_total", self.precipitation_total),
            ("precipitation_snow", self.precipitation_snow),
            ("cloud_low", self.cloud_low),
            ("cloud_mid", self.cloud_mid),
            ("cloud_high", self.cloud_high),
            ("wind_speed", self.wind_speed),
            ("wind_direction", self.wind_direction),
        ]
    }
}

/// Checks that every numeric field is finite and timestamps strictly increase.
///
/// Geometry code never calls this itself; data mappers do before handing
/// samples over.
pub fn validate_samples(samples: &[Sample]) -> GraphResult<()> {
    for (index, sample) in samples.iter().enumerate() {
        for (field, value) in sample.numeric_fields() {
            if !value.is_finite() {
                return Err(GraphError::InvalidData(format!(
                    "sample {index}: `{field}` must be finite"
                )));
            }
        }
    }
    if let Some(index) = samples
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(GraphError::InvalidData(format!(
            "sample {}: timestamps must be strictly increasing",
            index + 1
        )));
    }
    Ok(())
}

/// Horizontal (time) domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl TimeRange {
    #[must_use]
    pub const fn new(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self { min, max }
    }

    /// `false` when `max <= min`, in which case horizontal mapping is undefined.
    #[must_use]
    pub fn has_span(self) -> bool {
        self.max > self.min
    }
}

/// Vertical (value) domain. `min == max` is tolerated and maps to the midline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Time and value extremes used for linear coordinate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphRange {
    pub x: TimeRange,
    pub y: ValueRange,
}

impl GraphRange {
    #[must_use]
    pub const fn new(x: TimeRange, y: ValueRange) -> Self {
        Self { x, y }
    }

    /// Builds a range whose time domain spans the first and last sample.
    ///
    /// Returns `None` for an empty sample slice.
    #[must_use]
    pub fn spanning(samples: &[Sample], y_min: f64, y_max: f64) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        Some(Self {
            x: TimeRange::new(first.timestamp, last.timestamp),
            y: ValueRange::new(y_min, y_max),
        })
    }
}

/// A sample mapped into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub precipitation_total: f64,
    pub precipitation_snow: f64,
    pub is_trend_changing: bool,
}

impl PlottedPoint {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Direction marker placed along the wind-speed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindArrow {
    pub position: Point,
    /// Bearing in degrees.
    pub direction: f64,
}

impl WindArrow {
    #[must_use]
    pub const fn new(position: Point, direction: f64) -> Self {
        Self {
            position,
            direction,
        }
    }
}
