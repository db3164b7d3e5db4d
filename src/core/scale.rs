//! Linear mapping from time/value domains into pixel space.
//!
//! All functions are allocation free so they can run inside per-frame loops.

use chrono::{DateTime, Utc};

use crate::core::primitives::datetime_to_unix_millis;
use crate::core::types::{TimeRange, ValueRange};

/// Normalized horizontal position: `0` at `range.min`, `1` at `range.max`.
///
/// The result is undefined (infinite or NaN) for a zero-width range; callers
/// check [`TimeRange::has_span`] first.
#[must_use]
pub fn x_position(timestamp: DateTime<Utc>, range: &TimeRange) -> f64 {
    debug_assert!(range.has_span(), "x range must have a positive span");
    let min = datetime_to_unix_millis(range.min);
    let span = datetime_to_unix_millis(range.max) - min;
    (datetime_to_unix_millis(timestamp) - min) / span
}

/// Horizontal pixel, snapped down to a whole pixel.
#[must_use]
pub fn x_pixel(draw_width: f64, timestamp: DateTime<Utc>, range: &TimeRange) -> f64 {
    (draw_width * x_position(timestamp, range)).floor()
}

/// Normalized vertical position, inverted for screen space: `1` at
/// `range.min`, `0` at `range.max`, `0.5` for a degenerate range.
#[must_use]
pub fn y_position(value: f64, range: &ValueRange) -> f64 {
    if range.min == range.max {
        return 0.5;
    }
    1.0 - (value - range.min) / (range.max - range.min)
}

#[must_use]
pub fn y_pixel(draw_height: f64, value: f64, range: &ValueRange) -> f64 {
    draw_height * y_position(value, range)
}

/// Drawing rectangle inside the canvas that a [`GraphRange`] maps onto.
///
/// [`GraphRange`]: crate::core::GraphRange
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pixel x of a timestamp. A zero-width range pins everything to the left edge.
    #[must_use]
    pub fn map_x(&self, timestamp: DateTime<Utc>, range: &TimeRange) -> f64 {
        if !range.has_span() {
            return self.left;
        }
        x_pixel(self.width, timestamp, range) + self.left
    }

    #[must_use]
    pub fn map_y(&self, value: f64, range: &ValueRange) -> f64 {
        y_pixel(self.height, value, range) + self.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
