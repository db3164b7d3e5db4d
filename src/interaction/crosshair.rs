use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PlottedPoint;

use super::ColumnSnapshot;

/// Values and guide-line geometry for the column under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairReadout {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub guide_top: f64,
    pub guide_bottom: f64,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub precipitation_total: f64,
    pub precipitation_snow: f64,
}

impl CrosshairReadout {
    /// One-line summary shown next to the crosshair.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "TEMP: {}°C RAIN: {}mm SNOW: {}mm",
            self.value, self.precipitation_total, self.precipitation_snow
        )
    }
}

/// Resolves the pointer position to a readout.
///
/// The guide line spans the full canvas height. Returns `None` when there are
/// no columns or the snapshot no longer matches `points`.
#[must_use]
pub fn track_pointer(
    snapshot: &ColumnSnapshot,
    points: &[PlottedPoint],
    pointer_x: f64,
    canvas_height: f64,
) -> Option<CrosshairReadout> {
    let index = snapshot.nearest(pointer_x)?;
    let point = points.get(index)?;
    Some(CrosshairReadout {
        index,
        x: point.x,
        y: point.y,
        guide_top: 0.0,
        guide_bottom: canvas_height,
        value: point.value,
        timestamp: point.timestamp,
        precipitation_total: point.precipitation_total,
        precipitation_snow: point.precipitation_snow,
    })
}
