//! Places direction markers at equal arc-length intervals along a polyline.

use serde::{Deserialize, Serialize};

use crate::core::types::{Point, WindArrow};

/// How bearings are blended between two neighboring samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionInterpolation {
    /// Blends raw degree values, so 350° -> 10° passes through 180°.
    Linear,
    /// Blends along the shorter arc and normalizes into `[0, 360)`.
    #[default]
    ShortestArc,
}

impl DirectionInterpolation {
    #[must_use]
    pub fn interpolate(self, from: f64, to: f64, t: f64) -> f64 {
        match self {
            Self::Linear => from + (to - from) * t,
            Self::ShortestArc => {
                let delta = (to - from + 180.0).rem_euclid(360.0) - 180.0;
                normalize_bearing(from + delta * t)
            }
        }
    }
}

// `rem_euclid` can round up to exactly 360 for tiny negative inputs.
fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Number of markers for a polyline of `total_length`: one per
/// `min_distance`, never fewer than the two end markers.
#[must_use]
pub fn arrow_count(total_length: f64, min_distance: f64) -> usize {
    if !min_distance.is_finite() || min_distance <= 0.0 || !total_length.is_finite() {
        return 2;
    }
    ((total_length / min_distance).floor() as usize).max(2)
}

/// Running polyline length at each vertex, starting at `0`.
#[must_use]
pub fn cumulative_lengths(points: &[Point]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0;
    if !points.is_empty() {
        cumulative.push(0.0);
    }
    for pair in points.windows(2) {
        total += pair[0].distance(pair[1]);
        cumulative.push(total);
    }
    cumulative
}

/// Distributes markers evenly by arc length along `points`.
///
/// `directions` runs parallel to `points`. The first and last markers sit
/// exactly on the end points and carry their bearings unchanged; inner
/// markers interpolate position and bearing within their segment. Fewer than
/// two points yields no markers.
#[must_use]
pub fn distribute_arrows(
    points: &[Point],
    directions: &[f64],
    min_distance: f64,
    interpolation: DirectionInterpolation,
) -> Vec<WindArrow> {
    debug_assert_eq!(
        points.len(),
        directions.len(),
        "directions must run parallel to points"
    );
    let len = points.len().min(directions.len());
    if len < 2 {
        return Vec::new();
    }
    let points = &points[..len];
    let directions = &directions[..len];

    let cumulative = cumulative_lengths(points);
    let total = cumulative[len - 1];
    let count = arrow_count(total, min_distance);
    let spacing = total / (count - 1) as f64;

    let mut arrows = Vec::with_capacity(count);
    arrows.push(WindArrow::new(points[0], directions[0]));

    for k in 1..count - 1 {
        let target = spacing * k as f64;
        let upper = cumulative
            .partition_point(|&length| length <= target)
            .clamp(1, len - 1);
        let lower = upper - 1;

        let segment_length = cumulative[upper] - cumulative[lower];
        let progress = if segment_length > 0.0 {
            ((target - cumulative[lower]) / segment_length).clamp(0.0, 1.0)
        } else {
            0.0
        };

        arrows.push(WindArrow::new(
            points[lower].lerp(points[upper], progress),
            interpolation.interpolate(directions[lower], directions[upper], progress),
        ));
    }

    arrows.push(WindArrow::new(points[len - 1], directions[len - 1]));
    arrows
}
