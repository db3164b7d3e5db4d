//! Smooth curves through an ordered point series.

use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::core::types::Point;

/// Interpolated segments emitted per Catmull-Rom span.
pub const CATMULL_ROM_STEPS: usize = 5;

/// Interpolation strategy used by [`build_curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveStrategy {
    /// One quadratic per segment whose control point averages the two
    /// tangent-derived cubic control points. Cheapest.
    QuadraticMidpoint,
    /// Uniform B-spline to Bezier conversion driven by the two preceding
    /// points, pinned to the last sample by a degenerate trailing cubic.
    CubicUniformBezier,
    /// One cubic per segment with tangent-based control points.
    CubicTangent,
    /// Exact Catmull-Rom spline sampled at [`CATMULL_ROM_STEPS`] points per span.
    CatmullRom,
}

impl CurveStrategy {
    pub const ALL: [Self; 4] = [
        Self::QuadraticMidpoint,
        Self::CubicUniformBezier,
        Self::CubicTangent,
        Self::CatmullRom,
    ];
}

/// Control point for `current` derived from the line between its neighbors.
///
/// The control point lies at `smoothing * |next - previous|` from `current`,
/// along the `previous -> next` direction, or against it when `reverse` is
/// set. A missing neighbor collapses onto `current`.
#[must_use]
pub fn control_point(
    current: Point,
    previous: Option<Point>,
    next: Option<Point>,
    reverse: bool,
    smoothing: f64,
) -> Point {
    let previous = previous.unwrap_or(current);
    let next = next.unwrap_or(current);

    let dx = next.x - previous.x;
    let dy = next.y - previous.y;
    let angle = dy.atan2(dx) + if reverse { std::f64::consts::PI } else { 0.0 };
    let length = dx.hypot(dy) * smoothing;

    Point::new(
        current.x + angle.cos() * length,
        current.y + angle.sin() * length,
    )
}

/// Catmull-Rom spline between `p1` and `p2` at `t` in `[0, 1]`.
#[must_use]
pub fn catmull_rom_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        b + 0.5
            * ((c - a) * t
                + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                + (3.0 * b - 3.0 * c + d - a) * t3)
    };
    Point::new(
        axis(p0.x, p1.x, p2.x, p3.x),
        axis(p0.y, p1.y, p2.y, p3.y),
    )
}

/// Builds a smooth path through `points`.
///
/// An empty slice yields an empty path and a single point yields a lone move.
#[must_use]
pub fn build_curve(points: &[Point], smoothing: f64, strategy: CurveStrategy) -> Path {
    let Some(&first) = points.first() else {
        return Path::new();
    };

    let mut path = Path::with_capacity(match strategy {
        CurveStrategy::CatmullRom => points.len() * CATMULL_ROM_STEPS + 1,
        _ => points.len() + 1,
    });
    path.move_to(first);

    match strategy {
        CurveStrategy::CatmullRom => push_catmull_rom(&mut path, points),
        CurveStrategy::CubicUniformBezier => push_uniform_bezier(&mut path, points),
        CurveStrategy::QuadraticMidpoint | CurveStrategy::CubicTangent => {
            push_tangent_curves(&mut path, points, smoothing, strategy)
        }
    }
    path
}

fn push_tangent_curves(path: &mut Path, points: &[Point], smoothing: f64, strategy: CurveStrategy) {
    for i in 1..points.len() {
        let point = points[i];
        let previous = points[i - 1];
        let before_previous = i.checked_sub(2).map(|j| points[j]);
        let next = points.get(i + 1).copied();

        let start = control_point(previous, before_previous, Some(point), false, smoothing);
        let end = control_point(point, Some(previous), next, true, smoothing);

        if strategy == CurveStrategy::QuadraticMidpoint {
            path.quad_to(start.midpoint(end), point);
        } else {
            path.cubic_to(start, end, point);
        }
    }
}

fn push_uniform_bezier(path: &mut Path, points: &[Point]) {
    for i in 1..points.len() {
        let point = points[i];
        let p1 = points[i - 1];
        let p0 = i.checked_sub(2).map_or(p1, |j| points[j]);

        path.cubic_to(
            Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
            Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
            Point::new(
                (p0.x + 4.0 * p1.x + point.x) / 6.0,
                (p0.y + 4.0 * p1.y + point.y) / 6.0,
            ),
        );
    }

    if points.len() > 1 {
        let last = points[points.len() - 1];
        path.cubic_to(last, last, last);
    }
}

fn push_catmull_rom(path: &mut Path, points: &[Point]) {
    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        for step in 1..CATMULL_ROM_STEPS {
            let t = step as f64 / CATMULL_ROM_STEPS as f64;
            path.line_to(catmull_rom_point(p0, p1, p2, p3, t));
        }
        // Land on the sample itself rather than the rounded t = 1 evaluation.
        path.line_to(p2);
    }
}
