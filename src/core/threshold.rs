//! Splits a path into the parts above and below a horizontal line.
//!
//! Screen coordinates grow downwards, so "above" means `y <= threshold`.
//! A point lying exactly on the line counts as above; for a zero line that
//! is the non-negative side.

use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::core::types::Point;

/// Segments used to approximate each curve command before splitting.
pub const CURVE_FLATTEN_STEPS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Above,
    Below,
}

impl Side {
    #[must_use]
    pub fn classify(y: f64, threshold: f64) -> Self {
        if y > threshold { Self::Below } else { Self::Above }
    }
}

/// Output of [`split_at_threshold`].
///
/// `above`/`below` are open strokes that both pass through every crossing
/// point. The fills are closed regions, one subpath per run of points on the
/// same side, each dropped down to the fill bottom.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThresholdSplit {
    pub above: Path,
    pub below: Path,
    pub above_fill: Path,
    pub below_fill: Path,
}

impl ThresholdSplit {
    #[must_use]
    pub fn curve(&self, side: Side) -> &Path {
        match side {
            Side::Above => &self.above,
            Side::Below => &self.below,
        }
    }

    #[must_use]
    pub fn fill(&self, side: Side) -> &Path {
        match side {
            Side::Above => &self.above_fill,
            Side::Below => &self.below_fill,
        }
    }

    fn curve_mut(&mut self, side: Side) -> &mut Path {
        match side {
            Side::Above => &mut self.above,
            Side::Below => &mut self.below,
        }
    }

    fn fill_mut(&mut self, side: Side) -> &mut Path {
        match side {
            Side::Above => &mut self.above_fill,
            Side::Below => &mut self.below_fill,
        }
    }

    fn start_region(&mut self, side: Side, start: Point) -> FillRegion {
        self.fill_mut(side).move_to(start);
        FillRegion { side, start }
    }

    fn close_region(&mut self, region: FillRegion, end: Point, fill_bottom: f64) {
        let fill = self.fill_mut(region.side);
        if fill.current_point() != Some(end) {
            fill.line_to(end);
        }
        fill.line_to(Point::new(end.x, fill_bottom));
        fill.line_to(Point::new(region.start.x, fill_bottom));
        fill.line_to(region.start);
        fill.close();
    }
}

#[derive(Debug, Clone, Copy)]
struct FillRegion {
    side: Side,
    start: Point,
}

/// Exact crossing of segment `from -> to` with `y = threshold`.
///
/// Only meaningful when the two points lie on different sides.
#[must_use]
pub fn threshold_crossing(from: Point, to: Point, threshold: f64) -> Point {
    let t = (threshold - from.y) / (to.y - from.y);
    Point::new(from.x + t * (to.x - from.x), threshold)
}

/// Splits `path` at `y = threshold`, closing fill regions against `fill_bottom`.
///
/// Curves are flattened first, so the stroke outputs consist of moves and
/// lines only. An inner move in the source starts a fresh region on both the
/// stroke and the fill.
#[must_use]
pub fn split_at_threshold(path: &Path, threshold: f64, fill_bottom: f64) -> ThresholdSplit {
    let flat = path.flattened(CURVE_FLATTEN_STEPS);
    let mut split = ThresholdSplit::default();
    let mut region: Option<FillRegion> = None;
    let mut previous: Option<(Point, Side)> = None;

    for command in flat.commands() {
        let Some(point) = command.end_point() else {
            continue;
        };
        let side = Side::classify(point.y, threshold);

        match (previous, region) {
            (Some((prev, _)), Some(open)) if command.is_move() => {
                split.close_region(open, prev, fill_bottom);
                region = Some(split.start_region(side, point));
                split.curve_mut(side).move_to(point);
            }
            (Some((prev, prev_side)), Some(open)) if prev_side != side => {
                let crossing = threshold_crossing(prev, point, threshold);
                split.close_region(open, crossing, fill_bottom);
                split.curve_mut(prev_side).line_to(crossing);
                split.curve_mut(side).move_to(crossing);
                region = Some(split.start_region(side, crossing));
                split.curve_mut(side).line_to(point);
                split.fill_mut(side).line_to(point);
            }
            (Some(_), Some(_)) => {
                split.curve_mut(side).line_to(point);
                split.fill_mut(side).line_to(point);
            }
            _ => {
                region = Some(split.start_region(side, point));
                split.curve_mut(side).move_to(point);
            }
        }
        previous = Some((point, side));
    }

    if let (Some(open), Some((last, _))) = (region, previous) {
        split.close_region(open, last, fill_bottom);
    }
    split
}
