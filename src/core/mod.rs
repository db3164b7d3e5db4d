pub mod arrows;
pub mod curve;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod threshold;
pub mod types;

pub use arrows::{DirectionInterpolation, distribute_arrows};
pub use curve::{CurveStrategy, build_curve, control_point};
pub use path::{Path, PathCommand};
pub use scale::{PlotArea, x_pixel, x_position, y_pixel, y_position};
pub use threshold::{Side, ThresholdSplit, split_at_threshold};
pub use types::{
    CanvasSize, GraphRange, PlottedPoint, Point, Sample, TimeRange, ValueRange, WindArrow,
    validate_samples,
};
