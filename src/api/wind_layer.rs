use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    Path, Point, Sample, ValueRange, WindArrow, build_curve, distribute_arrows, y_pixel,
};

use super::{CurveStyle, WindBandLayout};

/// Wind-speed trace with its direction markers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindLayer {
    pub band_top: f64,
    pub band_bottom: f64,
    pub points: Vec<Point>,
    pub path: Path,
    pub arrows: Vec<WindArrow>,
}

impl WindLayer {
    /// Maps wind speed into a fixed band starting `gap_px` below the cloud
    /// layer. Calm sits on the band bottom, `speed_ceiling` and above on its top.
    pub(crate) fn build(
        xs: &[f64],
        samples: &[Sample],
        cloud_layer_height: f64,
        layout: &WindBandLayout,
        curve: CurveStyle,
    ) -> Self {
        let band_top = cloud_layer_height + layout.gap_px;
        let speed_range = ValueRange::new(0.0, layout.speed_ceiling);

        let points: Vec<Point> = xs
            .iter()
            .zip(samples)
            .map(|(&x, sample)| {
                let speed = sample.wind_speed.clamp(0.0, layout.speed_ceiling);
                Point::new(x, band_top + y_pixel(layout.height_px, speed, &speed_range))
            })
            .collect();
        let directions: Vec<f64> = samples.iter().map(|s| s.wind_direction).collect();

        let path = build_curve(&points, curve.smoothing, curve.strategy);
        let arrows = distribute_arrows(
            &points,
            &directions[..points.len()],
            layout.arrow_min_spacing_px,
            layout.direction_interpolation,
        );

        trace!(
            points = points.len(),
            arrows = arrows.len(),
            "built wind layer"
        );
        Self {
            band_top,
            band_bottom: band_top + layout.height_px,
            points,
            path,
            arrows,
        }
    }
}
