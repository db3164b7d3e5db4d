use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Path, Point, Sample, build_curve};

use super::{CloudBandLayout, CurveStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudLevel {
    Low,
    Mid,
    High,
}

impl CloudLevel {
    pub const ALL: [Self; 3] = [Self::High, Self::Mid, Self::Low];

    #[must_use]
    pub fn fraction(self, sample: &Sample) -> f64 {
        match self {
            Self::Low => sample.cloud_low,
            Self::Mid => sample.cloud_mid,
            Self::High => sample.cloud_high,
        }
    }

    fn baseline_ratio(self, layout: &CloudBandLayout) -> f64 {
        match self {
            Self::Low => layout.low_baseline_ratio,
            Self::Mid => layout.mid_baseline_ratio,
            Self::High => layout.high_baseline_ratio,
        }
    }
}

/// Cloud coverage of one level, closed against its own baseline.
///
/// `path` covers the area above the baseline; renderers draw it together
/// with [`CloudBand::mirrored`] to get a band symmetric around the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudBand {
    pub level: CloudLevel,
    pub baseline_y: f64,
    pub path: Path,
}

impl CloudBand {
    #[must_use]
    pub fn empty(level: CloudLevel) -> Self {
        Self {
            level,
            baseline_y: 0.0,
            path: Path::new(),
        }
    }

    #[must_use]
    pub fn mirrored(&self) -> Path {
        self.path.mirrored_about_y(self.baseline_y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudBands {
    pub low: CloudBand,
    pub mid: CloudBand,
    pub high: CloudBand,
}

impl CloudBands {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            low: CloudBand::empty(CloudLevel::Low),
            mid: CloudBand::empty(CloudLevel::Mid),
            high: CloudBand::empty(CloudLevel::High),
        }
    }

    #[must_use]
    pub fn band(&self, level: CloudLevel) -> &CloudBand {
        match level {
            CloudLevel::Low => &self.low,
            CloudLevel::Mid => &self.mid,
            CloudLevel::High => &self.high,
        }
    }

    /// Builds the three bands. `xs` holds the column x of every sample.
    pub(crate) fn build(
        xs: &[f64],
        samples: &[Sample],
        layer_height: f64,
        layout: &CloudBandLayout,
        curve: CurveStyle,
    ) -> Self {
        let band = |level| build_band(level, xs, samples, layer_height, layout, curve);
        Self {
            low: band(CloudLevel::Low),
            mid: band(CloudLevel::Mid),
            high: band(CloudLevel::High),
        }
    }
}

fn build_band(
    level: CloudLevel,
    xs: &[f64],
    samples: &[Sample],
    layer_height: f64,
    layout: &CloudBandLayout,
    curve: CurveStyle,
) -> CloudBand {
    let baseline_y = level.baseline_ratio(layout) * layer_height;
    let amplitude = layout.amplitude_ratio * layer_height;

    let points: Vec<Point> = xs
        .iter()
        .zip(samples)
        .map(|(&x, sample)| Point::new(x, baseline_y - level.fraction(sample) * amplitude))
        .collect();

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return CloudBand {
            level,
            baseline_y,
            path: Path::new(),
        };
    };

    let mut path = Path::with_capacity(points.len() + 4);
    path.move_to(Point::new(first.x, baseline_y));
    path.append_connected(&build_curve(&points, curve.smoothing, curve.strategy));
    path.line_to(Point::new(last.x, baseline_y));
    path.close();

    trace!(?level, baseline_y, commands = path.len(), "built cloud band");
    CloudBand {
        level,
        baseline_y,
        path,
    }
}
