use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{
    GraphRange, Path, Point, PlotArea, PlottedPoint, Sample, ThresholdSplit, WindArrow,
    build_curve, split_at_threshold,
};
use crate::error::GraphResult;
use crate::interaction::ColumnSnapshot;

use super::cloud_layer::CloudBands;
use super::hourly_legend::{LegendTick, hourly_ticks};
use super::precipitation::{
    PrecipitationColumn, max_precipitation, precipitation_columns, precipitation_scale,
};
use super::trend::detect_trend_changes;
use super::wind_layer::WindLayer;
use super::{GraphConfig, GraphLayout};

/// Complete derived geometry of one assembly pass.
///
/// Built fresh on every recompute and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPaths {
    pub points: Vec<PlottedPoint>,
    /// Temperature curve.
    pub path: Path,
    /// Temperature curve closed down to the graph bottom.
    pub gradient_path: Path,
    /// Pixel y of 0 °C, the warm/cold boundary.
    pub zero_line_y: f64,
    /// Temperature curve split at `zero_line_y`.
    pub temperature_split: ThresholdSplit,
    pub clouds: CloudBands,
    pub wind_path: Path,
    pub wind_arrows: Vec<WindArrow>,
    pub has_any_negative_value: bool,
    pub max_precipitation: f64,
    /// Pixels per millimetre for precipitation columns.
    pub precipitation_scale: f64,
    pub precipitation_columns: Vec<PrecipitationColumn>,
    pub legend_ticks: Vec<LegendTick>,
}

impl GraphPaths {
    /// Result for an empty sample series.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            path: Path::new(),
            gradient_path: Path::new(),
            zero_line_y: 0.0,
            temperature_split: ThresholdSplit::default(),
            clouds: CloudBands::empty(),
            wind_path: Path::new(),
            wind_arrows: Vec::new(),
            has_any_negative_value: false,
            max_precipitation: 0.0,
            precipitation_scale: precipitation_scale(0.0),
            precipitation_columns: Vec::new(),
            legend_ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Column positions to publish to the pointer-tracking context.
    #[must_use]
    pub fn columns(&self) -> ColumnSnapshot {
        ColumnSnapshot::from_points(&self.points)
    }

    #[must_use]
    pub fn trend_change_points(&self) -> impl Iterator<Item = &PlottedPoint> + '_ {
        self.points.iter().filter(|point| point.is_trend_changing)
    }
}

/// Turns samples plus canvas parameters into [`GraphPaths`].
///
/// Holds configuration only; every call to [`GraphAssembler::assemble`] is a
/// pure function of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphAssembler {
    config: GraphConfig,
}

impl GraphAssembler {
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Builds the full geometry bundle.
    ///
    /// Fails only for an invalid layout. An empty series yields
    /// [`GraphPaths::empty`].
    pub fn assemble(
        &self,
        samples: &[Sample],
        range: &GraphRange,
        layout: &GraphLayout,
    ) -> GraphResult<GraphPaths> {
        layout.validate()?;
        if samples.is_empty() {
            debug!("assemble called without samples");
            return Ok(GraphPaths::empty());
        }
        debug_assert!(
            samples.windows(2).all(|p| p[0].timestamp < p[1].timestamp),
            "sample timestamps must be strictly increasing"
        );
        if !range.x.has_span() {
            warn!(
                samples = samples.len(),
                "time range has no span; pinning columns to the left edge"
            );
        }

        let area = PlotArea::new(
            layout.horizontal_padding,
            layout.padding_top,
            layout.draw_width(),
            layout.draw_height(),
        );
        let graph_bottom = layout.graph_bottom();

        let positions = project_samples(samples, range, area);
        let values: Vec<f64> = samples.iter().map(|sample| sample.value).collect();
        let trend_flags = detect_trend_changes(&values, self.config.min_trend_change_distance);

        let points: Vec<PlottedPoint> = samples
            .iter()
            .zip(&positions)
            .zip(trend_flags)
            .map(|((sample, position), is_trend_changing)| PlottedPoint {
                x: position.x,
                y: position.y,
                value: sample.value,
                timestamp: sample.timestamp,
                precipitation_total: sample.precipitation_total,
                precipitation_snow: sample.precipitation_snow,
                is_trend_changing,
            })
            .collect();

        let curve = self.config.temperature_curve;
        let path = build_curve(&positions, curve.smoothing, curve.strategy);
        let gradient_path = close_to_baseline(&path, graph_bottom);

        let zero_line_y = area.map_y(0.0, &range.y);
        let temperature_split = split_at_threshold(&path, zero_line_y, layout.canvas.height);

        let xs: Vec<f64> = positions.iter().map(|position| position.x).collect();
        let clouds = CloudBands::build(
            &xs,
            samples,
            layout.cloud_layer_height,
            &self.config.clouds,
            self.config.cloud_curve,
        );
        let wind = WindLayer::build(
            &xs,
            samples,
            layout.cloud_layer_height,
            &self.config.wind,
            self.config.wind_curve,
        );

        let has_any_negative_value = samples.iter().any(|sample| sample.value < 0.0);
        let max_precipitation = max_precipitation(samples);
        let precipitation_scale = precipitation_scale(max_precipitation);
        let precipitation_columns = precipitation_columns(
            &points,
            precipitation_scale,
            graph_bottom,
            self.config.precipitation_column_inset_px,
        );
        let legend_ticks = hourly_ticks(&points, graph_bottom, self.config.legend_utc_offset());

        debug!(
            samples = samples.len(),
            width = layout.canvas.width,
            height = layout.canvas.height,
            path_commands = path.len(),
            wind_arrows = wind.arrows.len(),
            trend_changes = points.iter().filter(|p| p.is_trend_changing).count(),
            "assembled graph paths"
        );

        Ok(GraphPaths {
            points,
            path,
            gradient_path,
            zero_line_y,
            temperature_split,
            clouds,
            wind_path: wind.path,
            wind_arrows: wind.arrows,
            has_any_negative_value,
            max_precipitation,
            precipitation_scale,
            precipitation_columns,
            legend_ticks,
        })
    }
}

fn project_sample(sample: &Sample, range: &GraphRange, area: PlotArea) -> Point {
    Point::new(
        area.map_x(sample.timestamp, &range.x),
        area.map_y(sample.value, &range.y),
    )
}

fn project_samples(samples: &[Sample], range: &GraphRange, area: PlotArea) -> Vec<Point> {
    // Large series can be projected in parallel; output order and values are
    // identical either way.
    #[cfg(feature = "parallel-projection")]
    {
        samples
            .par_iter()
            .map(|sample| project_sample(sample, range, area))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        samples
            .iter()
            .map(|sample| project_sample(sample, range, area))
            .collect()
    }
}

/// Copies `path` and closes it with straight edges down to `baseline_y`.
fn close_to_baseline(path: &Path, baseline_y: f64) -> Path {
    let (Some(first), Some(last)) = (path.first_point(), path.current_point()) else {
        return Path::new();
    };
    let mut closed = path.clone();
    closed.line_to(Point::new(last.x, baseline_y));
    closed.line_to(Point::new(first.x, baseline_y));
    closed.close();
    closed
}
