use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, CurveStrategy, DirectionInterpolation};
use crate::error::{GraphError, GraphResult};

pub const DEFAULT_SMOOTHING: f64 = 0.2;
pub const DEFAULT_MIN_TREND_CHANGE_DISTANCE: usize = 3;
pub const DEFAULT_WIND_ARROW_MIN_SPACING_PX: f64 = 30.0;
pub const DEFAULT_CLOUD_LAYER_HEIGHT: f64 = 100.0;
pub const DEFAULT_PADDING_TOP: f64 = DEFAULT_CLOUD_LAYER_HEIGHT + 80.0;
pub const DEFAULT_PADDING_BOTTOM: f64 = 36.0;

/// Strategy and smoothing factor for one curve family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub strategy: CurveStrategy,
    pub smoothing: f64,
}

impl CurveStyle {
    #[must_use]
    pub const fn new(strategy: CurveStrategy, smoothing: f64) -> Self {
        Self {
            strategy,
            smoothing,
        }
    }
}

/// Fixed vertical zones of the three cloud bands.
///
/// Ratios are relative to the cloud layer height; each band is drawn above
/// its baseline and mirrored below it, up to `amplitude_ratio` each way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudBandLayout {
    pub high_baseline_ratio: f64,
    pub mid_baseline_ratio: f64,
    pub low_baseline_ratio: f64,
    pub amplitude_ratio: f64,
}

impl Default for CloudBandLayout {
    fn default() -> Self {
        Self {
            high_baseline_ratio: 1.0 / 6.0,
            mid_baseline_ratio: 0.5,
            low_baseline_ratio: 5.0 / 6.0,
            amplitude_ratio: 1.0 / 6.0,
        }
    }
}

/// Placement of the wind-speed band and its direction markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindBandLayout {
    /// Gap between the bottom of the cloud layer and the top of the wind band.
    pub gap_px: f64,
    pub height_px: f64,
    /// Speed drawn at the top of the band; faster samples are clamped.
    pub speed_ceiling: f64,
    pub arrow_min_spacing_px: f64,
    pub direction_interpolation: DirectionInterpolation,
}

impl Default for WindBandLayout {
    fn default() -> Self {
        Self {
            gap_px: 8.0,
            height_px: 48.0,
            speed_ceiling: 20.0,
            arrow_min_spacing_px: DEFAULT_WIND_ARROW_MIN_SPACING_PX,
            direction_interpolation: DirectionInterpolation::default(),
        }
    }
}

/// Assembler configuration. Every field has a documented default so partial
/// JSON documents deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_temperature_curve")]
    pub temperature_curve: CurveStyle,
    #[serde(default = "default_tangent_curve")]
    pub cloud_curve: CurveStyle,
    #[serde(default = "default_tangent_curve")]
    pub wind_curve: CurveStyle,
    #[serde(default = "default_min_trend_change_distance")]
    pub min_trend_change_distance: usize,
    #[serde(default)]
    pub clouds: CloudBandLayout,
    #[serde(default)]
    pub wind: WindBandLayout,
    #[serde(default = "default_precipitation_column_inset_px")]
    pub precipitation_column_inset_px: f64,
    /// Offset used to decide legend hours (midnight, 6-hour marks).
    #[serde(default)]
    pub legend_utc_offset_seconds: i32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            temperature_curve: default_temperature_curve(),
            cloud_curve: default_tangent_curve(),
            wind_curve: default_tangent_curve(),
            min_trend_change_distance: default_min_trend_change_distance(),
            clouds: CloudBandLayout::default(),
            wind: WindBandLayout::default(),
            precipitation_column_inset_px: default_precipitation_column_inset_px(),
            legend_utc_offset_seconds: 0,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn with_temperature_curve(mut self, style: CurveStyle) -> Self {
        self.temperature_curve = style;
        self
    }

    #[must_use]
    pub fn with_cloud_curve(mut self, style: CurveStyle) -> Self {
        self.cloud_curve = style;
        self
    }

    #[must_use]
    pub fn with_wind_curve(mut self, style: CurveStyle) -> Self {
        self.wind_curve = style;
        self
    }

    #[must_use]
    pub fn with_min_trend_change_distance(mut self, distance: usize) -> Self {
        self.min_trend_change_distance = distance;
        self
    }

    #[must_use]
    pub fn with_clouds(mut self, clouds: CloudBandLayout) -> Self {
        self.clouds = clouds;
        self
    }

    #[must_use]
    pub fn with_wind(mut self, wind: WindBandLayout) -> Self {
        self.wind = wind;
        self
    }

    #[must_use]
    pub fn with_direction_interpolation(mut self, mode: DirectionInterpolation) -> Self {
        self.wind.direction_interpolation = mode;
        self
    }

    #[must_use]
    pub fn with_legend_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.legend_utc_offset_seconds = seconds;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        for (name, style) in [
            ("temperature_curve", self.temperature_curve),
            ("cloud_curve", self.cloud_curve),
            ("wind_curve", self.wind_curve),
        ] {
            ensure_non_negative(&format!("{name}.smoothing"), style.smoothing)?;
        }

        for (name, value) in [
            ("clouds.high_baseline_ratio", self.clouds.high_baseline_ratio),
            ("clouds.mid_baseline_ratio", self.clouds.mid_baseline_ratio),
            ("clouds.low_baseline_ratio", self.clouds.low_baseline_ratio),
            ("clouds.amplitude_ratio", self.clouds.amplitude_ratio),
            ("wind.gap_px", self.wind.gap_px),
            ("wind.height_px", self.wind.height_px),
            ("precipitation_column_inset_px", self.precipitation_column_inset_px),
        ] {
            ensure_non_negative(name, value)?;
        }

        for (name, value) in [
            ("wind.speed_ceiling", self.wind.speed_ceiling),
            ("wind.arrow_min_spacing_px", self.wind.arrow_min_spacing_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        if FixedOffset::east_opt(self.legend_utc_offset_seconds).is_none() {
            return Err(GraphError::InvalidConfig(
                "`legend_utc_offset_seconds` must be within +-24h".to_owned(),
            ));
        }
        Ok(())
    }

    /// Legend offset, falling back to UTC for out-of-range values.
    #[must_use]
    pub fn legend_utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.legend_utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Canvas-dependent inputs of one assembly pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub canvas: CanvasSize,
    pub horizontal_padding: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub cloud_layer_height: f64,
}

impl GraphLayout {
    /// Layout without paddings or cloud layer: the temperature curve uses
    /// the whole canvas.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            canvas: CanvasSize::new(width, height),
            horizontal_padding: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            cloud_layer_height: 0.0,
        }
    }

    /// Cloud layer on top, room for the hourly legend at the bottom.
    #[must_use]
    pub const fn standard(width: f64, height: f64) -> Self {
        Self {
            canvas: CanvasSize::new(width, height),
            horizontal_padding: 0.0,
            padding_top: DEFAULT_PADDING_TOP,
            padding_bottom: DEFAULT_PADDING_BOTTOM,
            cloud_layer_height: DEFAULT_CLOUD_LAYER_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding;
        self
    }

    #[must_use]
    pub fn with_vertical_padding(mut self, top: f64, bottom: f64) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    #[must_use]
    pub fn with_cloud_layer_height(mut self, height: f64) -> Self {
        self.cloud_layer_height = height;
        self
    }

    #[must_use]
    pub fn draw_width(&self) -> f64 {
        self.canvas.width - 2.0 * self.horizontal_padding
    }

    #[must_use]
    pub fn draw_height(&self) -> f64 {
        self.canvas.height - self.padding_top - self.padding_bottom
    }

    /// Bottom edge of the graph area; the legend lives below it.
    #[must_use]
    pub fn graph_bottom(&self) -> f64 {
        self.canvas.height - self.padding_bottom
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.canvas.validate()?;
        for (name, value) in [
            ("horizontal_padding", self.horizontal_padding),
            ("padding_top", self.padding_top),
            ("padding_bottom", self.padding_bottom),
            ("cloud_layer_height", self.cloud_layer_height),
        ] {
            ensure_non_negative(name, value)?;
        }
        if self.draw_width() <= 0.0 || self.draw_height() <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "paddings leave no drawing area: {}x{}",
                self.draw_width(),
                self.draw_height()
            )));
        }
        Ok(())
    }
}

fn ensure_non_negative(name: &str, value: f64) -> GraphResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GraphError::InvalidConfig(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_temperature_curve() -> CurveStyle {
    CurveStyle::new(CurveStrategy::CatmullRom, DEFAULT_SMOOTHING)
}

fn default_tangent_curve() -> CurveStyle {
    CurveStyle::new(CurveStrategy::CubicTangent, DEFAULT_SMOOTHING)
}

fn default_min_trend_change_distance() -> usize {
    DEFAULT_MIN_TREND_CHANGE_DISTANCE
}

fn default_precipitation_column_inset_px() -> f64 {
    0.5
}
