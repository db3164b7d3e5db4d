//! Composition root: turns a sample series into every path the chart draws.

mod cloud_layer;
mod graph_assembler;
mod graph_config;
mod hourly_legend;
mod json_contract;
mod precipitation;
mod trend;
mod wind_layer;

pub use cloud_layer::{CloudBand, CloudBands, CloudLevel};
pub use graph_assembler::{GraphAssembler, GraphPaths};
pub use graph_config::{
    CloudBandLayout, CurveStyle, DEFAULT_CLOUD_LAYER_HEIGHT, DEFAULT_MIN_TREND_CHANGE_DISTANCE,
    DEFAULT_PADDING_BOTTOM, DEFAULT_PADDING_TOP, DEFAULT_SMOOTHING,
    DEFAULT_WIND_ARROW_MIN_SPACING_PX, GraphConfig, GraphLayout, WindBandLayout,
};
pub use hourly_legend::{
    LEGEND_LARGE_TICK_LENGTH, LEGEND_MEDIUM_TICK_LENGTH, LEGEND_SMALL_TICK_LENGTH, LegendTick,
    TickKind, hourly_ticks,
};
pub use json_contract::{
    GRAPH_CONFIG_JSON_SCHEMA_V1, GRAPH_PATHS_JSON_SCHEMA_V1, GraphConfigJsonContractV1,
    GraphPathsJsonContractV1,
};
pub use precipitation::{
    BASE_PRECIPITATION_SCALE, LIGHT_PRECIPITATION_SCALE, PrecipitationColumn, PrecipitationKind,
    column_width, max_precipitation, precipitation_columns, precipitation_scale,
};
pub use trend::detect_trend_changes;
pub use wind_layer::WindLayer;
