use weather_graph::api::{
    DEFAULT_CLOUD_LAYER_HEIGHT, DEFAULT_MIN_TREND_CHANGE_DISTANCE, DEFAULT_PADDING_BOTTOM,
    DEFAULT_PADDING_TOP, DEFAULT_SMOOTHING, DEFAULT_WIND_ARROW_MIN_SPACING_PX, WindBandLayout,
};
use weather_graph::core::{CurveStrategy, DirectionInterpolation};
use weather_graph::{GraphAssembler, GraphConfig, GraphError, GraphLayout};

#[test]
fn defaults_match_documented_values() {
    let config = GraphConfig::default();
    assert_eq!(config.temperature_curve.strategy, CurveStrategy::CatmullRom);
    assert_eq!(config.temperature_curve.smoothing, DEFAULT_SMOOTHING);
    assert_eq!(config.cloud_curve.strategy, CurveStrategy::CubicTangent);
    assert_eq!(config.min_trend_change_distance, DEFAULT_MIN_TREND_CHANGE_DISTANCE);
    assert_eq!(config.wind.arrow_min_spacing_px, DEFAULT_WIND_ARROW_MIN_SPACING_PX);
    assert_eq!(
        config.wind.direction_interpolation,
        DirectionInterpolation::ShortestArc
    );
    assert!(config.validate().is_ok());
}

#[test]
fn negative_smoothing_is_rejected() {
    let mut config = GraphConfig::default();
    config.cloud_curve.smoothing = -0.1;
    let err = GraphAssembler::new(config).expect_err("negative smoothing");
    assert!(matches!(err, GraphError::InvalidConfig(ref msg) if msg.contains("cloud_curve")));
}

#[test]
fn non_positive_arrow_spacing_is_rejected() {
    let config = GraphConfig::default().with_wind(WindBandLayout {
        arrow_min_spacing_px: 0.0,
        ..WindBandLayout::default()
    });
    assert!(matches!(config.validate(), Err(GraphError::InvalidConfig(_))));
}

#[test]
fn out_of_range_legend_offset_is_rejected() {
    let config = GraphConfig::default().with_legend_utc_offset_seconds(90_000);
    assert!(config.validate().is_err());
    assert_eq!(config.legend_utc_offset().local_minus_utc(), 0);
}

#[test]
fn standard_layout_reserves_cloud_and_legend_space() {
    let layout = GraphLayout::standard(800.0, 600.0);
    assert_eq!(layout.padding_top, DEFAULT_PADDING_TOP);
    assert_eq!(layout.padding_bottom, DEFAULT_PADDING_BOTTOM);
    assert_eq!(layout.cloud_layer_height, DEFAULT_CLOUD_LAYER_HEIGHT);
    assert_eq!(layout.draw_width(), 800.0);
    assert_eq!(layout.draw_height(), 600.0 - DEFAULT_PADDING_TOP - DEFAULT_PADDING_BOTTOM);
    assert_eq!(layout.graph_bottom(), 600.0 - DEFAULT_PADDING_BOTTOM);
    assert!(layout.validate().is_ok());
}

#[test]
fn layout_validation_reports_bad_canvas() {
    let err = GraphLayout::new(-1.0, 10.0).validate().expect_err("negative width");
    assert!(matches!(err, GraphError::InvalidCanvas { width, .. } if width == -1.0));

    let err = GraphLayout::new(100.0, 100.0)
        .with_horizontal_padding(-2.0)
        .validate()
        .expect_err("negative padding");
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}
