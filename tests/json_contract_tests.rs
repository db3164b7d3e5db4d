use approx::assert_abs_diff_eq;
use chrono::{TimeDelta, TimeZone, Utc};
use weather_graph::api::{GRAPH_CONFIG_JSON_SCHEMA_V1, GRAPH_PATHS_JSON_SCHEMA_V1};
use weather_graph::core::{CurveStrategy, DirectionInterpolation, GraphRange, Sample};
use weather_graph::{GraphAssembler, GraphConfig, GraphError, GraphLayout, GraphPaths};

fn assembled() -> GraphPaths {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let samples: Vec<Sample> = [3.1, -1.4, 0.6, 2.2]
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            Sample::new(start + TimeDelta::hours(i as i64), value)
                .with_precipitation(0.5, 0.1)
                .with_clouds(0.2, 0.4, 0.6)
                .with_wind(5.0, 180.0)
        })
        .collect();
    let range = GraphRange::spanning(&samples, -5.0, 5.0).expect("samples");
    GraphAssembler::new(GraphConfig::default())
        .expect("config")
        .assemble(&samples, &range, &GraphLayout::standard(480.0, 400.0))
        .expect("assemble")
}

fn assert_paths_close(actual: &GraphPaths, expected: &GraphPaths) {
    assert_eq!(actual.points.len(), expected.points.len());
    for (a, e) in actual.points.iter().zip(&expected.points) {
        assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-9);
        assert_eq!(a.timestamp, e.timestamp);
        assert_eq!(a.is_trend_changing, e.is_trend_changing);
    }
    assert_eq!(actual.path.len(), expected.path.len());
    for (a, e) in actual.path.points().zip(expected.path.points()) {
        assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-9);
    }
    assert_eq!(
        actual.temperature_split.below_fill.len(),
        expected.temperature_split.below_fill.len()
    );
    assert_eq!(actual.clouds.mid.path.len(), expected.clouds.mid.path.len());
    assert_eq!(actual.wind_arrows.len(), expected.wind_arrows.len());
    assert_eq!(actual.precipitation_columns.len(), expected.precipitation_columns.len());
    assert_eq!(actual.legend_ticks, expected.legend_ticks);
    assert_eq!(actual.has_any_negative_value, expected.has_any_negative_value);
}

#[test]
fn paths_contract_carries_schema_version() {
    let json = assembled().to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], GRAPH_PATHS_JSON_SCHEMA_V1);
    assert!(value["paths"]["path"][0]["op"] == "move_to");
}

#[test]
fn paths_parse_from_versioned_and_bare_documents() {
    let paths = assembled();

    let versioned = paths.to_json_contract_v1_pretty().expect("serialize");
    let parsed = GraphPaths::from_json_compat_str(&versioned).expect("versioned");
    assert_paths_close(&parsed, &paths);

    let bare = serde_json::to_string(&paths).expect("serialize bare");
    let parsed = GraphPaths::from_json_compat_str(&bare).expect("bare");
    assert_paths_close(&parsed, &paths);
}

#[test]
fn paths_with_unknown_schema_version_are_rejected() {
    let json = assembled()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 9", 1);
    let err = GraphPaths::from_json_compat_str(&json).expect_err("unknown version");
    assert!(matches!(err, GraphError::InvalidData(_)));
}

#[test]
fn config_round_trips_through_contract() {
    let config = GraphConfig::default()
        .with_min_trend_change_distance(5)
        .with_direction_interpolation(DirectionInterpolation::Linear)
        .with_legend_utc_offset_seconds(-5 * 3600);
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {GRAPH_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = GraphConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.min_trend_change_distance, 5);
    assert_eq!(parsed.wind.direction_interpolation, DirectionInterpolation::Linear);
    assert_eq!(parsed.legend_utc_offset_seconds, -5 * 3600);
    assert_eq!(parsed.temperature_curve.strategy, CurveStrategy::CatmullRom);
}

#[test]
fn partial_bare_config_falls_back_to_defaults() {
    let parsed = GraphConfig::from_json_compat_str(
        r#"{"temperature_curve": {"strategy": "quadratic_midpoint", "smoothing": 0.3}}"#,
    )
    .expect("parse");
    assert_eq!(parsed.temperature_curve.strategy, CurveStrategy::QuadraticMidpoint);
    assert_eq!(parsed.temperature_curve.smoothing, 0.3);
    assert_eq!(parsed.wind, GraphConfig::default().wind);
    assert_eq!(parsed.min_trend_change_distance, 3);
}

#[test]
fn invalid_config_documents_are_rejected() {
    let err = GraphConfig::from_json_compat_str(r#"{"schema_version": 2, "config": {}}"#)
        .expect_err("unknown version");
    assert!(matches!(err, GraphError::InvalidConfig(_)));

    let err = GraphConfig::from_json_compat_str(
        r#"{"wind": {"gap_px": 8.0, "height_px": 48.0, "speed_ceiling": 0.0,
            "arrow_min_spacing_px": 30.0, "direction_interpolation": "shortest_arc"}}"#,
    )
    .expect_err("zero ceiling");
    assert!(matches!(err, GraphError::InvalidConfig(ref msg) if msg.contains("speed_ceiling")));

    let err = GraphConfig::from_json_compat_str("not json").expect_err("garbage");
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}
