use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{PlottedPoint, Sample};

/// Pixels per millimetre used while the heaviest hour stays at or below 1 mm.
pub const LIGHT_PRECIPITATION_SCALE: f64 = 60.0;
/// Numerator of the inverse scale used for heavier precipitation.
pub const BASE_PRECIPITATION_SCALE: f64 = 75.0;

/// Pixels per millimetre so the tallest column stays around 75 px.
#[must_use]
pub fn precipitation_scale(max_precipitation: f64) -> f64 {
    if max_precipitation <= 1.0 {
        return LIGHT_PRECIPITATION_SCALE;
    }
    BASE_PRECIPITATION_SCALE / max_precipitation.max(0.1)
}

/// Largest hourly total, `0` for an empty or dry series.
#[must_use]
pub fn max_precipitation(samples: &[Sample]) -> f64 {
    samples
        .iter()
        .map(|sample| OrderedFloat(sample.precipitation_total))
        .max()
        .map_or(0.0, |max| max.0.max(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationKind {
    Rain,
    Snow,
}

/// Bar rising from the graph bottom at one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationColumn {
    pub index: usize,
    pub kind: PrecipitationKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal distance between the first two columns, `1` for a single column.
#[must_use]
pub fn column_width(points: &[PlottedPoint]) -> f64 {
    match points {
        [first, second, ..] => second.x - first.x,
        _ => 1.0,
    }
}

/// One rain column per wet sample, plus a snow column drawn over it when
/// part of the total fell as snow.
#[must_use]
pub fn precipitation_columns(
    points: &[PlottedPoint],
    scale: f64,
    graph_bottom: f64,
    inset: f64,
) -> Vec<PrecipitationColumn> {
    let width = (column_width(points) - 2.0 * inset).max(0.0);
    let mut columns = Vec::new();

    for (index, point) in points.iter().enumerate() {
        if point.precipitation_total <= 0.0 {
            continue;
        }
        let x = point.x + inset;
        for (kind, amount) in [
            (PrecipitationKind::Rain, point.precipitation_total),
            (PrecipitationKind::Snow, point.precipitation_snow),
        ] {
            if amount <= 0.0 {
                continue;
            }
            let height = amount * scale;
            columns.push(PrecipitationColumn {
                index,
                kind,
                x,
                y: graph_bottom - height,
                width,
                height,
            });
        }
    }
    columns
}
