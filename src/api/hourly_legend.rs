use chrono::{FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlottedPoint;

pub const LEGEND_SMALL_TICK_LENGTH: f64 = 8.0;
pub const LEGEND_MEDIUM_TICK_LENGTH: f64 = 16.0;
pub const LEGEND_LARGE_TICK_LENGTH: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    Hour,
    /// Every sixth hour other than midnight.
    SixHour,
    Midnight,
}

impl TickKind {
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0 => Self::Midnight,
            h if h % 6 == 0 => Self::SixHour,
            _ => Self::Hour,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        match self {
            Self::Hour => LEGEND_SMALL_TICK_LENGTH,
            Self::SixHour => LEGEND_MEDIUM_TICK_LENGTH,
            Self::Midnight => LEGEND_LARGE_TICK_LENGTH,
        }
    }

    /// Stroke width for the tick line; `0.0` asks the host for a hairline.
    #[must_use]
    pub fn stroke_width(self) -> f64 {
        match self {
            Self::Midnight => 1.0,
            Self::Hour | Self::SixHour => 0.0,
        }
    }
}

/// Vertical tick hanging below the graph at one column.
///
/// `labels` holds the hour for six-hour and midnight ticks, followed by the
/// abbreviated weekday on midnight ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendTick {
    pub index: usize,
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    pub kind: TickKind,
    pub labels: SmallVec<[String; 2]>,
}

#[must_use]
pub fn hourly_ticks(
    points: &[PlottedPoint],
    graph_bottom: f64,
    offset: FixedOffset,
) -> Vec<LegendTick> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let local = point.timestamp.with_timezone(&offset);
            let kind = TickKind::for_hour(local.hour());

            let mut labels = SmallVec::new();
            if kind != TickKind::Hour {
                labels.push(local.hour().to_string());
            }
            if kind == TickKind::Midnight {
                labels.push(local.format("%a").to_string());
            }

            LegendTick {
                index,
                x: point.x,
                top: graph_bottom,
                bottom: graph_bottom + kind.length(),
                kind,
                labels,
            }
        })
        .collect()
}
