use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{GraphError, GraphResult};

/// Rounds through `Decimal` so `0.05` style midpoints round away from zero
/// instead of following the binary representation.
pub fn round_to_decimals(value: f64, decimals: u32, field_name: &str) -> GraphResult<f64> {
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        GraphError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })?;
    decimal
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| GraphError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

pub fn round_to_one_decimal(value: f64, field_name: &str) -> GraphResult<f64> {
    round_to_decimals(value, 1, field_name)
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}
