//! Pointer tracking over an already assembled graph.
//!
//! Everything here reads immutable assembly output and is cheap enough to
//! run on every pointer move.

mod crosshair;
mod locator;

pub use crosshair::{CrosshairReadout, track_pointer};
pub use locator::{ColumnSnapshot, nearest_column};
