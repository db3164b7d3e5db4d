//! weather-graph: geometry and pointer-tracking engine for an hourly weather chart.
//!
//! The crate turns a time-ordered sample series into plain-data vector paths
//! (temperature curve split at 0 °C, cloud bands, wind trace with direction
//! markers, precipitation columns, legend ticks) and resolves pointer
//! positions to sample columns. Painting, styling and data transport stay
//! with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod source;
pub mod telemetry;

pub use api::{GraphAssembler, GraphConfig, GraphLayout, GraphPaths};
pub use error::{GraphError, GraphResult};
