//! plotbind: a declarative data-binding chart pipeline.
//!
//! Records flow top-down through five stages: field accessors, pixel
//! dimensions, channel scales, a reconciling data join producing a
//! backend-agnostic render frame, and a hover layer backed by a Voronoi
//! hit-region proxy.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod tessellation;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
