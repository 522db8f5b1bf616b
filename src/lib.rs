//! Geometry and session-state core for speaker placement and tap-to-measure.
//!
//! [`TriangleEngine`] solves the equilateral listening triangle for a pair of
//! speakers and rates how close the listener is to its apex.
//! [`MeasurementSession`] turns a sequence of tapped world points into
//! segments, running totals and unit-formatted labels.
//!
//! Both front ends are synchronous and share only the [`Point3`] value type.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod measurement;
pub mod operations;

pub use engine::{Guidance, GuidanceKind, TriangleConfig, TriangleEngine};
pub use error::{Result, SweetspotError};
pub use geometry::Triangle;
pub use logging::{LogLevel, Logger, NullLogger, TracingLogger};
pub use math::{Point3, Vector3};
pub use measurement::{
    format_distance, MeasurementMode, MeasurementSession, RecordOutcome, SessionConfig,
    Statistics, Units,
};
pub use operations::query::PositionError;
