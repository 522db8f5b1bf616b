//! Tap-to-measure sessions.

mod config;
mod point;
mod session;
mod stats;
mod units;

pub use config::{MeasurementMode, SessionConfig};
pub use point::{MeasurementPoint, MeasurementSegment, SegmentLabel};
pub use session::{
    MeasurementSession, RecordOutcome, RejectReason, SessionState, StatsCallback,
};
pub use stats::Statistics;
pub use units::{format_distance, Units, FEET_PER_METER, INCHES_PER_FOOT};
