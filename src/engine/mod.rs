//! Listening-triangle solver.

mod config;
mod guidance;
mod triangle_engine;

pub use config::{
    TriangleConfig, GUIDANCE_AXIS_THRESHOLD, OPTIMAL_DISTANCE_THRESHOLD, QUALITY_SCORE_CEILING,
    QUALITY_SHAPE_TOLERANCE,
};
pub use guidance::{Guidance, GuidanceKind};
pub use triangle_engine::{TriangleEngine, SPEAKER_COUNT};
