use std::fmt;
use std::sync::Arc;

use crate::error::{OperationError, Result};
use crate::geometry::Triangle;
use crate::logging::{default_logger, LogLevel, Logger};
use crate::math::{ensure_finite, Point3};
use crate::operations::creation::MakeOptimalTriangle;
use crate::operations::query::{IsEquilateral, PositionError, PositionOffset, TriangleQuality};

use super::{Guidance, TriangleConfig};

const COMPONENT: &str = "triangle";

/// Number of speakers the engine solves for.
pub const SPEAKER_COUNT: usize = 2;

/// Stateful solver for the equilateral listening triangle.
///
/// Speakers and listener are set independently. Once both speakers and a
/// listener are known the triangle is re-solved on every update; until then
/// every query reports "not ready" (`None`, `false` or `0`).
pub struct TriangleEngine {
    config: TriangleConfig,
    speakers: Option<[Point3; SPEAKER_COUNT]>,
    listener: Option<Point3>,
    triangle: Option<Triangle>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for TriangleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriangleEngine")
            .field("config", &self.config)
            .field("speakers", &self.speakers)
            .field("listener", &self.listener)
            .field("triangle", &self.triangle)
            .finish_non_exhaustive()
    }
}

impl Default for TriangleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleEngine {
    /// Creates an engine with the default configuration, logging through
    /// `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TriangleConfig::default())
    }

    /// Creates an engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: TriangleConfig) -> Self {
        Self {
            config,
            speakers: None,
            listener: None,
            triangle: None,
            logger: default_logger(),
        }
    }

    /// Replaces the injected logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &TriangleConfig {
        &self.config
    }

    /// Sets the speaker pair.
    ///
    /// Only the first two points are kept; any further points are ignored.
    /// If a listener is already set the triangle is re-solved.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InsufficientSpeakers`] if fewer than two
    /// points are supplied, or a geometry error if a retained point has a
    /// non-finite coordinate. The engine is left unchanged on error.
    pub fn set_speakers(&mut self, points: &[Point3]) -> Result<()> {
        let [first, second, rest @ ..] = points else {
            return Err(OperationError::InsufficientSpeakers {
                supplied: points.len(),
                required: SPEAKER_COUNT,
            }
            .into());
        };
        ensure_finite(first, "speaker")?;
        ensure_finite(second, "speaker")?;

        if !rest.is_empty() {
            self.log(
                LogLevel::Debug,
                &format!("ignoring {} speakers beyond the first two", rest.len()),
            );
        }
        self.speakers = Some([*first, *second]);
        self.recompute();
        Ok(())
    }

    /// Sets the listener position, re-solving the triangle if both speakers
    /// are set.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if `point` has a non-finite coordinate.
    pub fn set_listener_position(&mut self, point: Point3) -> Result<()> {
        ensure_finite(&point, "listener")?;
        self.listener = Some(point);
        self.recompute();
        Ok(())
    }

    /// Returns the retained speaker pair, if set.
    #[must_use]
    pub fn speakers(&self) -> Option<&[Point3; SPEAKER_COUNT]> {
        self.speakers.as_ref()
    }

    /// Returns the current listener position, if set.
    #[must_use]
    pub fn listener(&self) -> Option<&Point3> {
        self.listener.as_ref()
    }

    /// Whether both speakers are set.
    #[must_use]
    pub fn has_speakers(&self) -> bool {
        self.speakers.is_some()
    }

    /// Returns the solved triangle, or `None` until both speakers and the
    /// listener are set.
    #[must_use]
    pub fn triangle(&self) -> Option<&Triangle> {
        self.triangle.as_ref()
    }

    /// Returns the optimal listener position, if the triangle is solved.
    #[must_use]
    pub fn optimal_listener(&self) -> Option<Point3> {
        self.triangle.map(|t| t.optimal_listener)
    }

    /// Returns the listener's offset from the optimum.
    #[must_use]
    pub fn position_error(&self) -> Option<PositionError> {
        self.triangle
            .as_ref()
            .map(|t| PositionOffset::new(t, self.config.optimal_threshold).execute())
    }

    /// Returns a positioning hint for the presentation layer.
    #[must_use]
    pub fn positioning_guidance(&self) -> Guidance {
        Guidance::from_position_error(
            self.position_error().as_ref(),
            self.config.guidance_axis_threshold,
        )
    }

    /// Tests whether the speakers and the current listener form an
    /// equilateral triangle within `tolerance` (relative side deviation).
    ///
    /// Returns `false` while the triangle is not solved.
    #[must_use]
    pub fn is_equilateral(&self, tolerance: f64) -> bool {
        self.triangle
            .as_ref()
            .is_some_and(|t| IsEquilateral::new(t.actual_vertices(), tolerance).execute())
    }

    /// Rates the current setup from 0 to 100. Returns `0` while the triangle
    /// is not solved.
    #[must_use]
    pub fn triangle_quality(&self) -> u8 {
        self.triangle.as_ref().map_or(0, |t| {
            TriangleQuality::new(t, self.config.shape_tolerance, self.config.score_ceiling)
                .execute()
        })
    }

    /// Clears speakers, listener and the solved triangle.
    pub fn reset(&mut self) {
        self.speakers = None;
        self.listener = None;
        self.triangle = None;
        self.log(LogLevel::Debug, "reset");
    }

    fn recompute(&mut self) {
        self.triangle = match (self.speakers, self.listener) {
            (Some(speakers), Some(listener)) => {
                let triangle = MakeOptimalTriangle::new(speakers, listener).execute();
                self.log(
                    LogLevel::Trace,
                    &format!(
                        "solved triangle: side {:.3} m, optimum ({:.3}, {:.3}, {:.3})",
                        triangle.side_length,
                        triangle.optimal_listener.x,
                        triangle.optimal_listener.y,
                        triangle.optimal_listener.z,
                    ),
                );
                Some(triangle)
            }
            _ => None,
        };
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.logger.log(level, COMPONENT, message);
    }
}
