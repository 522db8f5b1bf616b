use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::logging::{default_logger, LogLevel, Logger};
use crate::math::{distance_3d, ensure_finite, midpoint, Point3};

use super::{
    MeasurementMode, MeasurementPoint, MeasurementSegment, SegmentLabel, SessionConfig,
    Statistics, Units,
};

const COMPONENT: &str = "measurement";

/// Callback receiving a fresh [`Statistics`] snapshot after each change.
pub type StatsCallback = Box<dyn FnMut(&Statistics) + Send>;

/// Whether a session currently accepts points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Inactive,
    Active,
}

/// Why [`MeasurementSession::record_point`] dropped a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The session is not active.
    Inactive,
    /// A single-pair measurement already has both points.
    MeasurementComplete,
}

/// Result of [`MeasurementSession::record_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// The point was stored but did not complete a segment.
    Placed { index: usize },
    /// The point was stored and connected to its predecessor.
    Measured {
        index: usize,
        segment: MeasurementSegment,
    },
    /// The point was dropped.
    Rejected(RejectReason),
}

impl RecordOutcome {
    /// Whether the point was stored.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Tap-to-measure session.
///
/// Points are recorded in order while the session is active. Depending on
/// [`MeasurementMode`] they form either a single two-point measurement or a
/// chained polyline. Every change that affects the totals is reported through
/// the stats-update callback; the session keeps no other link to its
/// consumers.
///
/// All mutating methods take `&mut self`. Hosts sharing a session across
/// threads must serialize calls (e.g. behind one `Mutex`) so that the totals
/// stay consistent with submission order.
pub struct MeasurementSession {
    config: SessionConfig,
    state: SessionState,
    units: Units,
    points: Vec<MeasurementPoint>,
    segments: Vec<MeasurementSegment>,
    on_stats_update: Option<StatsCallback>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for MeasurementSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementSession")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("units", &self.units)
            .field("points", &self.points)
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl MeasurementSession {
    /// Creates an inactive, empty session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Inactive,
            units: config.units,
            points: Vec::new(),
            segments: Vec::new(),
            on_stats_update: None,
            logger: default_logger(),
        }
    }

    /// Replaces the injected logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Registers the stats-update callback, replacing any previous one.
    pub fn set_on_stats_update<F>(&mut self, callback: F)
    where
        F: FnMut(&Statistics) + Send + 'static,
    {
        self.on_stats_update = Some(Box::new(callback));
    }

    /// Removes the stats-update callback.
    pub fn clear_on_stats_update(&mut self) {
        self.on_stats_update = None;
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> MeasurementMode {
        self.config.mode
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Starts accepting points.
    pub fn activate(&mut self) {
        if !self.is_active() {
            self.state = SessionState::Active;
            self.log(LogLevel::Debug, "activated");
        }
    }

    /// Stops accepting points. Recorded data is kept.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            self.state = SessionState::Inactive;
            self.log(LogLevel::Debug, "deactivated");
        }
    }

    #[must_use]
    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    #[must_use]
    pub fn segments(&self) -> &[MeasurementSegment] {
        &self.segments
    }

    #[must_use]
    pub fn last_segment(&self) -> Option<&MeasurementSegment> {
        self.segments.last()
    }

    /// Records a tapped world point.
    ///
    /// The point is dropped while the session is inactive, or in single-pair
    /// mode once two points are present. An accepted point that follows
    /// another one creates a segment to it.
    ///
    /// Rejection is decided before the point is inspected, so a dropped point
    /// is reported as [`RecordOutcome::Rejected`] whatever its coordinates.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if a point that would be stored has a
    /// non-finite coordinate.
    pub fn record_point(&mut self, point: Point3) -> Result<RecordOutcome> {
        if self
            .config
            .mode
            .point_limit()
            .is_some_and(|limit| self.points.len() >= limit)
        {
            self.log(LogLevel::Debug, "point dropped: measurement already complete");
            return Ok(RecordOutcome::Rejected(RejectReason::MeasurementComplete));
        }
        if !self.is_active() {
            self.log(LogLevel::Debug, "point dropped: session inactive");
            return Ok(RecordOutcome::Rejected(RejectReason::Inactive));
        }
        ensure_finite(&point, "measurement")?;

        let index = self.points.len();
        let previous = self.points.last().copied();
        self.points.push(MeasurementPoint::new(index, point));

        let outcome = match previous {
            Some(prev) => {
                let segment = MeasurementSegment::new(
                    prev.index(),
                    index,
                    distance_3d(prev.position(), &point),
                );
                self.segments.push(segment);
                self.log(
                    LogLevel::Debug,
                    &format!(
                        "segment {} -> {}: {}",
                        segment.start(),
                        segment.end(),
                        self.format_distance(segment.distance())
                    ),
                );
                RecordOutcome::Measured { index, segment }
            }
            None => {
                self.log(LogLevel::Debug, &format!("point {index} placed"));
                RecordOutcome::Placed { index }
            }
        };

        if self.config.mode == MeasurementMode::SinglePair
            && self.config.auto_deactivate
            && self.segments.len() == 1
        {
            self.deactivate();
        }

        self.notify();
        Ok(outcome)
    }

    /// Removes the most recent point, and the segment ending at it if any.
    ///
    /// Returns the removed point; `None` (and no notification) when empty.
    pub fn undo_last_point(&mut self) -> Option<MeasurementPoint> {
        let removed = self.points.pop()?;
        if self
            .segments
            .last()
            .is_some_and(|s| s.end() == removed.index())
        {
            self.segments.pop();
        }
        self.log(LogLevel::Debug, &format!("undid point {}", removed.index()));
        self.notify();
        Some(removed)
    }

    /// Removes every point and segment.
    pub fn clear_all(&mut self) {
        self.points.clear();
        self.segments.clear();
        self.log(LogLevel::Info, "cleared");
        self.notify();
    }

    #[must_use]
    pub fn units(&self) -> Units {
        self.units
    }

    /// Switches between metric and imperial display.
    pub fn toggle_units(&mut self) {
        self.set_units(self.units.toggled());
    }

    /// Sets the display units. Stored distances are unaffected.
    pub fn set_units(&mut self, units: Units) {
        if self.units == units {
            return;
        }
        self.units = units;
        self.log(LogLevel::Debug, &format!("units set to {units}"));
        self.notify();
    }

    /// Formats `meters` in the session's current units.
    #[must_use]
    pub fn format_distance(&self, meters: f64) -> String {
        self.units.format(meters)
    }

    /// Returns the current totals.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(self.points.len(), &self.segments, self.units)
    }

    /// Returns one formatted label per segment, anchored at its midpoint.
    #[must_use]
    pub fn segment_labels(&self) -> Vec<SegmentLabel> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, seg)| {
                let a = self.points.get(seg.start())?;
                let b = self.points.get(seg.end())?;
                Some(SegmentLabel {
                    segment: i,
                    anchor: midpoint(a.position(), b.position()),
                    text: self.format_distance(seg.distance()),
                })
            })
            .collect()
    }

    fn notify(&mut self) {
        if self.on_stats_update.is_none() {
            return;
        }
        let stats = self.statistics();
        if let Some(callback) = self.on_stats_update.as_mut() {
            callback(&stats);
        }
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.logger.log(level, COMPONENT, message);
    }
}
