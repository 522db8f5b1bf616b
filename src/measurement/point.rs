use crate::math::Point3;

/// A placed measurement point. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementPoint {
    index: usize,
    position: Point3,
}

impl MeasurementPoint {
    pub(crate) fn new(index: usize, position: Point3) -> Self {
        Self { index, position }
    }

    /// Sequence index within the session, starting at 0.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }
}

/// Distance between two consecutively placed points. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementSegment {
    start: usize,
    end: usize,
    distance: f64,
}

impl MeasurementSegment {
    pub(crate) fn new(start: usize, end: usize, distance: f64) -> Self {
        Self {
            start,
            end,
            distance,
        }
    }

    /// Sequence index of the earlier endpoint.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Sequence index of the later endpoint.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Euclidean length in meters.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Formatted distance label anchored at a segment's midpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentLabel {
    /// Position of the labelled segment in [`MeasurementSession::segments`](super::MeasurementSession::segments).
    pub segment: usize,
    pub anchor: Point3,
    pub text: String,
}
