use crate::geometry::Triangle;
use crate::math::{distance_3d, horizontal_perpendicular, midpoint, Point3};

/// Solves the equilateral listening triangle for a speaker pair.
///
/// The optimal listener sits on the horizontal perpendicular bisector of the
/// speaker baseline, `side_length * sqrt(3) / 2` away from its midpoint, at the
/// height of the first speaker.
///
/// Two apexes satisfy that description, one on each side of the baseline.
/// This operation always takes the one obtained by rotating
/// `speaker2 - speaker1` a quarter turn about the up axis, so swapping the
/// speakers mirrors the solution. No rule picks a "correct" side, such as the
/// side nearest the current listener; callers that need one must order the
/// speakers accordingly.
pub struct MakeOptimalTriangle {
    speakers: [Point3; 2],
    listener: Point3,
}

impl MakeOptimalTriangle {
    /// Creates a new `MakeOptimalTriangle` operation.
    #[must_use]
    pub fn new(speakers: [Point3; 2], listener: Point3) -> Self {
        Self { speakers, listener }
    }

    /// Executes the operation, returning the solved triangle.
    #[must_use]
    pub fn execute(&self) -> Triangle {
        let [speaker1, speaker2] = self.speakers;

        let side_length = distance_3d(&speaker1, &speaker2);
        let midpoint = midpoint(&speaker1, &speaker2);
        let height = side_length * 3.0_f64.sqrt() / 2.0;

        let perp = horizontal_perpendicular(&(speaker2 - speaker1)) * height;
        let mut optimal_listener = midpoint + perp;
        // Keep the apex planar with the speakers.
        optimal_listener.y = speaker1.y;

        Triangle {
            speaker1,
            speaker2,
            optimal_listener,
            current_listener: self.listener,
            side_length,
            midpoint,
        }
    }
}
