use crate::math::Point3;

/// Solved listening triangle.
///
/// When both speakers share the same height, `speaker1`, `speaker2` and
/// `optimal_listener` form an equilateral triangle of side `side_length`.
/// The apex is always placed at `speaker1`'s height, so with speakers at
/// different heights it is only equidistant from them in the horizontal
/// (x, z) projection. Speakers that coincide horizontally collapse the apex
/// onto the midpoint's x and z. `current_listener` is the position the
/// listener actually occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// First retained speaker.
    pub speaker1: Point3,
    /// Second retained speaker.
    pub speaker2: Point3,
    /// Apex of the equilateral triangle built on the speaker baseline.
    pub optimal_listener: Point3,
    /// Where the listener currently is.
    pub current_listener: Point3,
    /// Distance between the two speakers.
    pub side_length: f64,
    /// Midpoint of the speaker baseline.
    pub midpoint: Point3,
}

impl Triangle {
    /// Returns the vertices formed by the speakers and the *current* listener.
    #[must_use]
    pub fn actual_vertices(&self) -> [Point3; 3] {
        [self.speaker1, self.speaker2, self.current_listener]
    }
}
