use crate::geometry::Triangle;

use super::{IsEquilateral, PositionOffset};

/// Rates a listening triangle on a 0–100 scale.
///
/// The actual triangle (both speakers plus the current listener) must first
/// pass an [`IsEquilateral`] shape gate at `shape_tolerance`; failing it scores
/// `0`. Past the gate the score falls linearly with the listener's distance
/// from the optimum, reaching `0` at `score_ceiling` meters.
///
/// The gate and the distance score are independent: with the usual
/// `shape_tolerance` of `1.0` almost every triangle passes, so in practice the
/// distance alone decides the score.
pub struct TriangleQuality<'a> {
    triangle: &'a Triangle,
    shape_tolerance: f64,
    score_ceiling: f64,
}

impl<'a> TriangleQuality<'a> {
    /// Creates a new `TriangleQuality` query.
    #[must_use]
    pub fn new(triangle: &'a Triangle, shape_tolerance: f64, score_ceiling: f64) -> Self {
        Self {
            triangle,
            shape_tolerance,
            score_ceiling,
        }
    }

    /// Executes the query, returning a score in `0..=100`.
    #[must_use]
    pub fn execute(&self) -> u8 {
        if !IsEquilateral::new(self.triangle.actual_vertices(), self.shape_tolerance).execute() {
            return 0;
        }
        // The optimal threshold plays no part in the score.
        let distance = PositionOffset::new(self.triangle, 0.0).execute().distance;
        score_from_distance(distance, self.score_ceiling)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn score_from_distance(distance: f64, ceiling: f64) -> u8 {
    if ceiling <= 0.0 {
        return 0;
    }
    let score = (100.0 * (1.0 - distance / ceiling).max(0.0)).round();
    // Clamped to 0..=100 above, so the cast is exact.
    score.clamp(0.0, 100.0) as u8
}
