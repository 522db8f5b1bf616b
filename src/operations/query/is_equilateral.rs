use crate::math::{distance_3d, Point3, TOLERANCE};

/// Tests whether three points form an (approximately) equilateral triangle.
///
/// With `avg` the mean side length, the triangle passes when
/// `max(|side - avg|) / avg <= tolerance`. A triangle whose sides are all
/// (near) zero never passes.
pub struct IsEquilateral {
    vertices: [Point3; 3],
    tolerance: f64,
}

impl IsEquilateral {
    /// Creates a new `IsEquilateral` query.
    #[must_use]
    pub fn new(vertices: [Point3; 3], tolerance: f64) -> Self {
        Self {
            vertices,
            tolerance,
        }
    }

    /// Returns the largest relative deviation of a side from the mean side
    /// length, or `None` for a degenerate (zero-perimeter) triangle.
    #[must_use]
    pub fn relative_deviation(&self) -> Option<f64> {
        let [a, b, c] = &self.vertices;
        let sides = [distance_3d(a, b), distance_3d(b, c), distance_3d(c, a)];
        let avg = sides.iter().sum::<f64>() / 3.0;
        if avg < TOLERANCE {
            return None;
        }
        let max_dev = sides
            .iter()
            .map(|s| (s - avg).abs())
            .fold(0.0_f64, f64::max);
        Some(max_dev / avg)
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.relative_deviation()
            .is_some_and(|dev| dev <= self.tolerance)
    }
}
