use crate::geometry::Triangle;
use crate::math::{distance_3d, unit_direction, Vector3};

/// How far, and in which direction, the listener is from the optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionError {
    /// Distance from the current listener to the optimal listener, in meters.
    pub distance: f64,
    /// Unit vector from the current listener towards the optimum, or zero
    /// when the two coincide.
    pub direction: Vector3,
    /// Whether `distance` is below the optimal threshold.
    pub is_optimal: bool,
}

/// Measures the listener's offset from the optimal position of a triangle.
pub struct PositionOffset<'a> {
    triangle: &'a Triangle,
    optimal_threshold: f64,
}

impl<'a> PositionOffset<'a> {
    /// Creates a new `PositionOffset` query. Offsets strictly below
    /// `optimal_threshold` meters count as optimal.
    #[must_use]
    pub fn new(triangle: &'a Triangle, optimal_threshold: f64) -> Self {
        Self {
            triangle,
            optimal_threshold,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> PositionError {
        let current = &self.triangle.current_listener;
        let optimal = &self.triangle.optimal_listener;
        let distance = distance_3d(optimal, current);
        PositionError {
            distance,
            direction: unit_direction(current, optimal),
            is_optimal: distance < self.optimal_threshold,
        }
    }
}
