pub mod distance_3d;

pub use distance_3d::{distance_3d, ensure_finite, horizontal_perpendicular, midpoint, unit_direction};

/// 3D world point, in meters. `y` is up.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
