use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Returns the Euclidean distance between `a` and `b`.
///
/// Symmetric in its arguments and never negative; coincident points give `0.0`.
#[must_use]
pub fn distance_3d(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Returns the unit vector pointing from `from` towards `to`.
///
/// Coincident points yield the zero vector rather than a NaN direction.
#[must_use]
pub fn unit_direction(from: &Point3, to: &Point3) -> Vector3 {
    let delta = to - from;
    let len = delta.norm();
    if len < TOLERANCE {
        return Vector3::zeros();
    }
    delta / len
}

/// Returns the unit perpendicular to `d` within the horizontal (x, z) plane.
///
/// The perpendicular is `(-d.z, 0, d.x)` normalized, i.e. `d` rotated a quarter
/// turn about the up axis. The sign is fixed by the orientation of `d`, so
/// swapping the endpoints that produced `d` flips the result.
///
/// A vector with no horizontal extent yields the zero vector.
#[must_use]
pub fn horizontal_perpendicular(d: &Vector3) -> Vector3 {
    let perp = Vector3::new(-d.z, 0.0, d.x);
    let len = perp.norm();
    if len < TOLERANCE {
        return Vector3::zeros();
    }
    perp / len
}

/// Checks that every coordinate of `point` is finite.
///
/// # Errors
///
/// Returns [`GeometryError::NonFiniteCoordinate`] tagged with `role` if any
/// coordinate is NaN or infinite.
pub fn ensure_finite(point: &Point3, role: &'static str) -> Result<()> {
    if point.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate { role }.into())
    }
}
