use super::{Point2d, Vector2d};
use crate::PathError;
use cgmath::prelude::*;

/// Computes the Euclidean distance between two points.
pub fn distance(a: Point2d, b: Point2d) -> f64 {
    (b - a).magnitude()
}

/// Computes the angle of the vector from `a` to `b`, along with
/// the unit vector pointing in that direction.
///
/// # Errors
/// Returns [PathError::CoincidentPoints] if the points are too close
/// together for their direction to be representable.
pub fn angle_and_normal(a: Point2d, b: Point2d) -> Result<(f64, Vector2d), PathError> {
    let diff = b - a;
    let mag = diff.magnitude();
    if mag == 0.0 {
        return Err(PathError::CoincidentPoints);
    }
    let normal = diff / mag;
    if !(normal.x.is_finite() && normal.y.is_finite()) {
        return Err(PathError::CoincidentPoints);
    }
    Ok((diff.y.atan2(diff.x), normal))
}

/// Computes the perpendicular distance from `p0` to the infinite line through `p1` and `p2`.
///
/// # Errors
/// Returns [PathError::DegenerateLine] if `p1` and `p2` are too close
/// together to define a line.
pub fn point_to_line_distance(p1: Point2d, p2: Point2d, p0: Point2d) -> Result<f64, PathError> {
    let len = distance(p1, p2);
    if len == 0.0 {
        return Err(PathError::DegenerateLine);
    }
    let top = ((p2.y - p1.y) * p0.x - (p2.x - p1.x) * p0.y + p2.x * p1.y - p2.y * p1.x).abs();
    let dist = top / len;
    if !dist.is_finite() {
        return Err(PathError::DegenerateLine);
    }
    Ok(dist)
}

/// Rotates a vector 90 degrees counter-clockwise in a y-up frame
/// (clockwise on a y-down screen).
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

/// Returns the unit vector for the given heading in radians.
pub fn heading_vector(heading: f64) -> Vector2d {
    Vector2d::new(heading.cos(), heading.sin())
}
