use super::{heading_vector, Point2d};
use crate::{MobileState, PathError};

/// Below this magnitude of `sin(target.heading - source.heading)`
/// the headings are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Finds where the lines through the source and target heading rays cross.
///
/// The result is the apex of the triangle drawn between the two states.
/// It does not influence the path itself.
///
/// # Errors
/// Returns [PathError::NoUniqueIntersection] if the headings are parallel,
/// including identical and exactly opposite headings.
pub fn control_point(source: &MobileState, target: &MobileState) -> Result<Point2d, PathError> {
    let d1 = heading_vector(source.heading);
    let d2 = heading_vector(target.heading);
    let denom = d1.perp_dot(d2);
    if denom.abs() < PARALLEL_EPSILON {
        return Err(PathError::NoUniqueIntersection);
    }
    let s = (target.pos - source.pos).perp_dot(d2) / denom;
    let point = source.pos + d1 * s;
    if !(point.x.is_finite() && point.y.is_finite()) {
        return Err(PathError::NoUniqueIntersection);
    }
    Ok(point)
}
