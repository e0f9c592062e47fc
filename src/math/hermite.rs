use super::curve::ParametricCurve2d;
use super::{Point2d, Vector2d};
use crate::util::Interval;
use crate::MobileState;
use cgmath::prelude::*;

/// Evaluates the cubic Hermite basis functions `[h00, h10, h01, h11]` at `t`.
#[inline(always)]
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// A cubic Hermite curve between two end points, parameterised over `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HermiteCurve2d {
    /// The start and end points.
    points: [Point2d; 2],
    /// The tangents at the start and end points.
    tangents: [Vector2d; 2],
}

impl HermiteCurve2d {
    /// Creates a curve from its end points and end tangents.
    pub const fn new(points: [Point2d; 2], tangents: [Vector2d; 2]) -> Self {
        Self { points, tangents }
    }

    /// Creates the curve running from `source` to `target`.
    ///
    /// The target's tangent faces away from the target, so it is negated
    /// to make the curve arrive from the opposite side.
    pub fn between(source: &MobileState, target: &MobileState, scale_hint: f64) -> Self {
        Self {
            points: [source.pos, target.pos],
            tangents: [scale_hint * source.tangent, -scale_hint * target.tangent],
        }
    }
}

impl ParametricCurve2d for HermiteCurve2d {
    fn sample(&self, t: f64) -> Point2d {
        let [h00, h10, h01, h11] = hermite_basis(t);
        Point2d::from_vec(
            h00 * self.points[0].to_vec()
                + h10 * self.tangents[0]
                + h01 * self.points[1].to_vec()
                + h11 * self.tangents[1],
        )
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::unit()
    }

    fn sample_dt(&self, t: f64) -> Vector2d {
        let t2 = t * t;
        (6.0 * t2 - 6.0 * t) * self.points[0].to_vec()
            + (3.0 * t2 - 4.0 * t + 1.0) * self.tangents[0]
            + (-6.0 * t2 + 6.0 * t) * self.points[1].to_vec()
            + (3.0 * t2 - 2.0 * t) * self.tangents[1]
    }
}

/// Evaluates the path between `source` and `target` at `t`.
///
/// Values of `t` outside `[0, 1]` (including NaN) yield the origin rather
/// than an extrapolated point.
pub fn evaluate(source: &MobileState, target: &MobileState, scale_hint: f64, t: f64) -> Point2d {
    let curve = HermiteCurve2d::between(source, target, scale_hint);
    if !curve.bounds().contains(t) {
        return Point2d::origin();
    }
    curve.sample(t)
}
