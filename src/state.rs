use crate::math::{angle_and_normal, heading_vector, Point2d, Vector2d};
use crate::PathError;
use serde::{Deserialize, Serialize};

/// The position and facing of one end of a path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobileState {
    /// The position in world space.
    pub pos: Point2d,
    /// The facing direction in radians.
    pub heading: f64,
    /// The tangent unit vector used to shape the path at this end.
    /// Usually derived from `heading`, but may be set independently.
    pub tangent: Vector2d,
}

/// Selects one of the two ends of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    /// The end the path starts from.
    Source,
    /// The end the path arrives at.
    Target,
}

impl MobileState {
    /// Creates a state with its tangent derived from `heading`.
    pub fn new(pos: Point2d, heading: f64) -> Self {
        Self {
            pos,
            heading,
            tangent: heading_vector(heading),
        }
    }

    /// Creates a state at `pos` facing toward the point `toward`.
    pub fn aimed_at(pos: Point2d, toward: Point2d) -> Result<Self, PathError> {
        let (heading, tangent) = angle_and_normal(pos, toward)?;
        Ok(Self { pos, heading, tangent })
    }

    /// Returns a copy of this state with the given tangent.
    pub fn with_tangent(self, tangent: Vector2d) -> Self {
        Self { tangent, ..self }
    }
}

impl Default for MobileState {
    fn default() -> Self {
        Self::new(Point2d::new(0.0, 0.0), 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn tangent_follows_heading() {
        let state = MobileState::new(Point2d::new(3.0, 4.0), 0.5 * PI);
        assert_approx_eq!(state.tangent.x, 0.0);
        assert_approx_eq!(state.tangent.y, 1.0);
    }

    #[test]
    fn aimed_at_point() {
        let state = MobileState::aimed_at(Point2d::new(1.0, 1.0), Point2d::new(1.0, -9.0)).unwrap();
        assert_eq!(state.pos, Point2d::new(1.0, 1.0));
        assert_approx_eq!(state.heading, -0.5 * PI);
        assert_approx_eq!(state.tangent.y, -1.0);

        let p = Point2d::new(2.0, 2.0);
        assert!(MobileState::aimed_at(p, p).is_err());
    }
}
