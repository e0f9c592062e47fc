//! Auxiliary geometry recorded while computing a path, for display.
//!
//! Recording only happens with the `debug` feature; otherwise every
//! call is a no-op and the shapes are never built.

use crate::math::Point2d;
use serde::Serialize;

/// A piece of auxiliary geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DebugShape {
    /// The triangle between the source, the control point and the target.
    Triangle {
        source: Point2d,
        apex: Point2d,
        target: Point2d,
    },
    /// The clearance circle around an obstacle that deflected a sample.
    Clearance {
        obstacle: usize,
        centre: Point2d,
        radius: f64,
    },
    /// The push applied to a sample.
    Deflection { t: f64, from: Point2d, to: Point2d },
}

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<DebugShape>> = Default::default();
);

#[allow(unused)]
fn record(shape: impl FnOnce() -> DebugShape) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| frame.borrow_mut().push(shape()))
}

pub(crate) fn debug_triangle(source: Point2d, apex: Point2d, target: Point2d) {
    record(|| DebugShape::Triangle { source, apex, target })
}

pub(crate) fn debug_clearance(obstacle: usize, centre: Point2d, radius: f64) {
    record(|| DebugShape::Clearance { obstacle, centre, radius })
}

pub(crate) fn debug_deflection(t: f64, from: Point2d, to: Point2d) {
    record(|| DebugShape::Deflection { t, from, to })
}

/// Takes the shapes recorded on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> Vec<DebugShape> {
    DEBUG_FRAME.with(|frame| frame.take())
}
