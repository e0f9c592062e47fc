//! Sampling of a path and deflection of samples away from obstacles.

use crate::debug::{debug_clearance, debug_deflection};
use crate::math::{distance, rot90, HermiteCurve2d, ParametricCurve2d, Point2d, Vector2d};
use crate::{MobileState, ObstacleField, PathConfig};
use cgmath::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single point of a computed path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    /// The curve parameter the sample was taken at.
    pub t: f64,
    /// The position of the sample, after any deflection.
    pub pos: Point2d,
    /// The position of the sample on the curve, before deflection.
    pub raw_pos: Point2d,
    /// Whether the raw position was inside the clearance radius of an obstacle.
    pub flagged: bool,
    /// The index of the obstacle that caused the deflection, if flagged.
    pub obstacle: Option<usize>,
    /// The distance from the raw position to the nearest obstacle,
    /// if there are any obstacles.
    pub obstacle_dist: Option<f64>,
}

/// Samples the path between `source` and `target`, pushing samples out of
/// the clearance radius of the obstacles.
pub fn sample_path(
    source: &MobileState,
    target: &MobileState,
    obstacles: &ObstacleField,
    config: &PathConfig,
) -> Vec<PathSample> {
    let scale_hint = distance(source.pos, target.pos) * config.curve_rate;
    let curve = HermiteCurve2d::between(source, target, scale_hint);
    sample_curve(&curve, obstacles, config.resolution, config.clearance_radius)
}

/// Samples a curve at `resolution` evenly spaced parameters, excluding the start.
///
/// Each sample within `clearance_radius` of its nearest obstacle is pushed
/// radially outward onto the clearance circle. This is a single local pass:
/// a deflected sample is not checked again, so it may still be within the
/// clearance radius of a different obstacle.
pub fn sample_curve(
    curve: &impl ParametricCurve2d,
    obstacles: &ObstacleField,
    resolution: usize,
    clearance_radius: f64,
) -> Vec<PathSample> {
    let bounds = curve.bounds();
    (1..=resolution)
        .map(|i| bounds.lerp(i as f64 / resolution as f64))
        .map(|t| {
            let raw_pos = curve.sample(t);
            let nearest = obstacles.nearest(raw_pos);
            let mut sample = PathSample {
                t,
                pos: raw_pos,
                raw_pos,
                flagged: false,
                obstacle: None,
                obstacle_dist: nearest.map(|n| n.distance),
            };
            let Some(nearest) = nearest else {
                return sample;
            };
            if nearest.distance < clearance_radius {
                let Some(obstacle) = obstacles.get(nearest.index) else {
                    return sample;
                };
                sample.flagged = true;
                sample.obstacle = Some(nearest.index);
                sample.pos = deflect(
                    raw_pos,
                    obstacle.centre,
                    clearance_radius,
                    || rot90(curve.sample_dt(t)),
                );
                debug_clearance(nearest.index, obstacle.centre, clearance_radius);
                debug_deflection(t, raw_pos, sample.pos);
                log::trace!(
                    "deflected sample at t={t:.3} from {:?} to {:?} (obstacle {})",
                    raw_pos,
                    sample.pos,
                    nearest.index
                );
            }
            sample
        })
        .collect()
}

/// Pushes `point` directly away from `centre` so that it lies `radius` from it.
///
/// If `point` coincides with `centre` the push follows `fallback` instead,
/// or the positive x-axis if that is zero too.
pub fn deflect(
    point: Point2d,
    centre: Point2d,
    radius: f64,
    fallback: impl FnOnce() -> Vector2d,
) -> Point2d {
    let offset = point - centre;
    let dist = offset.magnitude();
    let dir = if dist > 0.0 {
        offset / dist
    } else {
        let dir = fallback();
        if dir.magnitude2() > 0.0 {
            dir.normalize()
        } else {
            Vector2d::unit_x()
        }
    };
    point + dir * (radius - dist)
}

/// Computes the length of the polyline from `start` through each sample.
pub fn path_length(start: Point2d, samples: &[PathSample]) -> f64 {
    std::iter::once(start)
        .chain(samples.iter().map(|s| s.pos))
        .tuple_windows()
        .map(|(a, b)| distance(a, b))
        .sum()
}
