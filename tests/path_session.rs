//! Tests that drive a path session end to end.

use std::f64::consts::PI;

use approach_path::math::{distance, Point2d, Vector2d};
use approach_path::{Entity, PathConfig, PathError, PathSession};
use assert_approx_eq::assert_approx_eq;

fn session(resolution: usize, clearance_radius: f64) -> PathSession {
    PathSession::new(PathConfig {
        curve_rate: 1.0,
        resolution,
        clearance_radius,
        removal_radius: 10.0,
    })
    .unwrap()
}

/// Source at (0, y) facing +x, target at (100, y) facing -x.
fn straight_session(y: f64, resolution: usize, clearance_radius: f64) -> PathSession {
    let mut session = session(resolution, clearance_radius);
    session.set_position(Entity::Source, Point2d::new(0.0, y));
    session.set_heading(Entity::Source, 0.0, Vector2d::new(1.0, 0.0));
    session.set_position(Entity::Target, Point2d::new(100.0, y));
    session.set_heading(Entity::Target, PI, Vector2d::new(-1.0, 0.0));
    session
}

/// Collinear, opposing tangents give evenly spaced points along the chord.
#[test]
fn straight_path_without_obstacles() {
    let session = straight_session(0.0, 4, 50.0);
    let samples = session.compute_path();

    assert_eq!(samples.len(), 4);
    let expected = [(0.25, 25.0), (0.5, 50.0), (0.75, 75.0), (1.0, 100.0)];
    for (sample, (t, x)) in samples.iter().zip(expected) {
        assert_eq!(sample.t, t);
        assert_approx_eq!(sample.pos.x, x, 1e-9);
        assert_approx_eq!(sample.pos.y, 0.0, 1e-9);
        assert!(!sample.flagged);
        assert_eq!(sample.obstacle, None);
    }
    assert_eq!(samples[1].pos, Point2d::new(50.0, 0.0));
}

/// A sample 5 units from an obstacle is pushed straight away to the clearance circle.
#[test]
fn sample_is_deflected_onto_clearance_circle() {
    let mut session = straight_session(5.0, 4, 10.0);
    session.add_obstacle(Point2d::new(50.0, 0.0));
    let samples = session.compute_path();

    let mid = &samples[1];
    assert_eq!(mid.raw_pos, Point2d::new(50.0, 5.0));
    assert!(mid.flagged);
    assert_eq!(mid.obstacle, Some(0));
    assert_approx_eq!(mid.obstacle_dist.unwrap(), 5.0);
    assert_approx_eq!(mid.pos.x, 50.0);
    assert_approx_eq!(mid.pos.y, 10.0);
    assert_approx_eq!(distance(mid.pos, Point2d::new(50.0, 0.0)), 10.0);

    for sample in [&samples[0], &samples[2], &samples[3]] {
        assert!(!sample.flagged);
        assert_eq!(sample.pos, sample.raw_pos);
        assert!(sample.obstacle_dist.unwrap() >= 10.0);
    }
}

/// A sample exactly on the clearance circle is left where it is.
#[test]
fn sample_on_clearance_boundary_is_untouched() {
    let mut session = straight_session(10.0, 4, 10.0);
    session.add_obstacle(Point2d::new(50.0, 0.0));
    let samples = session.compute_path();

    let mid = &samples[1];
    assert_eq!(mid.raw_pos, Point2d::new(50.0, 10.0));
    assert_eq!(mid.obstacle_dist, Some(10.0));
    assert!(!mid.flagged);
    assert_eq!(mid.obstacle, None);
    assert_eq!(mid.pos, mid.raw_pos);
}

/// A sample exactly on an obstacle centre is pushed along the path's normal.
#[test]
fn sample_on_obstacle_centre() {
    let mut session = straight_session(0.0, 4, 10.0);
    session.add_obstacle(Point2d::new(50.0, 0.0));
    let samples = session.compute_path();

    let mid = &samples[1];
    assert!(mid.flagged);
    assert_eq!(mid.obstacle_dist, Some(0.0));
    assert_approx_eq!(mid.pos.x, 50.0);
    assert_approx_eq!(mid.pos.y, 10.0);
    assert!(mid.pos.x.is_finite() && mid.pos.y.is_finite());
}

/// Deflected samples keep their order along the curve.
#[test]
fn deflection_keeps_parametric_order() {
    let mut session = straight_session(0.0, 25, 50.0);
    session.add_obstacle(Point2d::new(40.0, 10.0));
    session.add_obstacle(Point2d::new(70.0, -20.0));
    let samples = session.compute_path();

    assert_eq!(samples.len(), 25);
    assert!(samples.iter().any(|s| s.flagged));
    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.t, (i + 1) as f64 / 25.0);
        if let Some(index) = sample.obstacle {
            let centre = session.obstacles().get(index).unwrap().centre;
            assert_approx_eq!(distance(sample.pos, centre), 50.0, 1e-9);
        }
    }
}

#[test]
fn parallel_headings_have_no_control_point() {
    let mut session = session(25, 50.0);
    session.set_position(Entity::Target, Point2d::new(0.0, 10.0));
    session.set_heading(Entity::Target, PI, Vector2d::new(-1.0, 0.0));
    assert!(matches!(
        session.compute_control_point(),
        Err(PathError::NoUniqueIntersection)
    ));
}

#[test]
fn control_point_of_crossing_headings() {
    let mut session = session(25, 50.0);
    session.set_position(Entity::Source, Point2d::new(400.0, 240.0));
    session.aim(Entity::Source, Point2d::new(500.0, 340.0)).unwrap();
    session.set_position(Entity::Target, Point2d::new(400.0, 360.0));
    session.aim(Entity::Target, Point2d::new(500.0, 260.0)).unwrap();

    let point = session.compute_control_point().unwrap();
    assert_approx_eq!(point.x, 460.0, 1e-9);
    assert_approx_eq!(point.y, 300.0, 1e-9);
}

#[test]
fn coincident_ends_give_a_stationary_path() {
    let mut session = session(5, 50.0);
    session.set_position(Entity::Source, Point2d::new(3.0, 4.0));
    session.set_position(Entity::Target, Point2d::new(3.0, 4.0));
    assert_eq!(session.scale_hint(), 0.0);
    for sample in session.compute_path() {
        assert_approx_eq!(sample.pos.x, 3.0, 1e-12);
        assert_approx_eq!(sample.pos.y, 4.0, 1e-12);
    }
    assert!(matches!(
        session.aim(Entity::Source, Point2d::new(3.0, 4.0)),
        Err(PathError::CoincidentPoints)
    ));
}
