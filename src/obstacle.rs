use crate::math::{distance, Point2d};
use serde::{Deserialize, Serialize};

/// A circular obstacle. Its radius is the clearance radius of whichever
/// computation it takes part in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// The centre of the obstacle.
    pub centre: Point2d,
}

/// The result of a nearest obstacle query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestObstacle {
    /// The index of the obstacle in its field.
    pub index: usize,
    /// The distance from the query point to the obstacle's centre.
    pub distance: f64,
}

/// An ordered collection of obstacles.
///
/// Insertion order is preserved and coincident obstacles are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Creates an empty obstacle field.
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends an obstacle centred at `point`.
    pub fn add(&mut self, point: Point2d) {
        self.obstacles.push(Obstacle { centre: point });
    }

    /// Finds the obstacle closest to `point`.
    ///
    /// When several obstacles are equally close, the one added first wins.
    /// Returns `None` only if the field is empty.
    pub fn nearest(&self, point: Point2d) -> Option<NearestObstacle> {
        let mut nearest: Option<NearestObstacle> = None;
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            let distance = distance(obstacle.centre, point);
            match nearest {
                Some(n) if distance >= n.distance => {}
                _ => nearest = Some(NearestObstacle { index, distance }),
            }
        }
        nearest
    }

    /// Removes the obstacle nearest to `point` if it lies within `radius` (inclusive).
    ///
    /// Returns the removed obstacle, if any.
    pub fn remove_nearest(&mut self, point: Point2d, radius: f64) -> Option<Obstacle> {
        let nearest = self.nearest(point)?;
        if nearest.distance <= radius {
            Some(self.obstacles.remove(nearest.index))
        } else {
            None
        }
    }

    /// Removes all obstacles.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Gets the obstacle at the given index.
    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// The number of obstacles.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Returns an iterator over the obstacles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

impl FromIterator<Point2d> for ObstacleField {
    fn from_iter<I: IntoIterator<Item = Point2d>>(iter: I) -> Self {
        Self {
            obstacles: iter.into_iter().map(|centre| Obstacle { centre }).collect(),
        }
    }
}
