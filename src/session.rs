use crate::debug::debug_triangle;
use crate::math::{control_point, distance, Point2d, Vector2d};
use crate::sampler::{sample_path, PathSample};
use crate::{Entity, MobileState, Obstacle, ObstacleField, PathConfig, PathError};

/// The inputs of an interactive path computation.
///
/// A session is owned by its caller, which edits the source, target and
/// obstacles between calls to [PathSession::compute_path].
#[derive(Clone, Debug, Default)]
pub struct PathSession {
    /// The computation constants.
    config: PathConfig,
    /// The state the path starts from.
    source: MobileState,
    /// The state the path arrives at.
    target: MobileState,
    /// The obstacles to steer around.
    obstacles: ObstacleField,
}

impl PathSession {
    /// Creates a new session with both ends at the origin, facing along the x-axis.
    pub fn new(config: PathConfig) -> Result<Self, PathError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Creates a new session with the given ends.
    pub fn with_states(
        config: PathConfig,
        source: MobileState,
        target: MobileState,
    ) -> Result<Self, PathError> {
        let mut session = Self::new(config)?;
        session.source = source;
        session.target = target;
        Ok(session)
    }

    /// Gets the session's configuration.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Gets the state of one end of the path.
    pub fn state(&self, entity: Entity) -> &MobileState {
        match entity {
            Entity::Source => &self.source,
            Entity::Target => &self.target,
        }
    }

    fn state_mut(&mut self, entity: Entity) -> &mut MobileState {
        match entity {
            Entity::Source => &mut self.source,
            Entity::Target => &mut self.target,
        }
    }

    /// Moves one end of the path, preserving its heading.
    pub fn set_position(&mut self, entity: Entity, pos: Point2d) {
        log::debug!("{entity:?} moved to ({}, {})", pos.x, pos.y);
        self.state_mut(entity).pos = pos;
    }

    /// Sets the heading and tangent of one end of the path, preserving its position.
    pub fn set_heading(&mut self, entity: Entity, heading: f64, tangent: Vector2d) {
        log::debug!("{entity:?} heading set to {heading}");
        let state = self.state_mut(entity);
        state.heading = heading;
        state.tangent = tangent;
    }

    /// Turns one end of the path to face the point `toward`.
    ///
    /// # Errors
    /// Returns [PathError::CoincidentPoints] and leaves the state unchanged
    /// if `toward` is the entity's own position.
    pub fn aim(&mut self, entity: Entity, toward: Point2d) -> Result<(), PathError> {
        let aimed = MobileState::aimed_at(self.state(entity).pos, toward)?;
        self.set_heading(entity, aimed.heading, aimed.tangent);
        Ok(())
    }

    /// Gets the obstacles.
    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Adds an obstacle centred at `point`.
    pub fn add_obstacle(&mut self, point: Point2d) {
        self.obstacles.add(point);
        log::debug!("added obstacle {} at ({}, {})", self.obstacles.len() - 1, point.x, point.y);
    }

    /// Removes the obstacle nearest to `point`, if it is within the configured removal radius.
    pub fn remove_nearest_obstacle(&mut self, point: Point2d) -> Option<Obstacle> {
        let removed = self
            .obstacles
            .remove_nearest(point, self.config.removal_radius);
        if let Some(obstacle) = &removed {
            log::debug!("removed obstacle at ({}, {})", obstacle.centre.x, obstacle.centre.y);
        }
        removed
    }

    /// Removes all obstacles.
    pub fn clear_obstacles(&mut self) {
        log::debug!("cleared {} obstacles", self.obstacles.len());
        self.obstacles.clear();
    }

    /// The magnitude applied to the end tangents of the path.
    pub fn scale_hint(&self) -> f64 {
        distance(self.source.pos, self.target.pos) * self.config.curve_rate
    }

    /// Computes the path from the source to the target.
    pub fn compute_path(&self) -> Vec<PathSample> {
        let samples = sample_path(&self.source, &self.target, &self.obstacles, &self.config);
        log::debug!(
            "computed path with {} samples, {} deflected",
            samples.len(),
            samples.iter().filter(|s| s.flagged).count()
        );
        samples
    }

    /// Computes the intersection of the source and target heading rays.
    pub fn compute_control_point(&self) -> Result<Point2d, PathError> {
        let point = control_point(&self.source, &self.target)?;
        debug_triangle(self.source.pos, point, self.target.pos);
        Ok(point)
    }
}
