use crate::{
    collision::{collision_direction, penetration, Axis, CollisionDirection, AABB},
    config::{CollisionConfig, ConfigError},
    error::CollisionError,
    objects::KinematicBody,
    shapes::{Bounded, Collider},
};

/// Sides of a body that ended a step flush against an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Contacts {
    fn record(&mut self, direction: CollisionDirection) {
        match direction {
            CollisionDirection::Left => self.left = true,
            CollisionDirection::Right => self.right = true,
            CollisionDirection::Top => self.top = true,
            CollisionDirection::Bottom => self.bottom = true,
        }
    }

    /// True when the body came to rest on top of something.
    pub fn on_ground(&self) -> bool {
        self.bottom
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Static obstacles for one simulation step, plus the movement tunables.
///
/// The world never stores bodies: the stepping driver owns them and hands
/// each one to [`CollisionWorld::step`].
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    pub obstacles: Vec<Collider>,
    pub config: CollisionConfig,
}

impl CollisionWorld {
    /// Creates a new, empty world with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world, rejecting out-of-range settings.
    pub fn with_config(config: CollisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            obstacles: Vec::new(),
            config,
        })
    }

    /// Adds an obstacle and returns its index.
    pub fn add_obstacle(&mut self, obstacle: impl Into<Collider>) -> usize {
        let index = self.obstacles.len();
        self.obstacles.push(obstacle.into());
        index
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Indices of the obstacles `collider` currently overlaps.
    pub fn overlapping<'a>(&'a self, collider: &'a Collider) -> impl Iterator<Item = usize> + 'a {
        self.obstacles
            .iter()
            .enumerate()
            .filter(move |(_, obstacle)| collider.is_colliding_with(obstacle))
            .map(|(index, _)| index)
    }

    /// Moves `body` by its velocity for `dt` seconds, stopping it flush
    /// against obstacles.
    ///
    /// Horizontal movement is applied and resolved first, then vertical
    /// movement, then up to `config.correction_passes` passes that clean up
    /// overlaps introduced by earlier snaps. The collider is re-derived
    /// after every correction.
    ///
    /// The body is only written back once the whole step succeeded; on error
    /// it keeps its previous state.
    pub fn step(&self, body: &mut KinematicBody, dt: f64) -> Result<Contacts, CollisionError> {
        self.config
            .validate()
            .map_err(|e| CollisionError::InvalidConfig(e.to_string()))?;
        let dt = if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.config.max_delta_time)
        };
        let mut moved = *body;
        let mut contacts = Contacts::default();

        moved.position.x += moved.velocity.x * dt;
        self.resolve_axis(&mut moved, Axis::Horizontal, &mut contacts)?;

        moved.position.y += moved.velocity.y * dt;
        self.resolve_axis(&mut moved, Axis::Vertical, &mut contacts)?;

        for _ in 0..self.config.correction_passes {
            if !self.correct_overlaps(&mut moved, &mut contacts)? {
                break;
            }
        }

        // Also covers a world with no obstacles, where no pass built a collider
        moved.collider()?;
        *body = moved;
        Ok(contacts)
    }

    /// Snaps the body out of every obstacle whose resolved direction lies on
    /// `axis`. Hits resolved on the other axis are left to the next pass.
    fn resolve_axis(
        &self,
        body: &mut KinematicBody,
        axis: Axis,
        contacts: &mut Contacts,
    ) -> Result<(), CollisionError> {
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            let mover = Collider::from(body.collider()?);
            if !mover.is_colliding_with(obstacle) {
                continue;
            }
            let direction = collision_direction(&mover, obstacle)?;
            if direction.axis() != axis {
                continue;
            }
            self.snap(body, direction, &obstacle.bounding_box(), index);
            contacts.record(direction);
        }
        Ok(())
    }

    /// Returns true if any overlap had to be corrected.
    fn correct_overlaps(
        &self,
        body: &mut KinematicBody,
        contacts: &mut Contacts,
    ) -> Result<bool, CollisionError> {
        let mut corrected = false;
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            let mover = Collider::from(body.collider()?);
            if !mover.is_colliding_with(obstacle) {
                continue;
            }
            let obstacle_box = obstacle.bounding_box();
            let hit = penetration(&mover.bounding_box(), &obstacle_box)?;
            self.snap(body, hit.direction, &obstacle_box, index);
            contacts.record(hit.direction);
            corrected = true;
        }
        Ok(corrected)
    }

    /// Places the body's `direction` side flush against the opposing edge of
    /// `obstacle` and zeroes velocity on that axis.
    fn snap(
        &self,
        body: &mut KinematicBody,
        direction: CollisionDirection,
        obstacle: &AABB,
        index: usize,
    ) {
        let before = body.position;
        match direction {
            CollisionDirection::Right => {
                body.position.x = obstacle.min.x - body.size.x;
                body.velocity.x = 0.0;
            }
            CollisionDirection::Left => {
                body.position.x = obstacle.max.x;
                body.velocity.x = 0.0;
            }
            CollisionDirection::Bottom => {
                body.position.y = obstacle.min.y - body.size.y;
                body.velocity.y = 0.0;
            }
            CollisionDirection::Top => {
                body.position.y = obstacle.max.y;
                body.velocity.y = 0.0;
            }
        }

        if self.config.log_contacts {
            log::trace!(
                "obstacle {index}: {direction:?} contact, moved {:?} -> {:?}",
                before,
                body.position
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Circle, Rectangle};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(x, y, w, h).unwrap()
    }

    fn body(x: f64, y: f64, w: f64, h: f64, velocity: Vec2) -> KinematicBody {
        KinematicBody {
            velocity,
            ..KinematicBody::new(Vec2::new(x, y), Vec2::new(w, h))
        }
    }

    #[test]
    fn test_world_new() {
        let world = CollisionWorld::new();
        assert!(world.obstacles.is_empty());
        assert_eq!(world.config, CollisionConfig::default());
    }

    #[test]
    fn test_add_obstacle_and_clear() {
        let mut world = CollisionWorld::new();
        let idx1 = world.add_obstacle(rect(0.0, 0.0, 1.0, 1.0));
        let idx2 = world.add_obstacle(Circle::new(Vec2::new(5.0, 5.0), 1.0).unwrap());
        assert_eq!((idx1, idx2), (0, 1));
        world.clear();
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_overlapping() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 0.0, 4.0, 4.0));
        world.add_obstacle(rect(10.0, 0.0, 4.0, 4.0));
        world.add_obstacle(Circle::new(Vec2::new(3.0, 3.0), 1.0).unwrap());
        let query: Collider = rect(2.0, 2.0, 1.0, 1.0).into();
        let hits: Vec<usize> = world.overlapping(&query).collect();
        assert_eq!(hits, vec![0, 2]);
    }

    #[test]
    fn test_step_free_movement() {
        let world = CollisionWorld::new();
        let mut b = body(0.0, 0.0, 2.0, 2.0, Vec2::new(10.0, -20.0));
        let contacts = world.step(&mut b, 0.1).unwrap();
        assert_eq!(b.position, Vec2::new(1.0, -2.0));
        assert_eq!(b.velocity, Vec2::new(10.0, -20.0));
        assert!(!contacts.any());
    }

    #[test]
    fn test_step_clamps_delta_time() {
        let world = CollisionWorld::new(); // max_delta_time = 0.25
        let mut b = body(0.0, 0.0, 1.0, 1.0, Vec2::new(10.0, 0.0));
        world.step(&mut b, 10.0).unwrap();
        assert_eq!(b.position, Vec2::new(2.5, 0.0));

        let mut b = body(0.0, 0.0, 1.0, 1.0, Vec2::new(10.0, 0.0));
        world.step(&mut b, -1.0).unwrap();
        world.step(&mut b, f64::NAN).unwrap();
        assert_eq!(b.position, Vec2::ZERO);
    }

    #[test]
    fn test_step_lands_on_ground() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 10.0, 100.0, 10.0));
        let mut b = body(10.0, 0.0, 2.0, 2.0, Vec2::new(0.0, 100.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(10.0, 8.0));
        assert_eq!(b.velocity, Vec2::ZERO);
        assert!(contacts.on_ground());
        assert!(!contacts.left && !contacts.right && !contacts.top);
    }

    #[test]
    fn test_step_stops_at_wall() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(10.0, 0.0, 5.0, 20.0));
        let mut b = body(5.0, 5.0, 2.0, 2.0, Vec2::new(40.0, 0.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(8.0, 5.0));
        assert_eq!(b.velocity.x, 0.0);
        assert!(contacts.right);
        assert!(!contacts.on_ground());
    }

    #[test]
    fn test_step_hits_ceiling() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 0.0, 20.0, 2.0));
        let mut b = body(5.0, 4.0, 2.0, 2.0, Vec2::new(0.0, -30.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(5.0, 2.0));
        assert_eq!(b.velocity.y, 0.0);
        assert!(contacts.top);
    }

    #[test]
    fn test_step_resolves_wall_then_floor() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 10.0, 100.0, 10.0)); // floor
        world.add_obstacle(rect(20.0, 0.0, 5.0, 10.0)); // wall standing on the floor
        let mut b = body(16.0, 8.0, 2.0, 2.0, Vec2::new(30.0, 20.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(18.0, 8.0));
        assert_eq!(b.velocity, Vec2::ZERO);
        assert!(contacts.right && contacts.bottom);
    }

    #[test]
    fn test_step_snap_zeroes_velocity_on_resolved_axis() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 10.0, 100.0, 10.0));
        // Sunk 1 unit into the floor and moving up, but not far enough to clear it
        let mut b = body(10.0, 9.0, 2.0, 2.0, Vec2::new(3.0, -5.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(10.3, 8.0));
        assert_eq!(b.velocity, Vec2::new(3.0, 0.0));
        assert!(contacts.on_ground());
    }

    #[test]
    fn test_step_lands_on_round_obstacle_bounding_box() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(Circle::new(Vec2::new(1.0, 6.0), 2.0).unwrap());
        let mut b = body(0.0, 0.0, 2.0, 2.0, Vec2::new(0.0, 30.0));

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(0.0, 2.0));
        assert!(contacts.on_ground());
    }

    fn overhang_world(correction_passes: usize) -> CollisionWorld {
        let mut world = CollisionWorld::with_config(CollisionConfig {
            correction_passes,
            ..CollisionConfig::default()
        })
        .unwrap();
        world.add_obstacle(rect(3.5, -10.0, 10.0, 13.0)); // overhang, bottom at y=3
        world.add_obstacle(rect(-10.0, 6.0, 30.0, 10.0)); // floor, top at y=6
        world
    }

    #[test]
    fn test_correction_pass_fixes_overlap_caused_by_snap() {
        // Snapping up out of the floor pushes the body into the overhang
        let world = overhang_world(1);
        let mut b = body(0.0, 4.0, 4.0, 4.0, Vec2::ZERO);

        let contacts = world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(-0.5, 2.0));
        assert!(contacts.bottom && contacts.right);
        let snapshot = Collider::from(b.collider().unwrap());
        assert_eq!(world.overlapping(&snapshot).count(), 0);
    }

    #[test]
    fn test_without_correction_pass_overlap_remains() {
        let world = overhang_world(0);
        let mut b = body(0.0, 4.0, 4.0, 4.0, Vec2::ZERO);

        world.step(&mut b, 0.1).unwrap();

        assert_eq!(b.position, Vec2::new(0.0, 2.0));
        let snapshot = Collider::from(b.collider().unwrap());
        assert_eq!(world.overlapping(&snapshot).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_step_rejects_invalid_body() {
        let mut world = CollisionWorld::new();
        world.add_obstacle(rect(0.0, 0.0, 1.0, 1.0));
        let mut b = body(0.0, 0.0, -2.0, 2.0, Vec2::new(1.0, 1.0));
        let before = b;
        assert!(matches!(
            world.step(&mut b, 0.1),
            Err(CollisionError::InvalidGeometry { .. })
        ));
        assert_eq!(b, before);
    }

    #[test]
    fn test_step_non_finite_velocity_leaves_body_untouched() {
        let empty = CollisionWorld::new();
        let mut with_obstacle = CollisionWorld::new();
        with_obstacle.add_obstacle(rect(0.0, 10.0, 100.0, 10.0));

        for world in [&empty, &with_obstacle] {
            let mut b = body(1.0, 2.0, 2.0, 2.0, Vec2::new(f64::NAN, 0.0));
            let before = b;
            assert!(matches!(
                world.step(&mut b, 0.1),
                Err(CollisionError::InvalidGeometry { .. })
            ));
            assert_eq!(b.position, before.position);
        }
    }

    #[test]
    fn test_with_config_rejects_invalid_settings() {
        let config = CollisionConfig {
            max_delta_time: -1.0,
            ..CollisionConfig::default()
        };
        assert!(matches!(
            CollisionWorld::with_config(config),
            Err(ConfigError::Invalid { field: "max_delta_time", .. })
        ));
    }

    #[test]
    fn test_step_rejects_invalid_config() {
        // Public fields and plain deserialization both bypass with_config
        let negative = CollisionWorld {
            obstacles: Vec::new(),
            config: CollisionConfig {
                max_delta_time: -1.0,
                ..CollisionConfig::default()
            },
        };
        let nan = CollisionWorld {
            obstacles: Vec::new(),
            config: toml::from_str("max_delta_time = nan").unwrap(),
        };

        for world in [&negative, &nan] {
            let mut b = body(0.0, 0.0, 1.0, 1.0, Vec2::new(1.0, 0.0));
            assert!(matches!(
                world.step(&mut b, 0.1),
                Err(CollisionError::InvalidConfig(_))
            ));
            assert_eq!(b.position, Vec2::ZERO);
        }
    }
}
