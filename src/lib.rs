//! Narrow-phase 2D collision detection for axis-aligned rectangles,
//! circles and ellipses, plus the directional resolver used to push moving
//! boxes out of obstacles along the axis of least penetration.
//!
//! Colliders are immutable snapshots rebuilt from entity state every step.
//! Every query is a pure function of its inputs, so snapshots can be shared
//! freely across threads.

pub mod collision;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    check_collision, collision_direction, resolve_direction, CollisionDirection, Penetration,
    AABB,
};
pub use config::{CollisionConfig, ConfigError};
pub use error::CollisionError;
pub use math::vec2::Vec2;
pub use objects::KinematicBody;
pub use shapes::{Bounded, Circle, Collider, Ellipse, Rectangle, ShapeKind};
pub use world::{CollisionWorld, Contacts};
