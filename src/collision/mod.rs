pub mod aabb;
pub mod delta;
pub mod detection;
pub mod direction;
pub mod penetration;

// Re-export key types
pub use aabb::AABB;
pub use delta::{center_delta, knockback_direction};
pub use detection::*;
pub use direction::{collision_direction, resolve_direction, Axis, CollisionDirection};
pub use penetration::{penetration, Penetration};
