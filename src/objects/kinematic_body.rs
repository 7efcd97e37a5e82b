use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use crate::shapes::Rectangle;

/// A box-shaped body moved directly by its velocity.
///
/// The body is plain caller-owned state; collision code only ever sees the
/// [`Rectangle`] snapshot returned by [`KinematicBody::collider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner in world space
    pub position: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Units per second
    pub velocity: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
        }
    }

    /// Derives a fresh collider snapshot from the current position.
    pub fn collider(&self) -> Result<Rectangle, CollisionError> {
        Rectangle::from_top_left(self.position, self.size)
    }
}
