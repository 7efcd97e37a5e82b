use super::aabb::AABB;
use super::direction::CollisionDirection;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;

/// Stores how two overlapping bounding boxes interpenetrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// The side of A facing B along the axis of least penetration.
    pub direction: CollisionDirection,
    /// Penetration depth per axis. Both components are >= 0.
    pub overlap: Vec2,
    /// Offset from B's box center to A's box center.
    pub delta: Vec2,
}

impl Penetration {
    /// Depth along the axis selected by `direction`.
    pub fn depth(&self) -> f64 {
        match self.direction {
            CollisionDirection::Left | CollisionDirection::Right => self.overlap.x,
            CollisionDirection::Top | CollisionDirection::Bottom => self.overlap.y,
        }
    }

    /// Displacement that moves A flush against B along the resolved axis.
    pub fn correction(&self) -> Vec2 {
        match self.direction {
            CollisionDirection::Right => Vec2::new(-self.overlap.x, 0.0),
            CollisionDirection::Left => Vec2::new(self.overlap.x, 0.0),
            CollisionDirection::Bottom => Vec2::new(0.0, -self.overlap.y),
            CollisionDirection::Top => Vec2::new(0.0, self.overlap.y),
        }
    }
}

/// Computes the penetration of box `a` into box `b`.
///
/// The axis with the smaller overlap wins; ties go to the vertical axis.
/// Horizontally, `Right` is chosen when `dx < 0` and `Left` otherwise;
/// vertically, `Bottom` when `dy < 0` and `Top` otherwise.
///
/// The boxes must overlap or touch. A negative depth on either axis yields
/// [`CollisionError::NotOverlapping`].
pub fn penetration(a: &AABB, b: &AABB) -> Result<Penetration, CollisionError> {
    let delta = a.center() - b.center();
    let combined_half_extents = a.half_extents() + b.half_extents();
    let overlap = combined_half_extents - delta.abs();

    // Written so that NaN depths are rejected as well.
    if !(overlap.x >= 0.0 && overlap.y >= 0.0) {
        log::debug!(
            "directional resolution requested for separated boxes {:?} and {:?}",
            a,
            b
        );
        return Err(CollisionError::NotOverlapping {
            overlap_x: overlap.x,
            overlap_y: overlap.y,
        });
    }

    let direction = if overlap.x < overlap.y {
        if delta.x < 0.0 {
            CollisionDirection::Right
        } else {
            CollisionDirection::Left
        }
    } else if delta.y < 0.0 {
        CollisionDirection::Bottom
    } else {
        CollisionDirection::Top
    };

    Ok(Penetration {
        direction,
        overlap,
        delta,
    })
}
