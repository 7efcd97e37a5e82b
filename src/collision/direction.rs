use super::aabb::AABB;
use super::penetration::penetration;
use crate::error::CollisionError;
use crate::shapes::Bounded;
use serde::{Deserialize, Serialize};

/// Side along which shape A meets shape B, as chosen by the overlap resolver.
///
/// `Right` is returned when A's box center lies left of B's, `Bottom` when
/// A's center lies above B's (+y is down). Read it as the side of A that
/// faces B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionDirection {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl CollisionDirection {
    pub fn axis(self) -> Axis {
        match self {
            CollisionDirection::Left | CollisionDirection::Right => Axis::Horizontal,
            CollisionDirection::Top | CollisionDirection::Bottom => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CollisionDirection::Left => CollisionDirection::Right,
            CollisionDirection::Right => CollisionDirection::Left,
            CollisionDirection::Top => CollisionDirection::Bottom,
            CollisionDirection::Bottom => CollisionDirection::Top,
        }
    }
}

/// Picks the direction for two overlapping boxes.
///
/// Fails with [`CollisionError::NotOverlapping`] when the boxes are apart.
pub fn resolve_direction(a: &AABB, b: &AABB) -> Result<CollisionDirection, CollisionError> {
    penetration(a, b).map(|p| p.direction)
}

/// Same as [`resolve_direction`], on the bounding boxes of any two shapes.
pub fn collision_direction<A, B>(a: &A, b: &B) -> Result<CollisionDirection, CollisionError>
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    resolve_direction(&a.bounding_box(), &b.bounding_box())
}
