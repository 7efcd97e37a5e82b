//! Center-to-center vectors used by gameplay code for knockback and
//! separation effects.

use crate::math::vec2::Vec2;
use crate::shapes::Bounded;

/// Vector from the center of `from` to the center of `to`.
pub fn center_delta<A, B>(from: &A, to: &B) -> Vec2
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    to.center() - from.center()
}

/// Unit vector pointing from `source` towards `target`, i.e. the direction
/// in which `target` should be pushed away. Zero when the centers coincide.
pub fn knockback_direction<A, B>(source: &A, target: &B) -> Vec2
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    center_delta(source, target).normalize()
}
