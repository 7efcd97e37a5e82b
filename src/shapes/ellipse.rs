use super::{ensure_extent, ensure_finite_point, Bounded, Rectangle, ShapeKind};
use crate::collision::AABB;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse with independent x/y radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipseDef")]
pub struct Ellipse {
    center: Vec2,
    radii: Vec2,
}

#[derive(Deserialize)]
struct EllipseDef {
    center: Vec2,
    radii: Vec2,
}

impl TryFrom<EllipseDef> for Ellipse {
    type Error = CollisionError;

    fn try_from(def: EllipseDef) -> Result<Self, Self::Error> {
        Ellipse::new(def.center, def.radii)
    }
}

impl Ellipse {
    pub fn new(center: Vec2, radii: Vec2) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Ellipse, "center", center)?;
        ensure_extent(ShapeKind::Ellipse, "x radius", radii.x)?;
        ensure_extent(ShapeKind::Ellipse, "y radius", radii.y)?;
        Ok(Self { center, radii })
    }

    /// Creates the ellipse filling a `size` box whose top-left corner is `top_left`.
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Ellipse, "position", top_left)?;
        ensure_extent(ShapeKind::Ellipse, "width", size.x)?;
        ensure_extent(ShapeKind::Ellipse, "height", size.y)?;
        let radii = size * 0.5;
        Self::new(top_left + radii, radii)
    }

    /// The ellipse inscribed in `rect`.
    pub fn inscribed(rect: &Rectangle) -> Self {
        Self {
            center: rect.center(),
            radii: rect.half_extents(),
        }
    }

    pub fn radii(&self) -> Vec2 {
        self.radii
    }

    pub fn translated(&self, offset: Vec2) -> Result<Self, CollisionError> {
        Self::new(self.center + offset, self.radii)
    }
}

impl Bounded for Ellipse {
    fn bounding_box(&self) -> AABB {
        AABB::new(self.center - self.radii, self.center + self.radii)
    }

    fn center(&self) -> Vec2 {
        self.center
    }
}
