use super::{ensure_extent, ensure_finite_point, Bounded, ShapeKind};
use crate::collision::AABB;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleDef")]
pub struct Circle {
    center: Vec2,
    radius: f64,
}

#[derive(Deserialize)]
struct CircleDef {
    center: Vec2,
    radius: f64,
}

impl TryFrom<CircleDef> for Circle {
    type Error = CollisionError;

    fn try_from(def: CircleDef) -> Result<Self, Self::Error> {
        Circle::new(def.center, def.radius)
    }
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Circle, "center", center)?;
        ensure_extent(ShapeKind::Circle, "radius", radius)?;
        Ok(Self { center, radius })
    }

    /// Creates a circle whose bounding box has its top-left corner at `top_left`.
    pub fn from_top_left(top_left: Vec2, radius: f64) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Circle, "position", top_left)?;
        ensure_extent(ShapeKind::Circle, "radius", radius)?;
        Self::new(top_left + Vec2::new(radius, radius), radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn translated(&self, offset: Vec2) -> Result<Self, CollisionError> {
        Self::new(self.center + offset, self.radius)
    }
}

impl Bounded for Circle {
    fn bounding_box(&self) -> AABB {
        let extent = Vec2::new(self.radius, self.radius);
        AABB::new(self.center - extent, self.center + extent)
    }

    fn center(&self) -> Vec2 {
        self.center
    }
}
