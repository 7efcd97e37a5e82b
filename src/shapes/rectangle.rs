use super::{ensure_extent, ensure_finite_point, Bounded, ShapeKind};
use crate::collision::AABB;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle stored as its top-left corner and full size.
///
/// Every constructor funnels through [`Rectangle::from_top_left`], so the
/// derived edges are identical no matter which form built the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleDef")]
pub struct Rectangle {
    position: Vec2,
    size: Vec2,
}

#[derive(Deserialize)]
struct RectangleDef {
    position: Vec2,
    size: Vec2,
}

impl TryFrom<RectangleDef> for Rectangle {
    type Error = CollisionError;

    fn try_from(def: RectangleDef) -> Result<Self, Self::Error> {
        Rectangle::from_top_left(def.position, def.size)
    }
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, CollisionError> {
        Self::from_top_left(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Canonical constructor. Rejects negative or non-finite sizes.
    pub fn from_top_left(position: Vec2, size: Vec2) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Rectangle, "position", position)?;
        ensure_extent(ShapeKind::Rectangle, "width", size.x)?;
        ensure_extent(ShapeKind::Rectangle, "height", size.y)?;
        Ok(Self { position, size })
    }

    /// Creates a rectangle centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Rectangle, "center", center)?;
        ensure_extent(ShapeKind::Rectangle, "width", size.x)?;
        ensure_extent(ShapeKind::Rectangle, "height", size.y)?;
        Self::from_top_left(center - size * 0.5, size)
    }

    /// Top-left corner.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// A new snapshot moved by `offset`. Fails if the moved corner is not finite.
    pub fn translated(&self, offset: Vec2) -> Result<Self, CollisionError> {
        Self::from_top_left(self.position + offset, self.size)
    }

    /// Same size, top-left corner moved to `position`.
    pub fn with_position(&self, position: Vec2) -> Result<Self, CollisionError> {
        Self::from_top_left(position, self.size)
    }
}

impl Bounded for Rectangle {
    fn bounding_box(&self) -> AABB {
        AABB::new(self.position, self.position + self.size)
    }

    fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    fn left(&self) -> f64 {
        self.position.x
    }

    fn right(&self) -> f64 {
        self.position.x + self.size.x
    }

    fn top(&self) -> f64 {
        self.position.y
    }

    fn bottom(&self) -> f64 {
        self.position.y + self.size.y
    }

    fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}
