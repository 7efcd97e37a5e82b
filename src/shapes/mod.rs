pub mod circle;
pub mod ellipse;
pub mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;

use crate::collision::{detection, AABB};
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of collider kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Ellipse,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
        };
        f.write_str(name)
    }
}

/// Anything that can report its axis-aligned bounding edges.
///
/// This is all the render layer and the directional resolver need to know
/// about a shape. Circles and ellipses degrade to their bounding rectangle.
pub trait Bounded {
    /// The smallest axis-aligned box containing the shape.
    fn bounding_box(&self) -> AABB;

    /// The geometric center of the shape.
    fn center(&self) -> Vec2;

    fn left(&self) -> f64 {
        self.bounding_box().min.x
    }

    fn right(&self) -> f64 {
        self.bounding_box().max.x
    }

    fn top(&self) -> f64 {
        self.bounding_box().min.y
    }

    fn bottom(&self) -> f64 {
        self.bounding_box().max.y
    }

    /// Half of the bounding box's width and height.
    fn half_extents(&self) -> Vec2 {
        self.bounding_box().half_extents()
    }
}

/// Enum representing any collider snapshot, regardless of its concrete kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Collider {
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
}

impl Collider {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Collider::Rectangle(_) => ShapeKind::Rectangle,
            Collider::Circle(_) => ShapeKind::Circle,
            Collider::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    /// Tests overlap against another collider of any kind.
    pub fn is_colliding_with(&self, other: &Collider) -> bool {
        detection::check_collision(self, other)
    }

    /// Returns a copy moved by `offset`, validated like a fresh snapshot.
    pub fn translated(&self, offset: Vec2) -> Result<Self, CollisionError> {
        Ok(match self {
            Collider::Rectangle(r) => Collider::Rectangle(r.translated(offset)?),
            Collider::Circle(c) => Collider::Circle(c.translated(offset)?),
            Collider::Ellipse(e) => Collider::Ellipse(e.translated(offset)?),
        })
    }
}

impl Bounded for Collider {
    fn bounding_box(&self) -> AABB {
        match self {
            Collider::Rectangle(r) => r.bounding_box(),
            Collider::Circle(c) => c.bounding_box(),
            Collider::Ellipse(e) => e.bounding_box(),
        }
    }

    fn center(&self) -> Vec2 {
        match self {
            Collider::Rectangle(r) => r.center(),
            Collider::Circle(c) => c.center(),
            Collider::Ellipse(e) => e.center(),
        }
    }
}

impl From<Rectangle> for Collider {
    fn from(rect: Rectangle) -> Self {
        Collider::Rectangle(rect)
    }
}

impl From<Circle> for Collider {
    fn from(circle: Circle) -> Self {
        Collider::Circle(circle)
    }
}

impl From<Ellipse> for Collider {
    fn from(ellipse: Ellipse) -> Self {
        Collider::Ellipse(ellipse)
    }
}

pub(crate) fn ensure_finite_point(
    kind: ShapeKind,
    name: &str,
    point: Vec2,
) -> Result<(), CollisionError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(CollisionError::invalid(
            kind,
            format!("{name} is not finite ({}, {})", point.x, point.y),
        ))
    }
}

pub(crate) fn ensure_extent(kind: ShapeKind, name: &str, value: f64) -> Result<(), CollisionError> {
    if !value.is_finite() {
        Err(CollisionError::invalid(kind, format!("{name} is not finite ({value})")))
    } else if value < 0.0 {
        Err(CollisionError::invalid(kind, format!("{name} is negative ({value})")))
    } else {
        Ok(())
    }
}
