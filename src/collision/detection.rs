//! Narrow-phase overlap predicates for every pair of collider kinds.
//!
//! Rectangle pairs use strict comparisons, so rectangles that only share an
//! edge are not colliding. Every test involving a round shape is non-strict:
//! touching counts as colliding. All predicates are pure and allocation free.

use crate::math::vec2::Vec2;
use crate::shapes::{Bounded, Circle, Collider, Ellipse, Rectangle};

/// Checks for overlap between two rectangles (separating axis on x and y).
pub fn rect_rect(a: &Rectangle, b: &Rectangle) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// True when `delta` is no longer than `reach`.
///
/// Compares squared lengths, falling back to `hypot` once the squares
/// overflow for very large coordinates.
fn within_reach(delta: Vec2, reach: f64) -> bool {
    let length_squared = delta.magnitude_squared();
    let reach_squared = reach * reach;
    if length_squared.is_finite() && reach_squared.is_finite() {
        length_squared <= reach_squared
    } else {
        delta.x.hypot(delta.y) <= reach
    }
}

/// Checks for overlap between two circles using squared distances.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    within_reach(b.center() - a.center(), a.radius() + b.radius())
}

/// Finds the point of `rect` closest to `point`.
fn closest_point_on_rect(rect: &Rectangle, point: Vec2) -> Vec2 {
    point.clamp(
        Vec2::new(rect.left(), rect.top()),
        Vec2::new(rect.right(), rect.bottom()),
    )
}

/// Checks for overlap between a circle and a rectangle.
pub fn circle_rect(circle: &Circle, rect: &Rectangle) -> bool {
    let closest = closest_point_on_rect(rect, circle.center());
    within_reach(closest - circle.center(), circle.radius())
}

/// Squared length of `delta` after scaling each axis by `1 / radii`.
///
/// An axis with a zero radius only tolerates a zero delta on that axis.
fn normalized_length_squared(delta: Vec2, radii: Vec2) -> f64 {
    fn scale(d: f64, r: f64) -> f64 {
        if r > 0.0 {
            d / r
        } else if d == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    }
    let x = scale(delta.x, radii.x);
    let y = scale(delta.y, radii.y);
    x * x + y * y
}

/// Checks for overlap between two ellipses in the space normalized by their
/// combined radii.
pub fn ellipse_ellipse(a: &Ellipse, b: &Ellipse) -> bool {
    normalized_length_squared(b.center() - a.center(), a.radii() + b.radii()) <= 1.0
}

/// Checks for overlap between a circle and an ellipse, treating the circle
/// as an ellipse with equal radii.
pub fn circle_ellipse(circle: &Circle, ellipse: &Ellipse) -> bool {
    let circle_radii = Vec2::new(circle.radius(), circle.radius());
    normalized_length_squared(ellipse.center() - circle.center(), ellipse.radii() + circle_radii)
        <= 1.0
}

/// Checks for overlap between an ellipse and a rectangle: the closest point
/// of the rectangle must fall inside the ellipse.
pub fn ellipse_rect(ellipse: &Ellipse, rect: &Rectangle) -> bool {
    let closest = closest_point_on_rect(rect, ellipse.center());
    normalized_length_squared(ellipse.center() - closest, ellipse.radii()) <= 1.0
}

/// Dispatches to the predicate matching the unordered pair of kinds.
pub fn check_collision(a: &Collider, b: &Collider) -> bool {
    match (a, b) {
        (Collider::Rectangle(ra), Collider::Rectangle(rb)) => rect_rect(ra, rb),
        (Collider::Circle(ca), Collider::Circle(cb)) => circle_circle(ca, cb),
        (Collider::Ellipse(ea), Collider::Ellipse(eb)) => ellipse_ellipse(ea, eb),
        (Collider::Circle(c), Collider::Rectangle(r))
        | (Collider::Rectangle(r), Collider::Circle(c)) => circle_rect(c, r),
        (Collider::Circle(c), Collider::Ellipse(e))
        | (Collider::Ellipse(e), Collider::Circle(c)) => circle_ellipse(c, e),
        (Collider::Ellipse(e), Collider::Rectangle(r))
        | (Collider::Rectangle(r), Collider::Ellipse(e)) => ellipse_rect(e, r),
    }
}
