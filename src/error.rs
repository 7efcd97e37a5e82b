//! Error types for collider construction and overlap resolution.

use crate::shapes::ShapeKind;
use thiserror::Error;

/// Errors raised by the collision core. All of them are recoverable: the
/// caller decides whether to skip the pair, log, or abort the step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A shape was given negative or non-finite extents or coordinates.
    #[error("invalid {kind} geometry: {reason}")]
    InvalidGeometry {
        /// Kind of shape being constructed
        kind: ShapeKind,
        /// What was wrong with the input
        reason: String,
    },

    /// Directional resolution was requested for boxes that are apart.
    #[error("bounding boxes do not overlap (overlap_x={overlap_x}, overlap_y={overlap_y})")]
    NotOverlapping {
        /// Penetration depth on the X axis (negative means a gap)
        overlap_x: f64,
        /// Penetration depth on the Y axis (negative means a gap)
        overlap_y: f64,
    },

    /// The world's movement settings are out of range.
    #[error("invalid collision config: {0}")]
    InvalidConfig(String),
}

impl CollisionError {
    pub(crate) fn invalid(kind: ShapeKind, reason: impl Into<String>) -> Self {
        let error = CollisionError::InvalidGeometry {
            kind,
            reason: reason.into(),
        };
        log::warn!("{error}");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CollisionError::invalid(ShapeKind::Circle, "radius is negative (-1)");
        assert_eq!(
            err.to_string(),
            "invalid circle geometry: radius is negative (-1)"
        );

        let err = CollisionError::NotOverlapping {
            overlap_x: -2.0,
            overlap_y: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "bounding boxes do not overlap (overlap_x=-2, overlap_y=1)"
        );

        let err = CollisionError::InvalidConfig("max_delta_time must be >= 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid collision config: max_delta_time must be >= 0"
        );
    }
}
