//! Construction and argument errors.
//!
//! The kernel is a pure computational library: nothing retries or recovers
//! internally, every failure surfaces to the caller synchronously. Degenerate
//! *results* (parallel lines, no perpendicular foot) are absences expressed
//! with `Option`, not errors; this enum covers inputs that are rejected
//! outright.

use crate::float_types::Real;

/// All the ways a geometric construction or argument can be invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Two points are too close together to serve as independent degrees of
    /// freedom of a construction (line from two points, plane from three).
    #[error("points too close together: separated by {distance}, minimum is {minimum}")]
    PointsTooClose { distance: Real, minimum: Real },
    /// A line was given a direction vector that is not unit length.
    #[error("line direction must be unit length, got length {length}")]
    DirectionNotUnit { length: Real },
    /// An operation over a point set received fewer points than it needs.
    #[error("too few points: needed at least {needed}, got {got}")]
    TooFewPoints { needed: usize, got: usize },
    /// A rotation angle at or below -2π signals a caller error rather than a
    /// meaningful geometric request.
    #[error("rotation angle {angle} out of range: must be greater than -2\u{3c0}")]
    AngleOutOfRange { angle: Real },
    /// A segment built from a point and a length was given a negative length.
    #[error("length must be non-negative, got {length}")]
    NegativeLength { length: Real },
    /// A 2D operation that needs the slope-intercept form was given a
    /// vertical line.
    #[error("operation not defined for a vertical line")]
    VerticalLine,
}
