//! A planar segment, stored with its points in a canonical order plus the
//! enclosing line.
//!
//! The first point has the lesser X, or the lesser Y for a vertical
//! segment.

use nalgebra::Point2;

use crate::d2::line::{Line2, MIN_DELTA};
use crate::errors::GeometryError;
use crate::float_types::Real;

const MIN_POINT_SEPARATION: Real = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2 {
    first: Point2<Real>,
    second: Point2<Real>,
    line: Line2,
}

impl LineSegment2 {
    pub fn from_points(a: &Point2<Real>, b: &Point2<Real>) -> Result<Self, GeometryError> {
        Self::from_coords(a.x, a.y, b.x, b.y)
    }

    pub fn from_coords(x0: Real, y0: Real, x1: Real, y1: Real) -> Result<Self, GeometryError> {
        validate_separation(x0, y0, x1, y1)?;
        if (x0 - x1).abs() < MIN_DELTA {
            return Self::vertical(&Point2::new(x0, y0.min(y1)), (y1 - y0).abs());
        }
        let ((x0, y0), (x1, y1)) = if x0 < x1 {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };
        Ok(Self {
            first: Point2::new(x0, y0),
            second: Point2::new(x1, y1),
            line: Line2::from_points(x0, y0, x1, y1)?,
        })
    }

    /// A stretch of a non-vertical line, spanning `x_distance` of X starting
    /// at `x` (either way, by its sign).
    pub fn along(line: Line2, x: Real, x_distance: Real) -> Result<Self, GeometryError> {
        if x_distance.abs() < MIN_DELTA || line.is_vertical() {
            return Err(GeometryError::VerticalLine);
        }
        let x0 = x.min(x + x_distance);
        let x1 = x.max(x + x_distance);
        Ok(Self {
            first: Point2::new(x0, line.y_at(x0)?),
            second: Point2::new(x1, line.y_at(x1)?),
            line,
        })
    }

    /// Straight up from the given point.
    pub fn vertical(point: &Point2<Real>, length: Real) -> Result<Self, GeometryError> {
        if length < 0.0 {
            return Err(GeometryError::NegativeLength { length });
        }
        validate_separation(0.0, 0.0, 0.0, length)?;
        Ok(Self {
            first: *point,
            second: Point2::new(point.x, point.y + length),
            line: Line2::vertical(point.x),
        })
    }

    /// Straight to the right from the given point.
    pub fn horizontal(point: &Point2<Real>, length: Real) -> Result<Self, GeometryError> {
        if length < 0.0 {
            return Err(GeometryError::NegativeLength { length });
        }
        validate_separation(0.0, 0.0, length, 0.0)?;
        Ok(Self {
            first: *point,
            second: Point2::new(point.x + length, point.y),
            line: Line2::horizontal(point.y),
        })
    }

    /// The points in canonical order: lesser X first, or lesser Y first when
    /// vertical.
    pub const fn ordered_points(&self) -> (&Point2<Real>, &Point2<Real>) {
        (&self.first, &self.second)
    }

    pub const fn line(&self) -> &Line2 {
        &self.line
    }

    pub const fn is_vertical(&self) -> bool {
        self.line.is_vertical()
    }

    /// Whether X falls strictly between the ends' X coordinates.
    pub fn contains_x(&self, x: Real) -> bool {
        self.first.x < x && x < self.second.x
    }

    /// Whether Y falls strictly between the ends' Y coordinates.
    pub fn contains_y(&self, y: Real) -> bool {
        self.first.y < y && y < self.second.y
    }
}

fn validate_separation(x0: Real, y0: Real, x1: Real, y1: Real) -> Result<(), GeometryError> {
    let distance = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    if distance < MIN_POINT_SEPARATION {
        return Err(GeometryError::PointsTooClose {
            distance,
            minimum: MIN_POINT_SEPARATION,
        });
    }
    Ok(())
}
