//! A line in the plane, in slope-intercept form with verticals split out.
//!
//! `y = mx + b` cannot express a vertical line, so the representation is a
//! two-variant enum rather than a slope plus a vertical flag.

use nalgebra::Point2;

use crate::d2::segment::LineSegment2;
use crate::errors::GeometryError;
use crate::float_types::{epsilon_equals, Real};

/// The smallest X spread that still counts as a slope.
pub(crate) const MIN_DELTA: Real = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line2 {
    /// `y = mx + b`.
    Sloped { m: Real, b: Real },
    /// All points with the given X.
    Vertical { x: Real },
}

impl Line2 {
    /// From the equation `y = mx + b`.
    pub const fn from_equation(m: Real, b: Real) -> Self {
        Self::Sloped { m, b }
    }

    /// Through two points, which must not be vertically aligned.
    pub fn from_points(x0: Real, y0: Real, x1: Real, y1: Real) -> Result<Self, GeometryError> {
        if (x0 - x1).abs() < MIN_DELTA {
            return Err(GeometryError::VerticalLine);
        }
        let m = (y1 - y0) / (x1 - x0);
        let b = y1 - m * x1;
        Ok(Self::Sloped { m, b })
    }

    pub const fn vertical(x: Real) -> Self {
        Self::Vertical { x }
    }

    pub const fn horizontal(y: Real) -> Self {
        Self::Sloped { m: 0.0, b: y }
    }

    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    /// Where two lines cross. `None` for parallels, including a pair of
    /// verticals.
    pub fn intersect(&self, other: &Self) -> Option<Point2<Real>> {
        match (self, other) {
            (Self::Vertical { .. }, Self::Vertical { .. }) => None,
            (Self::Vertical { x }, Self::Sloped { .. }) => other.point_at(*x).ok(),
            (Self::Sloped { .. }, Self::Vertical { x }) => self.point_at(*x).ok(),
            (Self::Sloped { m, b }, Self::Sloped { m: om, b: ob }) => {
                if epsilon_equals(*m, *om) {
                    return None;
                }
                let x = (ob - b) / (m - om);
                Some(Point2::new(x, m * x + b))
            }
        }
    }

    pub fn contains(&self, point: &Point2<Real>) -> bool {
        match self {
            Self::Vertical { x } => epsilon_equals(point.x, *x),
            Self::Sloped { m, b } => epsilon_equals(point.y, m * point.x + b),
        }
    }

    /// The closest point of the line, from the `ax + by + c = 0` projection
    /// formula with `a = -m`, `b = 1`, `c = -b`.
    pub fn closest_point(&self, point: &Point2<Real>) -> Point2<Real> {
        match self {
            Self::Vertical { x } => Point2::new(*x, point.y),
            Self::Sloped { m, b } => {
                let (ca, cb, cc) = (-m, 1.0, -b);
                let denom = ca * ca + cb * cb;
                let x = (cb * (cb * point.x - ca * point.y) - ca * cc) / denom;
                let y = (ca * (-cb * point.x + ca * point.y) - cb * cc) / denom;
                Point2::new(x, y)
            }
        }
    }

    pub fn distance_to(&self, point: &Point2<Real>) -> Real {
        match self {
            Self::Vertical { x } => (point.x - x).abs(),
            Self::Sloped { m, b } => {
                let (ca, cb, cc) = (-m, 1.0, -b);
                (ca * point.x + cb * point.y + cc).abs() / (ca * ca + cb * cb).sqrt()
            }
        }
    }

    /// Where this line crosses a segment, or `None` when it misses the
    /// segment's X span (Y span for a vertical segment).
    pub fn intersect_segment(&self, segment: &LineSegment2) -> Option<Point2<Real>> {
        if self.is_vertical() && segment.is_vertical() {
            return None;
        }
        if let Self::Vertical { x } = self {
            if segment.contains_x(*x) {
                return segment.line().point_at(*x).ok();
            }
            return None;
        }
        if let Line2::Vertical { x } = segment.line() {
            let y = match self.y_at(*x) {
                Ok(y) => y,
                Err(_) => return None,
            };
            if segment.contains_y(y) {
                return self.point_at(*x).ok();
            }
            return None;
        }
        let crossing = self.intersect(segment.line())?;
        if segment.contains_x(crossing.x) {
            Some(crossing)
        } else {
            None
        }
    }

    /// The Y for a given X. A vertical line has no single answer.
    pub fn y_at(&self, x: Real) -> Result<Real, GeometryError> {
        match self {
            Self::Vertical { .. } => Err(GeometryError::VerticalLine),
            Self::Sloped { m, b } => Ok(m * x + b),
        }
    }

    pub fn point_at(&self, x: Real) -> Result<Point2<Real>, GeometryError> {
        Ok(Point2::new(x, self.y_at(x)?))
    }
}
