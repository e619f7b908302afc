//! Polar coordinates in the plane.

use std::fmt;

use nalgebra::Point2;

use crate::float_types::Real;

/// A point as radius and angle. No equality is defined; compare with
/// [`PolarPoint::epsilon_equals`] instead.
#[derive(Debug, Clone, Copy)]
pub struct PolarPoint {
    r: Real,
    theta: Real,
}

impl PolarPoint {
    pub const fn new(r: Real, theta: Real) -> Self {
        Self { r, theta }
    }

    pub fn from_cartesian(point: &Point2<Real>) -> Self {
        Self {
            r: (point.x * point.x + point.y * point.y).sqrt(),
            theta: point.y.atan2(point.x),
        }
    }

    pub fn to_cartesian(&self) -> Point2<Real> {
        Point2::new(self.r * self.theta.cos(), self.r * self.theta.sin())
    }

    /// Euclidean distance, by the law of cosines.
    pub fn distance(&self, other: &Self) -> Real {
        (self.r * self.r + other.r * other.r
            - 2.0 * self.r * other.r * (self.theta - other.theta).cos())
        .sqrt()
    }

    pub fn epsilon_equals(&self, other: &Self, epsilon: Real) -> bool {
        self.distance(other) <= epsilon
    }

    pub const fn r(&self) -> Real {
        self.r
    }

    pub const fn theta(&self) -> Real {
        self.theta
    }
}

impl fmt::Display for PolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r = {:.6}, theta = {:.6})", self.r, self.theta)
    }
}
