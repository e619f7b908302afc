//! An oriented plane through three points, held in Hessian-like form as a
//! unit normal plus the `d` constant of `n·p + d = 0`.
//!
//! Orientation follows the winding of the three creation points by the
//! right-hand rule, so `(a, b, c)` and `(c, b, a)` give the same point set
//! with opposite normals.

use crate::d3::point::Point;
use crate::d3::segment::LineSegment;
use crate::d3::vector::Vector;
use crate::errors::GeometryError;
use crate::float_types::{almost_zero, MIN_SEPARATION, Real};

/// Which half-space a point falls in, relative to a plane's normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Positive,
    Negative,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Plane {
    points: [Point; 3],
    normal: Vector,
    d: Real,
}

impl Plane {
    /// Build a plane from three points, with the normal set by their
    /// winding. The points must be pairwise farther apart than the minimum
    /// separation.
    pub fn from_ordered_points(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        for (p, q) in [(&a, &b), (&a, &c), (&b, &c)] {
            if !p.distant_enough(q) {
                return Err(GeometryError::PointsTooClose {
                    distance: p.distance(q),
                    minimum: MIN_SEPARATION,
                });
            }
        }
        Ok(Self::from_separated_points(a, b, c))
    }

    // Callers guarantee pairwise separation.
    fn from_separated_points(a: Point, b: Point, c: Point) -> Self {
        let normal = a.vector_to(&b).cross(&a.vector_to(&c)).normalize();
        let d = -normal.dot(&a.as_vector());
        Self {
            points: [a, b, c],
            normal,
            d,
        }
    }

    pub const fn normal(&self) -> &Vector {
        &self.normal
    }

    /// The `d` of `n·p + d = 0`.
    pub const fn d_constant(&self) -> Real {
        self.d
    }

    /// The plane equation coefficients `[a, b, c, d]` with `(a, b, c)` the
    /// unit normal.
    pub fn equation(&self) -> [Real; 4] {
        [self.normal.x(), self.normal.y(), self.normal.z(), self.d]
    }

    pub const fn creation_points(&self) -> &[Point; 3] {
        &self.points
    }

    /// Which side of the plane a point falls on, or `None` when the point
    /// lies in the plane within tolerance.
    ///
    /// Classification is the sign of the plane-equation residual
    /// `normal·p + d`, so the boundary between the two sides is the plane
    /// itself and the positive side is the half-space the normal points
    /// into, wherever the plane sits relative to the origin.
    pub fn which_side(&self, point: &Point) -> Option<Side> {
        if self.contains(point) {
            return None;
        }
        let signed = self.normal.dot(&point.as_vector()) + self.d;
        if signed < 0.0 {
            Some(Side::Negative)
        } else {
            Some(Side::Positive)
        }
    }

    /// The orthogonal projection of a point onto the plane.
    pub fn closest_point(&self, point: &Point) -> Point {
        let signed = self.normal.dot(&point.as_vector()) + self.d;
        point.translate(&self.normal.scale(-signed))
    }

    pub fn distance_from(&self, point: &Point) -> Real {
        if self.contains(point) {
            return 0.0;
        }
        let signed = self.normal.dot(&point.as_vector()) + self.d;
        self.normal.scale(-signed).length()
    }

    /// Tolerance-aware membership. The plane-equation residual accumulates
    /// error from three coordinate terms, so a third of it is compared, and
    /// for far-out points the residual is brought back to the magnitude of
    /// the tolerance band by the coordinate's decimal order.
    pub fn contains(&self, point: &Point) -> bool {
        let residual = self.normal.dot(&point.as_vector()) + self.d;
        let mut adjusted = residual / 3.0;
        let max_coord = point
            .x()
            .abs()
            .max(point.y().abs())
            .max(point.z().abs());
        if max_coord >= 10.0 {
            let order = max_coord.log10().floor() as i32;
            adjusted *= 10f64.powi(-order);
        }
        almost_zero(adjusted)
    }

    pub fn contains_all<'a, I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().all(|p| self.contains(p))
    }

    pub fn contains_segment(&self, segment: &LineSegment) -> bool {
        let (a, b) = segment.points();
        self.contains(a) && self.contains(b)
    }

    /// The same plane with its normal flipped, built by reversing the
    /// winding of the creation points.
    pub fn facing_the_other_way(&self) -> Self {
        let [a, b, c] = self.points.clone();
        Self::from_separated_points(c, b, a)
    }

    /// The plane translated by a vector. Parallel translation preserves the
    /// separation of the creation points.
    pub fn shift(&self, translation: &Vector) -> Self {
        let [a, b, c] = &self.points;
        Self::from_separated_points(
            a.translate(translation),
            b.translate(translation),
            c.translate(translation),
        )
    }

    /// Whether two planes describe the same point set, normals aligned or
    /// opposed.
    pub fn is_same_plane_any_direction(&self, other: &Self) -> bool {
        let normals_match = self.normal.epsilon_equals(&other.normal)
            || self.normal.epsilon_equals(&other.normal.negate());
        normals_match && self.contains(&other.points[0])
    }

    /// Whether the normals point into the same half-space (positive dot
    /// product). Says nothing about the planes being the same.
    pub fn approximately_facing_the_same_way(&self, other: &Self) -> bool {
        self.normal.dot(&other.normal) > 0.0
    }

    pub fn facing_away_from_each_other(&self, other: &Self) -> bool {
        self.normal.dot(&other.normal) < 0.0
    }
}
