//! Immutable 3D point with identity-based equality.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Point3;

use crate::d3::vector::Vector;
use crate::float_types::{
    epsilon_equals_within, EQUALITY_EPSILON, FLOAT_PRECISION_EPSILON, MIN_SEPARATION, Real,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// An immutable point in 3D space.
///
/// Equality and hashing are **identity**-based: a point is equal only to
/// itself (and to its clones, which carry the same identity), never to a
/// distinct point that happens to occupy the same position. Value comparison
/// is the explicit [`Point::epsilon_equals`] family. Every transform returns
/// a fresh point with a fresh identity; nothing mutates in place.
#[derive(Debug, Clone)]
pub struct Point {
    coords: Point3<Real>,
    id: u64,
}

impl Point {
    /// Create a new point. The point receives a fresh identity.
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Point {
            coords: Point3::new(x, y, z),
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The coordinate-system origin `(0, 0, 0)` as a fresh point.
    pub fn origin() -> Self {
        Point::new(0.0, 0.0, 0.0)
    }

    /// Create a point from nalgebra coordinates.
    pub fn from_coords(coords: Point3<Real>) -> Self {
        Point::new(coords.x, coords.y, coords.z)
    }

    pub fn x(&self) -> Real {
        self.coords.x
    }

    pub fn y(&self) -> Real {
        self.coords.y
    }

    pub fn z(&self) -> Real {
        self.coords.z
    }

    /// The underlying nalgebra coordinates.
    pub const fn coords(&self) -> &Point3<Real> {
        &self.coords
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    /// Component-wise sum, as a new point.
    pub fn add(&self, other: &Point) -> Point {
        Point::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Component-wise difference, as a new point.
    pub fn sub(&self, other: &Point) -> Point {
        Point::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// The point mirrored through the origin.
    pub fn negate(&self) -> Point {
        Point::new(-self.x(), -self.y(), -self.z())
    }

    /// The point scaled from the origin by `c`.
    pub fn scale(&self, c: Real) -> Point {
        Point::new(self.x() * c, self.y() * c, self.z() * c)
    }

    /// The point displaced by a vector.
    pub fn translate(&self, v: &Vector) -> Point {
        Point::new(self.x() + v.x(), self.y() + v.y(), self.z() + v.z())
    }

    /// The midpoint between two points.
    pub fn midpoint(a: &Point, b: &Point) -> Point {
        Point::new(
            (a.x() + b.x()) / 2.0,
            (a.y() + b.y()) / 2.0,
            (a.z() + b.z()) / 2.0,
        )
    }

    pub fn distance(&self, other: &Point) -> Real {
        self.distance_squared(other).sqrt()
    }

    pub fn distance_squared(&self, other: &Point) -> Real {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance_to_origin(&self) -> Real {
        (self.x() * self.x() + self.y() * self.y() + self.z() * self.z()).sqrt()
    }

    /// Whether the two points are far enough apart to serve as independent
    /// degrees of freedom of a construction (see
    /// [`MIN_SEPARATION`](crate::float_types::MIN_SEPARATION)).
    pub fn distant_enough(&self, other: &Point) -> bool {
        self.distance(other) > MIN_SEPARATION
    }

    /// The vector that goes from this point to `end`.
    pub fn vector_to(&self, end: &Point) -> Vector {
        Vector::new(end.x() - self.x(), end.y() - self.y(), end.z() - self.z())
    }

    pub fn vector_to_origin(&self) -> Vector {
        Vector::new(-self.x(), -self.y(), -self.z())
    }

    pub fn vector_from_origin(&self) -> Vector {
        Vector::new(self.x(), self.y(), self.z())
    }

    /// Sometimes a point is actually a vector.
    pub fn as_vector(&self) -> Vector {
        self.vector_from_origin()
    }

    /// Value equality within the default tolerance.
    pub fn epsilon_equals(&self, other: &Point) -> bool {
        self.epsilon_equals_within(other, EQUALITY_EPSILON)
    }

    /// Component-wise value equality within `epsilon`, magnitude-scaled per
    /// coordinate. Any NaN component makes the comparison false rather than
    /// letting NaN propagate through a comparison that silently evaluates
    /// false-in-surprising-ways.
    pub fn epsilon_equals_within(&self, other: &Point, epsilon: Real) -> bool {
        for i in 0..3 {
            let diff = self.coords[i] - other.coords[i];
            if diff.is_nan() {
                return false;
            }
            if !epsilon_equals_within(self.coords[i], other.coords[i], epsilon) {
                return false;
            }
        }
        true
    }

    /// Value equality at `f32`-level precision.
    pub fn epsilon_equals_float_precision(&self, other: &Point) -> bool {
        self.epsilon_equals_within(other, FLOAT_PRECISION_EPSILON)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
