//! Origin-anchored direction/magnitude with a cached length.

use std::fmt;

use nalgebra::Vector3;

use crate::d3::point::Point;
use crate::float_types::{epsilon_equals, epsilon_equals_within, EQUALITY_EPSILON, Real};

/// An immutable vector anchored at the origin.
///
/// Structurally a coordinate triple like [`Point`], but held by composition
/// rather than subtyping: a `Vector` adds the vector algebra (dot, cross,
/// angle, normalization) and caches its length at construction. The cache is
/// an invariant: `length == sqrt(x² + y² + z²)` always holds and is never
/// recomputed.
///
/// `Vector` deliberately implements no `PartialEq`: value comparison is the
/// explicit [`Vector::epsilon_equals`] family, and identity comparison
/// belongs to `Point`.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    inner: Vector3<Real>,
    length: Real,
}

impl Vector {
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Vector {
            inner: Vector3::new(x, y, z),
            length: (x * x + y * y + z * z).sqrt(),
        }
    }

    pub fn zero() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    pub fn from_vector3(v: Vector3<Real>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }

    pub fn x(&self) -> Real {
        self.inner.x
    }

    pub fn y(&self) -> Real {
        self.inner.y
    }

    pub fn z(&self) -> Real {
        self.inner.z
    }

    /// The underlying nalgebra vector.
    pub const fn as_vector3(&self) -> &Vector3<Real> {
        &self.inner
    }

    /// The length cached at construction.
    pub const fn length(&self) -> Real {
        self.length
    }

    /// The unit vector with this direction.
    ///
    /// Returns `self` unchanged when the length is already within epsilon of
    /// one, so repeated normalization does not accumulate error.
    pub fn normalize(&self) -> Vector {
        if epsilon_equals(self.length, 1.0) {
            return *self;
        }
        Vector::new(
            self.x() / self.length,
            self.y() / self.length,
            self.z() / self.length,
        )
    }

    pub fn dot(&self, other: &Vector) -> Real {
        self.inner.dot(&other.inner)
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::from_vector3(self.inner.cross(&other.inner))
    }

    /// The angle between the two vectors, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before the inverse cosine so that
    /// rounding overshoot on (anti)parallel vectors cannot produce NaN.
    pub fn angle(&self, other: &Vector) -> Real {
        let c = (self.dot(other) / (self.length * other.length)).clamp(-1.0, 1.0);
        c.acos()
    }

    pub fn scale(&self, c: Real) -> Vector {
        Vector::new(self.x() * c, self.y() * c, self.z() * c)
    }

    pub fn negate(&self) -> Vector {
        Vector::new(-self.x(), -self.y(), -self.z())
    }

    /// Normalizing and scaling in one step, without the intermediate
    /// normalized vector.
    pub fn with_length(&self, l: Real) -> Vector {
        self.scale(l / self.length)
    }

    pub fn add(&self, other: &Vector) -> Vector {
        Vector::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    pub fn sub(&self, other: &Vector) -> Vector {
        Vector::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Distance between the two vectors' tips.
    pub fn distance(&self, other: &Vector) -> Real {
        self.sub(other).length()
    }

    /// The tip of this vector as a point with a fresh identity.
    pub fn to_point(&self) -> Point {
        Point::new(self.x(), self.y(), self.z())
    }

    /// Value equality within the default tolerance.
    pub fn epsilon_equals(&self, other: &Vector) -> bool {
        self.epsilon_equals_within(other, EQUALITY_EPSILON)
    }

    /// Component-wise value equality within `epsilon`; NaN components
    /// compare unequal.
    pub fn epsilon_equals_within(&self, other: &Vector, epsilon: Real) -> bool {
        for i in 0..3 {
            let diff = self.inner[i] - other.inner[i];
            if diff.is_nan() {
                return false;
            }
            if !epsilon_equals_within(self.inner[i], other.inner[i], epsilon) {
                return false;
            }
        }
        true
    }
}

impl From<&Point> for Vector {
    fn from(p: &Point) -> Self {
        Vector::new(p.x(), p.y(), p.z())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
