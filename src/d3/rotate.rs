//! The rotation engine: axis-aligned rotation and arbitrary-axis rotation
//! through the origin, both via unit-quaternion composition.
//!
//! "Clockwise" throughout this module means clockwise as it appears looking
//! along the natural (coordinate-growing) direction of the rotation axis.
//! That convention coincides with the standard right-handed quaternion
//! rotation, so the axis-angle quaternion is applied as-is.
//!
//! An arbitrary axis is handled by decomposition: rotate about X to bring the
//! axis into the XZ plane, rotate about Y to bring it onto Z, rotate about Z
//! by the requested angle, then apply the inverse of the combined alignment
//! to restore the original frame. All quaternions are immutable values;
//! composition order is `second ∘ first`.

use nalgebra::UnitQuaternion;

use crate::d3::axis::CartesianAxis;
use crate::d3::point::Point;
use crate::d3::vector::Vector;
use crate::float_types::{almost_zero, is_zero, FRAC_PI_2, Real, TAU};

/// Rotate a point clockwise around a coordinate axis.
///
/// There is no difference between rotating a point and rotating the vector
/// from the origin to it; this exists so callers can think in whichever
/// suits them.
pub fn rotate_point_clockwise(point: &Point, axis: CartesianAxis, angle: Real) -> Point {
    rotate_vector_clockwise(&point.vector_from_origin(), axis, angle).to_point()
}

/// Rotate a vector clockwise around a coordinate axis.
///
/// Fast-pathed to a no-op when the angle is a multiple of 2π or the vector
/// already lies on the rotation axis.
pub fn rotate_vector_clockwise(vector: &Vector, axis: CartesianAxis, angle: Real) -> Vector {
    if almost_zero(angle % TAU) {
        return *vector;
    }
    if lies_on_axis(vector, axis) {
        return *vector;
    }
    let q = UnitQuaternion::from_axis_angle(&axis.unit(), angle);
    Vector::from_vector3(q.transform_vector(vector.as_vector3()))
}

fn lies_on_axis(vector: &Vector, axis: CartesianAxis) -> bool {
    match axis {
        CartesianAxis::X => almost_zero(vector.y()) && almost_zero(vector.z()),
        CartesianAxis::Y => almost_zero(vector.x()) && almost_zero(vector.z()),
        CartesianAxis::Z => almost_zero(vector.x()) && almost_zero(vector.y()),
    }
}

/// Rotate a point clockwise around a line through the origin with the given
/// direction.
///
/// The direction need not be unit length; it is normalized here.
pub fn rotate_point_around_origin_line_clockwise(
    point: &Point,
    line_direction: &Vector,
    angle: Real,
) -> Point {
    let direction = line_direction.normalize();
    let alignment = axis_alignment_rotation(&direction);
    let aligned = alignment.transform_vector(point.as_vector().as_vector3());
    let around_z = UnitQuaternion::from_axis_angle(&CartesianAxis::Z.unit(), angle);
    let rotated = around_z.transform_vector(&aligned);
    let restored = alignment.inverse().transform_vector(&rotated);
    Point::new(restored.x, restored.y, restored.z)
}

/// The combined rotation that carries `direction` onto the Z axis: first a
/// rotation about X into the XZ plane, then a rotation about Y onto Z. When
/// the direction already lies on the X axis there is nothing to rotate about
/// X and only the Y-alignment is returned.
pub(crate) fn axis_alignment_rotation(direction: &Vector) -> UnitQuaternion<Real> {
    let already_on_x_axis = almost_zero(direction.y()) && almost_zero(direction.z());
    if already_on_x_axis {
        return y_alignment_quaternion(direction);
    }
    let first = x_alignment_quaternion(direction);
    let in_xz_plane = Vector::from_vector3(first.transform_vector(direction.as_vector3()));
    let second = y_alignment_quaternion(&in_xz_plane);
    second * first
}

fn x_alignment_quaternion(vector: &Vector) -> UnitQuaternion<Real> {
    UnitQuaternion::from_axis_angle(&CartesianAxis::X.unit(), x_axis_rotation_angle(vector))
}

fn y_alignment_quaternion(vector: &Vector) -> UnitQuaternion<Real> {
    UnitQuaternion::from_axis_angle(&CartesianAxis::Y.unit(), y_axis_rotation_angle(vector))
}

/// The angle, in `[-π, π]`, that puts `vector` into the XZ plane when the
/// space is rotated about the X axis.
///
/// Indifferent to the sign of the vector (a line has no forward direction):
/// a vector and its negation give the same value. No promise is made about
/// *which* way the vector travels, only that it ends in the XZ plane.
pub(crate) fn x_axis_rotation_angle(vector: &Vector) -> Real {
    let mut y = vector.y();
    let mut z = vector.z();
    if vector.x() < 0.0 {
        y = -y;
        z = -z;
    }
    let projection_on_yz = Vector::new(0.0, y, z).normalize();
    sign_of(y) * projection_on_yz.angle(&CartesianAxis::Z.direction())
}

// f64::signum maps 0.0 to 1.0; the alignment needs a true zero there.
fn sign_of(d: Real) -> Real {
    if d > 0.0 {
        1.0
    } else if d < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// The angle that puts a vector already lying in the XZ plane onto the Z
/// axis when rotating about Y. Zero when the vector is already on Z, π/2
/// when it lies on X.
pub(crate) fn y_axis_rotation_angle(vector_on_xz_plane: &Vector) -> Real {
    debug_assert!(almost_zero(vector_on_xz_plane.y()));
    let x = vector_on_xz_plane.x();
    let z = vector_on_xz_plane.z();
    if is_zero(x) {
        return 0.0;
    }
    if is_zero(z) {
        return FRAC_PI_2;
    }
    -x.atan2(z)
}
