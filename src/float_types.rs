//! Scalar type, tolerance constants and the magnitude-scaled comparison
//! routines every geometric predicate in this crate reduces to.
//!
//! Three constants with three distinct purposes live here:
//!
//! - [`EQUALITY_EPSILON`] answers "are these two doubles the same value,
//!   allowing for rounding in calculation".
//! - [`MIN_SEPARATION`] is the much larger bound two points must clear before
//!   they may serve as independent degrees of freedom of a construction
//!   (a plane from three points, a line from two). It guards against
//!   near-zero cross products producing garbage normals; it is *not* a
//!   value-equality test.
//! - [`FLOAT_PRECISION_EPSILON`] is a looser tolerance for results known to
//!   carry only `f32`-level precision.
//!
//! Absolute rounding error in IEEE doubles grows with the operand's order of
//! magnitude, so [`epsilon_equals_within`] scales its tolerance once the
//! operands leave the `[-10, 10]` band. Every higher-level predicate (point
//! equality, plane containment, collinearity) funnels through that single
//! rule so that composed operations never mix mismatched tolerances.

// Our Real scalar type:
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Default tolerance for double-precision value comparison.
///
/// A double carries roughly 16 significant digits; 13 decimals leaves a few
/// orders of magnitude of headroom so that errors of size `1e-13` introduced
/// by one operation cannot compound into false inequality in the next.
pub const EQUALITY_EPSILON: Real = 1e-13;

/// Minimum distance between two points used as independent degrees of
/// freedom in a geometric construction.
///
/// Distances between [`EQUALITY_EPSILON`] and this bound mean the points are
/// distinct values, yet still too close for a numerically stable
/// construction; constructors reject them instead of degrading silently.
pub const MIN_SEPARATION: Real = 1e-4;

/// Looser tolerance for values that only carry `f32`-level precision
/// (about 7 significant digits).
pub const FLOAT_PRECISION_EPSILON: Real = 5e-6;

/// Value comparison within a magnitude-scaled tolerance.
///
/// When both operands sit within `[-10, 10]` the comparison is the plain
/// `|a - b| < epsilon`; beyond that the tolerance is multiplied by
/// `10^floor(log10(|a|))` so it tracks the operands' order of magnitude.
/// Comparisons involving NaN are never equal.
pub fn epsilon_equals_within(a: Real, b: Real, epsilon: Real) -> bool {
    let diff = (a - b).abs();
    if diff.is_nan() {
        return false;
    }
    if a.abs() <= 10.0 || b.abs() <= 10.0 {
        return diff < epsilon;
    }
    let order_of_magnitude = a.abs().log10().floor() as i32;
    let multiplier = (10.0 as Real).powi(order_of_magnitude);
    diff < epsilon * multiplier
}

/// [`epsilon_equals_within`] with the default [`EQUALITY_EPSILON`].
pub fn epsilon_equals(a: Real, b: Real) -> bool {
    epsilon_equals_within(a, b, EQUALITY_EPSILON)
}

/// Unscaled comparison at `f32`-level precision.
pub fn epsilon_equals_float_precision(a: Real, b: Real) -> bool {
    (a - b).abs() < FLOAT_PRECISION_EPSILON
}

/// The near-zero special case of [`epsilon_equals`].
pub fn almost_zero(d: Real) -> bool {
    d.abs() < EQUALITY_EPSILON
}

/// Near-zero test at `f32`-level precision.
pub fn almost_zero_float_precision(d: Real) -> bool {
    d.abs() < FLOAT_PRECISION_EPSILON
}

/// True zero up to the very limit of double representation.
///
/// Use this instead of [`almost_zero`] when a value close to zero must not be
/// collapsed to zero, typically when validating a parameter: the epsilon
/// constant is orders of magnitude larger than actual double precision, and
/// treating `1e-20` as zero there would introduce an avoidable error.
pub fn is_zero(d: Real) -> bool {
    d.abs() <= 2.0 * Real::MIN_POSITIVE
}

/// Near-zero test for a quantity in squared (area) units.
///
/// An error area grows as `2 * linear_error * length` plus a negligible
/// squared term; without the length at hand, halving the area converts it
/// back to (at most) linear-unit scale before the usual near-zero test.
pub fn area_almost_zero(error_area: Real) -> bool {
    almost_zero(error_area / 2.0)
}
