//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use plica::float_types::Real;
use plica::Point;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Coordinate-wise comparison of a point against expected coordinates.
pub fn point_approx(p: &Point, x: Real, y: Real, z: Real, eps: Real) -> bool {
    approx_eq(p.x(), x, eps) && approx_eq(p.y(), y, eps) && approx_eq(p.z(), z, eps)
}

/// Asserts coordinate-wise equality with a readable failure message.
pub fn assert_point_at(p: &Point, x: Real, y: Real, z: Real, eps: Real) {
    assert!(
        point_approx(p, x, y, z, eps),
        "expected ({x}, {y}, {z}), got {p}"
    );
}
