//! A double-precision **3D geometry kernel**: immutable points, vectors,
//! lines, planes and line segments, plus the numerically delicate algorithms
//! that combine them (coplanarity, skew-line intersection, plane-side and
//! distance queries, axis and arbitrary-axis rotation).
//!
//! The hard part of this crate is not architectural but numerical: every
//! operation defines precisely how floating-point error is tolerated, so that
//! the geometric predicates (`epsilon_equals`, `contains`, `which_side`,
//! `intersection_point`) stay consistent with each other under composition.
//! The tolerance policy lives in [`float_types`] and everything else funnels
//! through it.
//!
//! # Identity vs. value equality
//!
//! [`Point`] equality is **identity** equality: two points are equal only if
//! they originate from the same construction, never because their coordinates
//! coincide. Many points may legitimately occupy the same position (segment
//! endpoints shared with other geometry) and must remain distinguishable.
//! Coordinate comparison is always the explicit `epsilon_equals` family.
//!
//! # Purity
//!
//! All types are immutable value objects and every operation is a pure
//! function: no I/O, no shared mutable state, no blocking. Concurrent reads
//! from any number of threads are inherently safe.

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;

pub mod d2;
pub mod d3;
pub mod geometry;

pub use d3::axis::CartesianAxis;
pub use d3::line::Line;
pub use d3::plane::{Plane, Side};
pub use d3::point::Point;
pub use d3::segment::LineSegment;
pub use d3::vector::Vector;
pub use errors::GeometryError;
