//! Planar geometry in a Cartesian frame where Y grows upward.
//!
//! Screen-space frameworks usually grow Y downward; callers working in one
//! of those must flip before and after.

pub mod line;
pub mod polar;
pub mod segment;

pub use line::Line2;
pub use polar::PolarPoint;
pub use segment::LineSegment2;
