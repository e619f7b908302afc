//! The 3D kernel: point, vector, line, plane, segment and the rotation
//! engine.

pub mod axis;
pub mod line;
pub mod plane;
pub mod point;
pub mod rotate;
pub mod segment;
pub mod vector;
