//! The three fixed Cartesian axes used by the rotation engine.

use nalgebra::{Unit, Vector3};

use crate::d3::vector::Vector;
use crate::float_types::Real;

/// One of the three coordinate axes, with its fixed unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartesianAxis {
    X,
    Y,
    Z,
}

impl CartesianAxis {
    /// The axis's unit direction vector.
    pub fn direction(self) -> Vector {
        match self {
            CartesianAxis::X => Vector::new(1.0, 0.0, 0.0),
            CartesianAxis::Y => Vector::new(0.0, 1.0, 0.0),
            CartesianAxis::Z => Vector::new(0.0, 0.0, 1.0),
        }
    }

    pub(crate) fn unit(self) -> Unit<Vector3<Real>> {
        match self {
            CartesianAxis::X => Vector3::x_axis(),
            CartesianAxis::Y => Vector3::y_axis(),
            CartesianAxis::Z => Vector3::z_axis(),
        }
    }
}
