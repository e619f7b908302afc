//! An infinite line in 3-space, held as an origin point plus a unit
//! direction.
//!
//! The origin is any point on the line and the direction is sign-ambiguous:
//! a line built from `(a, b)` and one built from `(b, a)` describe the same
//! set of points. Operations that need an oriented sense of rotation take it
//! as an explicit argument instead of reading it off the direction.

use crate::d3::point::Point;
use crate::d3::rotate;
use crate::d3::vector::Vector;
use crate::errors::GeometryError;
use crate::float_types::{
    almost_zero, epsilon_equals, FRAC_PI_2, MIN_SEPARATION, PI, Real, TAU,
};

#[derive(Debug, Clone)]
pub struct Line {
    origin: Point,
    direction: Vector,
}

impl Line {
    /// Build a line from a point on it and a unit direction.
    ///
    /// The direction must already be normalized; a non-unit direction is
    /// rejected rather than silently renormalized.
    pub fn new(origin: Point, direction: Vector) -> Result<Self, GeometryError> {
        if !almost_zero(direction.length() - 1.0) {
            return Err(GeometryError::DirectionNotUnit {
                length: direction.length(),
            });
        }
        Ok(Self { origin, direction })
    }

    /// Build the line through two points. The points must be farther apart
    /// than the minimum separation or the direction is numerically
    /// meaningless.
    pub fn passing_by(origin: Point, target: &Point) -> Result<Self, GeometryError> {
        if !origin.distant_enough(target) {
            return Err(GeometryError::PointsTooClose {
                distance: origin.distance(target),
                minimum: MIN_SEPARATION,
            });
        }
        let direction = origin.vector_to(target).normalize();
        Ok(Self { origin, direction })
    }

    pub fn x_axis() -> Self {
        Self {
            origin: Point::origin(),
            direction: Vector::new(1.0, 0.0, 0.0),
        }
    }

    pub fn y_axis() -> Self {
        Self {
            origin: Point::origin(),
            direction: Vector::new(0.0, 1.0, 0.0),
        }
    }

    pub fn z_axis() -> Self {
        Self {
            origin: Point::origin(),
            direction: Vector::new(0.0, 0.0, 1.0),
        }
    }

    pub const fn origin(&self) -> &Point {
        &self.origin
    }

    pub const fn direction(&self) -> &Vector {
        &self.direction
    }

    /// The point on the line nearest to an arbitrary point.
    ///
    /// Works by the sine rule on the triangle formed by the line origin, the
    /// query point and its projection, which sidesteps any division by a
    /// near-zero projection length.
    pub fn closest_point(&self, point: &Point) -> Point {
        if point.epsilon_equals(&self.origin) {
            return point.clone();
        }
        let from_origin = self.origin.vector_to(point);
        let mut angle = from_origin.angle(&self.direction);
        if epsilon_equals(angle, FRAC_PI_2) {
            return self.origin.clone();
        }
        let opposite_side = angle > FRAC_PI_2;
        if opposite_side {
            angle = PI - angle;
        }
        let distance_to_closest = point.distance(&self.origin) * (FRAC_PI_2 - angle).sin();
        let step = if opposite_side {
            self.direction.negate().with_length(distance_to_closest)
        } else {
            self.direction.with_length(distance_to_closest)
        };
        self.origin.translate(&step)
    }

    pub fn contains(&self, point: &Point) -> bool {
        almost_zero(self.distance_from(point))
    }

    /// Containment under an explicit tolerance instead of the default one.
    pub fn contains_within(&self, point: &Point, epsilon: Real) -> bool {
        self.distance_from(point) < epsilon
    }

    pub fn contains_all<'a, I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().all(|p| self.contains(p))
    }

    pub fn distance_from(&self, point: &Point) -> Real {
        self.closest_point(point).distance(point)
    }

    /// Reflect a point through the line: the mirror image on the far side,
    /// at the same distance. A point on the line maps to itself.
    pub fn move_point_across(&self, point: &Point) -> Point {
        if self.contains(point) {
            return point.clone();
        }
        let closest = self.closest_point(point);
        closest.translate(&point.vector_to(&closest))
    }

    /// Rotation by π around the line, which is the same thing as reflection
    /// through it.
    pub fn rotate_point_pi(&self, point: &Point) -> Point {
        self.move_point_across(point)
    }

    /// Rotate a point around the line, disambiguating the two candidate
    /// images with a direction hint: of the two rotations by `angle` (one
    /// each way), the one whose image lies nearer the hint-predicted
    /// position wins.
    ///
    /// The hint should point roughly the way the point should travel.
    pub fn rotate_point_around(
        &self,
        point: &Point,
        angle: Real,
        rotation_direction: &Vector,
    ) -> Result<Point, GeometryError> {
        let adjusted = Self::normalized_angle(angle)?;
        if self.contains(point) || almost_zero(adjusted) {
            return Ok(point.clone());
        }
        if epsilon_equals(adjusted, PI) {
            return Ok(self.move_point_across(point));
        }
        let one_way = self.translate_to_origin_frame_and_rotate(point, adjusted);
        let other_way = self.translate_to_origin_frame_and_rotate(point, -adjusted);
        let radius = self.distance_from(point);
        let predicted = point.translate(&rotation_direction.with_length(radius * adjusted));
        if one_way.distance(&predicted) <= other_way.distance(&predicted) {
            Ok(one_way)
        } else {
            Ok(other_way)
        }
    }

    /// Rotate a point clockwise around the line, clockwise as seen looking
    /// along the line's direction vector.
    ///
    /// The candidate image is checked against the cross product of the
    /// radius vectors before and after; if the turn came out the wrong way
    /// the opposite rotation is taken instead.
    pub fn rotate_point_around_clockwise(
        &self,
        point: &Point,
        angle: Real,
    ) -> Result<Point, GeometryError> {
        let adjusted = Self::normalized_angle(angle)?;
        if self.contains(point) || almost_zero(adjusted) {
            return Ok(point.clone());
        }
        if epsilon_equals(adjusted, PI) {
            return Ok(self.move_point_across(point));
        }
        let rotated = self.translate_to_origin_frame_and_rotate(point, -adjusted);
        let closest = self.closest_point(point);
        let mut to_point = closest.vector_to(point);
        let mut to_rotated = closest.vector_to(&rotated);
        if adjusted > PI {
            std::mem::swap(&mut to_point, &mut to_rotated);
        }
        let turn_axis = to_point.cross(&to_rotated).normalize();
        let correct_sense = turn_axis.distance(&self.direction) < 1.0;
        if correct_sense {
            Ok(rotated)
        } else {
            Ok(self.translate_to_origin_frame_and_rotate(point, adjusted))
        }
    }

    /// Map an angle to `[0, 2π)`, accepting one full negative turn.
    fn normalized_angle(angle: Real) -> Result<Real, GeometryError> {
        if angle <= -TAU {
            return Err(GeometryError::AngleOutOfRange { angle });
        }
        let shifted = if angle < 0.0 { angle + TAU } else { angle };
        Ok(shifted % TAU)
    }

    /// Rotate around this line by translating the problem to a parallel line
    /// through the coordinate origin, rotating there, and translating back.
    fn translate_to_origin_frame_and_rotate(&self, point: &Point, angle: Real) -> Point {
        if self.contains(&Point::origin()) {
            return rotate::rotate_point_around_origin_line_clockwise(
                point,
                &self.direction,
                angle,
            );
        }
        let closest_to_origin = self.closest_point(&Point::origin());
        let relative = closest_to_origin.vector_to(point).to_point();
        let rotated = rotate::rotate_point_around_origin_line_clockwise(
            &relative,
            &self.direction,
            angle,
        );
        rotated.translate(&closest_to_origin.vector_from_origin())
    }
}
