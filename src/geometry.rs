//! Free-function facade: queries that relate several geometric objects
//! rather than belonging to any one of them.

use std::cmp::Ordering;

use nalgebra::Point2;

use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::segment::LineSegment;
use crate::d3::vector::Vector;
use crate::errors::GeometryError;
use crate::float_types::{epsilon_equals, EQUALITY_EPSILON, MIN_SEPARATION, Real, TAU};

/// Whether a set of points is coplanar. Fewer than three points is an
/// error; exactly three are trivially coplanar.
///
/// Axis-aligned sets are answered by a shared-coordinate fast path; the
/// general case compares the normal of each candidate triple against the
/// normal of the first, accepting either orientation.
pub fn in_same_plane(points: &[Point]) -> Result<bool, GeometryError> {
    if points.len() <= 2 {
        return Err(GeometryError::TooFewPoints {
            needed: 3,
            got: points.len(),
        });
    }
    if share_a_coordinate(points) {
        return Ok(true);
    }
    let reference = Plane::from_ordered_points(
        points[0].clone(),
        points[1].clone(),
        points[2].clone(),
    )?;
    for point in &points[3..] {
        let candidate =
            Plane::from_ordered_points(points[0].clone(), points[1].clone(), point.clone())?;
        let aligned = reference.normal().epsilon_equals(candidate.normal())
            || reference.normal().epsilon_equals(&candidate.normal().negate());
        if !aligned {
            return Ok(false);
        }
    }
    Ok(true)
}

fn share_a_coordinate(points: &[Point]) -> bool {
    let first = &points[0];
    points.iter().all(|p| epsilon_equals(p.x(), first.x()))
        || points.iter().all(|p| epsilon_equals(p.y(), first.y()))
        || points.iter().all(|p| epsilon_equals(p.z(), first.z()))
}

/// The shortest bridge between the lines enclosing two segments.
///
/// `Ok(None)` when the lines are parallel. When the lines meet, the bridge
/// collapses to a zero-length segment at the meeting point. The segments
/// only lend their enclosing lines; the bridge may fall outside either of
/// them.
///
/// Uses the Gram-determinant form of the two-parameter closest-approach
/// system.
pub fn line_to_line_intersection(
    first: &LineSegment,
    second: &LineSegment,
) -> Result<Option<LineSegment>, GeometryError> {
    let (p1, p2) = first.points();
    let (p3, p4) = second.points();
    let p21 = p1.vector_to(p2);
    let p43 = p3.vector_to(p4);
    if p21.length() < MIN_SEPARATION || p43.length() < MIN_SEPARATION {
        return Err(GeometryError::PointsTooClose {
            distance: p21.length().min(p43.length()),
            minimum: MIN_SEPARATION,
        });
    }
    let p13 = p3.vector_to(p1);
    let d1343 = p13.dot(&p43);
    let d4321 = p43.dot(&p21);
    let d1321 = p13.dot(&p21);
    let d4343 = p43.dot(&p43);
    let d2121 = p21.dot(&p21);
    let denom = d2121 * d4343 - d4321 * d4321;
    if denom.abs() < EQUALITY_EPSILON {
        return Ok(None);
    }
    let mua = (d1343 * d4321 - d1321 * d4343) / denom;
    let mub = (d1343 + d4321 * mua) / d4343;
    let point_a = p1.translate(&p21.scale(mua));
    let point_b = p3.translate(&p43.scale(mub));
    if point_a.epsilon_equals(&point_b) {
        return Ok(Some(LineSegment::zero_length(point_a)));
    }
    Ok(Some(LineSegment::joining(point_a, point_b)))
}

/// The planar rendering of [`Point::distant_enough`]: whether two 2D points
/// are far enough apart to serve as independent construction inputs.
pub fn distant_enough_2d(first: &Point2<Real>, second: &Point2<Real>) -> bool {
    nalgebra::distance(first, second) > MIN_SEPARATION
}

/// Magnitude-scaled value equality for 2D points, component-wise.
pub fn epsilon_equals_2d(first: &Point2<Real>, second: &Point2<Real>) -> bool {
    epsilon_equals(first.x, second.x) && epsilon_equals(first.y, second.y)
}

/// Whether two direction vectors point into opposing half-spaces.
pub fn facing_each_other(first: &Vector, second: &Vector) -> bool {
    first.dot(second) < 0.0
}

pub fn facing_the_same_way(first: &Vector, second: &Vector) -> bool {
    first.dot(second) > 0.0
}

/// Orderings understood by [`sort_plane_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOrdering {
    /// By angle around the origin, counterclockwise from the positive X
    /// axis.
    Counterclockwise,
    /// By angle around the origin, clockwise from the positive X axis.
    Clockwise,
    /// By X first, then Y where X ties within tolerance.
    XAndYAxes,
}

/// Sort planar points in place under one of the supported orderings.
///
/// The angular orderings treat angles within tolerance of each other, and
/// the pair 0 and 2π, as equal, so ties keep their relative order.
pub fn sort_plane_points(points: &mut [Point2<Real>], ordering: PointOrdering) {
    match ordering {
        PointOrdering::Counterclockwise => {
            points.sort_by(compare_counterclockwise);
        }
        PointOrdering::Clockwise => {
            points.sort_by(compare_counterclockwise);
            points.reverse();
        }
        PointOrdering::XAndYAxes => {
            points.sort_by(|a, b| {
                if epsilon_equals(a.x, b.x) {
                    a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
                } else {
                    a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
                }
            });
        }
    }
}

fn compare_counterclockwise(a: &Point2<Real>, b: &Point2<Real>) -> Ordering {
    let theta_a = positive_theta(a);
    let theta_b = positive_theta(b);
    let both_at_wraparound = (epsilon_equals(theta_a, 0.0) || epsilon_equals(theta_a, TAU))
        && (epsilon_equals(theta_b, 0.0) || epsilon_equals(theta_b, TAU));
    if both_at_wraparound || epsilon_equals(theta_a, theta_b) {
        return Ordering::Equal;
    }
    theta_a.partial_cmp(&theta_b).unwrap_or(Ordering::Equal)
}

/// Polar angle in `[0, 2π)`.
fn positive_theta(p: &Point2<Real>) -> Real {
    let theta = p.y.atan2(p.x);
    if theta < 0.0 {
        theta + TAU
    } else {
        theta
    }
}
