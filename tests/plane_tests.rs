mod support;

use plica::{GeometryError, LineSegment, Plane, Point, Side, Vector};
use support::{approx_eq, assert_point_at};

const EPS: f64 = 1e-10;

fn xz_plane() -> Plane {
    Plane::from_ordered_points(
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 0.0, -1.0),
    )
    .unwrap()
}

#[test]
fn construction_rejects_close_points() {
    let err = Plane::from_ordered_points(
        Point::origin(),
        Point::new(1e-5, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    assert!(matches!(err, Err(GeometryError::PointsTooClose { .. })));
}

#[test]
fn normal_is_unit_length() {
    let plane = Plane::from_ordered_points(
        Point::new(4.0, -7.0, 9.0),
        Point::new(-2.0, -2.0, 3.0),
        Point::new(65.0, 2.0, 0.0),
    )
    .unwrap();
    assert!(approx_eq(plane.normal().length(), 1.0, EPS));
}

#[test]
fn winding_sets_the_normal() {
    let plane = xz_plane();
    // (b - a) x (c - a) for this winding points along +Y.
    assert!(plane.normal().epsilon_equals(&Vector::new(0.0, 1.0, 0.0)));
}

#[test]
fn which_side_of_the_xz_plane() {
    let plane = xz_plane();
    let above = Point::new(0.0, 2.0, 0.0);
    let below = Point::new(0.0, -2.0, 0.0);
    assert_eq!(plane.which_side(&above), Some(Side::Positive));
    assert_eq!(plane.which_side(&below), Some(Side::Negative));
    assert_ne!(plane.which_side(&above), plane.which_side(&below));
    // A contained point is on neither side.
    assert_eq!(plane.which_side(&Point::new(0.0, 0.0, 5.0)), None);
}

#[test]
fn which_side_of_an_off_origin_plane() {
    // z = 1, normal up: the boundary is the plane itself, the positive side
    // is where the normal points.
    let plane = Plane::from_ordered_points(
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(0.0, 0.0, 1.0),
    )
    .unwrap();
    assert!(plane.normal().epsilon_equals(&Vector::new(0.0, 0.0, 1.0)));
    assert!(approx_eq(plane.d_constant(), -1.0, EPS));
    assert_eq!(plane.which_side(&Point::new(0.0, 0.0, 2.0)), Some(Side::Positive));
    // Every point below the plane is on the same, negative side.
    assert_eq!(plane.which_side(&Point::new(0.0, 0.0, 0.0)), Some(Side::Negative));
    assert_eq!(plane.which_side(&Point::new(-1.0, 0.0, 0.0)), Some(Side::Negative));
    assert_eq!(plane.which_side(&Point::new(0.0, 0.0, -5.0)), Some(Side::Negative));
    assert_eq!(plane.which_side(&Point::new(3.0, 4.0, 1.0)), None);
    // Flipping the plane swaps the sides but keeps the boundary.
    let flipped = plane.facing_the_other_way();
    assert_eq!(flipped.which_side(&Point::new(0.0, 0.0, 2.0)), Some(Side::Negative));
    assert_eq!(flipped.which_side(&Point::new(3.0, 4.0, 1.0)), None);
}

#[test]
fn side_opposite() {
    assert_eq!(Side::Positive.opposite(), Side::Negative);
    assert_eq!(Side::Negative.opposite(), Side::Positive);
}

#[test]
fn containment() {
    let plane = xz_plane();
    assert!(plane.contains(&Point::new(7.0, 0.0, -3.0)));
    assert!(!plane.contains(&Point::new(0.0, 0.1, 0.0)));
    assert!(plane.contains_all(&[Point::new(1.0, 0.0, 1.0), Point::new(-5.0, 0.0, 2.0)]));
    let segment =
        LineSegment::new(Point::new(0.0, 0.0, 2.0), Point::new(3.0, 0.0, -1.0)).unwrap();
    assert!(plane.contains_segment(&segment));
}

#[test]
fn containment_far_from_the_origin() {
    // The plane-equation residual is rescaled by the point's magnitude.
    let plane = xz_plane();
    assert!(plane.contains(&Point::new(1e8, 0.0, -1e8)));
    assert!(!plane.contains(&Point::new(1e8, 1.0, -1e8)));
}

#[test]
fn closest_point_and_distance() {
    let plane = xz_plane();
    let p = Point::new(3.0, 4.0, -2.0);
    assert_point_at(&plane.closest_point(&p), 3.0, 0.0, -2.0, EPS);
    assert!(approx_eq(plane.distance_from(&p), 4.0, EPS));
    assert!(approx_eq(plane.distance_from(&Point::new(9.0, 0.0, 1.0)), 0.0, EPS));
}

#[test]
fn plane_equation() {
    let plane = xz_plane();
    let [a, b, c, d] = plane.equation();
    assert!(approx_eq(a, 0.0, EPS));
    assert!(approx_eq(b, 1.0, EPS));
    assert!(approx_eq(c, 0.0, EPS));
    assert!(approx_eq(d, 0.0, EPS));
    assert!(approx_eq(plane.d_constant(), 0.0, EPS));
}

#[test]
fn flipping_reverses_the_normal() {
    let plane = xz_plane();
    let flipped = plane.facing_the_other_way();
    assert!(flipped.normal().epsilon_equals(&plane.normal().negate()));
    assert!(plane.facing_away_from_each_other(&flipped));
    assert!(!plane.approximately_facing_the_same_way(&flipped));
    assert!(plane.is_same_plane_any_direction(&flipped));
}

#[test]
fn flipping_swaps_which_side() {
    let plane = xz_plane();
    let flipped = plane.facing_the_other_way();
    let p = Point::new(0.0, 2.0, 0.0);
    assert_eq!(plane.which_side(&p), Some(Side::Positive));
    assert_eq!(flipped.which_side(&p), Some(Side::Negative));
}

#[test]
fn shifting_translates_the_plane() {
    let plane = xz_plane();
    let shifted = plane.shift(&Vector::new(0.0, 3.0, 0.0));
    assert!(shifted.normal().epsilon_equals(plane.normal()));
    assert!(shifted.contains(&Point::new(0.0, 3.0, 0.0)));
    assert!(!shifted.contains(&Point::origin()));
    assert!(!plane.is_same_plane_any_direction(&shifted));
    assert!(plane.approximately_facing_the_same_way(&shifted));
}

#[test]
fn creation_points_are_kept() {
    let a = Point::new(0.0, 0.0, 1.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let c = Point::new(0.0, 0.0, -1.0);
    let plane = Plane::from_ordered_points(a.clone(), b.clone(), c.clone()).unwrap();
    let kept = plane.creation_points();
    assert_eq!(kept[0], a);
    assert_eq!(kept[1], b);
    assert_eq!(kept[2], c);
}
