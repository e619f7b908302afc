mod support;

use std::collections::HashSet;

use plica::{GeometryError, LineSegment, Point};
use support::{approx_eq, assert_point_at};

const EPS: f64 = 1e-10;

fn unit_x_segment() -> LineSegment {
    LineSegment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)).unwrap()
}

#[test]
fn construction_rejects_near_coincident_points() {
    let err = LineSegment::new(Point::origin(), Point::new(1e-5, 0.0, 0.0));
    assert!(matches!(err, Err(GeometryError::PointsTooClose { .. })));
}

#[test]
fn equality_is_by_end_identity_in_either_order() {
    let a = Point::origin();
    let b = Point::new(1.0, 0.0, 0.0);
    let forward = LineSegment::new(a.clone(), b.clone()).unwrap();
    let backward = LineSegment::new(b, a).unwrap();
    assert_eq!(forward, backward);
    // Coordinate-equal but freshly built points give an unequal segment.
    let rebuilt =
        LineSegment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)).unwrap();
    assert_ne!(forward, rebuilt);
    assert!(forward.matches(&rebuilt));
}

#[test]
fn hashing_is_order_insensitive() {
    let a = Point::origin();
    let b = Point::new(1.0, 0.0, 0.0);
    let forward = LineSegment::new(a.clone(), b.clone()).unwrap();
    let backward = LineSegment::new(b, a).unwrap();
    let mut set = HashSet::new();
    set.insert(forward);
    assert!(set.contains(&backward));
    assert_eq!(set.len(), 1);
}

#[test]
fn length_and_ends() {
    let segment = LineSegment::new(Point::new(1.0, 1.0, 1.0), Point::new(4.0, 5.0, 1.0)).unwrap();
    assert!(approx_eq(segment.length(), 5.0, EPS));
    assert!(!segment.is_zero_length());
    assert!(segment.line().is_some());
    let (a, b) = segment.points();
    assert!(segment.ends().contains(&a));
    assert!(segment.ends().contains(&b));
}

#[test]
fn zero_length_degenerate() {
    let p = Point::new(2.0, 3.0, 4.0);
    let degenerate = LineSegment::zero_length(p.clone());
    assert!(degenerate.is_zero_length());
    assert_eq!(degenerate.length(), 0.0);
    assert!(degenerate.line().is_none());
    assert!(degenerate.is_an_end(&p));
    assert!(degenerate.contains(&p));
    assert!(degenerate.enclosing_line_contains(&p));
    assert!(!degenerate.contains(&Point::new(2.0, 3.0, 5.0)));
}

#[test]
fn end_checks_identity_and_position() {
    let a = Point::origin();
    let b = Point::new(1.0, 0.0, 0.0);
    let segment = LineSegment::new(a.clone(), b).unwrap();
    assert!(segment.is_an_end(&a));
    let coordinate_twin = Point::origin();
    assert!(!segment.is_an_end(&coordinate_twin));
    assert!(segment.is_at_end_position(&coordinate_twin));
}

#[test]
fn containment_is_bounded_by_the_ends() {
    let segment = unit_x_segment();
    assert!(segment.contains(&Point::new(0.5, 0.0, 0.0)));
    assert!(segment.contains(&Point::new(0.0, 0.0, 0.0)));
    assert!(!segment.contains(&Point::new(1.5, 0.0, 0.0)));
    assert!(!segment.contains(&Point::new(-0.5, 0.0, 0.0)));
    assert!(!segment.contains(&Point::new(0.5, 0.1, 0.0)));
    assert!(segment.enclosing_line_contains(&Point::new(1.5, 0.0, 0.0)));
    assert!(segment.contains_and_not_at_end(&Point::new(0.5, 0.0, 0.0)));
    assert!(!segment.contains_and_not_at_end(&Point::new(1.0, 0.0, 0.0)));
}

#[test]
fn perpendicular_foot_inside_and_outside() {
    let segment = unit_x_segment();
    let above_middle = Point::new(0.5, 2.0, 0.0);
    let foot = segment.perpendicular_to(&above_middle).unwrap();
    assert_point_at(&foot, 0.5, 0.0, 0.0, EPS);
    assert!(approx_eq(
        segment.perpendicular_distance_from(&above_middle).unwrap(),
        2.0,
        EPS
    ));
    // The foot for a point beyond the end falls outside the segment.
    let beyond = Point::new(3.0, 2.0, 0.0);
    assert!(segment.perpendicular_to(&beyond).is_none());
    assert!(segment.perpendicular_distance_from(&beyond).is_none());
}

#[test]
fn closest_point_and_distance() {
    let segment = unit_x_segment();
    let above_middle = Point::new(0.5, 2.0, 0.0);
    assert_point_at(&segment.closest_point_in_segment(&above_middle), 0.5, 0.0, 0.0, EPS);
    let beyond = Point::new(3.0, 2.0, 0.0);
    // Past the end the nearer end wins.
    assert_point_at(&segment.closest_point_in_segment(&beyond), 1.0, 0.0, 0.0, EPS);
    assert!(approx_eq(segment.distance_from(&beyond), 8f64.sqrt(), EPS));
    // The enclosing line is unbounded.
    assert_point_at(
        &segment.closest_point_in_enclosing_line(&beyond),
        3.0,
        0.0,
        0.0,
        EPS,
    );
}

#[test]
fn overlap_and_segment_containment() {
    let segment = unit_x_segment();
    let inner =
        LineSegment::new(Point::new(0.25, 0.0, 0.0), Point::new(0.75, 0.0, 0.0)).unwrap();
    let extending =
        LineSegment::new(Point::new(0.5, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)).unwrap();
    let disjoint_collinear =
        LineSegment::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 0.0, 0.0)).unwrap();
    let skew = LineSegment::new(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0)).unwrap();
    assert!(segment.overlaps(&inner));
    assert!(segment.overlaps(&extending));
    assert!(!segment.overlaps(&disjoint_collinear));
    assert!(!segment.overlaps(&skew));
    assert!(segment.contains_segment(&inner));
    assert!(!segment.contains_segment(&extending));
    assert!(segment.is_collinear_with(&disjoint_collinear));
    assert!(!segment.is_collinear_with(&skew));
}

#[test]
fn crossing_segments_intersect_in_a_point() {
    let a = LineSegment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)).unwrap();
    let b = LineSegment::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0)).unwrap();
    let crossing = a.intersection_point(&b).unwrap();
    assert_point_at(&crossing, 0.0, 0.0, 0.0, EPS);
}

#[test]
fn non_crossing_segments_have_no_intersection_point() {
    // Lines cross but outside both segments.
    let a = LineSegment::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)).unwrap();
    let b = LineSegment::new(Point::new(0.0, 1.0, 0.0), Point::new(0.0, 2.0, 0.0)).unwrap();
    assert!(a.intersection_point(&b).is_none());
    // Parallel segments never cross.
    let c = LineSegment::new(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0)).unwrap();
    let horizontal = unit_x_segment();
    assert!(horizontal.intersection_point(&c).is_none());
    // Skew lines pass near each other without meeting.
    let d = LineSegment::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 1.0, 1.1)).unwrap();
    assert!(horizontal.intersection_point(&d).is_none());
}
