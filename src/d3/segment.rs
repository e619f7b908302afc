//! A line segment between two points, carrying its enclosing line.
//!
//! Equality and hashing follow point identity, not coordinates: two
//! segments are equal when they join the same two `Point` values in either
//! order. Coordinate-level questions go through the `epsilon`-style and
//! containment methods instead.

use std::hash::{Hash, Hasher};

use crate::d3::line::Line;
use crate::d3::point::Point;
use crate::errors::GeometryError;
use crate::float_types::{almost_zero, epsilon_equals, Real};

#[derive(Debug, Clone)]
pub struct LineSegment {
    ends: (Point, Point),
    // None only for the zero-length degenerate, which has no direction.
    line: Option<Line>,
}

impl LineSegment {
    /// Build a segment between two points. The points must be far enough
    /// apart to define an enclosing line.
    pub fn new(first: Point, second: Point) -> Result<Self, GeometryError> {
        let line = Line::passing_by(first.clone(), &second)?;
        Ok(Self {
            ends: (first, second),
            line: Some(line),
        })
    }

    /// A degenerate segment that is a single point. Its length is exactly
    /// zero and it has no enclosing line.
    pub fn zero_length(point: Point) -> Self {
        Self {
            ends: (point.clone(), point),
            line: None,
        }
    }

    /// Join two points without the separation check, for results of
    /// intersection searches whose bridge may be arbitrarily short. Callers
    /// guarantee the points are not coincident.
    pub(crate) fn joining(first: Point, second: Point) -> Self {
        let direction = first.vector_to(&second).normalize();
        // Safe: direction is normalized above.
        let line = Line::new(first.clone(), direction).ok();
        Self {
            ends: (first, second),
            line,
        }
    }

    pub const fn is_zero_length(&self) -> bool {
        self.line.is_none()
    }

    pub fn length(&self) -> Real {
        if self.is_zero_length() {
            return 0.0;
        }
        self.ends.0.distance(&self.ends.1)
    }

    pub const fn points(&self) -> (&Point, &Point) {
        (&self.ends.0, &self.ends.1)
    }

    pub const fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }

    /// Both ends as an array, for callers that iterate. No order is
    /// promised.
    pub fn ends(&self) -> [&Point; 2] {
        [&self.ends.0, &self.ends.1]
    }

    /// Whether both of the other segment's ends sit at this segment's end
    /// positions, by coordinates rather than identity.
    pub fn matches(&self, other: &Self) -> bool {
        let (a, b) = other.points();
        self.is_at_end_position(a) && self.is_at_end_position(b)
    }

    /// Identity check: is this very point value one of the ends.
    pub fn is_an_end(&self, point: &Point) -> bool {
        &self.ends.0 == point || &self.ends.1 == point
    }

    /// Whether a point coincides with one of the ends, by identity or by
    /// coordinates.
    pub fn is_at_end_position(&self, point: &Point) -> bool {
        self.is_an_end(point)
            || self.ends.0.epsilon_equals(point)
            || self.ends.1.epsilon_equals(point)
    }

    /// Whether the enclosing line passes through the point. True for the
    /// ends themselves even on a zero-length segment.
    pub fn enclosing_line_contains(&self, point: &Point) -> bool {
        match &self.line {
            Some(line) => line.contains(point),
            None => self.is_at_end_position(point),
        }
    }

    /// Whether the point lies on the segment proper: on the enclosing line
    /// and between the ends.
    pub fn contains(&self, point: &Point) -> bool {
        if self.is_at_end_position(point) {
            return true;
        }
        if !self.enclosing_line_contains(point) {
            return false;
        }
        let through = self.ends.0.distance(point) + point.distance(&self.ends.1);
        epsilon_equals(through, self.length())
    }

    pub fn contains_and_not_at_end(&self, point: &Point) -> bool {
        self.contains(point) && !self.is_at_end_position(point)
    }

    /// The foot of the perpendicular from the point, when it falls inside
    /// the segment.
    pub fn perpendicular_to(&self, point: &Point) -> Option<Point> {
        let line = self.line.as_ref()?;
        let foot = line.closest_point(point);
        if self.contains(&foot) {
            Some(foot)
        } else {
            None
        }
    }

    /// The nearest point of the segment itself: the perpendicular foot when
    /// it lands inside, otherwise the nearer end.
    pub fn closest_point_in_segment(&self, point: &Point) -> Point {
        match self.perpendicular_to(point) {
            Some(foot) => foot,
            None => self.closest_end(point).clone(),
        }
    }

    fn closest_end(&self, point: &Point) -> &Point {
        if self.ends.0.distance(point) <= self.ends.1.distance(point) {
            &self.ends.0
        } else {
            &self.ends.1
        }
    }

    /// The nearest point of the enclosing line, which may fall outside the
    /// segment. For the zero-length degenerate this is the point itself.
    pub fn closest_point_in_enclosing_line(&self, point: &Point) -> Point {
        match &self.line {
            Some(line) => line.closest_point(point),
            None => self.ends.0.clone(),
        }
    }

    /// Distance from the point to the perpendicular foot, when that foot
    /// falls inside the segment.
    pub fn perpendicular_distance_from(&self, point: &Point) -> Option<Real> {
        self.perpendicular_to(point).map(|foot| foot.distance(point))
    }

    /// Distance from the point to the segment proper.
    pub fn distance_from(&self, point: &Point) -> Real {
        self.closest_point_in_segment(point).distance(point)
    }

    /// Whether the segments share a line and more than a single point.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        if !other.is_collinear_with(self) {
            return false;
        }
        if self.matches(other) {
            return true;
        }
        let (a, b) = other.points();
        self.contains_and_not_at_end(a)
            || self.contains_and_not_at_end(b)
            || other.contains_and_not_at_end(&self.ends.0)
            || other.contains_and_not_at_end(&self.ends.1)
    }

    /// Whether the other segment lies entirely within this one.
    pub fn contains_segment(&self, other: &Self) -> bool {
        if self == other || self.matches(other) {
            return true;
        }
        if !other.is_collinear_with(self) {
            return false;
        }
        let (a, b) = other.points();
        self.contains(a) && self.contains(b)
    }

    pub fn is_collinear_with(&self, other: &Self) -> bool {
        let (a, b) = other.points();
        self.enclosing_line_contains(a) && self.enclosing_line_contains(b)
    }

    /// The single point where the segments cross, if they do. `None` when
    /// the enclosing lines are parallel, miss each other, or meet outside
    /// either segment.
    pub fn intersection_point(&self, other: &Self) -> Option<Point> {
        let bridge = crate::geometry::line_to_line_intersection(self, other).ok()??;
        if !almost_zero(bridge.length()) {
            return None;
        }
        let (meeting, _) = bridge.points();
        if self.contains(meeting) && other.contains(meeting) {
            Some(meeting.clone())
        } else {
            None
        }
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.ends.0, &self.ends.1);
        let (oa, ob) = (&other.ends.0, &other.ends.1);
        (a == oa && b == ob) || (a == ob && b == oa)
    }
}

impl Eq for LineSegment {}

impl Hash for LineSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-insensitive, to match the end-set equality.
        (self.ends.0.id() ^ self.ends.1.id()).hash(state);
    }
}
