//! Obstacle map made of line segments, with ray casting against it.

use nalgebra::Vector2;

use super::{Angle, Position};

const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LineSegment {
    p1: Position,
    p2: Position,
}

impl LineSegment {
    pub const fn new(p1: Position, p2: Position) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Position {
        self.p1
    }

    pub fn p2(&self) -> Position {
        self.p2
    }

    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// Check if a ray defined by an origin and an angle intersects the line
    /// segment. Solves `origin + t * dir = p1 + u * edge` for the parametric
    /// pair `(t, u)` and accepts hits with `t >= 0` and `u` within the
    /// segment. A ray starting on the segment reports its own origin.
    pub fn intersect_with_ray(&self, ray_origin: Position, angle: Angle) -> Option<Position> {
        let dir = Vector2::new(angle.cos(), angle.sin());
        let edge = Vector2::new(self.p2.x() - self.p1.x(), self.p2.y() - self.p1.y());
        let offset = Vector2::new(self.p1.x() - ray_origin.x(), self.p1.y() - ray_origin.y());

        let denom = dir.perp(&edge);
        if denom.abs() < EPSILON {
            // Parallel: a hit is only possible if the origin already lies on
            // the segment itself.
            if offset.perp(&dir).abs() < EPSILON && self.contains(ray_origin) {
                return Some(ray_origin);
            }
            return None;
        }

        let t = offset.perp(&edge) / denom;
        let u = offset.perp(&dir) / denom;

        if t < -EPSILON || u < -EPSILON || u > 1.0 + EPSILON {
            return None;
        }

        Some(ray_origin.project(angle, t.max(0.0)))
    }

    fn contains(&self, position: Position) -> bool {
        position.x() + EPSILON >= self.p1.x().min(self.p2.x())
            && position.x() - EPSILON <= self.p1.x().max(self.p2.x())
            && position.y() + EPSILON >= self.p1.y().min(self.p2.y())
            && position.y() - EPSILON <= self.p1.y().max(self.p2.y())
    }
}

/// Ordered collection of obstacle segments. The engine only ever appends;
/// the presentation layer may bulk-replace or clear the whole map.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct LineMap {
    segments: Vec<LineSegment>,
}

impl LineMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segments(segments: Vec<LineSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn add(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    pub fn replace(&mut self, segments: Vec<LineSegment>) {
        log::debug!("replacing obstacle map with {} segments", segments.len());
        self.segments = segments;
    }

    pub fn clear(&mut self) {
        log::debug!("clearing obstacle map ({} segments)", self.segments.len());
        self.segments.clear();
    }

    /// Distance along the ray to the closest segment hit within `range`.
    pub fn first_hit(&self, origin: Position, angle: Angle, range: f64) -> Option<f64> {
        self.segments
            .iter()
            .filter_map(|s| {
                s.intersect_with_ray(origin, angle)
                    .map(|i| origin.distance(i))
            })
            .filter(|d| *d <= range)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case::intersection_in_front_of_ray(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(1.0, 0.0),
        Angle::new(0.75 * PI),
        Some(Position::new(0.5, 0.5))
    )]
    #[case::intersection_behind_ray(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(0.0, 1.0),
        Angle::new(0.75 * PI),
        None
    )]
    #[case::intersection_not_on_line_segment(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(1.0, -2.0),
        Angle::new(0.75 * PI),
        None
    )]
    #[case::ray_origin_on_line_segment(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(0.5, 0.5),
        Angle::new(0.5 * PI),
        Some(Position::new(0.5, 0.5))
    )]
    #[case::ray_origin_not_on_line_segment(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(-0.5, -0.5),
        Angle::new(0.25 * PI),
        None
    )]
    #[case::colinear_origin_on_segment(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(1.0, 1.0),
        Angle::new(0.25 * PI),
        Some(Position::new(1.0, 1.0))
    )]
    #[case::parallel(
        LineSegment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
        Position::new(0.0, 1.0),
        Angle::new(0.25 * PI),
        None
    )]
    #[case::vertical_line_segment_right(
        LineSegment::new(Position::new(1.0, 1.0), Position::new(1.0, -1.0)),
        Position::new(0.0, 1.0),
        Angle::new(0.0),
        Some(Position::new(1.0, 1.0))
    )]
    #[case::vertical_line_segment_left(
        LineSegment::new(Position::new(-1.0, 1.0), Position::new(-1.0, -1.0)),
        Position::new(-0.8, 0.0),
        Angle::new(3.0 / 4.0 * PI),
        Some(Position::new(-1.0, 0.2))
    )]
    #[case::vertical_line_segment_left_corner(
        LineSegment::new(Position::new(-1.0, 1.0), Position::new(-1.0, -1.0)),
        Position::new(0.0, 0.0),
        Angle::new(3.0 / 4.0 * PI),
        Some(Position::new(-1.0, 1.0))
    )]
    #[case::vertical_line_segment_left_behind(
        LineSegment::new(Position::new(-1.0, 1.0), Position::new(-1.0, -1.0)),
        Position::new(-2.0, 0.0),
        Angle::new(3.0 / 4.0 * PI),
        None
    )]
    #[case::vertical_ray(
        LineSegment::new(Position::new(-2.0, 1.0), Position::new(2.0, 1.0)),
        Position::new(1.0, 0.0),
        Angle::new(0.5 * PI),
        Some(Position::new(1.0, 1.0))
    )]
    fn test_line_segment_intersect_with_ray(
        #[case] line: LineSegment,
        #[case] position: Position,
        #[case] angle: Angle,
        #[case] intersection: Option<Position>,
    ) {
        let result = line.intersect_with_ray(position, angle);
        if let (Some(r), Some(i)) = (result, intersection) {
            assert_abs_diff_eq!(r, i, epsilon = EPSILON);
        } else {
            assert_eq!(result, intersection);
        }
    }

    #[test]
    fn test_line_segment_length() {
        let segment = LineSegment::new(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert_abs_diff_eq!(segment.length(), 5.0);
    }

    #[test]
    fn test_line_map_first_hit_empty() {
        let map = LineMap::new();
        assert_eq!(
            map.first_hit(Position::new(0.0, 0.0), Angle::new(0.0), 10.0),
            None
        );
    }

    #[test]
    fn test_line_map_first_hit_picks_closest() {
        let map = LineMap::with_segments(vec![
            LineSegment::new(Position::new(4.0, -1.0), Position::new(4.0, 1.0)),
            LineSegment::new(Position::new(2.0, -1.0), Position::new(2.0, 1.0)),
        ]);
        assert_abs_diff_eq!(
            map.first_hit(Position::new(0.0, 0.0), Angle::new(0.0), 10.0)
                .unwrap(),
            2.0
        );
    }

    #[test]
    fn test_line_map_first_hit_beyond_range() {
        let map = LineMap::with_segments(vec![LineSegment::new(
            Position::new(5.0, -1.0),
            Position::new(5.0, 1.0),
        )]);
        assert_eq!(map.first_hit(Position::new(0.0, 0.0), Angle::new(0.0), 4.0), None);
    }

    #[test]
    fn test_line_map_replace_and_clear() {
        let mut map = LineMap::new();
        map.add(LineSegment::new(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
        ));
        assert_eq!(map.len(), 1);

        map.replace(vec![
            LineSegment::new(Position::new(0.0, 0.0), Position::new(0.0, 1.0)),
            LineSegment::new(Position::new(0.0, 1.0), Position::new(1.0, 1.0)),
        ]);
        assert_eq!(map.len(), 2);

        map.clear();
        assert!(map.is_empty());
    }
}
