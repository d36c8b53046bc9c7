use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::{
    circle::Circle,
    direction::Direction,
    math::is_zero::IsZero,
    matrix::Matrix3x3,
    point::Point,
    polygon::Polygon,
    rect::Rect,
    transform::CanTransform,
    vector::Vector2D,
};

/// Directed line segment from `source` to `target`. May be degenerate (`source == target`).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Segment {
    pub source: Point,
    pub target: Point,
}

impl Segment {
    pub fn new(source: Point, target: Point) -> Self {
        Segment { source, target }
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }

    /// Lexicographically smaller endpoint.
    pub fn min(&self) -> Point {
        self.source.min(&self.target)
    }

    /// Lexicographically larger endpoint.
    pub fn max(&self) -> Point {
        self.source.max(&self.target)
    }

    /// Swap endpoints.
    pub fn opposite(&self) -> Segment {
        Segment { source: self.target, target: self.source }
    }

    /// `target - source`.
    pub fn vector(&self) -> Vector2D {
        self.target - self.source
    }

    /// `None` for a degenerate segment.
    pub fn direction(&self) -> Option<Direction> {
        self.vector().try_unit()
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// `(max - min) × (p - min)`; the sign doesn't depend on which endpoint is `source`.
    fn point_placement(&self, p: &Point) -> f64 {
        let min = self.min();
        (self.max() - min).cross(&(*p - min))
    }

    /// `p` lies left of the line when walking from `min()` to `max()`.
    pub fn is_above(&self, p: &Point) -> bool {
        self.point_placement(p).gt_zero()
    }

    pub fn is_below(&self, p: &Point) -> bool {
        self.point_placement(p).lt_zero()
    }

    /// On the supporting line (not necessarily between the endpoints).
    pub fn is_on(&self, p: &Point) -> bool {
        self.point_placement(p).is_zero()
    }

    pub fn is_on_end(&self, p: &Point) -> bool {
        *p == self.source || *p == self.target
    }

    /// Parametric coordinates `(t, s)` of the crossing along `self` and `o`, or `None`
    /// when the segments are parallel or collinear.
    fn crossing_params(&self, o: &Segment) -> Option<(f64, f64)> {
        let d = self.vector();
        let v = o.vector();
        let denom = d.cross(&v);
        if denom.is_zero() {
            return None;
        }
        let num = self.source - o.source;
        let t = v.cross(&num) / denom;
        let s = d.cross(&num) / denom;
        Some((t, s))
    }

    /// Closed-interval test: touching at an endpoint counts.
    ///
    /// Parallel segments never intersect, even when collinear and overlapping.
    pub fn intersect_segment(&self, o: &Segment) -> bool {
        match self.crossing_params(o) {
            None => false,
            Some((t, s)) => {
                trace!("intersect_segment {} {}: t={}, s={}", self, o, t, s);
                (0. ..=1.).contains(&t) && (0. ..=1.).contains(&s)
            }
        }
    }

    /// Where `self` and `o` cross, under the same rules as [`Segment::intersect_segment`].
    pub fn intersection_point(&self, o: &Segment) -> Option<Point> {
        let (t, s) = self.crossing_params(o)?;
        if (0. ..=1.).contains(&t) && (0. ..=1.).contains(&s) {
            Some(self.source + self.vector() * t)
        } else {
            None
        }
    }

    /// Crosses any of the rectangle's four boundary segments.
    pub fn intersect_rect(&self, r: &Rect) -> bool {
        r.edges().iter().any(|edge| self.intersect_segment(edge))
    }

    pub fn intersect_circle(&self, c: &Circle) -> bool {
        c.intersect_segment(self)
    }

    pub fn intersect_polygon(&self, poly: &Polygon) -> bool {
        poly.edges().any(|edge| self.intersect_segment(&edge))
    }

    /// Nearest point of the segment to `p`; a degenerate segment answers its `source`.
    pub fn closest_point(&self, p: &Point) -> Point {
        let d = self.vector();
        let len2 = d.sqr_norm();
        if len2.is_zero() {
            return self.source;
        }
        let t = ((*p - self.source).dot(&d) / len2).clamp(0., 1.);
        self.source + d * t
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        self.closest_point(p).distance(p)
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.source, self.target)
    }
}

impl CanTransform for Segment {
    type Output = Segment;
    fn transform(&self, m: &Matrix3x3) -> Segment {
        Segment { source: m.transform_point(self.source), target: m.transform_point(self.target) }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}
