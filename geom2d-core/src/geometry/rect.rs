use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::{
    circle::Circle,
    error::GeometryError,
    matrix::Matrix3x3,
    point::Point,
    polygon::Polygon,
    segment::Segment,
    transform::CanTransform,
    vector::Vector2D,
};

/// Axis-aligned rectangle from its lower-left (`min`) to upper-right (`max`) corner.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Rejects `min` exceeding `max` on either axis (and NaN coordinates).
    pub fn new(min: Point, max: Point) -> Result<Rect, GeometryError> {
        if min.x <= max.x && min.y <= max.y {
            Ok(Rect { min, max })
        } else {
            debug!("Rect::new: inverted corners {} {}", min, max);
            Err(GeometryError::InvertedRect { min, max })
        }
    }

    pub fn new_unchecked(min: Point, max: Point) -> Rect {
        Rect { min, max }
    }

    /// Rect spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Rect {
        Rect { min: a.min_comp(&b), max: a.max_comp(&b) }
    }

    pub fn center(&self) -> Point {
        Point {
            x: (self.max.x + self.min.x) * 0.5,
            y: (self.max.y + self.min.y) * 0.5,
        }
    }

    /// Width and height.
    pub fn size(&self) -> Vector2D {
        (self.max - self.min).abs()
    }

    pub fn half_size(&self) -> Vector2D {
        self.size() * 0.5
    }

    pub fn width(&self) -> f64 {
        self.size().x
    }

    pub fn height(&self) -> f64 {
        self.size().y
    }

    pub fn area(&self) -> f64 {
        let size = self.size();
        size.x * size.y
    }

    pub fn top_left(&self) -> Point {
        Point { x: self.min.x, y: self.max.y }
    }

    pub fn top_right(&self) -> Point {
        self.max
    }

    pub fn bottom_left(&self) -> Point {
        self.min
    }

    pub fn bottom_right(&self) -> Point {
        Point { x: self.max.x, y: self.min.y }
    }

    /// Counter-clockwise, starting at the bottom-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [self.bottom_left(), self.bottom_right(), self.top_right(), self.top_left()]
    }

    /// The four boundary segments, counter-clockwise from the bottom edge.
    pub fn edges(&self) -> [Segment; 4] {
        let [bl, br, tr, tl] = self.corners();
        [
            Segment::new(bl, br),
            Segment::new(br, tr),
            Segment::new(tr, tl),
            Segment::new(tl, bl),
        ]
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new_unchecked(self.corners().to_vec())
    }

    /// Border counts as inside.
    pub fn inside(&self, p: &Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Separating-axis test on center distance vs. summed half-extents; touching edges overlap.
    pub fn intersect_rect(&self, s: &Rect) -> bool {
        let d = (s.center() - self.center()).abs();
        let h1 = self.half_size();
        let h2 = s.half_size();
        d.x <= h1.x + h2.x && d.y <= h1.y + h2.y
    }

    pub fn intersect_circle(&self, c: &Circle) -> bool {
        c.intersect_rect(self)
    }

    pub fn intersect_polygon(&self, poly: &Polygon) -> bool {
        poly.intersect_rect(self)
    }

    /// Boundary crossing only, like [`Segment::intersect_rect`].
    pub fn intersect_segment(&self, seg: &Segment) -> bool {
        seg.intersect_rect(self)
    }

    /// Smallest rect containing both `self` and `p`.
    pub fn surround_point(&self, p: Point) -> Rect {
        Rect { min: self.min.min_comp(&p), max: self.max.max_comp(&p) }
    }

    /// Smallest rect containing both `self` and `s`.
    pub fn surround_rect(&self, s: Rect) -> Rect {
        Rect { min: self.min.min_comp(&s.min), max: self.max.max_comp(&s.max) }
    }

    pub fn bounding_box(&self) -> Rect {
        *self
    }

    pub fn moved(&self, delta: Vector2D) -> Rect {
        Rect { min: self.min + delta, max: self.max + delta }
    }

    /// Same size, lower-left corner at `pos`.
    pub fn moved_to(&self, pos: Point) -> Rect {
        Rect { min: pos, max: pos + self.size() }
    }

    pub fn centered_at(&self, pos: Point) -> Rect {
        self.moved(pos - self.center())
    }
}

/// Maps the two defining corners and re-normalizes; exact for translation and
/// axis scaling (including flips). Under rotation the result is the box spanned by
/// the image of `min` and `max`, not the rotated rectangle's bounding box.
impl CanTransform for Rect {
    type Output = Rect;
    fn transform(&self, m: &Matrix3x3) -> Rect {
        Rect::from_corners(m.transform_point(self.min), m.transform_point(self.max))
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::transform::Transform;

    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new_unchecked(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn validated() {
        assert!(Rect::new(Point::new(0., 0.), Point::new(1., 1.)).is_ok());
        assert!(Rect::new(Point::new(1., 1.), Point::new(1., 1.)).is_ok());
        assert_eq!(
            Rect::new(Point::new(2., 0.), Point::new(1., 1.)),
            Err(GeometryError::InvertedRect { min: Point::new(2., 0.), max: Point::new(1., 1.) }),
        );
        assert!(Rect::new(Point::new(f64::NAN, 0.), Point::new(1., 1.)).is_err());
        assert_eq!(Rect::from_corners(Point::new(2., 0.), Point::new(1., 3.)), rect(1., 0., 2., 3.));
    }

    #[test]
    fn measurements() {
        let r = rect(1., 2., 5., 4.);
        assert_eq!(r.center(), Point::new(3., 3.));
        assert_eq!(r.size(), Vector2D::new(4., 2.));
        assert_eq!(r.half_size(), Vector2D::new(2., 1.));
        assert_eq!(r.width(), 4.);
        assert_eq!(r.height(), 2.);
        assert_eq!(r.area(), 8.);
    }

    #[test]
    fn corners() {
        let r = rect(0., 0., 2., 1.);
        assert_eq!(r.top_left(), Point::new(0., 1.));
        assert_eq!(r.top_right(), Point::new(2., 1.));
        assert_eq!(r.bottom_left(), Point::new(0., 0.));
        assert_eq!(r.bottom_right(), Point::new(2., 0.));
        let poly = r.to_polygon();
        assert!(poly.is_ccw());
        assert_eq!(poly.area(), 2.);
        for (edge, corner) in r.edges().iter().zip(r.corners()) {
            assert_eq!(edge.source, corner);
        }
    }

    #[test]
    fn inside_border_inclusive() {
        let r = rect(0., 0., 2., 2.);
        assert!(r.inside(&Point::new(1., 1.)));
        assert!(r.inside(&Point::new(0., 0.)));
        assert!(r.inside(&Point::new(2., 2.)));
        assert!(r.inside(&Point::new(2., 1.)));
        assert!(r.inside(&Point::new(1., 0.)));
        assert!(!r.inside(&Point::new(2.0001, 1.)));
        assert!(!r.inside(&Point::new(1., -0.0001)));
        // lexicographic ordering would accept this one
        assert!(!r.inside(&Point::new(1., 5.)));
    }

    #[test]
    fn intersect_rect() {
        let a = rect(0., 0., 2., 2.);
        // edge-touching counts as overlap
        assert!(a.intersect_rect(&rect(2., 0., 4., 2.)));
        assert!(rect(2., 0., 4., 2.).intersect_rect(&a));
        // corner-touching too
        assert!(a.intersect_rect(&rect(2., 2., 3., 3.)));
        assert!(a.intersect_rect(&rect(1., 1., 3., 3.)));
        assert!(a.intersect_rect(&rect(0.5, 0.5, 1., 1.)));
        assert!(!a.intersect_rect(&rect(2.1, 0., 4., 2.)));
        // separated on the negative side
        assert!(!a.intersect_rect(&rect(-3., 0., -1., 2.)));
        assert!(!a.intersect_rect(&rect(0., -3., 2., -1.)));
        assert!(!rect(-3., 0., -1., 2.).intersect_rect(&a));
    }

    #[test]
    fn surround() {
        let r = rect(0., 0., 1., 1.);
        assert_eq!(r.surround_point(Point::new(3., -1.)), rect(0., -1., 3., 1.));
        assert_eq!(r.surround_point(Point::new(0.5, 0.5)), r);
        assert_eq!(r.surround_rect(rect(-1., 0.5, 0.5, 2.)), rect(-1., 0., 1., 2.));
        assert_eq!(r.bounding_box(), r);
    }

    #[test]
    fn moves_return_new_values() {
        let r = rect(0., 0., 2., 1.);
        assert_eq!(r.moved(Vector2D::new(1., 1.)), rect(1., 1., 3., 2.));
        assert_eq!(r.moved_to(Point::new(-1., 5.)), rect(-1., 5., 1., 6.));
        assert_eq!(r.centered_at(Point::new(0., 0.)), rect(-1., -0.5, 1., 0.5));
        assert_eq!(r, rect(0., 0., 2., 1.));
    }

    #[test]
    fn transform() {
        let r = rect(0., 0., 2., 1.);
        assert_eq!(r.apply(&Transform::Translate(Vector2D::new(1., 1.))), rect(1., 1., 3., 2.));
        assert_eq!(r.apply(&Transform::Scale(Vector2D::new(2., 3.))), rect(0., 0., 4., 3.));
        // flips stay normalized
        assert_eq!(r.apply(&Transform::Scale(Vector2D::new(-1., 1.))), rect(-2., 0., 0., 1.));
    }
}
