use std::{
    f64::consts::PI,
    fmt::{self, Display, Formatter},
};

use log::{debug, trace};

use crate::{
    error::GeometryError,
    matrix::Matrix3x3,
    point::Point,
    polygon::Polygon,
    rect::Rect,
    segment::Segment,
    transform::CanTransform,
    vector::Vector2D,
};

/// Center `c`, radius `r`.
///
/// A zero radius contains no point and never overlaps a segment or polygon edge
/// (those are strict distance tests). It does overlap a rect holding its center,
/// border included, and a circle holding it strictly inside.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Circle {
    pub c: Point,
    pub r: f64,
}

impl Circle {
    /// Rejects negative, NaN, or infinite radii.
    pub fn new(c: Point, r: f64) -> Result<Circle, GeometryError> {
        if r.is_finite() && r >= 0. {
            Ok(Circle { c, r })
        } else {
            debug!("Circle::new: invalid radius {}", r);
            Err(GeometryError::InvalidRadius(r))
        }
    }

    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    /// Strict: a point exactly on the circumference is outside.
    pub fn inside(&self, p: &Point) -> bool {
        (*p - self.c).norm() < self.r
    }

    /// Center distance strictly less than the sum of radii; tangent circles don't overlap.
    pub fn intersect_circle(&self, k: &Circle) -> bool {
        (k.c - self.c).norm() < self.r + k.r
    }

    /// Nine-zone test on the rectangle's extents relative to the circle's center.
    ///
    /// With the center at the origin, each axis puts the rect on the negative side,
    /// the positive side, or straddling zero. Two straddles mean the center is inside;
    /// one straddle leaves the gap to the nearest side; none leaves the nearest corner.
    pub fn intersect_rect(&self, rect: &Rect) -> bool {
        let min = rect.min - self.c;
        let max = rect.max - self.c;
        let gap = |lo: f64, hi: f64| -> Option<f64> {
            if hi < 0. {
                Some(-hi)
            } else if lo > 0. {
                Some(lo)
            } else {
                None
            }
        };
        let r = self.r;
        match (gap(min.x, max.x), gap(min.y, max.y)) {
            (Some(dx), Some(dy)) => {
                trace!("Circle::intersect_rect: corner zone ({}, {})", dx, dy);
                dx * dx + dy * dy < r * r
            }
            (Some(dx), None) => {
                trace!("Circle::intersect_rect: side zone, dx={}", dx);
                dx < r
            }
            (None, Some(dy)) => {
                trace!("Circle::intersect_rect: side zone, dy={}", dy);
                dy < r
            }
            (None, None) => {
                trace!("Circle::intersect_rect: center within rect bands");
                true
            }
        }
    }

    /// Center strictly closer than `r` to the nearest point on `seg`.
    pub fn intersect_segment(&self, seg: &Segment) -> bool {
        seg.distance_to(&self.c) < self.r
    }

    /// Any edge (including the closing one) passes strictly within `r` of the center.
    ///
    /// A circle wholly inside the polygon, clear of every edge, reports no overlap.
    pub fn intersect_polygon(&self, poly: &Polygon) -> bool {
        poly.edges().any(|edge| self.intersect_segment(&edge))
    }

    pub fn bounding_box(&self) -> Rect {
        let r = Vector2D { x: self.r, y: self.r };
        Rect::new_unchecked(self.c - r, self.c + r)
    }

    pub fn translated(&self, v: Vector2D) -> Circle {
        Circle { c: self.c + v, r: self.r }
    }
}

/// Center maps as a point; radius scales by the transform's area factor
/// (`sqrt|det|`), which is exact for rigid motions and uniform scaling.
impl CanTransform for Circle {
    type Output = Circle;
    fn transform(&self, m: &Matrix3x3) -> Circle {
        let det = m[0] * m[4] - m[1] * m[3];
        Circle { c: m.transform_point(self.c), r: self.r * det.abs().sqrt() }
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {{ c: {}, r: {:.3} }}", self.c, self.r)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use test_log::test;

    use crate::transform::Transform;

    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle { c: Point::new(x, y), r }
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new_unchecked(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn validated() {
        assert!(Circle::new(Point::origin(), 0.).is_ok());
        assert_eq!(Circle::new(Point::origin(), -1.), Err(GeometryError::InvalidRadius(-1.)));
        assert!(Circle::new(Point::origin(), f64::INFINITY).is_err());
        assert!(Circle::new(Point::origin(), f64::NAN).is_err());
    }

    #[test]
    fn inside_strict() {
        let c = circle(0., 0., 5.);
        assert!(!c.inside(&Point::new(5., 0.)));
        assert!(!c.inside(&Point::new(0., -5.)));
        assert!(c.inside(&Point::new(4.999, 0.)));
        assert!(c.inside(&Point::new(3., 3.)));
        assert!(!c.inside(&Point::new(4., 4.)));
        // zero radius contains nothing, not even its center
        assert!(!circle(1., 1., 0.).inside(&Point::new(1., 1.)));
    }

    #[test]
    fn circle_circle() {
        let a = circle(0., 0., 5.);
        assert!(a.intersect_circle(&circle(8., 0., 5.)));
        assert!(!a.intersect_circle(&circle(11., 0., 5.)));
        // tangent
        assert!(!a.intersect_circle(&circle(10., 0., 5.)));
        assert!(!circle(10., 0., 5.).intersect_circle(&a));
        // nested
        assert!(a.intersect_circle(&circle(1., 1., 1.)));
    }

    #[test]
    fn circle_rect_zones() {
        let r = rect(0., 0., 4., 2.);
        // center inside
        assert!(circle(2., 1., 0.1).intersect_rect(&r));
        // center in the x-band, above / below
        assert!(circle(2., 2.9, 1.).intersect_rect(&r));
        assert!(!circle(2., 3., 1.).intersect_rect(&r));
        assert!(circle(2., -0.5, 1.).intersect_rect(&r));
        assert!(!circle(2., -1., 1.).intersect_rect(&r));
        // center in the y-band, left / right
        assert!(circle(-0.9, 1., 1.).intersect_rect(&r));
        assert!(!circle(-1., 1., 1.).intersect_rect(&r));
        assert!(circle(4.5, 1., 1.).intersect_rect(&r));
        assert!(!circle(5., 1., 1.).intersect_rect(&r));
        // corner zones: (3, 4) from the corner is distance 5
        assert!(!circle(7., 6., 5.).intersect_rect(&r));
        assert!(circle(7., 6., 5.01).intersect_rect(&r));
        assert!(!circle(-3., -4., 5.).intersect_rect(&r));
        assert!(circle(-3., -4., 5.01).intersect_rect(&r));
        assert!(!circle(-3., 6., 5.).intersect_rect(&r));
        assert!(circle(7., -4., 5.01).intersect_rect(&r));
        // a corner zone where the side distances alone would say "overlap"
        assert!(!circle(5., 3., 1.2).intersect_rect(&r));
    }

    #[test]
    fn circle_segment() {
        let c = circle(0., 0., 1.);
        assert!(c.intersect_segment(&Segment::new(Point::new(-2., 0.5), Point::new(2., 0.5))));
        // tangent line is not overlap
        assert!(!c.intersect_segment(&Segment::new(Point::new(-2., 1.), Point::new(2., 1.))));
        // endpoint nearest
        assert!(!c.intersect_segment(&Segment::new(Point::new(1.5, 0.), Point::new(3., 0.))));
        assert!(c.intersect_segment(&Segment::new(Point::new(0.5, 0.), Point::new(3., 0.))));
        // degenerate segment behaves like a point
        assert!(c.intersect_segment(&Segment::new(Point::new(0.5, 0.), Point::new(0.5, 0.))));
    }

    #[test]
    fn circle_polygon_includes_closing_edge() {
        let tri = Polygon::new_unchecked(vec![Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)]);
        // only near the closing edge (0,4) → (0,0)
        assert!(circle(-0.5, 2., 1.).intersect_polygon(&tri));
        assert!(!circle(-1.5, 2., 1.).intersect_polygon(&tri));
        // near the hypotenuse
        assert!(circle(2.5, 2.5, 1.).intersect_polygon(&tri));
        // deep inside, clear of every edge
        assert!(!circle(1., 1., 0.5).intersect_polygon(&tri));
    }

    #[test]
    fn zero_radius() {
        let dot = circle(1., 1., 0.);
        let r = rect(0., 0., 2., 2.);
        assert!(!dot.inside(&dot.c));
        // center in the rect's bands: the nine-zone test says overlap
        assert!(dot.intersect_rect(&r));
        assert!(circle(2., 1., 0.).intersect_rect(&r));
        assert!(!circle(3., 1., 0.).intersect_rect(&r));
        // edge tests are strict distances, so the same point misses the square
        assert!(!dot.intersect_polygon(&r.to_polygon()));
        assert!(!dot.intersect_segment(&Segment::new(Point::new(0., 1.), Point::new(2., 1.))));
        assert!(dot.intersect_circle(&circle(0., 0., 2.)));
        assert!(!dot.intersect_circle(&circle(1., 1., 0.)));
    }

    #[test]
    fn bounding_box() {
        assert_eq!(circle(1., 2., 3.).bounding_box(), rect(-2., -1., 4., 5.));
        assert_relative_eq!(circle(1., 2., 3.).area(), 9. * PI);
    }

    #[test]
    fn transform() {
        let c = circle(1., 0., 2.);
        let rotated = c.apply(&Transform::Rotate(FRAC_PI_3));
        assert_relative_eq!(rotated.c, Point::new(0.5, 3f64.sqrt() / 2.), epsilon = 1e-12);
        assert_relative_eq!(rotated.r, 2., epsilon = 1e-12);
        let scaled = c.apply(&Transform::Scale(Vector2D::new(3., 3.)));
        assert_relative_eq!(scaled.r, 6.);
        assert_eq!(c.translated(Vector2D::new(1., 1.)), circle(2., 1., 2.));
    }
}
