use derive_more::{Display, From};
use log::trace;

use crate::{
    circle::Circle,
    matrix::Matrix3x3,
    point::Point,
    polygon::Polygon,
    rect::Rect,
    transform::CanTransform,
};

/// The closed set of shapes that can be tested against each other.
///
/// Segments aren't a variant: they only serve as edges for the circle and polygon tests.
#[derive(Debug, Display, Clone, From, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
}

pub fn circle(cx: f64, cy: f64, r: f64) -> Shape {
    Shape::Circle(Circle { c: Point::new(cx, cy), r })
}
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    Shape::Rect(Rect::new_unchecked(Point::new(x0, y0), Point::new(x1, y1)))
}
pub fn polygon(vertices: Vec<Point>) -> Shape {
    Shape::Polygon(Polygon::new_unchecked(vertices))
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rect(_) => "rect",
            Shape::Polygon(_) => "polygon",
        }
    }

    pub fn inside(&self, p: &Point) -> bool {
        match self {
            Shape::Circle(c) => c.inside(p),
            Shape::Rect(r) => r.inside(p),
            Shape::Polygon(poly) => poly.inside(p),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Circle(c) => c.bounding_box(),
            Shape::Rect(r) => r.bounding_box(),
            Shape::Polygon(poly) => poly.bounding_box(),
        }
    }

    /// Overlap with `o`, resolved by a single match on both variants.
    ///
    /// Mixed pairs run the same algorithm whichever side they're called from, so the
    /// result is symmetric.
    pub fn intersect(&self, o: &Shape) -> bool {
        trace!("Shape::intersect: {} × {}", self.name(), o.name());
        match (self, o) {
            (Shape::Circle(a), Shape::Circle(b)) => a.intersect_circle(b),
            (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => c.intersect_rect(r),
            (Shape::Circle(c), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Circle(c)) => c.intersect_polygon(p),
            (Shape::Rect(a), Shape::Rect(b)) => a.intersect_rect(b),
            (Shape::Rect(r), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Rect(r)) => p.intersect_rect(r),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.intersect_polygon(b),
        }
    }

    pub fn intersect_circle(&self, c: &Circle) -> bool {
        match self {
            Shape::Circle(k) => k.intersect_circle(c),
            Shape::Rect(r) => c.intersect_rect(r),
            Shape::Polygon(p) => c.intersect_polygon(p),
        }
    }

    pub fn intersect_rect(&self, r: &Rect) -> bool {
        match self {
            Shape::Circle(c) => c.intersect_rect(r),
            Shape::Rect(s) => s.intersect_rect(r),
            Shape::Polygon(p) => p.intersect_rect(r),
        }
    }

    pub fn intersect_polygon(&self, poly: &Polygon) -> bool {
        match self {
            Shape::Circle(c) => c.intersect_polygon(poly),
            Shape::Rect(r) => poly.intersect_rect(r),
            Shape::Polygon(p) => p.intersect_polygon(poly),
        }
    }
}

/// A rect stays a rect under transforms that keep it axis-aligned; a rotating or
/// shearing transform turns it into the equivalent polygon.
impl CanTransform for Shape {
    type Output = Shape;
    fn transform(&self, m: &Matrix3x3) -> Shape {
        match self {
            Shape::Circle(c) => Shape::Circle(c.transform(m)),
            Shape::Rect(r) if m[1] == 0. && m[3] == 0. => Shape::Rect(r.transform(m)),
            Shape::Rect(r) => Shape::Polygon(r.to_polygon().transform(m)),
            Shape::Polygon(p) => Shape::Polygon(p.transform(m)),
        }
    }
}
