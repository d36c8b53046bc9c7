mod sat;
mod transforms;
mod validate;

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{
    bounds::Bounds,
    circle::Circle,
    math::is_zero::IsZero,
    point::Point,
    rect::Rect,
    segment::Segment,
    vector::Vector2D,
};

/// Closed polygon over `vertices`, with an implicit edge from the last vertex back to the first.
///
/// Containment and the SAT overlap test assume a convex, counter-clockwise polygon.
/// [`Polygon::new`] checks that; [`Polygon::new_unchecked`] trusts the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new_unchecked(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    pub fn from_rect(r: &Rect) -> Self {
        r.to_polygon()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Edges in vertex order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .map(|(p0, p1)| Segment::new(*p0, *p1))
    }

    /// Shoelace area: positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|e| e.source.to_vector().cross(&e.target.to_vector()))
            .sum::<f64>()
            * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area().gt_zero()
    }

    /// Vertex centroid (mean of the vertices), not the area centroid.
    pub fn center(&self) -> Point {
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Vector2D::default(), |sum, p| sum + p.to_vector());
        (sum / n).into()
    }

    /// Strictly left of every edge; points on an edge or vertex are outside.
    ///
    /// Only meaningful for convex, counter-clockwise polygons.
    pub fn inside(&self, q: &Point) -> bool {
        !self.vertices.is_empty()
            && self.edges().all(|e| e.vector().cross(&(*q - e.source)).gt_zero())
    }

    /// Some polygon edge crosses some rectangle boundary segment.
    ///
    /// Containment without an edge crossing (either shape wholly inside the other) is not detected.
    pub fn intersect_rect(&self, r: &Rect) -> bool {
        let sides = r.edges();
        self.edges().any(|e| sides.iter().any(|side| e.intersect_segment(side)))
    }

    pub fn intersect_circle(&self, c: &Circle) -> bool {
        c.intersect_polygon(self)
    }

    pub fn intersect_segment(&self, seg: &Segment) -> bool {
        seg.intersect_polygon(self)
    }

    /// Empty for a vertex-less polygon, which only `new_unchecked` can build.
    pub fn bounds(&self) -> Bounds {
        self.vertices.iter().copied().collect()
    }

    /// A vertex-less polygon answers a zero rect at the origin.
    pub fn bounding_box(&self) -> Rect {
        self.bounds().rect().unwrap_or_default()
    }
}

impl From<&Rect> for Polygon {
    fn from(r: &Rect) -> Self {
        Polygon::from_rect(r)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[{}]", self.vertices.iter().join(", "))
    }
}

#[cfg(test)]
mod tests;
