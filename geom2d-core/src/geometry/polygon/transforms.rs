use crate::{matrix::Matrix3x3, transform::CanTransform, vector::Vector2D};

use super::Polygon;

/// Maps every vertex. A reflecting transform (negative determinant) would flip the
/// winding to clockwise, so the vertex order is reversed to stay counter-clockwise.
impl CanTransform for Polygon {
    type Output = Polygon;
    fn transform(&self, m: &Matrix3x3) -> Polygon {
        let mut vertices: Vec<_> = self.vertices.iter().map(|p| m.transform_point(*p)).collect();
        let det = m[0] * m[4] - m[1] * m[3];
        if det < 0. {
            vertices.reverse();
        }
        Polygon { vertices }
    }
}

impl Polygon {
    pub fn translated(&self, v: Vector2D) -> Polygon {
        Polygon { vertices: self.vertices.iter().map(|p| *p + v).collect() }
    }
}
