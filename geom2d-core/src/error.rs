use crate::point::Point;

/// Rejections from the validated constructors.
///
/// Queries never fail; only `Polygon::new`, `Rect::new` and `Circle::new` check their input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Polygon needs at least 3 vertices, found {0}")]
    TooFewVertices(usize),

    #[error("Polygon has zero area")]
    Degenerate,

    #[error("Polygon vertices are wound clockwise")]
    ClockwiseWinding,

    #[error("Polygon is not convex at vertex {index}")]
    NotConvex { index: usize },

    #[error("Rect min {min} exceeds max {max}")]
    InvertedRect { min: Point, max: Point },

    #[error("Circle radius must be finite and non-negative, found {0}")]
    InvalidRadius(f64),

    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),
}
