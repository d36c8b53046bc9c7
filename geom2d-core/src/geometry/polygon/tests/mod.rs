
use super::*;

pub(super) fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Counter-clockwise axis-aligned square from `(x, y)` with side `side`.
pub(super) fn square_at(x: f64, y: f64, side: f64) -> Polygon {
    Polygon::new_unchecked(vec![
        pt(x, y),
        pt(x + side, y),
        pt(x + side, y + side),
        pt(x, y + side),
    ])
}

pub(super) fn unit_square() -> Polygon {
    square_at(0., 0., 1.)
}

pub(super) fn triangle() -> Polygon {
    Polygon::new_unchecked(vec![pt(0., 0.), pt(1., 0.), pt(0.5, 1.)])
}
