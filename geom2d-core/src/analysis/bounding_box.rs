use crate::{bounds::Bounds, circle::Circle, polygon::Polygon, rect::Rect, segment::Segment, shape::Shape};

pub trait BoundingBox {
    fn bounding_box(&self) -> Rect;
}

impl BoundingBox for Circle {
    fn bounding_box(&self) -> Rect {
        Circle::bounding_box(self)
    }
}

impl BoundingBox for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }
}

impl BoundingBox for Polygon {
    fn bounding_box(&self) -> Rect {
        Polygon::bounding_box(self)
    }
}

impl BoundingBox for Segment {
    fn bounding_box(&self) -> Rect {
        Segment::bounding_box(self)
    }
}

impl BoundingBox for Shape {
    fn bounding_box(&self) -> Rect {
        Shape::bounding_box(self)
    }
}

/// Smallest rect around every item; `None` for an empty input.
pub fn surround<'a, T: BoundingBox + 'a, I: IntoIterator<Item = &'a T>>(items: I) -> Option<Rect> {
    items
        .into_iter()
        .map(|item| item.bounding_box())
        .collect::<Bounds>()
        .rect()
}
