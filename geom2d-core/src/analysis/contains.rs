use crate::{circle::Circle, point::Point, polygon::Polygon, rect::Rect, shape::Shape};

pub trait Contains<O> {
    fn contains(&self, o: &O) -> bool;
}

impl Contains<Point> for Circle {
    fn contains(&self, p: &Point) -> bool {
        self.inside(p)
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, p: &Point) -> bool {
        self.inside(p)
    }
}

impl Contains<Point> for Polygon {
    fn contains(&self, p: &Point) -> bool {
        self.inside(p)
    }
}

impl Contains<Point> for Shape {
    fn contains(&self, p: &Point) -> bool {
        self.inside(p)
    }
}
