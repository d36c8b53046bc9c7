use crate::{circle::Circle, polygon::Polygon, rect::Rect, segment::Segment, shape::Shape};

/// Overlap with another shape; every implementation here is symmetric.
pub trait Intersect<O> {
    fn intersects(&self, o: &O) -> bool;
}

macro_rules! intersect_via {
    ($lhs:ty, $rhs:ty, $method:ident) => {
        impl Intersect<$rhs> for $lhs {
            fn intersects(&self, o: &$rhs) -> bool {
                self.$method(o)
            }
        }
    };
}

intersect_via!(Circle, Circle, intersect_circle);
intersect_via!(Circle, Rect, intersect_rect);
intersect_via!(Circle, Polygon, intersect_polygon);
intersect_via!(Circle, Segment, intersect_segment);

intersect_via!(Rect, Circle, intersect_circle);
intersect_via!(Rect, Rect, intersect_rect);
intersect_via!(Rect, Polygon, intersect_polygon);
intersect_via!(Rect, Segment, intersect_segment);

intersect_via!(Polygon, Circle, intersect_circle);
intersect_via!(Polygon, Rect, intersect_rect);
intersect_via!(Polygon, Polygon, intersect_polygon);
intersect_via!(Polygon, Segment, intersect_segment);

intersect_via!(Segment, Segment, intersect_segment);
intersect_via!(Segment, Rect, intersect_rect);
intersect_via!(Segment, Circle, intersect_circle);
intersect_via!(Segment, Polygon, intersect_polygon);

intersect_via!(Shape, Shape, intersect);
intersect_via!(Shape, Circle, intersect_circle);
intersect_via!(Shape, Rect, intersect_rect);
intersect_via!(Shape, Polygon, intersect_polygon);

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::point::Point;

    fn symmetric<A: Intersect<B>, B: Intersect<A>>(a: &A, b: &B) -> bool {
        let ab = a.intersects(b);
        assert_eq!(ab, b.intersects(a));
        ab
    }

    #[test]
    fn concrete_pairs() {
        let circle = Circle { c: Point::new(0., 0.), r: 1. };
        let rect = Rect::new_unchecked(Point::new(0.5, -0.5), Point::new(2., 0.5));
        let tri = Polygon::new_unchecked(vec![Point::new(1.5, 0.), Point::new(3., 0.), Point::new(2., 1.)]);
        let seg = Segment::new(Point::new(-2., 0.5), Point::new(1., 0.5));

        assert!(symmetric(&circle, &rect));
        assert!(symmetric(&rect, &tri));
        assert!(!symmetric(&circle, &tri));
        assert!(symmetric(&circle, &seg));
        assert!(!symmetric(&tri, &seg));
        assert!(symmetric(&rect, &seg));
        assert!(symmetric(&rect, &rect));
        assert!(symmetric(&tri, &tri));
    }

    #[test]
    fn shape_against_concrete() {
        let circle = Circle { c: Point::new(0., 0.), r: 1. };
        let shape = Shape::from(Rect::new_unchecked(Point::new(0.5, -0.5), Point::new(2., 0.5)));
        assert!(shape.intersects(&circle));
        assert!(shape.intersects(&Shape::from(circle)));
    }
}
