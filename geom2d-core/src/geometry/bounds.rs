use crate::{point::Point, rect::Rect};

/// Running bounding box: empty until the first point or rect is folded in.
///
/// Replaces seeding a [`Rect`] with inverted infinities; an empty `Bounds` can't be
/// mistaken for a real rectangle.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bounds(Option<Rect>);

impl Bounds {
    pub fn empty() -> Self {
        Bounds(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.0
    }

    pub fn surround_point(self, p: Point) -> Self {
        Bounds(Some(match self.0 {
            None => Rect::new_unchecked(p, p),
            Some(r) => r.surround_point(p),
        }))
    }

    pub fn surround_rect(self, s: Rect) -> Self {
        Bounds(Some(match self.0 {
            None => s,
            Some(r) => r.surround_rect(s),
        }))
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Bounds(Some(r))
    }
}

impl FromIterator<Point> for Bounds {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        iter.into_iter().fold(Bounds::empty(), Bounds::surround_point)
    }
}

impl FromIterator<Rect> for Bounds {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        iter.into_iter().fold(Bounds::empty(), Bounds::surround_rect)
    }
}

impl Extend<Point> for Bounds {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        *self = iter.into_iter().fold(*self, Bounds::surround_point);
    }
}
