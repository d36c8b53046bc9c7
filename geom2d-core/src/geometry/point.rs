use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use derive_more::From;
use ordered_float::OrderedFloat;

use crate::{direction::Direction, vector::Vector2D};

/// A position in the plane.
///
/// Kept apart from [`Vector2D`] so positions and displacements don't mix:
/// `Point - Point` is a `Vector2D`, `Point + Vector2D` is a `Point`, and there is no `Point + Point`.
#[derive(Debug, Default, Copy, Clone, PartialEq, From)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub const fn origin() -> Self {
        Point { x: 0., y: 0. }
    }

    pub fn to_vector(&self) -> Vector2D {
        Vector2D { x: self.x, y: self.y }
    }

    pub fn abs(&self) -> Point {
        Point { x: self.x.abs(), y: self.y.abs() }
    }

    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }

    /// Lexicographic order: x first, then y.
    pub fn lex_cmp(&self, q: &Point) -> Ordering {
        self.key().cmp(&q.key())
    }

    /// `self` lexicographically before `q`.
    pub fn is_min(&self, q: &Point) -> bool {
        self.lex_cmp(q) == Ordering::Less
    }

    /// `self` lexicographically after `q`.
    pub fn is_max(&self, q: &Point) -> bool {
        self.lex_cmp(q) == Ordering::Greater
    }

    /// Lexicographically smaller of `self` and `q`.
    pub fn min(&self, q: &Point) -> Point {
        if self.is_min(q) { *self } else { *q }
    }

    /// Lexicographically larger of `self` and `q`.
    pub fn max(&self, q: &Point) -> Point {
        if self.is_max(q) { *self } else { *q }
    }

    /// Component-wise minimum.
    pub fn min_comp(&self, q: &Point) -> Point {
        Point { x: self.x.min(q.x), y: self.y.min(q.y) }
    }

    /// Component-wise maximum.
    pub fn max_comp(&self, q: &Point) -> Point {
        Point { x: self.x.max(q.x), y: self.y.max(q.y) }
    }

    /// Signed distance from the origin to this point's foot on `axis`.
    pub fn project(&self, axis: &Direction) -> f64 {
        self.to_vector().dot(&axis.to_vector())
    }

    pub fn distance(&self, q: &Point) -> f64 {
        (*self - *q).norm()
    }
}

impl From<Vector2D> for Point {
    fn from(v: Vector2D) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2D {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl Sub for Point {
    type Output = Vector2D;
    fn sub(self, rhs: Point) -> Vector2D {
        Vector2D { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Add<Vector2D> for Point {
    type Output = Point;
    fn add(self, rhs: Vector2D) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub<Vector2D> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector2D) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
