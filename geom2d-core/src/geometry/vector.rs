use std::fmt::{self, Display, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Add, AddAssign, Div, From, Mul, Neg, Sub, SubAssign};

use crate::direction::Direction;

/// A displacement in the plane: direction and magnitude, no position.
#[derive(Debug, Default, Copy, Clone, PartialEq, From, Add, Sub, Neg, Mul, Div, AddAssign, SubAssign)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Magnitude, `sqrt(x² + y²)`.
    pub fn norm(&self) -> f64 {
        self.sqr_norm().sqrt()
    }

    pub fn sqr_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector pointing the same way.
    ///
    /// The zero vector yields a NaN direction (0/0); use [`Vector2D::try_unit`] to guard.
    pub fn unit(&self) -> Direction {
        let norm = self.norm();
        Direction::normalized(self.x / norm, self.y / norm)
    }

    /// `None` for the zero vector (or any vector whose magnitude isn't a positive finite number).
    pub fn try_unit(&self) -> Option<Direction> {
        let norm = self.norm();
        if norm.is_finite() && norm > 0. {
            Some(Direction::normalized(self.x / norm, self.y / norm))
        } else {
            None
        }
    }

    pub fn abs(&self) -> Vector2D {
        Vector2D { x: self.x.abs(), y: self.y.abs() }
    }

    pub fn dot(&self, u: &Vector2D) -> f64 {
        self.x * u.x + self.y * u.y
    }

    /// Perp-dot product `x·u.y − y·u.x`: positive when `u` lies counter-clockwise of `self`.
    pub fn cross(&self, u: &Vector2D) -> f64 {
        self.x * u.y - self.y * u.x
    }

    /// `self` rotated 90° counter-clockwise.
    pub fn normal(&self) -> Vector2D {
        Vector2D { x: -self.y, y: self.x }
    }
}

impl num_traits::Zero for Vector2D {
    fn zero() -> Self {
        Vector2D { x: 0., y: 0. }
    }
    fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
