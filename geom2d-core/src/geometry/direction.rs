use std::{
    fmt::{self, Display, Formatter},
    ops::Neg,
};

use approx::{AbsDiffEq, RelativeEq};

use crate::vector::Vector2D;

/// A unit vector.
///
/// Fields are private: every public way of making one normalizes (or, for
/// [`Direction::from_angle`] and [`Direction::normal`], is unit by construction).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Direction {
    x: f64,
    y: f64,
}

impl Direction {
    pub const X: Direction = Direction { x: 1., y: 0. };
    pub const Y: Direction = Direction { x: 0., y: 1. };

    /// Caller guarantees `(x, y)` already has unit magnitude.
    pub(crate) fn normalized(x: f64, y: f64) -> Self {
        Direction { x, y }
    }

    /// `(cos θ, sin θ)`, θ in radians.
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Direction { x: cos, y: sin }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Always 1.
    pub fn norm(&self) -> f64 {
        1.
    }

    /// Always 1.
    pub fn sqr_norm(&self) -> f64 {
        1.
    }

    pub fn unit(&self) -> Direction {
        *self
    }

    /// Perpendicular direction, rotated 90° counter-clockwise.
    pub fn normal(&self) -> Direction {
        Direction { x: -self.y, y: self.x }
    }

    /// Angle from the x-axis, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn to_vector(&self) -> Vector2D {
        Vector2D { x: self.x, y: self.y }
    }
}

impl From<Direction> for Vector2D {
    fn from(d: Direction) -> Self {
        d.to_vector()
    }
}

impl Neg for Direction {
    type Output = Direction;
    fn neg(self) -> Direction {
        Direction { x: -self.x, y: -self.y }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.3}, {:.3}>", self.x, self.y)
    }
}

impl AbsDiffEq for Direction {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_vector().abs_diff_eq(&other.to_vector(), epsilon)
    }
}

impl RelativeEq for Direction {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.to_vector().relative_eq(&other.to_vector(), epsilon, max_relative)
    }
}
