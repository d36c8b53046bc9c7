use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Index, Mul, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Deref, From};
use nalgebra::{Matrix3, Vector2, Vector3};

use crate::{direction::Direction, placement::Placement, point::Point, vector::Vector2D};

/// A 3x3 affine transform in column-major order, like OpenGL:
///
/// ```text
///   m0 m3 m6
///   m1 m4 m7
///   m2 m5 m8
/// ```
///
/// Rotation/scale live in the upper-left 2x2 block, translation in the third
/// column; every constructor here leaves the bottom row at `(0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Deref, From)]
pub struct Matrix3x3(pub Matrix3<f64>);

impl Matrix3x3 {
    /// Rotation by `theta` radians followed by translation to `pos`.
    pub fn new(pos: Point, theta: f64) -> Self {
        Matrix3x3::rotate(theta).with_pos(pos)
    }

    pub fn identity() -> Self {
        Matrix3x3(Matrix3::identity())
    }

    pub fn translate(v: Vector2D) -> Self {
        Matrix3x3(Matrix3::new_translation(&Vector2::new(v.x, v.y)))
    }

    pub fn scale(x: f64, y: f64) -> Self {
        Matrix3x3(Matrix3::new_nonuniform_scaling(&Vector2::new(x, y)))
    }

    /// Counter-clockwise rotation, radians.
    pub fn rotate(theta: f64) -> Self {
        Matrix3x3(Matrix3::new_rotation(theta))
    }

    /// Every element 1; not affine.
    pub fn one() -> Self {
        Matrix3x3(Matrix3::repeat(1.))
    }

    /// Translation part: where the origin ends up.
    pub fn pos(&self) -> Point {
        Point { x: self[6], y: self[7] }
    }

    pub fn with_pos(&self, pos: Point) -> Self {
        let mut m = self.0;
        m[6] = pos.x;
        m[7] = pos.y;
        Matrix3x3(m)
    }

    /// Where the x-axis ends up, normalized (drops any scale).
    pub fn dir(&self) -> Direction {
        Vector2D { x: self[0], y: self[1] }.unit()
    }

    pub fn placement(&self) -> Placement {
        Placement { pos: self.pos(), dir: self.dir() }
    }

    pub fn transpose(&self) -> Self {
        Matrix3x3(self.0.transpose())
    }

    /// Multiply every element by `fac`.
    pub fn mul_fac(&self, fac: f64) -> Self {
        Matrix3x3(self.0 * fac)
    }

    /// `v` treated as a position: translation applies.
    pub fn mul_vec(&self, v: Vector2D) -> Vector2D {
        let r = self.0 * Vector3::new(v.x, v.y, 1.);
        Vector2D { x: r.x, y: r.y }
    }

    pub fn transform_point(&self, p: Point) -> Point {
        self.mul_vec(p.to_vector()).into()
    }

    /// Translation does not apply to displacements.
    pub fn transform_vector(&self, v: Vector2D) -> Vector2D {
        let r = self.0 * Vector3::new(v.x, v.y, 0.);
        Vector2D { x: r.x, y: r.y }
    }

    /// Bottom row is `(0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self[2] == 0. && self[5] == 0. && self[8] == 1.
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Matrix3x3::identity()
    }
}

impl From<Placement> for Matrix3x3 {
    fn from(Placement { pos, dir }: Placement) -> Self {
        let mut m = Matrix3::identity();
        m[0] = dir.x();
        m[1] = dir.y();
        m[3] = -dir.y();
        m[4] = dir.x();
        Matrix3x3(m).with_pos(pos)
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

impl Add for Matrix3x3 {
    type Output = Matrix3x3;
    fn add(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 + rhs.0)
    }
}

impl Sub for Matrix3x3 {
    type Output = Matrix3x3;
    fn sub(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 - rhs.0)
    }
}

/// Composition: `(a * b)` applies `b` first, then `a`.
impl Mul for Matrix3x3 {
    type Output = Matrix3x3;
    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 * rhs.0)
    }
}

impl Mul<f64> for Matrix3x3 {
    type Output = Matrix3x3;
    fn mul(self, fac: f64) -> Matrix3x3 {
        self.mul_fac(fac)
    }
}

impl Display for Matrix3x3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3} {:.3} {:.3}; {:.3} {:.3} {:.3}; {:.3} {:.3} {:.3}]",
            self[0], self[3], self[6],
            self[1], self[4], self[7],
            self[2], self[5], self[8],
        )
    }
}

impl AbsDiffEq for Matrix3x3 {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Matrix3x3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
