use std::ops::Neg;

use crate::{matrix::Matrix3x3, point::Point, vector::Vector2D};

/// A single affine step, convertible to its [`Matrix3x3`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    Translate(Vector2D),
    Scale(Vector2D),
    Rotate(f64),
}

impl Neg for Transform {
    type Output = Transform;
    fn neg(self) -> Self {
        match self {
            Transform::Translate(v) => Transform::Translate(-v),
            Transform::Scale(v) => Transform::Scale(Vector2D { x: 1. / v.x, y: 1. / v.y }),
            Transform::Rotate(a) => Transform::Rotate(-a),
        }
    }
}

impl From<Transform> for Matrix3x3 {
    fn from(t: Transform) -> Self {
        match t {
            Transform::Translate(v) => Matrix3x3::translate(v),
            Transform::Scale(v) => Matrix3x3::scale(v.x, v.y),
            Transform::Rotate(a) => Matrix3x3::rotate(a),
        }
    }
}

/// Value-returning application of an affine transform; the receiver is never mutated.
pub trait CanTransform {
    type Output;
    fn transform(&self, m: &Matrix3x3) -> Self::Output;
    fn apply(&self, t: &Transform) -> Self::Output {
        self.transform(&Matrix3x3::from(*t))
    }
}

impl CanTransform for Point {
    type Output = Point;
    fn transform(&self, m: &Matrix3x3) -> Point {
        m.transform_point(*self)
    }
}

impl CanTransform for Vector2D {
    type Output = Vector2D;
    fn transform(&self, m: &Matrix3x3) -> Vector2D {
        m.transform_vector(*self)
    }
}
