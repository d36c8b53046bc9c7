use std::fmt::{self, Display, Formatter};

use crate::{direction::Direction, point::Point};

/// Something with a position and an orientation.
///
/// Like a ray, but it carries no geometric queries; it converts to and from the rigid
/// [`Matrix3x3`](crate::matrix::Matrix3x3) that moves the origin/x-axis onto it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub pos: Point,
    pub dir: Direction,
}

impl Placement {
    pub fn new(pos: Point, theta: f64) -> Self {
        Placement { pos, dir: Direction::from_angle(theta) }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.dir)
    }
}
