pub mod bounds;
pub mod circle;
pub mod direction;
pub mod matrix;
pub mod placement;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod segment;
pub mod shape;
pub mod transform;
pub mod vector;
