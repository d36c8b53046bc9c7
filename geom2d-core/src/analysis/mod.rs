pub mod bounding_box;
pub mod contains;
pub mod intersect;

pub use bounding_box::BoundingBox;
pub use contains::Contains;
pub use intersect::Intersect;
