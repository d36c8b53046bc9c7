#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod analysis;
pub mod geometry;
pub mod math;

pub mod error;

// Re-exports for shorter paths
pub use geometry::bounds;
pub use geometry::circle;
pub use geometry::direction;
pub use geometry::matrix;
pub use geometry::placement;
pub use geometry::point;
pub use geometry::polygon;
pub use geometry::rect;
pub use geometry::segment;
pub use geometry::shape;
pub use geometry::transform;
pub use geometry::vector;

pub use analysis::contains;
pub use analysis::intersect;

// Re-export key types for external use
pub use analysis::{BoundingBox, Contains, Intersect};
pub use bounds::Bounds;
pub use circle::Circle;
pub use direction::Direction;
pub use error::GeometryError;
pub use matrix::Matrix3x3;
pub use placement::Placement;
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;
pub use segment::Segment;
pub use shape::Shape;
pub use transform::{CanTransform, Transform};
pub use vector::Vector2D;

/// Parse a log level string into LevelFilter.
///
/// The library never installs a logger; this is for embedders wiring one up.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, GeometryError> {
    match level {
        Some("off") => Ok(log::LevelFilter::Off),
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(GeometryError::InvalidLogLevel(level.to_string())),
    }
}
