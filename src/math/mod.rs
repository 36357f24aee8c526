//! Math primitives for 2D geometry.

pub mod point2;
pub mod vec2;

pub use point2::Point2;
pub use vec2::Vec2;
