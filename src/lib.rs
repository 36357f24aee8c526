//! A CPU-rendered Sierpinski triangle generator.
//!
//! The fractal is built by recursively subdividing a triangle at its edge
//! midpoints and filling only the three corner triangles, leaving the central
//! one as a hole at every level. Leaf triangles are rasterized on a software
//! framebuffer and saved as a PNG.
//!
//! # Quick Start
//!
//! ```no_run
//! use sierpinski::prelude::*;
//!
//! let config = RenderConfig::default();
//! let renderer = fractal::render(&config);
//! renderer.save(&config.output_path)?;
//! # Ok::<(), image::ImageError>(())
//! ```

pub mod colors;
pub mod config;
pub mod fractal;
pub mod math;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use fractal::subdivide;
pub use math::Point2;
pub use render::{Canvas, RasterizerType, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use sierpinski::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colors;
    pub use crate::config::RenderConfig;
    pub use crate::fractal::{self, subdivide};
    pub use crate::math::{Point2, Vec2};
    pub use crate::render::{Canvas, Framebuffer, RasterizerType, Renderer};
}
