//! Rasterization and image output.
//!
//! This module is the drawing side of the crate: an owning ARGB8888
//! [`Framebuffer`], two interchangeable triangle [`Rasterizer`]
//! implementations, and a [`Renderer`] that ties them together and encodes
//! the result to an image file.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::Framebuffer;
pub use rasterizer::{
    EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    Triangle,
};
pub use renderer::Renderer;

use crate::math::Point2;

/// A surface that can render a filled triangle.
///
/// This is the only capability the fractal subdivider consumes. [`Renderer`]
/// implements it by rasterizing into its framebuffer; tests implement it with
/// recording mocks to observe which triangles get drawn without touching
/// pixels.
pub trait Canvas {
    /// Fill the triangle `(a, b, c)` with a solid ARGB8888 color.
    ///
    /// Vertices may lie outside the surface; out-of-bounds pixels are
    /// silently clipped.
    fn fill_triangle(&mut self, a: Point2, b: Point2, c: Point2, color: u32);
}
