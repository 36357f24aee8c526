//! The renderer: framebuffer plus rasterizer, with image output.

use std::path::Path;

use super::framebuffer::Framebuffer;
use super::rasterizer::{Rasterizer, RasterizerDispatcher, RasterizerType, Triangle};
use super::Canvas;
use crate::colors;
use crate::math::Point2;

/// Owns the pixel buffer and the active rasterizer, and implements
/// [`Canvas`] on top of them.
///
/// The buffer is created once with a background color and never resized;
/// the fractal driver writes into it through [`Canvas::fill_triangle`] and
/// then encodes it with [`save`](Renderer::save).
pub struct Renderer {
    framebuffer: Framebuffer,
    rasterizer: RasterizerDispatcher,
}

impl Renderer {
    /// Creates a renderer over a `width` x `height` buffer cleared to
    /// `background`, using the default rasterizer.
    pub fn new(width: u32, height: u32, background: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height, background),
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
        }
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Encodes the buffer and writes it to `path`.
    ///
    /// The format is inferred from the file extension by the `image` crate.
    /// Errors from encoding or I/O are returned unchanged; there is nothing
    /// to recover locally.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let pixels = self.framebuffer.pixels();

        // ARGB8888 -> RGBA bytes for the encoder
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            let (a, r, g, b) = colors::unpack(pixels[(y * width + x) as usize]);
            image::Rgba([r, g, b, a])
        });
        img.save(path)
    }
}

impl Canvas for Renderer {
    fn fill_triangle(&mut self, a: Point2, b: Point2, c: Point2, color: u32) {
        let triangle = Triangle::from_points(a, b, c);
        self.rasterizer
            .fill_triangle(&triangle, &mut self.framebuffer, color);
    }
}
