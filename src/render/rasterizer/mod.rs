//! Triangle rasterization algorithms.
//!
//! Two implementations of the [`Rasterizer`] trait are provided and can be
//! swapped at runtime:
//! - [`ScanlineRasterizer`]: flat-top/flat-bottom decomposition, filling
//!   horizontal spans
//! - [`EdgeFunctionRasterizer`]: bounding box iteration with per-pixel edge
//!   function tests

mod edgefunction;
mod scanline;

pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::Framebuffer;
use crate::math::{Point2, Vec2};

/// A triangle in screen space, ready for rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
}

impl Triangle {
    pub fn new(points: [Vec2; 3]) -> Self {
        Self { points }
    }

    /// Builds a screen-space triangle from integer vertices.
    pub fn from_points(a: Point2, b: Point2, c: Point2) -> Self {
        Self::new([a.into(), b.into(), c.into()])
    }
}

/// Trait for triangle fill algorithms.
///
/// Implementors define how a solid-colored triangle is turned into pixels.
pub trait Rasterizer {
    /// Fill `triangle` into `buffer` with a solid ARGB8888 `color`.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut Framebuffer, color: u32);
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Flat-top/flat-bottom decomposition with horizontal span fills.
    /// Efficient for larger triangles.
    #[default]
    Scanline,
    /// Per-pixel edge function tests over the bounding box. Simpler, and the
    /// basis of GPU rasterization.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
        }
    }
}

/// Dispatcher that holds both implementations and forwards to the active one.
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            edge_function: EdgeFunctionRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut Framebuffer, color: u32) {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, buffer, color),
            RasterizerType::EdgeFunction => {
                self.edge_function.fill_triangle(triangle, buffer, color)
            }
        }
    }
}
