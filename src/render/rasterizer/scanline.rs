//! Scanline triangle rasterization.
//!
//! Classic flat-top/flat-bottom decomposition: sort the vertices by Y, split
//! a general triangle at the middle vertex's scanline, then fill each half
//! one horizontal span at a time.
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\  <- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                              v2
//! ```
//!
//! For each scanline the left/right X positions are advanced by the inverse
//! edge slopes (`dx / dy`), so every covered pixel is visited exactly once
//! and each row becomes a single [`Framebuffer::fill_scanline`] call.

use super::{Rasterizer, Triangle};
use crate::math::Vec2;
use crate::render::framebuffer::Framebuffer;

/// Scanline rasterizer filling triangles with a solid color.
///
/// Processes pixels in row order, which is cache-friendly and only ever
/// touches covered pixels. Vertex order of the input triangle does not
/// matter; sorting happens internally.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y ascending (top to bottom in screen space).
    fn sort_vertices(v0: &mut Vec2, v1: &mut Vec2, v2: &mut Vec2) {
        // Three compare-and-swaps suffice for 3 elements
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    /// X coordinate of the point on edge `v0 -> v2` at the height of `v1`.
    ///
    /// This is where a general triangle is split into a flat-bottom and a
    /// flat-top half.
    #[inline]
    pub(super) fn split_x(v0: Vec2, v1: Vec2, v2: Vec2) -> f32 {
        let t = (v1.y - v0.y) / (v2.y - v0.y);
        v0.x + (v2.x - v0.x) * t
    }

    /// Fills a triangle with its apex `v0` above a horizontal base `v1`-`v2`.
    fn fill_flat_bottom(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut Framebuffer, color: u32) {
        let height = v1.y - v0.y;
        if height.abs() < f32::EPSILON {
            return; // degenerate
        }

        // Change in X per unit Y along each edge leaving the apex
        let inv_slope_1 = (v1.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v0.x) / height;

        let y_start = v0.y.ceil() as i32;
        let y_end = v1.y.floor() as i32;

        for y in y_start..=y_end {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v0.x + inv_slope_2 * dy;

            // Either edge may be the left one
            let x_left = x1.min(x2).ceil() as i32;
            let x_right = x1.max(x2).floor() as i32;
            buffer.fill_scanline(y, x_left, x_right, color);
        }
    }

    /// Fills a triangle with a horizontal top `v0`-`v1` above its apex `v2`.
    fn fill_flat_top(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut Framebuffer, color: u32) {
        let height = v2.y - v0.y;
        if height.abs() < f32::EPSILON {
            return; // degenerate
        }

        let inv_slope_1 = (v2.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v1.x) / height;

        let y_start = v0.y.ceil() as i32;
        let y_end = v2.y.floor() as i32;

        for y in y_start..=y_end {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v1.x + inv_slope_2 * dy;

            let x_left = x1.min(x2).ceil() as i32;
            let x_right = x1.max(x2).floor() as i32;
            buffer.fill_scanline(y, x_left, x_right, color);
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut Framebuffer, color: u32) {
        let mut v0 = triangle.points[0];
        let mut v1 = triangle.points[1];
        let mut v2 = triangle.points[2];

        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        // Already flat-bottom: v1 and v2 share a scanline
        if (v1.y - v2.y).abs() < f32::EPSILON {
            Self::fill_flat_bottom(v0, v1, v2, buffer, color);
            return;
        }

        // Already flat-top: v0 and v1 share a scanline
        if (v0.y - v1.y).abs() < f32::EPSILON {
            Self::fill_flat_top(v0, v1, v2, buffer, color);
            return;
        }

        // General triangle: split on the edge v0 -> v2 at v1's height
        let split_point = Vec2::new(Self::split_x(v0, v1, v2), v1.y);

        Self::fill_flat_bottom(v0, v1, split_point, buffer, color);
        Self::fill_flat_top(v1, split_point, v2, buffer, color);
    }
}
