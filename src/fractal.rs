//! Recursive Sierpinski triangle subdivision.
//!
//! The fractal is produced by one rule, applied recursively: split a triangle
//! into four congruent sub-triangles using its edge midpoints, recurse into
//! the three corner triangles, and never touch the central one. Every level
//! leaves a triangular hole, which is the defining look of the pattern.
//!
//! ```text
//!         p1                      p1
//!         /\                      /\
//!        /  \                    /  \
//!       /    \        =>    m31 /----\ m12
//!      /      \                / \  / \
//!     /________\              /___\/___\
//!    p2        p3            p2   m23   p3
//! ```
//!
//! Recursion bottoms out when the depth counter reaches zero; the triangle at
//! hand is then filled as-is. A run at depth `d` therefore draws exactly
//! `3^d` leaf triangles.

use crate::config::RenderConfig;
use crate::math::Point2;
use crate::render::{Canvas, Renderer};

/// Recursively subdivides the triangle `(p1, p2, p3)` and fills the leaf
/// triangles onto `canvas` with `color`.
///
/// At `depth == 0` the triangle is filled directly. Otherwise the three edge
/// midpoints are computed with [`Point2::midpoint`] (floor division, so the
/// subdivision is exact on integer coordinates) and the call recurses into
/// the corner triangles at `p1`, `p2`, `p3` in that order, each with
/// `depth - 1`. The order is fixed so identical inputs always produce
/// identical canvases.
///
/// No coordinate validation happens here; vertices outside the canvas are
/// clipped by the canvas itself.
pub fn subdivide<C: Canvas>(
    canvas: &mut C,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    depth: u32,
    color: u32,
) {
    if depth == 0 {
        canvas.fill_triangle(p1, p2, p3, color);
        return;
    }

    let m12 = p1.midpoint(p2);
    let m23 = p2.midpoint(p3);
    let m31 = p3.midpoint(p1);

    // Corner triangles only; (m12, m23, m31) is the hole
    subdivide(canvas, p1, m12, m31, depth - 1, color);
    subdivide(canvas, m12, p2, m23, depth - 1, color);
    subdivide(canvas, m31, m23, p3, depth - 1, color);
}

/// Renders the configured fractal into a fresh [`Renderer`].
///
/// This is the whole pipeline short of saving: allocate the buffer with the
/// configured background, run [`subdivide`] once over the outer triangle, and
/// hand the renderer back to the caller.
pub fn render(config: &RenderConfig) -> Renderer {
    let mut renderer = Renderer::new(config.width, config.height, config.background_color);
    let [p1, p2, p3] = config.vertices;
    subdivide(&mut renderer, p1, p2, p3, config.depth, config.fill_color);
    renderer
}
