//! Edge function triangle rasterization.
//!
//! For every pixel in the triangle's bounding box, three edge functions are
//! evaluated; the pixel is inside when all three agree in sign. The edge
//! function for an edge `A -> B` at point `P` is the 2D cross product
//! `(B - A) x (P - A)`:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Checking the sign of the total signed area first makes the inside test
//! work for both clockwise and counter-clockwise vertex windings.
//!
//! Reference: Juan Pineda, "A Parallel Algorithm for Polygon Rasterization"
//! (1988).

use super::{Rasterizer, Triangle};
use crate::math::Vec2;
use crate::render::framebuffer::Framebuffer;

/// Rasterizer testing each bounding-box pixel against three edge functions.
///
/// Simpler than scanline decomposition and uniform across all triangle
/// shapes, at the cost of testing pixels outside thin triangles.
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Signed area of the parallelogram spanned by `b - a` and `p - a`.
    ///
    /// Positive when `p` lies to the left of the edge `a -> b`, negative to
    /// the right, zero on the edge.
    #[inline]
    pub(super) fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }
}

impl Default for EdgeFunctionRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut Framebuffer, color: u32) {
        let [v0, v1, v2] = triangle.points;

        // Bounding box, clipped to the buffer
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        // Twice the signed triangle area; zero means degenerate
        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the pixel center
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };

                if inside {
                    buffer.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GREEN: u32 = 0xFF00FF00;

    #[test]
    fn edge_function_signs_follow_winding() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Screen-space Y grows downward, so (5, 5) is to the left of a -> b
        assert!(EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(5.0, 5.0)) > 0.0);
        assert!(EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(5.0, -5.0)) < 0.0);
        assert_relative_eq!(
            EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(5.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn edge_function_is_twice_the_area() {
        // Right triangle with legs 10 and 10: area 50, edge function 100
        let area = EdgeFunctionRasterizer::edge_function(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        );
        assert_relative_eq!(area.abs(), 100.0);
    }

    #[test]
    fn fills_both_windings_identically() {
        let cw = Triangle::new([
            Vec2::new(2.0, 2.0),
            Vec2::new(17.0, 2.0),
            Vec2::new(10.0, 17.0),
        ]);
        let ccw = Triangle::new([cw.points[2], cw.points[1], cw.points[0]]);

        let rasterizer = EdgeFunctionRasterizer::new();
        let mut fb_cw = Framebuffer::new(20, 20, 0);
        let mut fb_ccw = Framebuffer::new(20, 20, 0);
        rasterizer.fill_triangle(&cw, &mut fb_cw, GREEN);
        rasterizer.fill_triangle(&ccw, &mut fb_ccw, GREEN);

        assert_eq!(fb_cw.pixels(), fb_ccw.pixels());
        assert_eq!(fb_cw.get_pixel(10, 7), Some(GREEN));
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let collinear = Triangle::new([
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(9.0, 9.0),
        ]);
        let mut fb = Framebuffer::new(10, 10, 0);
        EdgeFunctionRasterizer::new().fill_triangle(&collinear, &mut fb, GREEN);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }
}
