//! Driver configuration.
//!
//! Everything the driver can vary lives in one record; the defaults
//! reproduce the reference image (800x700, recursion level 7, black on
//! white, `sierpinski_triangle.png`).

use std::path::PathBuf;

use crate::colors::{BLACK, WHITE};
use crate::math::Point2;

/// Margin between the outer triangle and the image border, in pixels.
const MARGIN: i32 = 50;

/// The full set of knobs for one render.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Recursion level; each level triples the leaf triangle count.
    pub depth: u32,
    /// Outer "seed" triangle the fractal grows from.
    pub vertices: [Point2; 3],
    pub fill_color: u32,
    pub background_color: u32,
    pub output_path: PathBuf,
}

impl RenderConfig {
    /// The seed triangle for a `width` x `height` image: apex centered on the
    /// top edge, base along the bottom, all inset by a fixed margin.
    pub fn outer_triangle(width: u32, height: u32) -> [Point2; 3] {
        let width = width as i32;
        let height = height as i32;
        [
            Point2::new(width / 2, MARGIN),
            Point2::new(MARGIN, height - MARGIN),
            Point2::new(width - MARGIN, height - MARGIN),
        ]
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let (width, height) = (800, 700);
        Self {
            width,
            height,
            depth: 7,
            vertices: Self::outer_triangle(width, height),
            fill_color: BLACK,
            background_color: WHITE,
            output_path: PathBuf::from("sierpinski_triangle.png"),
        }
    }
}
