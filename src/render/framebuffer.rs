//! Owning pixel buffer with bounds-checked 2D access.

/// An owning ARGB8888 color buffer with width/height metadata.
///
/// All access is bounds-checked; writes outside the buffer are silently
/// ignored, which gives the rasterizers free clipping at the image edge.
/// The buffer is allocated once and never resized.
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Creates a buffer of `width * height` pixels, all set to `background`.
    pub fn new(width: u32, height: u32, background: u32) -> Self {
        Self {
            pixels: vec![background; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to `color`.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Writes a single pixel. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Fills the horizontal run `[x_left, x_right]` on scanline `y`.
    ///
    /// The run is clamped to the buffer; a run entirely outside it, or with
    /// `x_left > x_right`, writes nothing.
    #[inline]
    pub fn fill_scanline(&mut self, y: i32, x_left: i32, x_right: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_left = x_left.max(0);
        let x_right = x_right.min(self.width as i32 - 1);
        if x_left > x_right {
            return;
        }
        let row = y as u32 * self.width;
        let start = (row + x_left as u32) as usize;
        let end = (row + x_right as u32) as usize;
        self.pixels[start..=end].fill(color);
    }

    /// Returns the color at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The raw pixel data in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
