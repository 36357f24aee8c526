//! ARGB8888 color handling.
//!
//! All pixel data in this crate is stored as packed `u32` values in ARGB8888
//! format: `0xAARRGGBB`. The alpha channel is carried through to the encoder
//! but nothing in the renderer blends with it.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Packs 8-bit channels into an ARGB8888 value.
#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks an ARGB8888 value into `(a, r, g, b)` channels.
#[inline]
pub const fn unpack(color: u32) -> (u8, u8, u8, u8) {
    (
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    )
}
