//! Glyph rendering for [`PixelFormat::Ascii`] images.
//!
//! An ASCII image stores one glyph index per pixel. Conversions into the
//! format quantize luma to `0..=MAX_GLYPH`; anything larger found in a buffer
//! (written by hand, or loaded from disk) is clamped here, at render time.

use alloc::string::String;

use crate::color::rescale;
use crate::error::ImageError;
use crate::image::Image;
use crate::pixel::PixelFormat;

/// Glyphs from darkest to brightest.
pub const GLYPH_RAMP: [u8; 12] = *b" .:-=+*x%#@$";

/// Highest meaningful glyph index.
pub const MAX_GLYPH: u8 = (GLYPH_RAMP.len() - 1) as u8;

/// Quantize an 8-bit luma value to a glyph index.
#[inline]
pub fn glyph_index(luma: u8) -> u8 {
    rescale(i32::from(luma), 0, 255, 0, i32::from(MAX_GLYPH)) as u8
}

/// Glyph for an index, clamping out-of-range indices to the brightest glyph.
#[inline]
pub fn glyph_for(index: u8) -> char {
    char::from(GLYPH_RAMP[usize::from(index.min(MAX_GLYPH))])
}

/// Render an ASCII image as text, one line per row, each ending in `\n`.
pub fn render(image: &Image) -> Result<String, ImageError> {
    image.require_format(PixelFormat::Ascii)?;
    let width = usize::from(image.width());
    let mut out = String::with_capacity(image.len() + usize::from(image.height()));
    if width == 0 {
        return Ok(out);
    }
    for row in image.data().chunks_exact(width) {
        out.extend(row.iter().map(|&i| glyph_for(i)));
        out.push('\n');
    }
    Ok(out)
}
