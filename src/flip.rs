//! In-place horizontal mirroring ("flip along Y").
//!
//! Every row is reversed left to right; row order is unchanged. Nothing is
//! allocated. [`flip_y`] dispatches on the image's format and cannot fail;
//! the per-format routines check the format before touching the buffer.

use crate::error::ImageError;
use crate::image::Image;
use crate::pixel::PixelFormat;

/// Mirror each row of a packed buffer whose pixels are `bpp` bytes wide.
///
/// Pixel groups swap as units, so the byte order inside a pixel is kept.
pub fn mirror_rows(buf: &mut [u8], width: usize, height: usize, bpp: usize) {
    let row_len = width * bpp;
    if row_len == 0 {
        return;
    }
    for row in buf.chunks_exact_mut(row_len).take(height) {
        for x in 0..width / 2 {
            let mirror = width - 1 - x;
            let (left, right) = row.split_at_mut(mirror * bpp);
            left[x * bpp..(x + 1) * bpp].swap_with_slice(&mut right[..bpp]);
        }
    }
}

/// Mirror each row of a single 8-bit plane.
pub fn mirror_plane(buf: &mut [u8], width: usize, height: usize) {
    if width == 0 {
        return;
    }
    for row in buf.chunks_exact_mut(width).take(height) {
        row.reverse();
    }
}

fn dims(image: &Image) -> (usize, usize) {
    (usize::from(image.width()), usize::from(image.height()))
}

fn flip_packed(image: &mut Image, bpp: usize) {
    let (w, h) = dims(image);
    mirror_rows(image.data_mut(), w, h, bpp);
}

fn flip_planar444(image: &mut Image) {
    let (w, h) = dims(image);
    let plane = w * h;
    for p in image.data_mut().chunks_exact_mut(plane.max(1)).take(3) {
        mirror_plane(p, w, h);
    }
}

fn flip_planar420(image: &mut Image) {
    let (w, h) = dims(image);
    let (cw, _) = image.format().chroma_dims(image.width(), image.height());
    let cw = usize::from(cw);
    let (luma, chroma) = image.data_mut().split_at_mut(w * h);
    mirror_plane(luma, w, h);

    let (u, v) = chroma.split_at_mut(chroma.len() / 2);
    // Walk the luma grid; a chroma sample covers two luma columns, so only
    // even rows and columns swap it.
    for row in 0..h {
        for col in 0..w / 2 {
            if row % 2 == 0 && col % 2 == 0 {
                let base = (row / 2) * cw;
                let a = base + col / 2;
                let b = base + cw - 1 - col / 2;
                u.swap(a, b);
                v.swap(a, b);
            }
        }
    }
}

/// Mirror every row of `image` in place.
pub fn flip_y(image: &mut Image) {
    match image.format() {
        PixelFormat::Yuv444 | PixelFormat::Rgb24 => flip_packed(image, 3),
        PixelFormat::Yuv444p => flip_planar444(image),
        PixelFormat::Yuv420p => flip_planar420(image),
        PixelFormat::Rgb565 => flip_packed(image, 2),
        PixelFormat::Rgb8 | PixelFormat::Grayscale | PixelFormat::Ascii => flip_packed(image, 1),
    }
    tracing::trace!(
        format = %image.format(),
        width = image.width(),
        height = image.height(),
        "flipped"
    );
}

macro_rules! flip_routines {
    ($( $name:ident: $format:ident; )*) => {
        $(
            #[doc = concat!("Mirror a `", stringify!($format), "` image in place.")]
            ///
            /// Returns [`ImageError::FormatMismatch`] without modifying the
            /// buffer when the image has another format.
            pub fn $name(image: &mut Image) -> Result<(), ImageError> {
                image.require_format(PixelFormat::$format)?;
                flip_y(image);
                Ok(())
            }
        )*
    };
}

flip_routines! {
    flip_y_yuv444: Yuv444;
    flip_y_yuv444p: Yuv444p;
    flip_y_yuv420p: Yuv420p;
    flip_y_rgb24: Rgb24;
    flip_y_rgb565: Rgb565;
    flip_y_rgb8: Rgb8;
    flip_y_grayscale: Grayscale;
    flip_y_ascii: Ascii;
}
