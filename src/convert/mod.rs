//! Format conversion engine.
//!
//! One public routine per ordered `(source, destination)` pair, named
//! `<source>_to_<destination>`, plus the dispatching [`convert`] (fill a
//! caller-allocated destination) and [`convert_new`] (allocate it).
//!
//! Sources: YUV444, YUV444p, YUV420p, RGB24, RGB565 and RGB8 convert to every
//! other format. Grayscale converts only to ASCII. Nothing converts out of
//! ASCII, and no format converts to itself.
//!
//! | step | policy |
//! |---|---|
//! | packed ⇄ planar | index remap, lossless |
//! | → YUV420p | chroma of each 2x2 block is its top-left sample |
//! | YUV420p → | block chroma replicated to every covered pixel |
//! | YUV ⇄ RGB | integer BT.601, see [`crate::color`] |
//! | → RGB565 / RGB8 | channels rescaled down, then packed |
//! | RGB565 / RGB8 → | unpacked, rescaled up to 8 bits first |
//! | → Grayscale | luma kept, or computed from RGB |
//! | → ASCII | luma quantized to a glyph index |

mod layout;

use layout::{Geometry, Sink, Source};

use crate::color::{rgb_to_yuv, rgb_to_yuv_y, yuv_to_rgb};
use crate::error::ImageError;
use crate::image::Image;
use crate::pixel::{PixelFormat, Space};

/// Move one sample between colour spaces.
#[inline(always)]
fn bridge(from: Space, to: Space, px: [u8; 3]) -> [u8; 3] {
    match (from, to) {
        (Space::Yuv, Space::Rgb) => yuv_to_rgb(px),
        (Space::Rgb, Space::Yuv) => rgb_to_yuv(px),
        (Space::Yuv, Space::Luma) => [px[0], 128, 128],
        (Space::Rgb, Space::Luma) => [rgb_to_yuv_y(px[0], px[1], px[2]), 128, 128],
        // Grayscale only converts to ASCII, so a luma source stays luma.
        (Space::Yuv, Space::Yuv) | (Space::Rgb, Space::Rgb) | (Space::Luma, _) => px,
    }
}

fn check_dimensions(src: &Image, dst: &Image) -> Result<(), ImageError> {
    if src.dimensions() != dst.dimensions() {
        tracing::debug!(
            src_width = src.width(),
            src_height = src.height(),
            dst_width = dst.width(),
            dst_height = dst.height(),
            "conversion rejected: dimension mismatch"
        );
        return Err(ImageError::DimensionMismatch {
            expected: src.dimensions(),
            actual: dst.dimensions(),
        });
    }
    Ok(())
}

/// Shared body of every pair routine. Nothing is written unless all checks
/// pass.
fn run<S: Source, D: Sink>(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
    src.require_format(S::FORMAT)?;
    dst.require_format(D::FORMAT)?;
    check_dimensions(src, dst)?;

    let g = Geometry::new(src.width(), src.height());
    let input = src.data();
    let output = dst.data_mut();
    for y in 0..g.height {
        for x in 0..g.width {
            let px = S::read(input, &g, x, y);
            D::write(output, &g, x, y, bridge(S::SPACE, D::SPACE, px));
        }
    }

    tracing::trace!(
        from = %S::FORMAT,
        to = %D::FORMAT,
        width = g.width,
        height = g.height,
        "converted"
    );
    Ok(())
}

macro_rules! conversions {
    ($( $(#[$doc:meta])* $name:ident: $src:ident => $dst:ident; )*) => {
        $(
            $(#[$doc])*
            ///
            /// `src` must be
            #[doc = concat!("`", stringify!($src), "`")]
            /// and `dst` a pre-allocated
            #[doc = concat!("`", stringify!($dst), "`")]
            /// image of the same dimensions. On error `dst` is left untouched.
            pub fn $name(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
                run::<layout::$src, layout::$dst>(src, dst)
            }
        )*

        /// Whether a routine exists for converting `from` into `to`.
        pub fn can_convert(from: PixelFormat, to: PixelFormat) -> bool {
            matches!((from, to), $( (PixelFormat::$src, PixelFormat::$dst) )|*)
        }

        fn dispatch(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
            match (src.format(), dst.format()) {
                $( (PixelFormat::$src, PixelFormat::$dst) => $name(src, dst), )*
                (from, to) => {
                    tracing::debug!(%from, %to, "conversion rejected: no routine");
                    Err(ImageError::UnsupportedConversion { from, to })
                }
            }
        }
    };
}

conversions! {
    /// Packed to planar reshuffle. Lossless.
    yuv444_to_yuv444p: Yuv444 => Yuv444p;
    /// Chroma point-sampled at the top-left of each 2x2 block.
    yuv444_to_yuv420p: Yuv444 => Yuv420p;
    yuv444_to_rgb24: Yuv444 => Rgb24;
    yuv444_to_rgb565: Yuv444 => Rgb565;
    yuv444_to_rgb8: Yuv444 => Rgb8;
    /// Keeps luma only.
    yuv444_to_grayscale: Yuv444 => Grayscale;
    yuv444_to_ascii: Yuv444 => Ascii;

    /// Planar to packed reshuffle. Lossless.
    yuv444p_to_yuv444: Yuv444p => Yuv444;
    /// Chroma point-sampled at the top-left of each 2x2 block.
    yuv444p_to_yuv420p: Yuv444p => Yuv420p;
    yuv444p_to_rgb24: Yuv444p => Rgb24;
    yuv444p_to_rgb565: Yuv444p => Rgb565;
    yuv444p_to_rgb8: Yuv444p => Rgb8;
    /// Copies the Y plane.
    yuv444p_to_grayscale: Yuv444p => Grayscale;
    yuv444p_to_ascii: Yuv444p => Ascii;

    /// Chroma replicated to every pixel of its 2x2 block.
    yuv420p_to_yuv444: Yuv420p => Yuv444;
    /// Chroma replicated to every pixel of its 2x2 block.
    yuv420p_to_yuv444p: Yuv420p => Yuv444p;
    yuv420p_to_rgb24: Yuv420p => Rgb24;
    yuv420p_to_rgb565: Yuv420p => Rgb565;
    yuv420p_to_rgb8: Yuv420p => Rgb8;
    /// Copies the Y plane.
    yuv420p_to_grayscale: Yuv420p => Grayscale;
    yuv420p_to_ascii: Yuv420p => Ascii;

    rgb24_to_yuv444: Rgb24 => Yuv444;
    rgb24_to_yuv444p: Rgb24 => Yuv444p;
    rgb24_to_yuv420p: Rgb24 => Yuv420p;
    /// Rescales to 5-6-5 bits and packs little-endian.
    rgb24_to_rgb565: Rgb24 => Rgb565;
    /// Rescales to 3-3-2 bits.
    rgb24_to_rgb8: Rgb24 => Rgb8;
    /// BT.601 luma.
    rgb24_to_grayscale: Rgb24 => Grayscale;
    rgb24_to_ascii: Rgb24 => Ascii;

    rgb565_to_yuv444: Rgb565 => Yuv444;
    rgb565_to_yuv444p: Rgb565 => Yuv444p;
    rgb565_to_yuv420p: Rgb565 => Yuv420p;
    /// Stretches each field back to 8 bits. Low bits are not recovered.
    rgb565_to_rgb24: Rgb565 => Rgb24;
    rgb565_to_rgb8: Rgb565 => Rgb8;
    rgb565_to_grayscale: Rgb565 => Grayscale;
    rgb565_to_ascii: Rgb565 => Ascii;

    rgb8_to_yuv444: Rgb8 => Yuv444;
    rgb8_to_yuv444p: Rgb8 => Yuv444p;
    rgb8_to_yuv420p: Rgb8 => Yuv420p;
    /// Stretches each field back to 8 bits. Low bits are not recovered.
    rgb8_to_rgb24: Rgb8 => Rgb24;
    rgb8_to_rgb565: Rgb8 => Rgb565;
    rgb8_to_grayscale: Rgb8 => Grayscale;
    rgb8_to_ascii: Rgb8 => Ascii;

    /// Quantizes luma to glyph indices `0..=11`.
    grayscale_to_ascii: Grayscale => Ascii;
}

/// Convert `src` into the pre-allocated `dst`.
///
/// The routine is chosen by `(src.format(), dst.format())`. Fails with
/// [`ImageError::UnsupportedConversion`] when no routine exists and with
/// [`ImageError::DimensionMismatch`] when the sizes differ; `dst` is not
/// modified in either case.
pub fn convert(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
    dispatch(src, dst)
}

/// Convert `src` into a newly allocated image of `format`.
///
/// Nothing is allocated when the pair is unsupported.
pub fn convert_new(src: &Image, format: PixelFormat) -> Result<Image, ImageError> {
    if !can_convert(src.format(), format) {
        tracing::debug!(from = %src.format(), to = %format, "conversion rejected: no routine");
        return Err(ImageError::UnsupportedConversion {
            from: src.format(),
            to: format,
        });
    }
    let mut dst = Image::new(src.width(), src.height(), format)?;
    dispatch(src, &mut dst)?;
    Ok(dst)
}
