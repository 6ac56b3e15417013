//! Per-format sample addressing.
//!
//! Each format gets a zero-sized marker type. [`Source`] reads the sample at
//! `(x, y)` in the format's own colour space; [`Sink`] writes one. ASCII is a
//! sink only, so nothing can be converted out of it.

use crate::ascii::glyph_index;
use crate::color::{pack_rgb8, pack_rgb565, unpack_rgb8, unpack_rgb565};
use crate::pixel::{PixelFormat, Space};

/// Plane sizes shared by every layout for one `width` x `height` image.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub width: usize,
    pub height: usize,
    /// Samples in the luma (or only) plane.
    pub pixels: usize,
    /// Width of a 4:2:0 chroma plane.
    pub chroma_width: usize,
    /// Samples in one 4:2:0 chroma plane.
    pub chroma_pixels: usize,
}

impl Geometry {
    pub fn new(width: u16, height: u16) -> Self {
        let (w, h) = (usize::from(width), usize::from(height));
        let (cw, ch) = PixelFormat::Yuv420p.chroma_dims(width, height);
        let (cw, ch) = (usize::from(cw), usize::from(ch));
        Self {
            width: w,
            height: h,
            pixels: w * h,
            chroma_width: cw,
            chroma_pixels: cw * ch,
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Index of the 4:2:0 chroma sample covering luma `(x, y)`.
    #[inline(always)]
    fn chroma_index(&self, x: usize, y: usize) -> usize {
        (y / 2) * self.chroma_width + x / 2
    }
}

pub(crate) trait Sink {
    const FORMAT: PixelFormat;
    const SPACE: Space;

    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]);
}

pub(crate) trait Source {
    const FORMAT: PixelFormat;
    const SPACE: Space;

    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3];
}

pub(crate) struct Yuv444;
pub(crate) struct Yuv444p;
pub(crate) struct Yuv420p;
pub(crate) struct Rgb24;
pub(crate) struct Rgb565;
pub(crate) struct Rgb8;
pub(crate) struct Grayscale;
pub(crate) struct Ascii;

// Packed 3-byte layouts share addressing; only the colour space differs.
macro_rules! packed24 {
    ($ty:ident, $space:ident) => {
        impl Source for $ty {
            const FORMAT: PixelFormat = PixelFormat::$ty;
            const SPACE: Space = Space::$space;

            #[inline(always)]
            fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
                let i = g.index(x, y) * 3;
                [data[i], data[i + 1], data[i + 2]]
            }
        }

        impl Sink for $ty {
            const FORMAT: PixelFormat = PixelFormat::$ty;
            const SPACE: Space = Space::$space;

            #[inline(always)]
            fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]) {
                let i = g.index(x, y) * 3;
                data[i..i + 3].copy_from_slice(&px);
            }
        }
    };
}

packed24!(Yuv444, Yuv);
packed24!(Rgb24, Rgb);

impl Source for Yuv444p {
    const FORMAT: PixelFormat = PixelFormat::Yuv444p;
    const SPACE: Space = Space::Yuv;

    #[inline(always)]
    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
        let i = g.index(x, y);
        [data[i], data[g.pixels + i], data[2 * g.pixels + i]]
    }
}

impl Sink for Yuv444p {
    const FORMAT: PixelFormat = PixelFormat::Yuv444p;
    const SPACE: Space = Space::Yuv;

    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, [luma, u, v]: [u8; 3]) {
        let i = g.index(x, y);
        data[i] = luma;
        data[g.pixels + i] = u;
        data[2 * g.pixels + i] = v;
    }
}

impl Source for Yuv420p {
    const FORMAT: PixelFormat = PixelFormat::Yuv420p;
    const SPACE: Space = Space::Yuv;

    /// Chroma is replicated to every luma position of its 2x2 block.
    #[inline(always)]
    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
        let c = g.chroma_index(x, y);
        [
            data[g.index(x, y)],
            data[g.pixels + c],
            data[g.pixels + g.chroma_pixels + c],
        ]
    }
}

impl Sink for Yuv420p {
    const FORMAT: PixelFormat = PixelFormat::Yuv420p;
    const SPACE: Space = Space::Yuv;

    /// Each 2x2 block keeps the chroma of its top-left pixel.
    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, [luma, u, v]: [u8; 3]) {
        data[g.index(x, y)] = luma;
        if x % 2 == 0 && y % 2 == 0 {
            let c = g.chroma_index(x, y);
            data[g.pixels + c] = u;
            data[g.pixels + g.chroma_pixels + c] = v;
        }
    }
}

impl Source for Rgb565 {
    const FORMAT: PixelFormat = PixelFormat::Rgb565;
    const SPACE: Space = Space::Rgb;

    #[inline(always)]
    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
        let i = g.index(x, y) * 2;
        unpack_rgb565([data[i], data[i + 1]])
    }
}

impl Sink for Rgb565 {
    const FORMAT: PixelFormat = PixelFormat::Rgb565;
    const SPACE: Space = Space::Rgb;

    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]) {
        let i = g.index(x, y) * 2;
        data[i..i + 2].copy_from_slice(&pack_rgb565(px));
    }
}

impl Source for Rgb8 {
    const FORMAT: PixelFormat = PixelFormat::Rgb8;
    const SPACE: Space = Space::Rgb;

    #[inline(always)]
    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
        unpack_rgb8(data[g.index(x, y)])
    }
}

impl Sink for Rgb8 {
    const FORMAT: PixelFormat = PixelFormat::Rgb8;
    const SPACE: Space = Space::Rgb;

    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]) {
        data[g.index(x, y)] = pack_rgb8(px);
    }
}

impl Source for Grayscale {
    const FORMAT: PixelFormat = PixelFormat::Grayscale;
    const SPACE: Space = Space::Luma;

    #[inline(always)]
    fn read(data: &[u8], g: &Geometry, x: usize, y: usize) -> [u8; 3] {
        [data[g.index(x, y)], 128, 128]
    }
}

impl Sink for Grayscale {
    const FORMAT: PixelFormat = PixelFormat::Grayscale;
    const SPACE: Space = Space::Luma;

    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]) {
        data[g.index(x, y)] = px[0];
    }
}

impl Sink for Ascii {
    const FORMAT: PixelFormat = PixelFormat::Ascii;
    const SPACE: Space = Space::Luma;

    #[inline(always)]
    fn write(data: &mut [u8], g: &Geometry, x: usize, y: usize, px: [u8; 3]) {
        data[g.index(x, y)] = glyph_index(px[0]);
    }
}
