use core::fmt;

use crate::error::ImageError;

/// Pixel memory layout of an [`Image`](crate::Image) buffer.
///
/// The discriminants are the values stored in the raw file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// Packed Y, U, V bytes per pixel.
    Yuv444 = 0,
    /// Three full-resolution planes: Y, then U, then V.
    Yuv444p = 1,
    /// Full-resolution Y plane, then U and V planes subsampled 2x2.
    Yuv420p = 2,
    /// Packed R, G, B bytes per pixel.
    Rgb24 = 3,
    /// Little-endian `u16` per pixel: blue in bits 0..5, green 5..11, red 11..16.
    Rgb565 = 4,
    /// One byte per pixel: blue in bits 0..2, green 2..5, red 5..8.
    Rgb8 = 5,
    /// One luma byte per pixel.
    Grayscale = 6,
    /// One glyph index per pixel. Only `0..=11` maps to a distinct glyph.
    Ascii = 7,
}

/// Colour space a format's samples live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Space {
    Yuv,
    Rgb,
    Luma,
}

impl PixelFormat {
    /// Every format, in discriminant order.
    pub const ALL: [PixelFormat; 8] = [
        Self::Yuv444,
        Self::Yuv444p,
        Self::Yuv420p,
        Self::Rgb24,
        Self::Rgb565,
        Self::Rgb8,
        Self::Grayscale,
        Self::Ascii,
    ];

    /// Exact buffer length in bytes for a `width` x `height` image.
    ///
    /// Subsampled chroma planes round up, so odd dimensions get a last
    /// chroma column/row shared by fewer luma samples.
    pub fn size_of(self, width: u16, height: u16) -> u64 {
        let w = u64::from(width);
        let h = u64::from(height);
        match self {
            Self::Yuv444 | Self::Yuv444p | Self::Rgb24 => w * h * 3,
            Self::Rgb565 => w * h * 2,
            Self::Yuv420p => w * h + 2 * w.div_ceil(2) * h.div_ceil(2),
            Self::Rgb8 | Self::Grayscale | Self::Ascii => w * h,
        }
    }

    /// Dimensions of one chroma plane. Full size unless subsampled.
    pub fn chroma_dims(self, width: u16, height: u16) -> (u16, u16) {
        match self {
            Self::Yuv420p => (width.div_ceil(2), height.div_ceil(2)),
            _ => (width, height),
        }
    }

    /// Bytes per pixel for packed layouts, `None` for planar ones.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::Yuv444 | Self::Rgb24 => Some(3),
            Self::Rgb565 => Some(2),
            Self::Rgb8 | Self::Grayscale | Self::Ascii => Some(1),
            Self::Yuv444p | Self::Yuv420p => None,
        }
    }

    /// Whether channels are stored in separate planes.
    pub fn is_planar(self) -> bool {
        matches!(self, Self::Yuv444p | Self::Yuv420p)
    }

    pub fn is_yuv(self) -> bool {
        self.space() == Space::Yuv
    }

    pub fn is_rgb(self) -> bool {
        self.space() == Space::Rgb
    }

    /// Grayscale and ASCII: a single luma-derived byte per pixel.
    pub fn is_luma(self) -> bool {
        self.space() == Space::Luma
    }

    pub(crate) fn space(self) -> Space {
        match self {
            Self::Yuv444 | Self::Yuv444p | Self::Yuv420p => Space::Yuv,
            Self::Rgb24 | Self::Rgb565 | Self::Rgb8 => Space::Rgb,
            Self::Grayscale | Self::Ascii => Space::Luma,
        }
    }

    /// Short lowercase name, as used in routine names (`yuv420p`, `rgb565`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Yuv444 => "yuv444",
            Self::Yuv444p => "yuv444p",
            Self::Yuv420p => "yuv420p",
            Self::Rgb24 => "rgb24",
            Self::Rgb565 => "rgb565",
            Self::Rgb8 => "rgb8",
            Self::Grayscale => "grayscale",
            Self::Ascii => "ascii",
        }
    }
}

/// Free-function form of [`PixelFormat::size_of`].
pub fn size_of(width: u16, height: u16, format: PixelFormat) -> u64 {
    format.size_of(width, height)
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> u32 {
        format as u32
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = ImageError;

    fn try_from(value: u32) -> Result<Self, ImageError> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ImageError::InvalidFormat(value))
    }
}
