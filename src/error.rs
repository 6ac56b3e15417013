use alloc::string::String;
use enough::StopReason;

use crate::pixel::PixelFormat;

/// Errors from image construction, conversion and raw encoding/decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageError {
    #[error("pixel format mismatch: expected {expected}, got {actual}")]
    FormatMismatch {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    #[error("{format} does not store {expected} byte(s) per pixel")]
    BytesPerPixel { format: PixelFormat, expected: usize },

    #[error("no conversion from {from} to {to}")]
    UnsupportedConversion { from: PixelFormat, to: PixelFormat },

    #[error("dimension mismatch: expected (width, height) {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u16, u16),
        actual: (u16, u16),
    },

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: u64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u16, height: u16 },

    #[error("buffer size mismatch: need exactly {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: u64, actual: usize },

    #[error("invalid pixel format discriminant: {0}")]
    InvalidFormat(u32),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("header mismatch: expected {expected:?}, found {actual:?}")]
    HeaderMismatch {
        expected: (u16, u16, PixelFormat),
        actual: (u16, u16, PixelFormat),
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for ImageError {
    fn from(r: StopReason) -> Self {
        ImageError::Cancelled(r)
    }
}
