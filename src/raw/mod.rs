//! Raw header+blob persistence.
//!
//! Layout: `width: u16 | height: u16 | format: u32 | pixels`, every integer
//! in native byte order, followed by exactly
//! [`size_of`](crate::size_of)`(width, height, format)` pixel bytes. There is
//! no magic number, version or checksum, so files only round-trip between
//! machines of the same endianness.
//!
//! ```
//! use zenraw::{Image, PixelFormat, Unstoppable, raw};
//!
//! let img = Image::new(4, 3, PixelFormat::Yuv420p)?;
//! let bytes = raw::encode(&img, Unstoppable)?;
//! assert_eq!(bytes.len(), raw::HEADER_LEN + img.len());
//!
//! let back = raw::decode(&bytes, Unstoppable)?;
//! assert_eq!(back, img);
//! # Ok::<(), zenraw::ImageError>(())
//! ```

mod decode;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::ImageError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::PixelFormat;

/// Header length in bytes.
pub const HEADER_LEN: usize = 8;

/// Cancellation is polled once per this many copied bytes.
const STOP_CHECK_BYTES: usize = 64 * 1024;

/// Header fields of a raw file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u16,
    pub height: u16,
    pub format: PixelFormat,
}

impl ImageInfo {
    /// Length of the pixel blob that follows the header.
    pub fn data_len(&self) -> u64 {
        self.format.size_of(self.width, self.height)
    }

    fn as_tuple(&self) -> (u16, u16, PixelFormat) {
        (self.width, self.height, self.format)
    }
}

/// Read the header without touching pixel data.
pub fn probe(data: &[u8]) -> Result<ImageInfo, ImageError> {
    decode::parse_header(data)
}

/// Serialize `image` as header followed by its buffer.
pub fn encode(image: &Image, stop: impl Stop) -> Result<Vec<u8>, ImageError> {
    encode::encode_raw(image, &stop)
}

/// Decode a raw file into a new image. See [`DecodeRequest`] for limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, ImageError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode into a pre-allocated image.
///
/// The header must describe exactly `image`'s width, height and format;
/// otherwise [`ImageError::HeaderMismatch`] is returned and `image` is left
/// untouched.
pub fn decode_into(data: &[u8], image: &mut Image, stop: impl Stop) -> Result<(), ImageError> {
    DecodeRequest::new(data).decode_into(image, stop)
}

/// Raw decode with optional resource limits.
///
/// ```
/// use zenraw::{Image, Limits, PixelFormat, Unstoppable, raw};
///
/// let bytes = raw::encode(&Image::new(64, 64, PixelFormat::Rgb24)?, Unstoppable)?;
/// let limits = Limits { max_pixels: Some(1024), ..Default::default() };
/// assert!(raw::DecodeRequest::new(&bytes).with_limits(&limits).decode(Unstoppable).is_err());
/// # Ok::<(), zenraw::ImageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into a newly allocated image.
    pub fn decode(self, stop: impl Stop) -> Result<Image, ImageError> {
        let info = decode::parse_header(self.data)?;
        if let Some(limits) = self.limits {
            limits.check(&info)?;
        }
        let blob = decode::pixel_data(self.data, &info)?;
        stop.check()?;
        let mut image = Image::new(info.width, info.height, info.format)?;
        decode::copy_pixels(blob, &mut image, &stop)?;
        tracing::trace!(
            width = info.width,
            height = info.height,
            format = %info.format,
            "decoded raw image"
        );
        Ok(image)
    }

    /// Decode into `image`, which must match the header exactly.
    pub fn decode_into(self, image: &mut Image, stop: impl Stop) -> Result<(), ImageError> {
        let info = decode::parse_header(self.data)?;
        let expected = (image.width(), image.height(), image.format());
        if info.as_tuple() != expected {
            tracing::debug!(?expected, actual = ?info.as_tuple(), "raw header rejected: mismatch");
            return Err(ImageError::HeaderMismatch {
                expected,
                actual: info.as_tuple(),
            });
        }
        if let Some(limits) = self.limits {
            limits.check(&info)?;
        }
        let blob = decode::pixel_data(self.data, &info)?;
        stop.check()?;
        decode::copy_pixels(blob, image, &stop)
    }
}

/// Read and decode a raw file.
#[cfg(feature = "std")]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Image, ImageError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes, enough::Unstoppable)
}

/// Read a raw file into a pre-allocated image. See [`decode_into`].
#[cfg(feature = "std")]
pub fn load_into(path: impl AsRef<std::path::Path>, image: &mut Image) -> Result<(), ImageError> {
    let bytes = std::fs::read(path)?;
    decode_into(&bytes, image, enough::Unstoppable)
}

/// Encode `image` and write it to `path`.
#[cfg(feature = "std")]
pub fn save(path: impl AsRef<std::path::Path>, image: &Image) -> Result<(), ImageError> {
    let bytes = encode(image, enough::Unstoppable)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
