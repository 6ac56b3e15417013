//! Raw header parsing and blob copy.

use enough::Stop;

use super::{HEADER_LEN, ImageInfo, STOP_CHECK_BYTES};
use crate::error::ImageError;
use crate::image::Image;
use crate::pixel::PixelFormat;

/// Parse the 8-byte header: width `u16`, height `u16`, format `u32`, all
/// native endian.
pub(crate) fn parse_header(data: &[u8]) -> Result<ImageInfo, ImageError> {
    let header = data.get(..HEADER_LEN).ok_or(ImageError::UnexpectedEof)?;
    let width = u16::from_ne_bytes([header[0], header[1]]);
    let height = u16::from_ne_bytes([header[2], header[3]]);
    let discriminant = u32::from_ne_bytes([header[4], header[5], header[6], header[7]]);
    let format = PixelFormat::try_from(discriminant).inspect_err(|_| {
        tracing::debug!(discriminant, "raw header rejected: unknown pixel format");
    })?;
    Ok(ImageInfo {
        width,
        height,
        format,
    })
}

/// Pixel bytes following the header, exactly `info.data_len()` long.
///
/// Trailing bytes past the blob are ignored.
pub(crate) fn pixel_data<'a>(data: &'a [u8], info: &ImageInfo) -> Result<&'a [u8], ImageError> {
    let len = usize::try_from(info.data_len()).map_err(|_| ImageError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    })?;
    let end = HEADER_LEN
        .checked_add(len)
        .ok_or(ImageError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    data.get(HEADER_LEN..end).ok_or_else(|| {
        tracing::debug!(
            needed = end,
            actual = data.len(),
            "raw input rejected: truncated pixel data"
        );
        ImageError::UnexpectedEof
    })
}

/// Copy the blob into an image of matching size, checking `stop` between
/// chunks.
pub(crate) fn copy_pixels(
    blob: &[u8],
    image: &mut Image,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let out = image.data_mut();
    debug_assert_eq!(out.len(), blob.len());
    for (src, dst) in blob
        .chunks(STOP_CHECK_BYTES)
        .zip(out.chunks_mut(STOP_CHECK_BYTES))
    {
        stop.check()?;
        dst.copy_from_slice(src);
    }
    Ok(())
}
