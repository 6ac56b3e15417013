//! Raw encoder: header followed by the image buffer verbatim.

use alloc::vec::Vec;
use enough::Stop;

use super::{HEADER_LEN, STOP_CHECK_BYTES};
use crate::error::ImageError;
use crate::image::Image;

pub(crate) fn encode_raw(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, ImageError> {
    let total = image
        .len()
        .checked_add(HEADER_LEN)
        .ok_or(ImageError::DimensionsTooLarge {
            width: image.width(),
            height: image.height(),
        })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| ImageError::AllocationFailed {
            bytes: total as u64,
        })?;

    // Header
    out.extend_from_slice(&image.width().to_ne_bytes());
    out.extend_from_slice(&image.height().to_ne_bytes());
    out.extend_from_slice(&u32::from(image.format()).to_ne_bytes());

    for chunk in image.data().chunks(STOP_CHECK_BYTES) {
        stop.check()?;
        out.extend_from_slice(chunk);
    }

    Ok(out)
}
