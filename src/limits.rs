use alloc::format;

use crate::error::ImageError;
use crate::raw::ImageInfo;

/// Caps applied to a raw header before its pixel buffer is allocated.
///
/// Every field defaults to `None` (unbounded). Memory is measured as the
/// exact buffer length for the header's format, so a YUV420p frame costs
/// half of an RGB24 frame with the same dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u16>,
    pub max_height: Option<u16>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum pixel buffer length in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that reject nothing.
    pub const NONE: Limits = Limits {
        max_width: None,
        max_height: None,
        max_pixels: None,
        max_memory_bytes: None,
    };

    /// Validate a parsed header. The first violated cap is reported.
    pub(crate) fn check(&self, info: &ImageInfo) -> Result<(), ImageError> {
        let over = |what: &str, value: u64, cap: u64| {
            tracing::debug!(what, value, cap, format = %info.format, "raw header rejected: limit");
            Err(ImageError::LimitExceeded(format!(
                "{what} {value} exceeds limit {cap} ({}x{} {})",
                info.width, info.height, info.format
            )))
        };

        if let Some(cap) = self.max_width.filter(|&cap| info.width > cap) {
            return over("width", u64::from(info.width), u64::from(cap));
        }
        if let Some(cap) = self.max_height.filter(|&cap| info.height > cap) {
            return over("height", u64::from(info.height), u64::from(cap));
        }
        let pixels = u64::from(info.width) * u64::from(info.height);
        if let Some(cap) = self.max_pixels.filter(|&cap| pixels > cap) {
            return over("pixel count", pixels, cap);
        }
        let bytes = info.data_len();
        if let Some(cap) = self.max_memory_bytes.filter(|&cap| bytes > cap) {
            return over("buffer size", bytes, cap);
        }
        Ok(())
    }
}
