use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::ImageError;
use crate::pixel::PixelFormat;

/// An owned raster buffer in one [`PixelFormat`].
///
/// `data().len()` always equals `format().size_of(width(), height())`. The
/// buffer can be rewritten through [`Image::data_mut`] but never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Image {
    /// Allocate a zero-filled image.
    ///
    /// Returns [`ImageError::AllocationFailed`] instead of aborting when the
    /// allocator cannot supply the buffer.
    pub fn new(width: u16, height: u16, format: PixelFormat) -> Result<Self, ImageError> {
        let len = buffer_len(width, height, format)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| {
            tracing::debug!(width, height, %format, bytes = len, "image allocation failed");
            ImageError::AllocationFailed { bytes: len as u64 }
        })?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Wrap an existing buffer. Its length must match the format exactly.
    pub fn from_vec(
        width: u16,
        height: u16,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = format.size_of(width, height);
        if data.len() as u64 != expected {
            return Err(ImageError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for zero-width or zero-height images.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Release the image, handing its buffer back.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Convert into a freshly allocated image of `format`.
    ///
    /// See [`crate::convert_new`].
    pub fn convert_to(&self, format: PixelFormat) -> Result<Image, ImageError> {
        crate::convert::convert_new(self, format)
    }

    /// Convert into `dst`, which must already have the target format and
    /// the same dimensions. See [`crate::convert`].
    pub fn convert_into(&self, dst: &mut Image) -> Result<(), ImageError> {
        crate::convert::convert(self, dst)
    }

    /// Mirror every row in place. See [`crate::flip_y`].
    pub fn flip_y(&mut self) {
        crate::flip::flip_y(self);
    }

    pub(crate) fn require_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if self.format != expected {
            tracing::debug!(%expected, actual = %self.format, "pixel format rejected");
            return Err(ImageError::FormatMismatch {
                expected,
                actual: self.format,
            });
        }
        Ok(())
    }

    /// View an RGB24 image as typed pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb_pixels(&self) -> Result<&[rgb::RGB8], ImageError> {
        self.require_format(PixelFormat::Rgb24)?;
        Ok(self.data.as_pixels())
    }

    /// Zero-copy [`imgref::ImgRef`] view of an RGB24 image.
    #[cfg(feature = "imgref")]
    pub fn as_imgref_rgb(&self) -> Result<imgref::ImgRef<'_, rgb::RGB8>, ImageError> {
        let pixels = self.as_rgb_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            usize::from(self.width),
            usize::from(self.height),
        ))
    }

    /// Zero-copy [`imgref::ImgRef`] view of a one-byte-per-pixel image
    /// (RGB8, grayscale or ASCII). Other formats return
    /// [`ImageError::BytesPerPixel`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref_u8(&self) -> Result<imgref::ImgRef<'_, u8>, ImageError> {
        if self.format.bytes_per_pixel() != Some(1) {
            return Err(ImageError::BytesPerPixel {
                format: self.format,
                expected: 1,
            });
        }
        Ok(imgref::ImgRef::new(
            &self.data,
            usize::from(self.width),
            usize::from(self.height),
        ))
    }
}

fn buffer_len(width: u16, height: u16, format: PixelFormat) -> Result<usize, ImageError> {
    usize::try_from(format.size_of(width, height))
        .map_err(|_| ImageError::DimensionsTooLarge { width, height })
}
