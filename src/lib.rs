//! # zenraw
//!
//! Raw, headerless pixel buffers and conversions between their layouts.
//!
//! ## Formats
//!
//! | format | layout | bytes for `w` x `h` |
//! |---|---|---|
//! | YUV444 | packed `Y U V` | `3wh` |
//! | YUV444p | planes `Y`, `U`, `V` | `3wh` |
//! | YUV420p | plane `Y`, then `U` and `V` at half resolution | `wh + 2⌈w/2⌉⌈h/2⌉` |
//! | RGB24 | packed `R G B` | `3wh` |
//! | RGB565 | little-endian `u16`, 5-6-5 bits | `2wh` |
//! | RGB8 | one byte, 3-3-2 bits | `wh` |
//! | Grayscale | one luma byte | `wh` |
//! | ASCII | one glyph index `0..=11` | `wh` |
//!
//! YUV is studio-swing BT.601 (luma `16..=235`, chroma centred on 128)
//! computed in fixed point (see [`color`]).
//!
//! ```
//! use zenraw::color::rgb_to_yuv;
//!
//! assert_eq!(rgb_to_yuv([0, 0, 0]), [16, 128, 128]);
//! assert_eq!(rgb_to_yuv([255, 255, 255]), [235, 128, 128]);
//! ```
//!
//! ## Conversions
//!
//! Every YUV and RGB format converts into every other format. Grayscale
//! converts only to ASCII, and ASCII is a final output format. Each pair
//! has its own routine in [`convert`](mod@convert); the generic
//! [`convert()`] and [`convert_new`] dispatch on the formats at runtime.
//!
//! ## Non-Goals
//!
//! - Colour management, gamma or colour spaces other than BT.601
//! - Resampling filters (chroma is point-sampled and replicated)
//! - Row strides or padding
//!
//! ## Usage
//!
//! ```
//! use zenraw::{Image, PixelFormat, convert_new, flip_y};
//!
//! let mut rgb = Image::new(4, 2, PixelFormat::Rgb24)?;
//! rgb.data_mut()[..3].copy_from_slice(&[255, 0, 0]);
//!
//! let mut yuv = convert_new(&rgb, PixelFormat::Yuv420p)?;
//! assert_eq!(&yuv.data()[..1], &[82]);
//!
//! flip_y(&mut yuv);
//! assert_eq!(yuv.data()[3], 82);
//! # Ok::<(), zenraw::ImageError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod limits;
mod pixel;

pub mod ascii;
pub mod color;
pub mod convert;
pub mod flip;
pub mod raw;

// Re-exports
pub use convert::{can_convert, convert, convert_new};
pub use enough::{Stop, Unstoppable};
pub use error::ImageError;
pub use flip::flip_y;
pub use image::Image;
pub use limits::Limits;
pub use pixel::{PixelFormat, size_of};
