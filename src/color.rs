//! Integer BT.601 colour transforms and bit-depth rescaling.
//!
//! Fixed-point coefficients scaled by 256, studio-swing luma (16..=235) and
//! chroma centred on 128. Every function is pure and saturates to `0..=255`.

#[inline(always)]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Red channel of a YUV sample.
#[inline]
pub fn yuv_to_rgb_r(y: u8, _u: u8, v: u8) -> u8 {
    let c = i32::from(y) - 16;
    let e = i32::from(v) - 128;
    clamp_u8((298 * c + 409 * e + 128) >> 8)
}

/// Green channel of a YUV sample.
#[inline]
pub fn yuv_to_rgb_g(y: u8, u: u8, v: u8) -> u8 {
    let c = i32::from(y) - 16;
    let d = i32::from(u) - 128;
    let e = i32::from(v) - 128;
    clamp_u8((298 * c - 100 * d - 208 * e + 128) >> 8)
}

/// Blue channel of a YUV sample.
#[inline]
pub fn yuv_to_rgb_b(y: u8, u: u8, _v: u8) -> u8 {
    let c = i32::from(y) - 16;
    let d = i32::from(u) - 128;
    clamp_u8((298 * c + 516 * d + 128) >> 8)
}

/// `[y, u, v]` → `[r, g, b]`.
#[inline]
pub fn yuv_to_rgb([y, u, v]: [u8; 3]) -> [u8; 3] {
    [
        yuv_to_rgb_r(y, u, v),
        yuv_to_rgb_g(y, u, v),
        yuv_to_rgb_b(y, u, v),
    ]
}

/// Luma of an RGB sample.
#[inline]
pub fn rgb_to_yuv_y(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    clamp_u8(((66 * r + 129 * g + 25 * b + 128) >> 8) + 16)
}

/// Blue-difference chroma of an RGB sample.
#[inline]
pub fn rgb_to_yuv_u(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    clamp_u8(((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128)
}

/// Red-difference chroma of an RGB sample.
#[inline]
pub fn rgb_to_yuv_v(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    clamp_u8(((112 * r - 94 * g - 18 * b + 128) >> 8) + 128)
}

/// `[r, g, b]` → `[y, u, v]`.
#[inline]
pub fn rgb_to_yuv([r, g, b]: [u8; 3]) -> [u8; 3] {
    [
        rgb_to_yuv_y(r, g, b),
        rgb_to_yuv_u(r, g, b),
        rgb_to_yuv_v(r, g, b),
    ]
}

/// Linearly map `value` from `old_min..=old_max` onto `new_min..=new_max`.
///
/// Truncating integer division, not rounding: `rescale(200, 0, 255, 0, 31)`
/// is 24. A degenerate source range yields `new_min`.
#[inline]
pub fn rescale(value: i32, old_min: i32, old_max: i32, new_min: i32, new_max: i32) -> i32 {
    let old_span = old_max - old_min;
    if old_span == 0 {
        return new_min;
    }
    (value - old_min) * (new_max - new_min) / old_span + new_min
}

#[inline(always)]
fn narrow(v: u8, max: i32) -> u16 {
    rescale(i32::from(v), 0, 255, 0, max) as u16
}

#[inline(always)]
fn widen(v: u16, max: i32) -> u8 {
    rescale(i32::from(v), 0, max, 0, 255) as u8
}

/// Pack 8-bit RGB into the two little-endian bytes of an RGB565 pixel.
#[inline]
pub fn pack_rgb565([r, g, b]: [u8; 3]) -> [u8; 2] {
    let word = narrow(b, 31) | (narrow(g, 63) << 5) | (narrow(r, 31) << 11);
    word.to_le_bytes()
}

/// Unpack an RGB565 pixel and stretch each field back to 8 bits.
#[inline]
pub fn unpack_rgb565(bytes: [u8; 2]) -> [u8; 3] {
    let word = u16::from_le_bytes(bytes);
    [
        widen(word >> 11, 31),
        widen((word >> 5) & 0x3F, 63),
        widen(word & 0x1F, 31),
    ]
}

/// Pack 8-bit RGB into one 3-3-2 byte.
#[inline]
pub fn pack_rgb8([r, g, b]: [u8; 3]) -> u8 {
    (narrow(b, 3) | (narrow(g, 7) << 2) | (narrow(r, 7) << 5)) as u8
}

/// Unpack a 3-3-2 byte and stretch each field back to 8 bits.
#[inline]
pub fn unpack_rgb8(byte: u8) -> [u8; 3] {
    let v = u16::from(byte);
    [widen(v >> 5, 7), widen((v >> 2) & 0x07, 7), widen(v & 0x03, 3)]
}
