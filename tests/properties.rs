use zenraw::convert::*;
use zenraw::*;

type PairFn = fn(&Image, &mut Image) -> Result<(), ImageError>;

macro_rules! pair_table {
    ($( $name:ident: $src:ident => $dst:ident, )*) => {
        [$( (PixelFormat::$src, PixelFormat::$dst, $name as PairFn), )*]
    };
}

fn pair_routines() -> [(PixelFormat, PixelFormat, PairFn); 43] {
    pair_table! {
        yuv444_to_yuv444p: Yuv444 => Yuv444p,
        yuv444_to_yuv420p: Yuv444 => Yuv420p,
        yuv444_to_rgb24: Yuv444 => Rgb24,
        yuv444_to_rgb565: Yuv444 => Rgb565,
        yuv444_to_rgb8: Yuv444 => Rgb8,
        yuv444_to_grayscale: Yuv444 => Grayscale,
        yuv444_to_ascii: Yuv444 => Ascii,
        yuv444p_to_yuv444: Yuv444p => Yuv444,
        yuv444p_to_yuv420p: Yuv444p => Yuv420p,
        yuv444p_to_rgb24: Yuv444p => Rgb24,
        yuv444p_to_rgb565: Yuv444p => Rgb565,
        yuv444p_to_rgb8: Yuv444p => Rgb8,
        yuv444p_to_grayscale: Yuv444p => Grayscale,
        yuv444p_to_ascii: Yuv444p => Ascii,
        yuv420p_to_yuv444: Yuv420p => Yuv444,
        yuv420p_to_yuv444p: Yuv420p => Yuv444p,
        yuv420p_to_rgb24: Yuv420p => Rgb24,
        yuv420p_to_rgb565: Yuv420p => Rgb565,
        yuv420p_to_rgb8: Yuv420p => Rgb8,
        yuv420p_to_grayscale: Yuv420p => Grayscale,
        yuv420p_to_ascii: Yuv420p => Ascii,
        rgb24_to_yuv444: Rgb24 => Yuv444,
        rgb24_to_yuv444p: Rgb24 => Yuv444p,
        rgb24_to_yuv420p: Rgb24 => Yuv420p,
        rgb24_to_rgb565: Rgb24 => Rgb565,
        rgb24_to_rgb8: Rgb24 => Rgb8,
        rgb24_to_grayscale: Rgb24 => Grayscale,
        rgb24_to_ascii: Rgb24 => Ascii,
        rgb565_to_yuv444: Rgb565 => Yuv444,
        rgb565_to_yuv444p: Rgb565 => Yuv444p,
        rgb565_to_yuv420p: Rgb565 => Yuv420p,
        rgb565_to_rgb24: Rgb565 => Rgb24,
        rgb565_to_rgb8: Rgb565 => Rgb8,
        rgb565_to_grayscale: Rgb565 => Grayscale,
        rgb565_to_ascii: Rgb565 => Ascii,
        rgb8_to_yuv444: Rgb8 => Yuv444,
        rgb8_to_yuv444p: Rgb8 => Yuv444p,
        rgb8_to_yuv420p: Rgb8 => Yuv420p,
        rgb8_to_rgb24: Rgb8 => Rgb24,
        rgb8_to_rgb565: Rgb8 => Rgb565,
        rgb8_to_grayscale: Rgb8 => Grayscale,
        rgb8_to_ascii: Rgb8 => Ascii,
        grayscale_to_ascii: Grayscale => Ascii,
    }
}

fn patterned(width: u16, height: u16, format: PixelFormat, seed: usize) -> Image {
    let mut img = Image::new(width, height, format).unwrap();
    for (i, b) in img.data_mut().iter_mut().enumerate() {
        *b = ((i + seed) * 37 % 251) as u8;
    }
    img
}

fn expected_size(format: PixelFormat, w: u64, h: u64) -> u64 {
    let cw = (w + 1) / 2;
    let ch = (h + 1) / 2;
    match format {
        PixelFormat::Yuv444 | PixelFormat::Yuv444p | PixelFormat::Rgb24 => 3 * w * h,
        PixelFormat::Yuv420p => w * h + 2 * cw * ch,
        PixelFormat::Rgb565 => 2 * w * h,
        PixelFormat::Rgb8 | PixelFormat::Grayscale | PixelFormat::Ascii => w * h,
    }
}

#[test]
fn size_table_small_dimensions() {
    for format in PixelFormat::ALL {
        for w in 1..=10u16 {
            for h in 1..=10u16 {
                assert_eq!(
                    size_of(w, h, format),
                    expected_size(format, u64::from(w), u64::from(h)),
                    "{format} {w}x{h}"
                );
            }
        }
    }
}

#[test]
fn packed_planar_reshuffle_is_lossless() {
    for (w, h) in [(1, 1), (2, 3), (7, 5), (10, 10)] {
        let src = patterned(w, h, PixelFormat::Yuv444, 0);
        let planar = src.convert_to(PixelFormat::Yuv444p).unwrap();
        let back = planar.convert_to(PixelFormat::Yuv444).unwrap();
        assert_eq!(back, src, "{w}x{h}");
    }
}

#[test]
fn yuv_rgb_round_trip_is_bounded() {
    let src = patterned(9, 7, PixelFormat::Yuv444, 3);
    let rgb = src.convert_to(PixelFormat::Rgb24).unwrap();
    let back = rgb.convert_to(PixelFormat::Yuv444).unwrap();
    assert_eq!(back.len(), src.len());
    // Luma stays in studio swing once it has been through RGB.
    for px in back.data().chunks_exact(3) {
        assert!((16..=235).contains(&px[0]), "{px:?}");
    }
}

#[test]
fn neutral_gray_survives_rgb_within_one_step() {
    let mut src = Image::new(220, 1, PixelFormat::Yuv444).unwrap();
    for (i, px) in src.data_mut().chunks_exact_mut(3).enumerate() {
        px.copy_from_slice(&[16 + i as u8, 128, 128]);
    }
    let back = src
        .convert_to(PixelFormat::Rgb24)
        .and_then(|rgb| rgb.convert_to(PixelFormat::Yuv444))
        .unwrap();
    for (a, b) in src.data().iter().zip(back.data()) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
}

#[test]
fn flip_twice_restores_every_format() {
    for format in PixelFormat::ALL {
        for w in 1..=10u16 {
            for h in 1..=10u16 {
                let original = patterned(w, h, format, usize::from(w * h));
                let mut img = original.clone();
                flip_y(&mut img);
                flip_y(&mut img);
                assert_eq!(img, original, "{format} {w}x{h}");
            }
        }
    }
}

#[test]
fn flip_changes_asymmetric_rows() {
    for format in PixelFormat::ALL {
        let original = patterned(4, 2, format, 1);
        let mut img = original.clone();
        img.flip_y();
        assert_ne!(img, original, "{format}");
    }
}

#[test]
fn odd_yuv420p_corner_sample_covers_one_pixel() {
    // 3x3 luma, 2x2 chroma; give each chroma sample a distinct U.
    let mut data = vec![0u8; 9];
    data.extend_from_slice(&[10, 11, 12, 13]);
    data.extend_from_slice(&[20, 21, 22, 23]);
    let src = Image::from_vec(3, 3, PixelFormat::Yuv420p, data).unwrap();
    let full = src.convert_to(PixelFormat::Yuv444).unwrap();

    let mut uses = [0usize; 4];
    for px in full.data().chunks_exact(3) {
        uses[usize::from(px[1] - 10)] += 1;
        assert_eq!(px[2], px[1] + 10);
    }
    assert_eq!(uses, [4, 2, 2, 1]);
}

#[test]
fn every_pair_routine_guards_its_source_format() {
    for (from, to, routine) in pair_routines() {
        for wrong in PixelFormat::ALL.into_iter().filter(|&f| f != from) {
            let src = patterned(3, 2, wrong, 0);
            let mut dst = patterned(3, 2, to, 5);
            let before = dst.clone();
            let err = routine(&src, &mut dst).unwrap_err();
            let guarded = matches!(
                err,
                ImageError::FormatMismatch { expected, actual }
                    if expected == from && actual == wrong
            );
            assert!(guarded, "{from} -> {to} with {wrong}: {err}");
            assert_eq!(dst, before, "{from} -> {to} with {wrong}");
        }
    }
}

#[test]
fn pair_table_matches_can_convert() {
    let table = pair_routines();
    for from in PixelFormat::ALL {
        for to in PixelFormat::ALL {
            let listed = table.iter().any(|&(f, t, _)| f == from && t == to);
            assert_eq!(listed, can_convert(from, to), "{from} -> {to}");
        }
    }
}

#[test]
fn every_supported_pair_converts() {
    for (from, to, routine) in pair_routines() {
        for (w, h) in [(1, 1), (3, 3), (4, 2)] {
            let src = patterned(w, h, from, 0);
            let mut dst = Image::new(w, h, to).unwrap();
            routine(&src, &mut dst).unwrap();
            assert_eq!(convert_new(&src, to).unwrap(), dst, "{from} -> {to} {w}x{h}");
        }
    }
}

#[test]
fn ascii_output_stays_in_glyph_range() {
    for (from, to, _) in pair_routines() {
        if to != PixelFormat::Ascii {
            continue;
        }
        let out = convert_new(&patterned(5, 5, from, 2), to).unwrap();
        assert!(out.data().iter().all(|&i| i <= ascii::MAX_GLYPH), "{from}");
    }
}

#[test]
fn uniform_block_subsamples_losslessly() {
    let src = Image::from_vec(2, 2, PixelFormat::Yuv444, [100, 150, 200].repeat(4)).unwrap();
    let sub = src.convert_to(PixelFormat::Yuv420p).unwrap();
    assert_eq!(sub.data(), &[100, 100, 100, 100, 150, 200]);

    let back = sub.convert_to(PixelFormat::Yuv444).unwrap();
    assert_eq!(back, src);
}

#[test]
fn convert_into_requires_matching_dimensions() {
    let src = patterned(4, 4, PixelFormat::Rgb565, 0);
    let mut dst = Image::new(4, 5, PixelFormat::Rgb24).unwrap();
    assert!(matches!(
        src.convert_into(&mut dst),
        Err(ImageError::DimensionMismatch { .. })
    ));
    assert!(dst.data().iter().all(|&b| b == 0));
}
