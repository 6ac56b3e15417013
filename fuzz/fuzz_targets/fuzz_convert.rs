#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraw::{Image, PixelFormat, can_convert, convert_new, flip_y};

fuzz_target!(|data: &[u8]| {
    let [w, h, f, rest @ ..] = data else {
        return;
    };
    let width = u16::from(w % 10) + 1;
    let height = u16::from(h % 10) + 1;
    let format = PixelFormat::ALL[usize::from(*f) % PixelFormat::ALL.len()];

    let mut src = Image::new(width, height, format).unwrap();
    for (dst, &b) in src.data_mut().iter_mut().zip(rest.iter().cycle()) {
        *dst = b;
    }

    for to in PixelFormat::ALL {
        match convert_new(&src, to) {
            Ok(out) => {
                assert!(can_convert(format, to));
                assert_eq!(out.dimensions(), src.dimensions());
                let mut flipped = out.clone();
                flip_y(&mut flipped);
                flip_y(&mut flipped);
                assert_eq!(flipped, out);
            }
            Err(_) => assert!(!can_convert(format, to)),
        }
    }
});
