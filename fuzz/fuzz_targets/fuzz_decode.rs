#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraw::{Limits, raw};

fuzz_target!(|data: &[u8]| {
    // Arbitrary headers must never panic
    let _ = raw::probe(data);

    let limits = Limits {
        max_memory_bytes: Some(16 * 1024 * 1024),
        ..Default::default()
    };
    if let Ok(img) = raw::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    {
        let _ = zenraw::ascii::render(&img);
        let encoded = raw::encode(&img, enough::Unstoppable).unwrap();
        assert_eq!(&encoded[..], &data[..encoded.len()]);
    }
});
