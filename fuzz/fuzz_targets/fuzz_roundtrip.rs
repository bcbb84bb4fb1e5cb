#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    // If we can decode it, re-encoding in either encoding must decode to the same pixels
    let Ok(decoded) = decode_with_limits(data, &limits) else {
        return;
    };

    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let reencoded = EncodeRequest::new(&decoded)
            .with_encoding(encoding)
            .encode()
            .expect("encoding a decoded image cannot fail");
        let Ok(mut decoded2) = decode(&reencoded) else {
            panic!("re-encoded data failed to decode");
        };
        decoded2.set_encoding(decoded.encoding());
        assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
    }
});
