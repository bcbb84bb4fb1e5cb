//! Test corpus: patterned images across sizes and formats, plus malformed
//! inputs that must be rejected cleanly.

use zenpbm::rgb::Rgb;
use zenpbm::*;

fn checkerboard(w: u32, h: u32) -> Vec<bool> {
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x + y) % 2 == 0))
        .collect()
}

fn noise_pattern(n: usize, max: u16) -> Vec<u16> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % (u32::from(max) + 1)) as u16
        })
        .collect()
}

fn noise_rgb(n: usize, max: u16) -> Vec<Rgb<u16>> {
    noise_pattern(n * 3, max)
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect()
}

const SIZES: [(u32, u32); 7] = [(1, 1), (1, 9), (7, 1), (8, 8), (9, 3), (16, 5), (33, 17)];

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn bitmap_sizes_roundtrip() {
    for (w, h) in SIZES {
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let image = Image::from_bitmap_pixels(w, h, checkerboard(w, h), encoding).unwrap();
            let decoded = decode(&encode(&image).unwrap()).unwrap();
            assert_eq!(decoded, image, "{w}x{h} {encoding:?}");
        }
    }
}

#[test]
fn noise_sizes_roundtrip() {
    for (w, h) in SIZES {
        let n = (w * h) as usize;
        for max in [1, 255, 256, 65535] {
            for encoding in [Encoding::Ascii, Encoding::Binary] {
                let gray =
                    Image::from_gray_pixels(w, h, max, noise_pattern(n, max), encoding).unwrap();
                assert_eq!(decode(&encode(&gray).unwrap()).unwrap(), gray);

                let color =
                    Image::from_color_pixels(w, h, max, noise_rgb(n, max), encoding).unwrap();
                assert_eq!(decode(&encode(&color).unwrap()).unwrap(), color);
            }
        }
    }
}

#[test]
fn p4_payload_size() {
    for (w, h) in SIZES {
        let image = Image::new_bitmap(w, h, Encoding::Binary).unwrap();
        let encoded = encode(&image).unwrap();
        let header = format!("P4\n{w} {h}\n");
        assert_eq!(encoded.len(), header.len() + (w as usize).div_ceil(8) * h as usize);
    }
}

// ── Tolerated input ──────────────────────────────────────────────────

#[test]
fn comments_anywhere_in_header() {
    let data = b"P2 # magic\n# geometry follows\n2# width\n1\n#max\n9\n4 # first\n5\n";
    let image = decode(data).unwrap();
    assert_eq!(image.as_grayscale().unwrap().buf().as_slice(), &[4, 5]);
}

#[test]
fn p1_tokens_separated_by_any_whitespace() {
    let image = decode(b"P1\r\n3\t1\n1\n0\x0b1").unwrap();
    assert_eq!(image.as_bitmap().unwrap().buf().as_slice(), &[true, false, true]);
}

#[test]
fn p4_padding_bits_ignored() {
    let image = decode(b"P4\n3 2\n\xbf\x5f").unwrap();
    // 101_11111, 010_11111
    assert_eq!(
        image.as_bitmap().unwrap().buf().as_slice(),
        &[true, false, true, false, true, false]
    );
}

#[test]
fn binary_payload_may_start_with_whitespace_byte() {
    let image = decode(b"P5\n2 1\n255\n\x0a\x20").unwrap();
    assert_eq!(image.as_grayscale().unwrap().buf().as_slice(), &[10, 32]);
}

#[test]
fn trailing_bytes_after_payload_are_ignored() {
    let image = decode(b"P6\n1 1\n255\n\x01\x02\x03garbage").unwrap();
    assert_eq!(image.get(0, 0).unwrap(), Pixel::Rgb(Rgb::new(1, 2, 3)));
}

// ── Rejected input ───────────────────────────────────────────────────

#[test]
fn invalid_p1_digit_is_format_error() {
    let err = decode(b"P1\n2 1\n0 2\n").unwrap_err();
    assert!(matches!(err, PnmError::InvalidData(_)), "{err:?}");
    assert!(err.is_format_error());
}

#[test]
fn malformed_inputs_are_format_errors() {
    let cases: [&[u8]; 14] = [
        b"",
        b"P",
        b"P7\n1 1\n255\n",
        b"BM\x00\x00",
        b"P2\n",
        b"P2\n-1 1\n255\n0",
        b"P2\n1 1\n0\n0",
        b"P2\n1 1\n70000\n0",
        b"P2\n2 1\n255\n1",
        b"P2\n1 1\n10\n11",
        b"P3\n1 1\n255\n1 2 x",
        b"P5\n2 2\n255\n\x00\x00\x00",
        b"P6\n1 1\n100\n\x01\xff\x01",
        b"P4\n9 1\n\xff",
    ];
    for data in cases {
        let err = decode(data).unwrap_err();
        assert!(err.is_format_error(), "{:?} gave {err:?}", String::from_utf8_lossy(data));
    }
}

#[test]
fn zero_dimension_header_rejected() {
    assert!(matches!(
        decode(b"P5\n0 5\n255\n"),
        Err(PnmError::InvalidHeader(_))
    ));
}

#[test]
fn huge_ascii_header_fails_before_allocating() {
    let err = decode(b"P2\n60000 60000\n255\n1 2 3").unwrap_err();
    assert!(matches!(err, PnmError::UnexpectedEof));
}

#[test]
fn wide_binary_sample_out_of_range() {
    let err = decode(b"P5\n1 1\n300\n\x01\x2d").unwrap_err();
    assert!(matches!(
        err,
        PnmError::SampleOutOfRange {
            value: 301,
            max_value: 300
        }
    ));
}

// ── Limits ───────────────────────────────────────────────────────────

#[test]
fn limits_reject_before_decoding() {
    let data = b"P5\n5 2\n255\n\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";

    let narrow = Limits {
        max_width: Some(4),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(data, &narrow),
        Err(PnmError::LimitExceeded(_))
    ));

    let few_pixels = Limits {
        max_pixels: Some(9),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(data).with_limits(&few_pixels).decode(),
        Err(PnmError::LimitExceeded(_))
    ));

    let roomy = Limits {
        max_width: Some(5),
        max_height: Some(2),
        max_pixels: Some(10),
        max_memory_bytes: Some(20),
    };
    assert!(decode_with_limits(data, &roomy).is_ok());
}

#[test]
fn memory_limit_accounts_for_variant() {
    let limits = Limits {
        max_memory_bytes: Some(12),
        ..Default::default()
    };
    // 2 pixels of RGB u16 need 12 bytes, 3 need 18
    assert!(decode_with_limits(b"P3 2 1 255 0 0 0 0 0 0", &limits).is_ok());
    assert!(decode_with_limits(b"P3 3 1 255 0 0 0 0 0 0 0 0 0", &limits).is_err());
}
