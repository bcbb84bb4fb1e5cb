#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bound allocations so huge headers fail fast instead of OOMing
    let limits = zenpbm::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };

    // Must never panic
    let _ = zenpbm::ImageInfo::from_bytes(data);
    let _ = zenpbm::decode_with_limits(data, &limits);
});
