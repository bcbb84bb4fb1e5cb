use alloc::format;

use crate::error::PnmError;

/// Resource limits applied while decoding.
///
/// All fields default to `None` (no limit). Limits are checked right after
/// the header is parsed, before any pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the in-memory pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header against every configured limit.
    ///
    /// `bytes_per_pixel` is the in-memory cost of one pixel for the variant
    /// being decoded, not its wire size.
    pub(crate) fn check_header(
        &self,
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
    ) -> Result<(), PnmError> {
        let pixels = u64::from(width) * u64::from(height);
        let memory = pixels.saturating_mul(bytes_per_pixel as u64);

        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds("pixel buffer bytes", memory, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    match limit {
        Some(max) if value > max => Err(PnmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
