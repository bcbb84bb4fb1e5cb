use alloc::string::String;

use crate::pixel::Variant;

/// Errors from Netpbm decoding, encoding, and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("sample value {value} exceeds max value {max_value}")]
    SampleOutOfRange { value: u32, max_value: u16 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("coordinate ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("variant mismatch: expected {expected:?}, got {actual:?}")]
    VariantMismatch { expected: Variant, actual: Variant },

    #[error("max value must be in 1..=65535, got {0}")]
    InvalidMaxValue(u32),
}

impl PnmError {
    /// Whether this error means the input bytes were malformed.
    ///
    /// Covers bad magic numbers, bad header fields, bad or out-of-range
    /// samples, and truncated payloads.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            PnmError::UnrecognizedFormat
                | PnmError::InvalidHeader(_)
                | PnmError::InvalidData(_)
                | PnmError::SampleOutOfRange { .. }
                | PnmError::UnexpectedEof
                | PnmError::InvalidMaxValue(_)
        )
    }
}
