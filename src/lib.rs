//! # zenpbm
//!
//! Netpbm image codec: PBM, PGM and PPM in both their ASCII (P1, P2, P3)
//! and binary (P4, P5, P6) encodings, plus in-memory transforms and a small
//! vector canvas.
//!
//! ## Pixel model
//!
//! An [`Image`] is one of three variants:
//! - **Bitmap**: one bit per pixel, `true` is black
//! - **Grayscale**: one sample per pixel in `0..=max_value`
//! - **Color**: RGB samples in `0..=max_value`
//!
//! Samples are stored as `u16`, so 16-bit files (max value above 255) are
//! read and written losslessly. The image remembers whether it came from an
//! ASCII or binary file and encodes back the same way unless told otherwise.
//!
//! ## Usage
//!
//! ```
//! use zenpbm::{EncodeRequest, Encoding, ImageInfo, Point};
//! use zenpbm::rgb::Rgb;
//!
//! let data = b"P3\n2 2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n";
//!
//! // Read dimensions without decoding pixels
//! let info = ImageInfo::from_bytes(data)?;
//! assert_eq!((info.width, info.height), (2, 2));
//!
//! let mut image = zenpbm::decode(data)?;
//! image.flip_horizontal();
//! image
//!     .canvas()?
//!     .draw_line(Point::new(0, 0), Point::new(1, 1), Rgb::new(0, 0, 0));
//!
//! // Re-encode as binary P6
//! let encoded = EncodeRequest::new(&image)
//!     .with_encoding(Encoding::Binary)
//!     .encode()?;
//! assert!(encoded.starts_with(b"P6\n"));
//! # Ok::<(), zenpbm::PnmError>(())
//! ```
//!
//! ## Non-Goals
//!
//! - PAM (P7) and PFM
//! - Streaming decode of files larger than memory
//! - Color management

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod canvas;
mod decode;
mod encode;
mod error;
mod image;
mod limits;
mod pixel;
mod pnm;
mod transform;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use canvas::{Canvas, KOCH_MAX_DEPTH, Point};
pub use decode::{DecodeRequest, ImageInfo};
pub use encode::EncodeRequest;
pub use error::PnmError;
pub use image::Image;
pub use limits::Limits;
pub use pixel::{Encoding, Pixel, PnmFormat, Variant, luma};

#[cfg(feature = "std")]
pub use decode::decode_reader;
#[cfg(feature = "std")]
pub use io::read_file;

pub use imgref;
pub use rgb;

/// Decode a P1–P6 file with no resource limits.
pub fn decode(data: &[u8]) -> Result<Image, PnmError> {
    DecodeRequest::new(data).decode()
}

/// Decode, rejecting headers that exceed `limits` before any pixel
/// allocation.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, PnmError> {
    DecodeRequest::new(data).with_limits(limits).decode()
}

/// Encode in the image's own encoding without comments.
pub fn encode(image: &Image) -> Result<alloc::vec::Vec<u8>, PnmError> {
    EncodeRequest::new(image).encode()
}
