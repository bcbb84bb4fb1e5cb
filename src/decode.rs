use crate::error::PnmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::PnmFormat;
use crate::pnm;
use crate::pnm::reader::Reader;

/// Builder for a decode: input bytes plus optional [`Limits`].
///
/// ```
/// use zenpbm::{DecodeRequest, Limits, Variant};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(b"P2\n2 1\n15\n0 15\n")
///     .with_limits(&limits)
///     .decode()?;
/// assert_eq!(image.variant(), Variant::Grayscale);
/// # Ok::<(), zenpbm::PnmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole image. Fails on the first malformed field; no
    /// partially decoded image is ever returned.
    pub fn decode(self) -> Result<Image, PnmError> {
        pnm::decode(self.data, self.limits)
    }
}

/// Decode a read-all byte source, e.g. an opened file.
///
/// The reader is consumed; pass `&mut r` to keep using it.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(
    mut reader: R,
    limits: Option<&Limits>,
) -> Result<Image, PnmError> {
    let mut data = alloc::vec::Vec::new();
    reader.read_to_end(&mut data)?;
    pnm::decode(&data, limits)
}

/// Header-level facts, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PnmFormat,
    /// `None` for bitmaps.
    pub max_value: Option<u16>,
}

impl ImageInfo {
    /// Read the header only.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let header = pnm::parse_header(&mut Reader::new(data))?;
        Ok(Self {
            width: header.width,
            height: header.height,
            format: header.format,
            max_value: header
                .format
                .variant()
                .has_max_value()
                .then_some(header.max_value),
        })
    }
}
