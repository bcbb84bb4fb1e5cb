use alloc::vec::Vec;

use crate::error::PnmError;
use crate::image::Image;
use crate::pixel::Encoding;
use crate::pnm;

/// Builder for an encode.
///
/// By default the image is written in its own encoding with no comments.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    image: &'a Image,
    encoding: Option<Encoding>,
    comment: Option<&'a str>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(image: &'a Image) -> Self {
        Self {
            image,
            encoding: None,
            comment: None,
        }
    }

    /// Write ASCII or binary regardless of the image's own encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Header comment; each line becomes one `# ` line after the magic number.
    pub fn with_comment(mut self, comment: &'a str) -> Self {
        self.comment = Some(comment);
        self
    }

    fn effective_encoding(&self) -> Encoding {
        self.encoding.unwrap_or(self.image.encoding())
    }

    pub fn encode(&self) -> Result<Vec<u8>, PnmError> {
        Ok(pnm::encode(
            self.image,
            self.effective_encoding(),
            self.comment,
        ))
    }

    /// Encode straight into a writer.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut writer: W) -> Result<(), PnmError> {
        writer.write_all(&self.encode()?)?;
        writer.flush()?;
        Ok(())
    }
}
