//! File helpers. Requires the `std` feature.

use std::fs;
use std::path::Path;

use log::debug;

use crate::encode::EncodeRequest;
use crate::error::PnmError;
use crate::image::Image;
use crate::pnm;

/// Read and decode a PNM file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Image, PnmError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    pnm::decode(&data, None)
}

impl Image {
    /// Encode in the image's own encoding and write to `path`, replacing
    /// any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PnmError> {
        let path = path.as_ref();
        let data = EncodeRequest::new(self).encode()?;
        fs::write(path, &data)?;
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
