//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Decoding parses the text header with [`reader::Reader`], then hands the
//! cursor to the per-variant codec. Encoding writes the header and the
//! payload into one buffer.

mod bitmap;
mod graymap;
mod pixmap;
pub(crate) mod reader;

use alloc::format;
use alloc::vec::Vec;

use imgref::ImgVec;
use log::debug;

use crate::error::PnmError;
use crate::image::{Image, Pixels, pixel_count};
use crate::limits::Limits;
use crate::pixel::{Encoding, PnmFormat};
use reader::Reader;

/// Parsed PNM header (internal).
#[derive(Clone, Copy, Debug)]
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    /// `1` for bitmaps, which carry no max-value line.
    pub max_value: u16,
}

/// Parse the magic number, geometry, and (for PGM/PPM) the max value.
pub(crate) fn parse_header(reader: &mut Reader<'_>) -> Result<PnmHeader, PnmError> {
    let magic = reader.next_token().ok_or(PnmError::UnrecognizedFormat)?;
    let format = PnmFormat::from_magic(magic).ok_or(PnmError::UnrecognizedFormat)?;

    let width = reader.header_u32("width")?;
    let height = reader.header_u32("height")?;
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let max_value = if format.variant().has_max_value() {
        let max = reader.header_u32("max value")?;
        if !(1..=u32::from(u16::MAX)).contains(&max) {
            return Err(PnmError::InvalidMaxValue(max));
        }
        max as u16
    } else {
        1
    };

    Ok(PnmHeader {
        format,
        width,
        height,
        max_value,
    })
}

/// Decode a whole image from `data`.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, PnmError> {
    let mut reader = Reader::new(data);
    let header = parse_header(&mut reader)?;
    let variant = header.format.variant();
    let encoding = header.format.encoding();

    if let Some(limits) = limits {
        limits.check_header(header.width, header.height, variant.bytes_per_pixel())?;
    }
    let count = pixel_count(header.width, header.height)?;
    let w = header.width as usize;
    let h = header.height as usize;

    debug!(
        "{} header: {}x{} max {} ({} header bytes)",
        header.format.magic(),
        w,
        h,
        header.max_value,
        reader.position()
    );

    match encoding {
        Encoding::Binary => reader.end_of_header()?,
        Encoding::Ascii => {
            // every sample needs at least one byte; reject before allocating
            if reader.remaining() < count.saturating_mul(variant.channels()) {
                return Err(PnmError::UnexpectedEof);
            }
        }
    }

    let max = header.max_value;
    let pixels = match header.format {
        PnmFormat::PbmAscii => Pixels::Bitmap(ImgVec::new(
            bitmap::decode_ascii(&mut reader, w, h)?,
            w,
            h,
        )),
        PnmFormat::PbmBinary => Pixels::Bitmap(ImgVec::new(
            bitmap::decode_binary(&mut reader, w, h)?,
            w,
            h,
        )),
        PnmFormat::PgmAscii => Pixels::Grayscale(ImgVec::new(
            graymap::decode_ascii(&mut reader, count, max)?,
            w,
            h,
        )),
        PnmFormat::PgmBinary => Pixels::Grayscale(ImgVec::new(
            graymap::decode_binary(&mut reader, count, max)?,
            w,
            h,
        )),
        PnmFormat::PpmAscii => Pixels::Color(ImgVec::new(
            pixmap::decode_ascii(&mut reader, count, max)?,
            w,
            h,
        )),
        PnmFormat::PpmBinary => Pixels::Color(ImgVec::new(
            pixmap::decode_binary(&mut reader, count, max)?,
            w,
            h,
        )),
    };

    Ok(Image {
        pixels,
        encoding,
        max_value: max,
    })
}

/// Encode `image` as `encoding`, with optional `# ` comment lines after the magic.
pub(crate) fn encode(image: &Image, encoding: Encoding, comment: Option<&str>) -> Vec<u8> {
    let format = PnmFormat::new(image.variant(), encoding);
    let mut out = Vec::new();

    out.extend_from_slice(format.magic().as_bytes());
    out.push(b'\n');
    for line in comment.into_iter().flat_map(str::lines) {
        out.extend_from_slice(b"# ");
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out.extend_from_slice(format!("{} {}\n", image.width(), image.height()).as_bytes());
    if let Some(max) = image.max_value() {
        out.extend_from_slice(format!("{max}\n").as_bytes());
    }
    let header_len = out.len();

    let max = image.max_value;
    match (&image.pixels, encoding) {
        (Pixels::Bitmap(img), Encoding::Ascii) => bitmap::encode_ascii(img, &mut out),
        (Pixels::Bitmap(img), Encoding::Binary) => bitmap::encode_binary(img, &mut out),
        (Pixels::Grayscale(img), Encoding::Ascii) => graymap::encode_ascii(img, &mut out),
        (Pixels::Grayscale(img), Encoding::Binary) => graymap::encode_binary(img, max, &mut out),
        (Pixels::Color(img), Encoding::Ascii) => pixmap::encode_ascii(img, &mut out),
        (Pixels::Color(img), Encoding::Binary) => pixmap::encode_binary(img, max, &mut out),
    }

    debug!(
        "encoded {} {}x{}: {} header + {} payload bytes",
        format.magic(),
        image.width(),
        image.height(),
        header_len,
        out.len() - header_len
    );
    out
}

/// Append one binary sample: a byte below 256, else a big-endian pair.
pub(crate) fn push_raw_sample(out: &mut Vec<u8>, v: u16, max_value: u16) {
    if max_value < 256 {
        out.push(v as u8);
    } else {
        out.extend_from_slice(&v.to_be_bytes());
    }
}

/// Read `count` binary samples and check each against `max_value`.
pub(crate) fn read_raw_samples(
    reader: &mut Reader<'_>,
    count: usize,
    max_value: u16,
) -> Result<Vec<u16>, PnmError> {
    let wide = max_value >= 256;
    let len = count
        .checked_mul(if wide { 2 } else { 1 })
        .ok_or(PnmError::UnexpectedEof)?;
    let bytes = reader.take(len)?;

    let samples: Vec<u16> = if wide {
        bytes
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect()
    } else {
        bytes.iter().map(|&b| u16::from(b)).collect()
    };

    if let Some(&value) = samples.iter().find(|&&v| v > max_value) {
        return Err(PnmError::SampleOutOfRange {
            value: u32::from(value),
            max_value,
        });
    }
    Ok(samples)
}
