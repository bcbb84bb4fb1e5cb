//! PPM: P3 (ASCII) and P6 (binary), R G B per pixel, no row padding.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use imgref::ImgVec;
use rgb::Rgb;

use super::reader::Reader;
use super::{push_raw_sample, read_raw_samples};
use crate::error::PnmError;

pub(crate) fn decode_ascii(
    reader: &mut Reader<'_>,
    pixel_count: usize,
    max_value: u16,
) -> Result<Vec<Rgb<u16>>, PnmError> {
    let mut out = Vec::with_capacity(pixel_count);
    for _ in 0..pixel_count {
        let r = reader.sample(max_value)?;
        let g = reader.sample(max_value)?;
        let b = reader.sample(max_value)?;
        out.push(Rgb { r, g, b });
    }
    Ok(out)
}

pub(crate) fn decode_binary(
    reader: &mut Reader<'_>,
    pixel_count: usize,
    max_value: u16,
) -> Result<Vec<Rgb<u16>>, PnmError> {
    let sample_count = pixel_count.checked_mul(3).ok_or(PnmError::UnexpectedEof)?;
    let samples = read_raw_samples(reader, sample_count, max_value)?;
    Ok(samples
        .chunks_exact(3)
        .map(|c| Rgb {
            r: c[0],
            g: c[1],
            b: c[2],
        })
        .collect())
}

pub(crate) fn encode_ascii(img: &ImgVec<Rgb<u16>>, out: &mut Vec<u8>) {
    let mut line = String::new();
    for row in img.buf().chunks_exact(img.width()) {
        line.clear();
        for (x, px) in row.iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{} {} {}", px.r, px.g, px.b);
        }
        line.push('\n');
        out.extend_from_slice(line.as_bytes());
    }
}

pub(crate) fn encode_binary(img: &ImgVec<Rgb<u16>>, max_value: u16, out: &mut Vec<u8>) {
    for px in img.buf().iter() {
        push_raw_sample(out, px.r, max_value);
        push_raw_sample(out, px.g, max_value);
        push_raw_sample(out, px.b, max_value);
    }
}
