//! PGM: P2 (ASCII) and P5 (binary), one sample per pixel.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use imgref::ImgVec;

use super::reader::Reader;
use super::{push_raw_sample, read_raw_samples};
use crate::error::PnmError;

pub(crate) fn decode_ascii(
    reader: &mut Reader<'_>,
    pixel_count: usize,
    max_value: u16,
) -> Result<Vec<u16>, PnmError> {
    (0..pixel_count).map(|_| reader.sample(max_value)).collect()
}

pub(crate) fn decode_binary(
    reader: &mut Reader<'_>,
    pixel_count: usize,
    max_value: u16,
) -> Result<Vec<u16>, PnmError> {
    read_raw_samples(reader, pixel_count, max_value)
}

pub(crate) fn encode_ascii(img: &ImgVec<u16>, out: &mut Vec<u8>) {
    let mut line = String::new();
    for row in img.buf().chunks_exact(img.width()) {
        line.clear();
        for (x, &v) in row.iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            // writing to a String cannot fail
            let _ = write!(line, "{v}");
        }
        line.push('\n');
        out.extend_from_slice(line.as_bytes());
    }
}

pub(crate) fn encode_binary(img: &ImgVec<u16>, max_value: u16, out: &mut Vec<u8>) {
    for &v in img.buf().iter() {
        push_raw_sample(out, v, max_value);
    }
}
