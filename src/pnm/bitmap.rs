//! PBM: P1 (ASCII) and P4 (bit-packed binary).
//!
//! P4 rows occupy `ceil(width / 8)` bytes, most significant bit first.
//! Padding bits at the end of a row are ignored on read and written as zero.

use alloc::format;
use alloc::vec::Vec;

use imgref::ImgVec;

use super::reader::{Reader, lossy};
use crate::error::PnmError;

pub(crate) fn row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

pub(crate) fn decode_ascii(
    reader: &mut Reader<'_>,
    width: usize,
    height: usize,
) -> Result<Vec<bool>, PnmError> {
    let mut out = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        let bit = match reader.sample_token()? {
            b"0" => false,
            b"1" => true,
            other => {
                return Err(PnmError::InvalidData(format!(
                    "bitmap sample must be 0 or 1, got {:?}",
                    lossy(other)
                )));
            }
        };
        out.push(bit);
    }
    Ok(out)
}

pub(crate) fn decode_binary(
    reader: &mut Reader<'_>,
    width: usize,
    height: usize,
) -> Result<Vec<bool>, PnmError> {
    let stride = row_bytes(width);
    let expected = stride
        .checked_mul(height)
        .ok_or(PnmError::UnexpectedEof)?;
    let packed = reader.take(expected)?;

    let mut out = Vec::with_capacity(width * height);
    for row in packed.chunks_exact(stride) {
        out.extend((0..width).map(|x| (row[x / 8] >> (7 - x % 8)) & 1 != 0));
    }
    Ok(out)
}

pub(crate) fn encode_ascii(img: &ImgVec<bool>, out: &mut Vec<u8>) {
    let width = img.width();
    out.reserve(img.buf().len() * 2);
    for row in img.buf().chunks_exact(width) {
        for (x, &bit) in row.iter().enumerate() {
            if x > 0 {
                out.push(b' ');
            }
            out.push(if bit { b'1' } else { b'0' });
        }
        out.push(b'\n');
    }
}

pub(crate) fn encode_binary(img: &ImgVec<bool>, out: &mut Vec<u8>) {
    let width = img.width();
    let stride = row_bytes(width);
    out.reserve(stride * img.height());
    for row in img.buf().chunks_exact(width) {
        let start = out.len();
        out.resize(start + stride, 0);
        let packed = &mut out[start..];
        for (x, _) in row.iter().enumerate().filter(|&(_, &bit)| bit) {
            packed[x / 8] |= 0x80 >> (x % 8);
        }
    }
}
