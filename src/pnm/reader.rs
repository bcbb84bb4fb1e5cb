//! Header tokenizer and payload cursor over an in-memory byte slice.
//!
//! Header fields and ASCII samples are whitespace-separated tokens. A `#`
//! starts a comment that runs to the end of the line; comments are skipped
//! wherever a token may start, but never inside a binary payload.

use alloc::format;
use alloc::string::String;

use crate::error::PnmError;

pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

fn is_space(b: u8) -> bool {
    // Netpbm whitespace: blank, TAB, CR, LF, VT, FF
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c)
}

pub(crate) fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

/// Parse an unsigned decimal token. `None` for anything but plain digits.
pub(crate) fn parse_u32(token: &[u8]) -> Option<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    token.iter().try_fold(0u32, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u32::from(d - b'0'))
    })
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn skip_comment(&mut self) {
        match self.data[self.pos..].iter().position(|&b| b == b'\n') {
            Some(nl) => self.pos += nl + 1,
            None => self.pos = self.data.len(),
        }
    }

    /// Skip whitespace and `#` comments up to the start of the next token.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if is_space(b) {
                self.pos += 1;
            } else if b == b'#' {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    ///
    /// A `#` directly after a token also ends it. The cursor is left on the
    /// delimiter, so a binary payload can start exactly one byte later.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while let Some(&b) = self.data.get(self.pos) {
            if is_space(b) || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.data[start..self.pos])
    }

    /// Read a numeric header field.
    pub(crate) fn header_u32(&mut self, field: &str) -> Result<u32, PnmError> {
        let token = self
            .next_token()
            .ok_or_else(|| PnmError::InvalidHeader(format!("missing {field}")))?;
        parse_u32(token).ok_or_else(|| {
            PnmError::InvalidHeader(format!("{field} is not a number: {:?}", lossy(token)))
        })
    }

    /// Consume the single whitespace byte that separates the header from a
    /// binary payload. A trailing comment line is accepted in its place.
    pub(crate) fn end_of_header(&mut self) -> Result<(), PnmError> {
        match self.data.get(self.pos) {
            Some(&b) if is_space(b) => {
                self.pos += 1;
                Ok(())
            }
            Some(b'#') => {
                self.skip_comment();
                Ok(())
            }
            Some(&b) => Err(PnmError::InvalidHeader(format!(
                "expected whitespace after header, found byte 0x{b:02x}"
            ))),
            None => Err(PnmError::UnexpectedEof),
        }
    }

    /// Take exactly `n` raw payload bytes.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], PnmError> {
        let end = self.pos.checked_add(n).ok_or(PnmError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(PnmError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }

    /// Next ASCII sample token; running out is a truncated payload.
    pub(crate) fn sample_token(&mut self) -> Result<&'a [u8], PnmError> {
        self.next_token().ok_or(PnmError::UnexpectedEof)
    }

    /// Next ASCII sample, validated against `max_value`.
    pub(crate) fn sample(&mut self, max_value: u16) -> Result<u16, PnmError> {
        let token = self.sample_token()?;
        let value = parse_u32(token).ok_or_else(|| {
            PnmError::InvalidData(format!("sample is not a number: {:?}", lossy(token)))
        })?;
        if value > u32::from(max_value) {
            return Err(PnmError::SampleOutOfRange { value, max_value });
        }
        Ok(value as u16)
    }
}
