//! Tag-length-value fields as used by EMVCo QR payloads.
//!
//! Every field is a 2 digit tag, a 2 digit decimal length, and the value:
//!
//! ```text
//! 53 03 764
//! ^  ^  ^-- value
//! |  `----- length (decimal, zero padded)
//! `-------- tag
//! ```

use crate::{CodecError, Result};

/// Largest value a two digit length can describe
pub const MAX_VALUE_LEN: usize = 99;

/// Render a value length as the 2 digit decimal length header.
pub fn encode_len(tag: &str, len: usize) -> Result<String> {
    if len > MAX_VALUE_LEN {
        return Err(CodecError::ValueTooLong {
            tag: tag.to_string(),
            len,
        });
    }
    Ok(format!("{len:02}"))
}

fn check_tag(tag: &str) -> Result<()> {
    if tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CodecError::InvalidTag(tag.to_string()))
    }
}

/// Append a single field to `out`.
pub fn write_field(out: &mut String, tag: &str, value: &str) -> Result<()> {
    check_tag(tag)?;
    let len = encode_len(tag, value.len())?;
    out.push_str(tag);
    out.push_str(&len);
    out.push_str(value);
    Ok(())
}

/// Encode a single field into a new string.
pub fn field(tag: &str, value: &str) -> Result<String> {
    let mut out = String::with_capacity(4 + value.len());
    write_field(&mut out, tag, value)?;
    Ok(out)
}

/// A decoded field, borrowing from the source payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub tag: &'a str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    /// Decode the value as a nested template
    pub fn fields(&self) -> Fields<'a> {
        Fields::new(self.value)
    }
}

/// Iterator over the fields of a payload or template.
///
/// Yields an error once on malformed input and then stops.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> Fields<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            failed: false,
        }
    }

    fn next_field(&mut self) -> Result<Field<'a>> {
        let start = self.offset;
        let truncated = CodecError::Truncated { offset: start };

        let tag = self.input.get(start..start + 2).ok_or(truncated.clone())?;
        check_tag(tag)?;
        let len_str = self
            .input
            .get(start + 2..start + 4)
            .ok_or(truncated.clone())?;
        if !len_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidLength {
                offset: start + 2,
                len: len_str.to_string(),
            });
        }
        let len: usize = len_str.parse().map_err(|_| CodecError::InvalidLength {
            offset: start + 2,
            len: len_str.to_string(),
        })?;

        let value = self
            .input
            .get(start + 4..start + 4 + len)
            .ok_or(truncated)?;
        self.offset = start + 4 + len;
        Ok(Field { tag, value })
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<Field<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }
        let res = self.next_field();
        self.failed = res.is_err();
        Some(res)
    }
}

/// Decode every field of `input`, failing on the first malformed one.
pub fn parse(input: &str) -> Result<Vec<Field<'_>>> {
    Fields::new(input).collect()
}
