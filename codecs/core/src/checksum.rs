//! The trailing crc field (tag 63) of a payload.
//!
//! The checksum covers every preceding field plus the `6304` header of the
//! crc field itself, so it is always the final 8 characters of a payload.

use crate::crc::crc16_hex;
use crate::{CodecError, Result};

/// Tag and length header of the crc field
pub const CRC_HEADER: &str = "6304";

/// Append the crc field to a payload built from all other fields.
pub fn append_checksum(payload: &mut String) {
    payload.push_str(CRC_HEADER);
    let crc = crc16_hex(payload);
    payload.push_str(&crc);
}

/// Check the crc field at the end of `payload`.
///
/// Returns the payload without its crc field on success.
pub fn verify_checksum(payload: &str) -> Result<&str> {
    let split = payload
        .len()
        .checked_sub(4)
        .filter(|&at| payload.is_char_boundary(at))
        .ok_or(CodecError::MissingChecksum)?;
    let (covered, found) = payload.split_at(split);
    let body = covered
        .strip_suffix(CRC_HEADER)
        .ok_or(CodecError::MissingChecksum)?;

    let expected = crc16_hex(covered);
    if !expected.eq_ignore_ascii_case(found) {
        return Err(CodecError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        });
    }
    Ok(body)
}
