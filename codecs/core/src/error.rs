/// Errors raised while encoding or decoding EMVCo QR payloads
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Value does not fit a two digit length field
    #[error("value for tag {tag} is {len} bytes, at most 99 are supported")]
    ValueTooLong { tag: String, len: usize },

    /// Tags are always two ascii digits
    #[error("invalid tag {0:?}")]
    InvalidTag(String),

    /// Input ended inside a field header or value
    #[error("truncated field at offset {offset}")]
    Truncated { offset: usize },

    /// Length header was not two decimal digits
    #[error("invalid length {len:?} at offset {offset}")]
    InvalidLength { offset: usize, len: String },

    /// Payload does not end with a crc field
    #[error("missing checksum field")]
    MissingChecksum,

    /// Crc field does not match the payload
    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, CodecError>;
