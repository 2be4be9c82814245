use emv_qr_core::CodecError;

/// Errors that can occur while building or reading PromptPay payloads
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed tlv structure or checksum
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Amount string could not be parsed
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),

    /// Merchant account information does not carry the PromptPay application id
    #[error("not a promptpay payload")]
    NotPromptPay,

    /// Required field is absent
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Account tag other than mobile or national id
    #[error("unsupported account type {0:?}")]
    UnsupportedAccount(String),
}

pub type Result<T> = std::result::Result<T, Error>;
