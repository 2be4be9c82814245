//! Merchant identifiers and their classification.

use std::fmt::Display;

/// Digit count at which an identifier is treated as a national id
pub const NATIONAL_ID_DIGITS: usize = 13;

/// Thailand calling code replacing the trunk prefix of mobile numbers
pub const COUNTRY_CALLING_CODE: &str = "66";

/// Kind of PromptPay account, doubling as its tag inside the merchant template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Mobile phone number, tag `01`
    Mobile,
    /// National id or tax id, tag `02`
    NationalId,
}

impl AccountType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Mobile => "01",
            Self::NationalId => "02",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "01" => Some(Self::Mobile),
            "02" => Some(Self::NationalId),
            _ => None,
        }
    }
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::NationalId => write!(f, "national id"),
        }
    }
}

/// A normalized merchant identifier, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MerchantId {
    kind: AccountType,
    digits: String,
}

impl MerchantId {
    /// Normalize a user supplied mobile number or national id.
    ///
    /// Everything but ascii digits is dropped. 13 or more digits is a national
    /// id, anything shorter a mobile number, whose leading `0` is replaced with
    /// the `66` calling code. No further validation happens, so input without
    /// any digits yields an empty mobile identifier.
    pub fn new(raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() >= NATIONAL_ID_DIGITS {
            return Self {
                kind: AccountType::NationalId,
                digits,
            };
        }

        let digits = match digits.strip_prefix('0') {
            Some(rest) => format!("{COUNTRY_CALLING_CODE}{rest}"),
            None => digits,
        };
        Self {
            kind: AccountType::Mobile,
            digits,
        }
    }

    /// Rebuild an identifier exactly as it was encoded, without normalizing.
    pub fn from_encoded(kind: AccountType, digits: impl Into<String>) -> Self {
        Self {
            kind,
            digits: digits.into(),
        }
    }

    pub fn kind(&self) -> AccountType {
        self.kind
    }

    /// Identifier digits as placed in the payload
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl Display for MerchantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}
