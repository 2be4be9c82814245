//! Thai PromptPay QR payload generation and inspection.
//!
//! PromptPay payloads are EMVCo merchant-presented QR payloads carrying a
//! mobile number or national id inside the merchant account information
//! template (tag 29). The payload is plain text, rendering it as a QR image
//! is left to the caller.

pub mod account;
pub mod amount;
mod error;
pub mod parse;
pub mod payload;

pub use account::{AccountType, MerchantId};
pub use amount::Amount;
pub use error::{Error, Result};
pub use parse::{PaymentInfo, PointOfInitiation};
pub use payload::PayloadBuilder;

pub mod consts {
    pub const TAG_PAYLOAD_FORMAT: &str = "00";
    pub const TAG_POINT_OF_INITIATION: &str = "01";
    pub const TAG_MERCHANT_ACCOUNT: &str = "29";
    pub const TAG_CURRENCY: &str = "53";
    pub const TAG_AMOUNT: &str = "54";
    pub const TAG_COUNTRY: &str = "58";
    pub const TAG_CRC: &str = "63";

    /// Application id tag inside the merchant account template
    pub const TAG_APPLICATION_ID: &str = "00";

    pub const PAYLOAD_FORMAT: &str = "01";
    pub const POINT_OF_INITIATION: &str = "12";
    pub const APPLICATION_ID: &str = "A000000677010111";
    /// ISO 4217 numeric code for Thai baht
    pub const CURRENCY_THB: &str = "764";
    pub const COUNTRY_TH: &str = "TH";
}

/// Build the payload for a merchant identifier and an amount in baht.
///
/// An empty identifier yields an empty payload. The amount field is only
/// written for amounts above zero, leaving the payer to enter one otherwise.
/// Amounts too large for the payload, or infinite, are an error.
pub fn generate_payload(identifier: &str, amount: f64) -> Result<String> {
    if identifier.is_empty() {
        return Ok(String::new());
    }
    let merchant = MerchantId::new(identifier);
    let mut builder = PayloadBuilder::new(&merchant);
    if amount > 0.0 {
        builder = builder.amount(Amount::from_baht(amount)?);
    }
    builder.build()
}
