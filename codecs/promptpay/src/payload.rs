//! Payload assembly.
//!
//! Field order is fixed: payload format, point of initiation, merchant
//! account, currency, amount (optional), country, crc.

use emv_qr_core::append_checksum;
use emv_qr_core::tlv::{field, write_field};

use crate::consts::*;
use crate::{Amount, MerchantId, Result};

/// Builder for a single PromptPay payload
#[derive(Debug, Clone)]
pub struct PayloadBuilder<'a> {
    merchant: &'a MerchantId,
    amount: Option<Amount>,
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(merchant: &'a MerchantId) -> Self {
        Self {
            merchant,
            amount: None,
        }
    }

    /// Fix the amount to be paid. Unlike [`crate::generate_payload`], a zero
    /// amount set here is still written to the payload.
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Merchant account information template (tag 29) value
    fn merchant_account(&self) -> Result<String> {
        let mut inner = field(TAG_APPLICATION_ID, APPLICATION_ID)?;
        write_field(
            &mut inner,
            self.merchant.kind().tag(),
            self.merchant.as_str(),
        )?;
        Ok(inner)
    }

    pub fn build(&self) -> Result<String> {
        let mut payload = String::with_capacity(96);
        write_field(&mut payload, TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT)?;
        write_field(&mut payload, TAG_POINT_OF_INITIATION, POINT_OF_INITIATION)?;
        write_field(&mut payload, TAG_MERCHANT_ACCOUNT, &self.merchant_account()?)?;
        write_field(&mut payload, TAG_CURRENCY, CURRENCY_THB)?;
        if let Some(amount) = self.amount {
            write_field(&mut payload, TAG_AMOUNT, &amount.to_string())?;
        }
        write_field(&mut payload, TAG_COUNTRY, COUNTRY_TH)?;
        append_checksum(&mut payload);
        Ok(payload)
    }
}
