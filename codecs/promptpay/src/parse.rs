//! Reading payloads back into their payment details.

use std::fmt::Display;

use emv_qr_core::{verify_checksum, Fields};

use crate::consts::*;
use crate::{AccountType, Amount, Error, MerchantId, Result};

/// Point of initiation method (tag 01)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOfInitiation {
    /// `11`
    Static,
    /// `12`
    Dynamic,
}

impl PointOfInitiation {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "11" => Some(Self::Static),
            "12" => Some(Self::Dynamic),
            _ => None,
        }
    }
}

impl Display for PointOfInitiation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Payment details carried by a PromptPay payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInfo {
    pub merchant: MerchantId,
    pub point_of_initiation: Option<PointOfInitiation>,
    pub currency: Option<String>,
    pub amount: Option<Amount>,
    pub country: Option<String>,
}

impl PaymentInfo {
    /// Verify the checksum of `payload` and decode its fields.
    pub fn parse(payload: &str) -> Result<Self> {
        let body = verify_checksum(payload)?;

        let mut format = None;
        let mut merchant = None;
        let mut info = PaymentInfo {
            merchant: MerchantId::from_encoded(AccountType::Mobile, ""),
            point_of_initiation: None,
            currency: None,
            amount: None,
            country: None,
        };
        for field in Fields::new(body) {
            let field = field?;
            match field.tag {
                TAG_PAYLOAD_FORMAT => format = Some(field.value),
                TAG_POINT_OF_INITIATION => {
                    info.point_of_initiation = PointOfInitiation::from_value(field.value)
                },
                TAG_MERCHANT_ACCOUNT => merchant = Some(parse_merchant(field.fields())?),
                TAG_CURRENCY => info.currency = Some(field.value.to_string()),
                TAG_AMOUNT => info.amount = Some(field.value.parse()?),
                TAG_COUNTRY => info.country = Some(field.value.to_string()),
                _ => {},
            }
        }

        format.ok_or(Error::MissingField("payload format indicator"))?;
        info.merchant = merchant.ok_or(Error::MissingField("merchant account information"))?;
        Ok(info)
    }
}

fn parse_merchant(fields: Fields<'_>) -> Result<MerchantId> {
    let mut application_id = None;
    let mut account = None;
    for field in fields {
        let field = field?;
        if field.tag == TAG_APPLICATION_ID {
            application_id = Some(field.value);
        } else if account.is_none() {
            let kind = AccountType::from_tag(field.tag)
                .ok_or_else(|| Error::UnsupportedAccount(field.tag.to_string()))?;
            account = Some(MerchantId::from_encoded(kind, field.value));
        }
    }

    if application_id != Some(APPLICATION_ID) {
        return Err(Error::NotPromptPay);
    }
    account.ok_or(Error::MissingField("account identifier"))
}

#[cfg(test)]
mod tests {
    use emv_qr_core::tlv::field;
    use emv_qr_core::{append_checksum, CodecError};

    use super::*;
    use crate::generate_payload;

    fn seal(body: &str) -> String {
        let mut payload = body.to_string();
        append_checksum(&mut payload);
        payload
    }

    #[test]
    fn reads_generated_payload() {
        let payload = generate_payload("081-234-5678", 150.0).unwrap();
        let info = PaymentInfo::parse(&payload).unwrap();
        assert_eq!(
            info,
            PaymentInfo {
                merchant: MerchantId::new("0812345678"),
                point_of_initiation: Some(PointOfInitiation::Dynamic),
                currency: Some("764".into()),
                amount: Some(Amount::from_satang(15000)),
                country: Some("TH".into()),
            }
        );
    }

    #[test]
    fn reads_national_id_without_amount() {
        let payload = generate_payload("1234567890123", 0.0).unwrap();
        let info = PaymentInfo::parse(&payload).unwrap();
        assert_eq!(info.merchant.kind(), AccountType::NationalId);
        assert_eq!(info.merchant.as_str(), "1234567890123");
        assert_eq!(info.amount, None);
    }

    #[test]
    fn reads_static_payloads_from_other_encoders() {
        let merchant = format!(
            "{}{}",
            field("00", APPLICATION_ID).unwrap(),
            field("01", "0066812223333").unwrap()
        );
        let body = format!(
            "000201010211{}53037645802TH",
            field("29", &merchant).unwrap()
        );
        let info = PaymentInfo::parse(&seal(&body)).unwrap();
        assert_eq!(info.point_of_initiation, Some(PointOfInitiation::Static));
        assert_eq!(info.merchant.as_str(), "0066812223333");
        assert_eq!(info.merchant.kind(), AccountType::Mobile);
    }

    #[test]
    fn rejects_tampered_payload() {
        let payload = generate_payload("0812345678", 150.0).unwrap();
        let tampered = payload.replace("150.00", "950.00");
        assert!(matches!(
            PaymentInfo::parse(&tampered),
            Err(Error::Codec(CodecError::ChecksumMismatch { .. }))
        ));
    }

    #[test]
    fn rejects_foreign_application_id() {
        let merchant = format!(
            "{}{}",
            field("00", "A000000677010112").unwrap(),
            field("01", "66812345678").unwrap()
        );
        let body = format!("000201010212{}5802TH", field("29", &merchant).unwrap());
        assert_eq!(PaymentInfo::parse(&seal(&body)), Err(Error::NotPromptPay));
    }

    #[test]
    fn rejects_unknown_account_type() {
        let merchant = format!(
            "{}{}",
            field("00", APPLICATION_ID).unwrap(),
            field("03", "004999000288505").unwrap()
        );
        let body = format!("000201010212{}5802TH", field("29", &merchant).unwrap());
        assert_eq!(
            PaymentInfo::parse(&seal(&body)),
            Err(Error::UnsupportedAccount("03".into()))
        );
    }

    #[test]
    fn requires_merchant_account() {
        assert_eq!(
            PaymentInfo::parse(&seal("00020101021253037645802TH")),
            Err(Error::MissingField("merchant account information"))
        );
    }
}
