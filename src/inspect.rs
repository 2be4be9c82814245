//! Human readable dumps of payloads.

use std::error::Error;
use std::fmt::Write;

use emv_qr_core::{Field, Fields};
use promptpay::PaymentInfo;

/// Tags inside a payload that hold nested fields
fn is_template(tag: &str) -> bool {
    matches!(tag.parse::<u8>(), Ok(26..=51 | 62 | 64 | 80..=99))
}

fn tag_name(tag: &str) -> &'static str {
    match tag {
        "00" => "payload format",
        "01" => "point of initiation",
        "29" => "merchant account",
        "53" => "currency",
        "54" => "amount",
        "58" => "country",
        "59" => "merchant name",
        "60" => "merchant city",
        "62" => "additional data",
        "63" => "crc",
        _ => "",
    }
}

fn write_fields(out: &mut String, fields: Fields<'_>, depth: usize) -> Result<(), Box<dyn Error>> {
    for field in fields {
        let Field { tag, value } = field?;
        let indent = "  ".repeat(depth);
        let name = if depth == 0 { tag_name(tag) } else { "" };
        if depth == 0 && is_template(tag) {
            writeln!(out, "{indent}{tag} {name:<20}")?;
            write_fields(out, Fields::new(value), depth + 1)?;
        } else {
            writeln!(out, "{indent}{tag} {name:<20}{value}")?;
        }
    }
    Ok(())
}

/// Render the raw field tree followed by the decoded payment details.
pub fn render(payload: &str) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    write_fields(&mut out, Fields::new(payload), 0)?;

    let info = PaymentInfo::parse(payload)?;
    writeln!(out)?;
    writeln!(out, "account:   {} {}", info.merchant.kind(), info.merchant)?;
    if let Some(poi) = info.point_of_initiation {
        writeln!(out, "method:    {poi}")?;
    }
    match info.amount {
        Some(amount) => writeln!(out, "amount:    {amount}")?,
        None => writeln!(out, "amount:    (entered by payer)")?,
    }
    if let Some(currency) = info.currency {
        writeln!(out, "currency:  {currency}")?;
    }
    if let Some(country) = info.country {
        writeln!(out, "country:   {country}")?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_and_details() {
        let payload = promptpay::generate_payload("0812345678", 150.0).unwrap();
        let out = render(&payload).unwrap();
        assert!(out.contains("29 merchant account"), "{out}");
        assert!(out.contains("  01 "), "{out}");
        assert!(out.contains("66812345678"), "{out}");
        assert!(out.contains("amount:    150.00"), "{out}");
        assert!(out.contains("account:   mobile 66812345678"), "{out}");
    }

    #[test]
    fn fails_on_bad_checksum() {
        let payload = promptpay::generate_payload("0812345678", 0.0).unwrap();
        let broken = format!("{}0000", &payload[..payload.len() - 4]);
        assert!(render(&broken).is_err());
    }
}
