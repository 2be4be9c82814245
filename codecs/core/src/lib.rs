//! Primitives for EMVCo merchant-presented QR payloads.
//!
//! This crate provides the scheme independent pieces shared by QR payment
//! payloads, including:
//! - Tag-length-value field encoding and decoding
//! - CRC-16/CCITT-FALSE checksums
//! - The trailing crc field (tag 63)
//!
//! ## Payload Overview
//!
//! A payload is a flat string of TLV fields. Templates such as merchant
//! account information nest further TLV fields inside a value. The final
//! field is always `6304` followed by 4 hex digits of crc.

pub mod checksum;
pub mod crc;
mod error;
pub mod tlv;

pub use checksum::*;
pub use crc::*;
pub use error::{CodecError, Result};
pub use tlv::{Field, Fields};
