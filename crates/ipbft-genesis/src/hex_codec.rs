//! Field-level hex codecs.
//!
//! Quantities (256-bit amounts and 64-bit counters) use the `0x` quantity
//! convention: mandatory prefix, at least one digit, no leading zeros,
//! case-insensitive digits. Output is always lowercase and minimal.
//!
//! Key material is plain hex of the raw bytes; the `0x` prefix is optional.

use std::fmt;

use ipbft_core::Amount;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MAX_UINT64_DIGITS: usize = 16;
const MAX_BIG_DIGITS: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("empty hex string")]
    Empty,
    #[error("hex string without 0x prefix")]
    MissingPrefix,
    #[error("hex string \"0x\"")]
    EmptyNumber,
    #[error("hex number with leading zero digits")]
    LeadingZero,
    #[error("invalid hex string")]
    InvalidDigit,
    #[error("hex number > 64 bits")]
    Uint64Range,
    #[error("hex number > 256 bits")]
    BigRange,
}

fn strip_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Validate the digits of a quantity and return them without the prefix.
fn quantity_digits(s: &str, max_digits: usize, too_long: HexError) -> Result<&str, HexError> {
    if s.is_empty() {
        return Err(HexError::Empty);
    }
    let digits = strip_prefix(s).ok_or(HexError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(HexError::EmptyNumber);
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(HexError::LeadingZero);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit);
    }
    if digits.len() > max_digits {
        return Err(too_long);
    }
    Ok(digits)
}

// ── Amounts ──────────────────────────────────────────────────────────────────

pub fn encode_big(value: &Amount) -> String {
    format!("0x{value:x}")
}

pub fn decode_big(s: &str) -> Result<Amount, HexError> {
    let digits = quantity_digits(s, MAX_BIG_DIGITS, HexError::BigRange)?;
    let bytes = decode_even(digits)?;
    Ok(Amount::from_big_endian(&bytes))
}

// ── Counters ─────────────────────────────────────────────────────────────────

pub fn encode_uint64(value: u64) -> String {
    format!("0x{value:x}")
}

pub fn decode_uint64(s: &str) -> Result<u64, HexError> {
    let digits = quantity_digits(s, MAX_UINT64_DIGITS, HexError::Uint64Range)?;
    u64::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit)
}

// ── Key material ─────────────────────────────────────────────────────────────

pub fn encode_key(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode raw key bytes. The `0x` prefix is optional and an odd number of
/// digits is padded with a leading zero.
pub fn decode_key(s: &str) -> Result<Vec<u8>, HexError> {
    if s.is_empty() {
        return Err(HexError::Empty);
    }
    decode_even(strip_prefix(s).unwrap_or(s))
}

fn decode_even(digits: &str) -> Result<Vec<u8>, HexError> {
    let res = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    res.map_err(|_| HexError::InvalidDigit)
}

// ── Serde newtypes ───────────────────────────────────────────────────────────

/// An [`Amount`] carried as a `0x` hex quantity string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexBig(pub Amount);

/// A `u64` carried as a `0x` hex quantity string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexUint64(pub u64);

impl Serialize for HexBig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_big(&self.0))
    }
}

impl Serialize for HexUint64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_uint64(self.0))
    }
}

struct QuantityVisitor<T> {
    expecting: &'static str,
    decode: fn(&str) -> Result<T, HexError>,
}

impl<'de, T> Visitor<'de> for QuantityVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        (self.decode)(v).map_err(|e| E::custom(format_args!("{e}: {v:?}")))
    }
}

impl<'de> Deserialize<'de> for HexBig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_str(QuantityVisitor {
                expecting: "a 0x-prefixed hex quantity of at most 256 bits",
                decode: decode_big,
            })
            .map(HexBig)
    }
}

impl<'de> Deserialize<'de> for HexUint64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_str(QuantityVisitor {
                expecting: "a 0x-prefixed hex quantity of at most 64 bits",
                decode: decode_uint64,
            })
            .map(HexUint64)
    }
}
