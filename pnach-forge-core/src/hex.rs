//! Hex normalization for addresses, values and CRCs.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// True if `s` is exactly eight hex digits (either case).
pub fn is_hex8(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Uppercase and left-pad a 1-8 digit hex string to eight digits.
///
/// Returns `None` for empty strings, non-hex characters or more than eight
/// digits. Already-normalized input comes back unchanged.
pub fn pad_hex8(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() || s.len() > 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("{:0>8}", s.to_ascii_uppercase()))
}

/// Normalize a CRC string: trimmed, optional `0x` removed, uppercase.
///
/// Only exact eight-digit values are accepted; shorter values are not padded
/// here because a short CRC in free text is more likely noise than a CRC.
pub fn normalize_crc(crc: &str) -> Option<String> {
    let crc = crc.trim();
    let crc = crc
        .strip_prefix("0x")
        .or_else(|| crc.strip_prefix("0X"))
        .unwrap_or(crc);
    if is_hex8(crc) {
        Some(crc.to_ascii_uppercase())
    } else {
        None
    }
}

/// A single memory patch: eight-digit uppercase address and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchPair {
    pub address: String,
    pub value: String,
}

impl PatchPair {
    /// Build a pair from loosely formatted hex, normalizing both sides.
    ///
    /// The address must already be eight digits; the value may be shorter and
    /// is zero-padded.
    pub fn new(address: &str, value: &str) -> Result<Self, CoreError> {
        let address = address.trim();
        if !is_hex8(address) {
            return Err(CoreError::invalid_hex(format!("address '{address}'")));
        }
        let value = pad_hex8(value).ok_or_else(|| CoreError::invalid_hex(format!("value '{value}'")))?;
        Ok(Self {
            address: address.to_ascii_uppercase(),
            value,
        })
    }

    /// `ADDR VALUE`, the RAW 8x8 form.
    pub fn to_raw_line(&self) -> String {
        format!("{} {}", self.address, self.value)
    }

    /// Canonical PNACH patch line. The size keyword is always `extended`.
    pub fn to_patch_line(&self) -> String {
        format!("patch=1,EE,{},extended,{}", self.address, self.value)
    }

    /// Last six digits of address and value, used for synthesized labels.
    pub fn short_form(&self) -> (&str, &str) {
        (last_six(&self.address), last_six(&self.value))
    }
}

// Fields are public, so shorter or non-ASCII text has to be tolerated.
fn last_six(s: &str) -> &str {
    s.get(s.len().saturating_sub(6)..).unwrap_or(s)
}

impl std::fmt::Display for PatchPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.address, self.value)
    }
}

#[cfg(test)]
#[path = "tests/hex_tests.rs"]
mod tests;
