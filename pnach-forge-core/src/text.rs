//! Byte stream to text decoding.

use crate::error::CoreError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode the raw bytes of a cheat file into text.
///
/// A leading UTF-8 byte order mark is dropped. Anything that is not valid
/// UTF-8 is reported as [`CoreError::Decode`]; the caller decides whether to
/// skip the input or fall back to [`String::from_utf8_lossy`].
pub fn decode_text(bytes: &[u8]) -> Result<String, CoreError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(body.to_vec()).map_err(|e| {
        CoreError::decode(format!(
            "invalid UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

/// Decode bytes, replacing undecodable sequences instead of failing.
///
/// Returns the text and whether any replacement happened.
pub fn decode_text_lossy(bytes: &[u8]) -> (String, bool) {
    match decode_text(bytes) {
        Ok(text) => (text, false),
        Err(_) => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            (String::from_utf8_lossy(body).into_owned(), true)
        }
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
