use thiserror::Error;

/// Errors raised by the core text handling.
///
/// Extraction itself never fails; the only hard error is input that cannot
/// be decoded as text in the first place.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The bytes are not valid UTF-8
    #[error("Could not decode text: {0}")]
    Decode(String),

    /// A value that should have been an 8-digit hex string was not
    #[error("Invalid hex value: {0}")]
    InvalidHex(String),
}

impl CoreError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        Self::InvalidHex(msg.into())
    }
}
