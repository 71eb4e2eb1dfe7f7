//! Shared vocabulary for PS2 cheat handling.
//!
//! This crate holds the pieces every other crate agrees on: release regions,
//! normalized patch pairs, identifier extraction (serial, CRC, title) and the
//! code-line normalizer used for text handed over by external collaborators.
//! Everything here is pure and synchronous.

pub mod error;
pub mod hex;
pub mod identifiers;
pub mod normalize;
pub mod region;
pub mod text;

pub use error::CoreError;
pub use hex::{PatchPair, is_hex8, normalize_crc, pad_hex8};
pub use identifiers::{
    Identifiers, extract_crc, extract_identifiers, extract_serials, extract_title, is_title_line,
    normalize_serial, serial_key, title_from_line,
};
pub use normalize::{CollaboratorEntry, normalize_code_lines, parse_codeblock_text};
pub use region::Region;
pub use text::{decode_text, decode_text_lossy};
