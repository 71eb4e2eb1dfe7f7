//! Identifier extraction from free-form text.
//!
//! Cheat files, forum posts and scraped tables all mention the same three
//! identifiers in slightly different shapes:
//! ```text
//! gametitle=Ratchet & Clank
//! // serials: SCUS-97199; SCES_50916
//! // CRC: 0x7546A1E0
//! ```
//! The functions here pull them out with fixed grammars. They never fail:
//! absence is reported as an empty list or `None`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Catalog prefixes recognized as PS2-era serials.
pub const SERIAL_PREFIXES: &[&str] = &[
    "SCUS", "SLUS", "SLES", "SCES", "SLPS", "SLPM", "SCPS", "SCAJ", "SLKA", "ULUS", "UCUS", "PBPX",
    "PAPX", "TCUS", "TCES",
];

static SERIAL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)\b({})[-_ ]?(\d{{3,6}})\b", SERIAL_PREFIXES.join("|"));
    Regex::new(&pattern).expect("serial pattern is valid")
});

static SERIAL_EXACT_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)^({})[-_ ]?(\d{{3,6}})$", SERIAL_PREFIXES.join("|"));
    Regex::new(&pattern).expect("serial pattern is valid")
});

static CRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bCRC\s*[:=]\s*(?:0[xX])?([0-9A-Fa-f]{8})\b").expect("CRC pattern is valid")
});

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*gametitle\s*=\s*(.+)$").expect("title pattern is valid"));

/// Identifiers found in one block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    /// Distinct canonical serials, sorted.
    pub serials: Vec<String>,
    /// First labeled CRC, uppercase.
    pub crc: Option<String>,
    /// Value of the first non-empty `gametitle=` line.
    pub title: Option<String>,
}

impl Identifiers {
    /// No CRC and no serial: the caller has nothing reliable to key on.
    pub fn is_low_confidence(&self) -> bool {
        self.crc.is_none() && self.serials.is_empty()
    }
}

/// Run every extractor over `text`.
pub fn extract_identifiers(text: &str) -> Identifiers {
    Identifiers {
        serials: extract_serials(text),
        crc: extract_crc(text),
        title: extract_title(text),
    }
}

/// Find every serial mentioned anywhere in `text`.
///
/// Matching is case-insensitive; results are uppercased with a single
/// hyphen between prefix and digits, deduplicated and sorted.
pub fn extract_serials(text: &str) -> Vec<String> {
    let found: BTreeSet<String> = SERIAL_RE
        .captures_iter(text)
        .map(|caps| canonical_serial(&caps[1], &caps[2]))
        .collect();
    found.into_iter().collect()
}

/// Normalize a single serial string, or `None` if it is not one.
///
/// `slus_21234`, `SLUS 21234` and `SLUS21234` all become `SLUS-21234`.
pub fn normalize_serial(serial: &str) -> Option<String> {
    SERIAL_EXACT_RE
        .captures(serial.trim())
        .map(|caps| canonical_serial(&caps[1], &caps[2]))
}

fn canonical_serial(prefix: &str, digits: &str) -> String {
    format!("{}-{}", prefix.to_ascii_uppercase(), digits)
}

/// Separator-free uppercase form used for fuzzy serial lookups.
pub fn serial_key(serial: &str) -> String {
    serial
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_ascii_uppercase()
}

/// First `CRC:`/`CRC=` labeled checksum in `text`.
///
/// When several appear, the first one in reading order wins, whatever its
/// context.
pub fn extract_crc(text: &str) -> Option<String> {
    CRC_RE
        .captures(text)
        .map(|caps| caps[1].to_ascii_uppercase())
}

/// Title from the first `gametitle=` line carrying a non-empty value.
pub fn extract_title(text: &str) -> Option<String> {
    text.lines().find_map(title_from_line)
}

/// Title carried by a single line, if it is a `gametitle=` line.
pub fn title_from_line(line: &str) -> Option<String> {
    let caps = TITLE_RE.captures(line)?;
    let title = caps[1].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// True if the line is a `gametitle=` key line, even an empty one.
pub fn is_title_line(line: &str) -> bool {
    TITLE_RE.is_match(line)
}

#[cfg(test)]
#[path = "tests/identifiers_tests.rs"]
mod tests;
