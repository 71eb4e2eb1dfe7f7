//! Identifiers encoded in cheat file names.
//!
//! Collections name their files in one of three ways:
//! ```text
//! 0001171A - Some Title SLUS-20563.pnach
//! SLUS-20563_0001171A.pnach
//! 0001171A.pnach
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use pnach_forge_core::{normalize_serial, pad_hex8};

static CRC_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{4,8})\s*-\s*(.+)$").expect("crc-title pattern is valid")
});

static TRAILING_SERIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)[\s\[(]*\b([A-Za-z]{4})[-_ ]?(\d{3})\.?(\d{2,3})[\])]?\s*$")
        .expect("trailing serial pattern is valid")
});

static SERIAL_CRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{4})[-_ ]?(\d{3})\.?(\d{2,3})_([0-9A-Fa-f]{8})$")
        .expect("serial-crc pattern is valid")
});

static BARE_CRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9A-Fa-f]{8})$").expect("bare crc pattern is valid"));

/// What a file name says about its game. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameInfo {
    /// Eight uppercase hex digits, zero-padded from shorter names.
    pub crc: Option<String>,
    /// Canonical serial (`SLUS-20563`).
    pub serial: Option<String>,
    pub title: Option<String>,
}

/// Parse a cheat file name (with or without extension).
pub fn parse_cheat_filename(name: &str) -> FilenameInfo {
    let stem = strip_extension(name.trim());

    if let Some(caps) = SERIAL_CRC_RE.captures(stem) {
        return FilenameInfo {
            crc: pad_hex8(&caps[4]),
            serial: normalize_serial(&format!("{}-{}{}", &caps[1], &caps[2], &caps[3])),
            title: None,
        };
    }

    if let Some(caps) = BARE_CRC_RE.captures(stem) {
        return FilenameInfo {
            crc: pad_hex8(&caps[1]),
            ..FilenameInfo::default()
        };
    }

    let Some(caps) = CRC_TITLE_RE.captures(stem) else {
        return FilenameInfo::default();
    };
    let crc = pad_hex8(&caps[1]);
    let rest = caps[2].trim();

    let (title, serial) = match TRAILING_SERIAL_RE.captures(rest) {
        Some(sc) => {
            let serial = normalize_serial(&format!("{}-{}{}", &sc[2], &sc[3], &sc[4]));
            match serial {
                Some(serial) => (sc[1].to_string(), Some(serial)),
                None => (rest.to_string(), None),
            }
        }
        None => (rest.to_string(), None),
    };
    let title = title.trim().trim_end_matches(['-', '_']).trim().to_string();

    FilenameInfo {
        crc,
        serial,
        title: Some(title).filter(|t| !t.is_empty()),
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("pnach") => stem,
        _ => name,
    }
}

#[cfg(test)]
#[path = "tests/filename_tests.rs"]
mod tests;
