//! Code-line normalization for text produced outside the parser.
//!
//! Scrapers and pasted snippets deliver codes in many shapes: `ADDR VALUE`,
//! `ADDR:VALUE`, comma separated, several pairs on one line, or complete
//! `patch=` lines. This module reduces them to two canonical forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::hex::pad_hex8;

static HEX8_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9A-Fa-f]{8}\b").expect("hex token pattern is valid"));

/// Normalize raw code lines.
///
/// Each output string is either a `patch=` line kept verbatim (trimmed) or
/// an `ADDR VALUE` pair with both sides uppercase and zero-padded to eight
/// digits. Lines that contain neither shape are dropped.
///
/// Pair detection runs in two passes per line:
/// 1. the first two tokens (split on whitespace, `:` or `,`) are 1-8 digit
///    hex, giving one pair;
/// 2. otherwise every standalone eight-digit hex token is collected and
///    consecutive tokens are paired; an odd trailing token is discarded.
pub fn normalize_code_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        let s = line.as_ref().trim();
        if s.is_empty() {
            continue;
        }
        if s.to_ascii_lowercase().starts_with("patch=") {
            out.push(s.to_string());
            continue;
        }

        let spaced = s.replace([':', '\t', ','], " ");
        let parts: Vec<&str> = spaced.split_whitespace().collect();
        if parts.len() >= 2 {
            if let (Some(addr), Some(value)) = (pad_hex8(parts[0]), pad_hex8(parts[1])) {
                out.push(format!("{addr} {value}"));
                continue;
            }
        }

        let tokens: Vec<String> = HEX8_TOKEN_RE
            .find_iter(s)
            .map(|m| m.as_str().to_ascii_uppercase())
            .collect();
        for chunk in tokens.chunks_exact(2) {
            out.push(format!("{} {}", chunk[0], chunk[1]));
        }
    }
    out
}

/// Split a pasted block into lines and normalize them.
pub fn parse_codeblock_text(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    normalize_code_lines(&lines)
}

/// One cheat candidate handed over by a scraper or the GUI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorEntry {
    /// Where it came from (site name, "github", "local", ...).
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CollaboratorEntry {
    /// The entry's codes in canonical form.
    pub fn normalized_codes(&self) -> Vec<String> {
        normalize_code_lines(&self.codes)
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
