//! PNACH and RAW 8x8 text parsers.
//!
//! Both parsers degrade line by line: a line that does not fit the grammar
//! is kept as a comment (PNACH) or reported as rejected (RAW), never an
//! error for the whole input.

use once_cell::sync::Lazy;
use regex::Regex;

use pnach_forge_core::{PatchPair, extract_crc, extract_serials, extract_title, is_title_line};

use crate::record::PatchRecord;

static PATCH_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*patch\s*=\s*\d+\s*,\s*EE\s*,\s*([0-9A-F]{8})\s*,\s*(extended|word|short|byte)\s*,\s*([0-9A-F]{1,8})\b(.*)$",
    )
    .expect("patch line pattern is valid")
});

static CODE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^code\d+\s*=\s*").expect("code prefix pattern is valid"));

/// Parse the full text of a cheat file.
///
/// The title comes from the first `gametitle=` line, serials and CRC from
/// the identifier extractor run over the whole text. Every other line is
/// either a patch pair (comment markers in front of it are ignored for
/// matching), a blank, or a comment kept verbatim.
pub fn parse_pnach_text(text: &str) -> PatchRecord {
    let mut record = PatchRecord {
        title: extract_title(text),
        serials: extract_serials(text),
        crc: extract_crc(text),
        ..PatchRecord::default()
    };

    for line in text.lines() {
        if let Some(patch) = match_patch_line(line) {
            record.push_patch_line(patch.pair, patch.hint, patch.disabled, patch.code);
        } else if line.trim().is_empty() {
            record.push_blank();
        } else if is_title_line(line) {
            continue;
        } else {
            record.push_comment(line.trim_end());
        }
    }

    log::debug!(
        "Parsed PNACH: {} pairs, {} comment lines, {} serials, crc {:?}",
        record.pairs.len(),
        record.comment_lines.len(),
        record.serials.len(),
        record.crc,
    );

    record
}

struct PatchLine {
    pair: PatchPair,
    hint: Option<String>,
    disabled: bool,
    code: String,
}

fn match_patch_line(line: &str) -> Option<PatchLine> {
    let trimmed = line.trim_start();
    let unmarked =
        trimmed.trim_start_matches(|c: char| matches!(c, '/' | '#' | ';') || c.is_whitespace());
    let disabled = unmarked.len() != trimmed.len();
    let body = match CODE_PREFIX_RE.find(unmarked) {
        Some(m) => &unmarked[m.end()..],
        None => unmarked,
    };

    let caps = PATCH_LINE_RE.captures(body)?;
    let pair = PatchPair::new(&caps[1], &caps[3]).ok()?;

    let tail = &caps[4];
    let hint = tail
        .trim()
        .strip_prefix("//")
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    let code_end = caps.get(4).map_or(body.len(), |m| m.start());
    let code = body[..code_end].trim().to_string();

    Some(PatchLine {
        pair,
        hint,
        disabled,
        code,
    })
}

/// A candidate line the RAW parser could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line_no: usize,
    pub text: String,
}

impl std::fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}: {}", self.line_no, self.text)
    }
}

/// Result of a RAW 8x8 parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParse {
    pub pairs: Vec<PatchPair>,
    /// Non-blank, non-comment lines that did not hold a pair.
    pub rejected: Vec<RejectedLine>,
}

/// Parse `ADDR VALUE` style text, ignoring anything that is not a pair.
pub fn parse_raw_8x8(text: &str) -> Vec<PatchPair> {
    parse_raw_8x8_with_diagnostics(text).pairs
}

/// Parse RAW 8x8 text and keep the lines that failed.
///
/// Tokens may be separated by whitespace, `,` or `=`. The first token must
/// be exactly eight hex digits and the second one to eight; the value is
/// zero-padded. Blank lines and lines starting with `#`, `//` or `;` are
/// skipped silently.
pub fn parse_raw_8x8_with_diagnostics(text: &str) -> RawParse {
    let mut result = RawParse::default();
    for (i, line) in text.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') || s.starts_with("//") || s.starts_with(';') {
            continue;
        }
        let spaced = s.replace([',', '=', '\t'], " ");
        let parts: Vec<&str> = spaced.split_whitespace().collect();
        let pair = match parts.as_slice() {
            [addr, value, ..] => PatchPair::new(addr, value).ok(),
            _ => None,
        };
        match pair {
            Some(pair) => result.pairs.push(pair),
            None => result.rejected.push(RejectedLine {
                line_no: i + 1,
                text: line.to_string(),
            }),
        }
    }
    result
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
