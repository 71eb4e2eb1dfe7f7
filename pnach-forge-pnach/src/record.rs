//! The parsed form of one PNACH document.

use std::borrow::Cow;

use pnach_forge_core::PatchPair;

/// One source line, in original order.
///
/// Comment and patch items refer into [`PatchRecord::comment_lines`] and
/// [`PatchRecord::pairs`] by index so the flat lists stay the single source
/// of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItem {
    /// An empty or whitespace-only line.
    Blank,
    /// A preserved text line.
    Comment(usize),
    /// A recognized patch line.
    Patch {
        /// Index into `pairs`.
        pair: usize,
        /// Text after `//` on the patch line itself.
        hint: Option<String>,
        /// The line was commented out (`// patch=...`).
        disabled: bool,
        /// The `patch=...` text without comment markers or trailing hint.
        code: String,
    },
}

/// Structured content of a PNACH document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchRecord {
    /// Eight uppercase hex digits.
    pub crc: Option<String>,
    /// Canonical serials (`SLUS-21234`), sorted and distinct.
    pub serials: Vec<String>,
    pub title: Option<String>,
    /// Patch pairs in source order.
    pub pairs: Vec<PatchPair>,
    /// Non-patch, non-title lines kept verbatim.
    pub comment_lines: Vec<String>,
    /// Interleaving of blanks, comments and patches.
    pub layout: Vec<LineItem>,
}

impl PatchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding only patch pairs, e.g. from RAW 8x8 input.
    pub fn from_pairs(pairs: Vec<PatchPair>) -> Self {
        let mut record = Self::new();
        for pair in pairs {
            record.push_pair(pair, None);
        }
        record
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_crc(mut self, crc: impl Into<String>) -> Self {
        self.crc = Some(crc.into());
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        let serial = serial.into();
        if !self.serials.contains(&serial) {
            self.serials.push(serial);
            self.serials.sort();
        }
        self
    }

    /// Append a pair with an optional inline hint.
    pub fn push_pair(&mut self, pair: PatchPair, hint: Option<String>) {
        let code = pair.to_patch_line();
        self.push_patch_line(pair, hint, false, code);
    }

    pub(crate) fn push_patch_line(
        &mut self,
        pair: PatchPair,
        hint: Option<String>,
        disabled: bool,
        code: String,
    ) {
        self.layout.push(LineItem::Patch {
            pair: self.pairs.len(),
            hint,
            disabled,
            code,
        });
        self.pairs.push(pair);
    }

    pub fn push_comment(&mut self, line: impl Into<String>) {
        self.layout.push(LineItem::Comment(self.comment_lines.len()));
        self.comment_lines.push(line.into());
    }

    pub fn push_blank(&mut self) {
        self.layout.push(LineItem::Blank);
    }

    /// True when there is neither a CRC nor a serial to key the record on.
    pub fn is_low_confidence(&self) -> bool {
        self.crc.is_none() && self.serials.is_empty()
    }

    /// The interleaved line sequence.
    ///
    /// If `pairs` or `comment_lines` were edited directly and the stored
    /// layout no longer covers them, a layout of all comments followed by
    /// all pairs is synthesized instead.
    pub fn layout(&self) -> Cow<'_, [LineItem]> {
        if self.layout_is_consistent() {
            return Cow::Borrowed(&self.layout);
        }
        let comments = (0..self.comment_lines.len()).map(LineItem::Comment);
        let patches = self.pairs.iter().enumerate().map(|(i, pair)| LineItem::Patch {
            pair: i,
            hint: None,
            disabled: false,
            code: pair.to_patch_line(),
        });
        Cow::Owned(comments.chain(patches).collect())
    }

    fn layout_is_consistent(&self) -> bool {
        let mut patches = 0;
        let mut comments = 0;
        for item in &self.layout {
            match item {
                LineItem::Patch { pair, .. } => {
                    if *pair != patches {
                        return false;
                    }
                    patches += 1;
                }
                LineItem::Comment(i) => {
                    if *i != comments {
                        return false;
                    }
                    comments += 1;
                }
                LineItem::Blank => {}
            }
        }
        patches == self.pairs.len() && comments == self.comment_lines.len()
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
