//! Named cheats as they appear in a file's `[Cheats/...]` sections.

use crate::labeler::bracket_header;
use crate::record::{LineItem, PatchRecord};

/// One bracketed section and its active patch lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSection {
    /// Header text without the brackets and `Cheats/` prefix.
    pub name: String,
    /// `patch=` lines, verbatim apart from a stripped `codeN=` prefix.
    pub codes: Vec<String>,
}

/// Collect the cheats a file declares with bracket headers.
///
/// Patch lines before the first header belong to no cheat and
/// commented-out lines are skipped. Sections left without codes are dropped.
pub fn extract_sections(record: &PatchRecord) -> Vec<NamedSection> {
    let mut sections = Vec::new();
    let mut current: Option<NamedSection> = None;

    for item in record.layout().iter() {
        match item {
            LineItem::Comment(i) => {
                let Some(name) = record.comment_lines.get(*i).and_then(|l| bracket_header(l)) else {
                    continue;
                };
                sections.extend(current.take().filter(|s| !s.codes.is_empty()));
                current = Some(NamedSection {
                    name,
                    codes: Vec::new(),
                });
            }
            LineItem::Patch {
                disabled: false,
                code,
                ..
            } => {
                if let Some(section) = current.as_mut() {
                    section.codes.push(code.clone());
                }
            }
            LineItem::Patch { .. } | LineItem::Blank => {}
        }
    }
    sections.extend(current.filter(|s| !s.codes.is_empty()));

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pnach_text;

    #[test]
    fn sections_with_codes() {
        let text = "gametitle=Game
patch=1,EE,00100000,extended,1
[Cheats/Infinite Health]
patch=1,EE,2033A5C0,extended,0000270F // hp
// patch=1,EE,2033A5C4,extended,0000270F

[Empty]
[Max Money]
code0=patch=1,EE,20400000,extended,05F5E0FF
";
        let sections = extract_sections(&parse_pnach_text(text));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Infinite Health");
        assert_eq!(sections[0].codes, vec!["patch=1,EE,2033A5C0,extended,0000270F"]);
        assert_eq!(sections[1].name, "Max Money");
        assert_eq!(sections[1].codes, vec!["patch=1,EE,20400000,extended,05F5E0FF"]);
    }

    #[test]
    fn no_headers_means_no_sections() {
        let record = parse_pnach_text("patch=1,EE,00100000,extended,1\n");
        assert!(extract_sections(&record).is_empty());
    }
}
