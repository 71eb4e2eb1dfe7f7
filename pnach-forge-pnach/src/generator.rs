//! Canonical PNACH output.

use crate::labeler::{CheatGroup, bracket_header, is_metadata_comment, label_groups};
use crate::record::PatchRecord;

/// Trailing comment identifying generated files.
pub const GENERATOR_SIGNATURE: &str = "// Generated by pnach-forge";

/// Label the record's pairs and render the result.
pub fn generate_pnach(record: &PatchRecord) -> String {
    let groups = label_groups(record);
    render_pnach(record, &groups)
}

/// Render a record with already labeled groups.
///
/// Line order: `gametitle=`, `// serials:`, `// CRC:`, preserved comment
/// lines, one `[Cheats/<label>]` section per group separated by blank
/// lines, then [`GENERATOR_SIGNATURE`]. Lines the generator writes itself
/// are not copied from the record's comments, nor are bare section headers,
/// so rendering a parsed generated file reproduces it.
pub fn render_pnach(record: &PatchRecord, groups: &[CheatGroup]) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(title) = record.title.as_deref().filter(|t| !t.trim().is_empty()) {
        out.push(format!("gametitle={}", title.trim()));
    }
    if !record.serials.is_empty() {
        out.push(format!("// serials: {}", record.serials.join("; ")));
    }
    if let Some(crc) = record.crc.as_deref().filter(|c| !c.is_empty()) {
        out.push(format!("// CRC: 0x{}", crc.to_ascii_uppercase()));
    }

    out.extend(
        record
            .comment_lines
            .iter()
            .filter(|line| is_preserved_comment(line))
            .map(|line| line.trim_end().to_string()),
    );

    for group in groups.iter().filter(|g| !g.pairs.is_empty()) {
        out.push(String::new());
        out.push(format!("[Cheats/{}]", group.label));
        out.extend(group.pairs.iter().map(|pair| pair.to_patch_line()));
    }

    out.push(String::new());
    out.push(GENERATOR_SIGNATURE.to_string());

    // Leading blanks appear when there is no header block at all.
    let body = out.join("\n");
    format!("{}\n", body.trim_matches('\n'))
}

fn is_preserved_comment(line: &str) -> bool {
    if line.trim().is_empty() || is_metadata_comment(line) {
        return false;
    }
    match bracket_header(line) {
        // Keep bracket lines that carry extra text after the `]`.
        Some(_) => line.trim().find(']').is_some_and(|end| end + 1 < line.trim().len()),
        None => true,
    }
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
