use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_core::{CollaboratorEntry, parse_codeblock_text};

use super::read_text;
use crate::CliError;

/// Entry point for `codes`.
///
/// A `.json` input is read as a list of collaborator entries and each
/// entry's codes are printed under its title; anything else is treated as
/// a pasted code block.
pub(crate) fn run_codes(input: &Path) -> Result<(), CliError> {
    let text = read_text(input)?;

    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        let codes = parse_codeblock_text(&text);
        if codes.is_empty() {
            log::warn!("No code lines found in {}", input.display());
        }
        for code in codes {
            println!("{code}");
        }
        return Ok(());
    }

    let entries: Vec<CollaboratorEntry> = serde_json::from_str(&text)
        .map_err(|e| CliError::input(format!("Invalid entries in {}: {}", input.display(), e)))?;
    for entry in &entries {
        let codes = entry.normalized_codes();
        log::info!(
            "{} {}",
            entry.title.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}, {} code(s)]", entry.source, codes.len())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        for code in codes {
            log::info!("  {}", code);
        }
    }
    Ok(())
}
