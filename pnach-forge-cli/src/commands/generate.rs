use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pnach_forge_core::{normalize_crc, normalize_serial};
use pnach_forge_lib::{Identification, IdentifyContext, identify_text};
use pnach_forge_pnach::{
    PatchRecord, RejectedLine, generate_pnach, parse_pnach_text, parse_raw_8x8_with_diagnostics,
};

use super::{load_mapping, logs_dir, read_text, write_or_print};
use crate::CliError;
use crate::cli_types::{IdentifyArgs, InputMode};

/// Rejected RAW lines shown before the rest are summarized.
const MAX_REJECTED_SHOWN: usize = 6;

/// Entry point for `generate`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_generate(
    input: &Path,
    mode: InputMode,
    title: Option<String>,
    serials: Vec<String>,
    crc: Option<String>,
    identify: &IdentifyArgs,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let text = read_text(input)?;

    let mut record = match resolve_mode(mode, &text) {
        InputMode::Raw => {
            let parsed = parse_raw_8x8_with_diagnostics(&text);
            report_rejected(&parsed.rejected);
            PatchRecord::from_pairs(parsed.pairs)
        }
        _ => parse_pnach_text(&text),
    };
    if record.pairs.is_empty() {
        return Err(CliError::input(format!(
            "No codes found in {}",
            input.display()
        )));
    }

    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        record.title = Some(title.trim().to_string());
    }
    for serial in &serials {
        let serial = normalize_serial(serial)
            .ok_or_else(|| CliError::input(format!("'{}' is not a PS2 serial", serial)))?;
        record = record.with_serial(serial);
    }
    if let Some(crc) = crc {
        let crc = normalize_crc(&crc)
            .ok_or_else(|| CliError::input(format!("'{}' is not an 8-digit hex CRC", crc)))?;
        record.crc = Some(crc);
    }

    let mapping = load_mapping(identify.mapping.as_deref())?;
    let logs = logs_dir(identify);
    let ctx = IdentifyContext {
        mapping: mapping.as_ref(),
        logs_dir: logs.as_deref(),
    };
    let file_name = input.file_name().and_then(|n| n.to_str());
    fill_missing(&mut record, identify_text(&text, file_name, ctx));

    if record.is_low_confidence() {
        log::warn!("No CRC or serial found; pass --crc or --serial to key the file");
    }

    write_or_print(&generate_pnach(&record), output.as_deref())
}

fn resolve_mode(mode: InputMode, text: &str) -> InputMode {
    match mode {
        InputMode::Auto if looks_like_pnach(text) => InputMode::Pnach,
        InputMode::Auto => InputMode::Raw,
        explicit => explicit,
    }
}

fn looks_like_pnach(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim_start().to_ascii_lowercase();
        line.starts_with("patch=")
            || line.starts_with("gametitle=")
            || (line.starts_with("code") && line.contains("=patch="))
    })
}

/// Take identifiers the record does not carry yet.
fn fill_missing(record: &mut PatchRecord, id: Identification) {
    if record.crc.is_none() {
        if let (Some(crc), Some(origin)) = (id.crc, id.crc_origin) {
            log::info!("CRC {} (from {})", crc, origin);
            record.crc = Some(crc);
        }
    }
    if record.serials.is_empty() {
        for serial in id.serials {
            *record = std::mem::take(record).with_serial(serial);
        }
    }
    if record.title.is_none() {
        if let (Some(title), Some(origin)) = (id.title, id.title_origin) {
            log::info!("Title \"{}\" (from {})", title, origin);
            record.title = Some(title);
        }
    }
}

fn report_rejected(rejected: &[RejectedLine]) {
    if rejected.is_empty() {
        return;
    }
    log::warn!(
        "{} line(s) were not valid 8x8 pairs:",
        rejected.len().if_supports_color(Stderr, |t| t.bold())
    );
    for line in rejected.iter().take(MAX_REJECTED_SHOWN) {
        log::warn!("  {}", line);
    }
    if rejected.len() > MAX_REJECTED_SHOWN {
        log::warn!("  ... and {} more", rejected.len() - MAX_REJECTED_SHOWN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_mode_detects_pnach() {
        assert_eq!(
            resolve_mode(InputMode::Auto, "gametitle=Game\npatch=1,EE,00100000,extended,1\n"),
            InputMode::Pnach
        );
        assert_eq!(resolve_mode(InputMode::Auto, "00100000 00000001\n"), InputMode::Raw);
        assert_eq!(resolve_mode(InputMode::Raw, "patch=1,EE,0,extended,1"), InputMode::Raw);
    }

    #[test]
    fn fill_missing_keeps_explicit_values() {
        let mut record = PatchRecord::new().with_title("Given").with_serial("SLUS-21234");
        let id = Identification {
            serials: vec!["SLES-50001".to_string()],
            crc: Some("DEADBEEF".to_string()),
            crc_origin: Some(pnach_forge_lib::Origin::Filename),
            title: Some("From Name".to_string()),
            title_origin: Some(pnach_forge_lib::Origin::Filename),
            lossy: false,
        };
        fill_missing(&mut record, id);
        assert_eq!(record.title.as_deref(), Some("Given"));
        assert_eq!(record.serials, vec!["SLUS-21234"]);
        assert_eq!(record.crc.as_deref(), Some("DEADBEEF"));
    }
}
