//! Best-effort identification of a cheat document.
//!
//! Combines the in-text identifiers with the fallbacks available outside
//! the text: the file name, an emulator logs folder and a title mapping.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use pnach_forge_core::{decode_text_lossy, extract_identifiers};

use crate::emulog::suggest_crc_from_logs;
use crate::filename::parse_cheat_filename;
use crate::mapping::TitleMapping;

/// Where an identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Text,
    Filename,
    EmuLog,
    Mapping,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Filename => "filename",
            Self::EmuLog => "emulator log",
            Self::Mapping => "mapping",
        })
    }
}

/// Optional fallbacks for [`identify_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifyContext<'a> {
    pub mapping: Option<&'a TitleMapping>,
    pub logs_dir: Option<&'a Path>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identification {
    pub serials: Vec<String>,
    pub crc: Option<String>,
    pub crc_origin: Option<Origin>,
    pub title: Option<String>,
    pub title_origin: Option<Origin>,
    /// The input was not valid UTF-8.
    pub lossy: bool,
}

impl Identification {
    pub fn is_low_confidence(&self) -> bool {
        self.crc.is_none() && self.serials.is_empty()
    }
}

/// Identify a document from its text and, optionally, its file name.
///
/// CRC: text, then file name, then emulator logs. Serials: text, then file
/// name. Title: text, then mapping (CRC first, then serials), then file
/// name.
pub fn identify_text(text: &str, file_name: Option<&str>, ctx: IdentifyContext<'_>) -> Identification {
    let found = extract_identifiers(text);
    let from_name = file_name.map(parse_cheat_filename).unwrap_or_default();

    let mut id = Identification {
        serials: found.serials,
        ..Identification::default()
    };

    if let Some(crc) = found.crc {
        id.crc = Some(crc);
        id.crc_origin = Some(Origin::Text);
    } else if let Some(crc) = from_name.crc {
        id.crc = Some(crc);
        id.crc_origin = Some(Origin::Filename);
    } else if let Some(crc) = ctx.logs_dir.and_then(suggest_crc_from_logs) {
        id.crc = Some(crc);
        id.crc_origin = Some(Origin::EmuLog);
    }

    if id.serials.is_empty() {
        id.serials.extend(from_name.serial);
    }

    let mapped = ctx
        .mapping
        .and_then(|m| m.lookup(id.crc.as_deref(), &id.serials))
        .map(str::to_string);
    (id.title, id.title_origin) = match (found.title, mapped, from_name.title) {
        (Some(t), _, _) => (Some(t), Some(Origin::Text)),
        (None, Some(t), _) => (Some(t), Some(Origin::Mapping)),
        (None, None, Some(t)) => (Some(t), Some(Origin::Filename)),
        (None, None, None) => (None, None),
    };

    id
}

/// Read a file and identify it.
pub fn identify_file(path: &Path, ctx: IdentifyContext<'_>) -> std::io::Result<Identification> {
    let bytes = fs::read(path)?;
    let (text, lossy) = decode_text_lossy(&bytes);
    let file_name = path.file_name().and_then(|n| n.to_str());
    let mut id = identify_text(&text, file_name, ctx);
    id.lossy = lossy;
    Ok(id)
}

/// Identify many files; failures are reported per file.
pub fn identify_files(
    paths: &[PathBuf],
    ctx: IdentifyContext<'_>,
) -> Vec<(PathBuf, std::io::Result<Identification>)> {
    paths
        .iter()
        .map(|p| (p.clone(), identify_file(p, ctx)))
        .collect()
}
