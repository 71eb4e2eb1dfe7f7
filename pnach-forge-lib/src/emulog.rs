//! CRC discovery from emulator log files.
//!
//! The emulator writes a `CRC = 0x1234ABCD` line when it boots a game, so
//! its logs are a fallback when a cheat file carries no CRC.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use once_cell::sync::Lazy;
use regex::Regex;

use pnach_forge_core::decode_text_lossy;

static LOG_CRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CRC\s*=\s*0x([0-9A-Fa-f]{8})").expect("log CRC pattern is valid"));

/// Name of the main emulator log.
pub const EMU_LOG_NAME: &str = "emuLog.txt";

/// First `CRC = 0x...` value in a log, uppercase.
pub fn find_crc_in_log(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| LOG_CRC_RE.captures(line))
        .map(|caps| caps[1].to_ascii_uppercase())
}

fn scan_log_file(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    find_crc_in_log(&decode_text_lossy(&bytes).0)
}

/// Suggest a CRC from a logs directory.
///
/// `emuLog.txt` is read first; if it has no CRC, the other `.txt` files
/// are tried from newest to oldest. Unreadable files are ignored.
pub fn suggest_crc_from_logs(logs_dir: &Path) -> Option<String> {
    if !logs_dir.is_dir() {
        return None;
    }

    let main_log = logs_dir.join(EMU_LOG_NAME);
    if let Some(crc) = scan_log_file(&main_log) {
        log::debug!("CRC {crc} found in {}", main_log.display());
        return Some(crc);
    }

    let mut candidates: Vec<(SystemTime, PathBuf)> = fs::read_dir(logs_dir)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && *p != main_log)
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        })
        .map(|p| {
            let modified = fs::metadata(&p)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, p)
        })
        .collect();
    candidates.sort_by(|a, b| b.cmp(a));

    candidates.iter().find_map(|(_, path)| {
        let crc = scan_log_file(path)?;
        log::debug!("CRC {crc} found in {}", path.display());
        Some(crc)
    })
}
