//! Local cheats folder scanner.
//!
//! Walks a folder tree for `.pnach` files, parses each one and turns the
//! results into a provisional [`CheatDatabase`] keyed by `(crc, serial)`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use pnach_forge_core::{Region, decode_text, decode_text_lossy};
use pnach_forge_db::{Cheat, CheatDatabase, GameEntry, RegionData};
use pnach_forge_pnach::{extract_sections, parse_pnach_text};

use crate::error::ScanError;
use crate::filename::parse_cheat_filename;
use crate::scan_pool::scan_paths;

/// Extension of cheat files, compared case-insensitively.
pub const CHEAT_EXTENSION: &str = "pnach";

/// Value of `source` in databases built from a scan.
pub const LOCAL_SCAN_SOURCE: &str = "local_scan";

/// The result of scanning one cheat file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub crc: Option<String>,
    pub serial: Option<String>,
    /// In-file title, else the file name's title, else the file stem.
    pub title: String,
    pub region: Region,
    pub cheats: Vec<Cheat>,
    /// The file was not valid UTF-8 and was decoded lossily.
    pub lossy: bool,
}

impl ScannedFile {
    /// Neither a CRC nor a serial was found in the file or its name.
    pub fn is_low_confidence(&self) -> bool {
        self.crc.is_none() && self.serial.is_none()
    }

    /// Grouping key used by [`build_database`]; absent parts are empty.
    pub fn key(&self) -> (String, String) {
        (
            self.crc.clone().unwrap_or_default(),
            self.serial.clone().unwrap_or_default(),
        )
    }
}

/// Build a [`ScannedFile`] from already decoded text.
pub fn scan_text(path: &Path, text: &str) -> ScannedFile {
    let record = parse_pnach_text(text);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let from_name = parse_cheat_filename(file_name);

    let crc = record.crc.clone().or(from_name.crc);
    let serial = record.serials.first().cloned().or(from_name.serial);
    let title = record
        .title
        .clone()
        .or(from_name.title)
        .unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Unknown")
                .to_string()
        });

    let cheats = extract_sections(&record)
        .into_iter()
        .map(|section| Cheat::new(section.name, section.codes))
        .collect();

    ScannedFile {
        path: path.to_path_buf(),
        region: Region::from_serial(serial.as_deref().unwrap_or("")),
        crc,
        serial,
        title,
        cheats,
        lossy: false,
    }
}

/// Read and scan a single file.
///
/// Bytes that are not valid UTF-8 are decoded lossily with a warning rather
/// than failing the file.
pub fn scan_file(path: &Path) -> Result<ScannedFile, ScanError> {
    let bytes = fs::read(path)?;
    let (text, lossy) = match decode_text(&bytes) {
        Ok(text) => (text, false),
        Err(e) => {
            log::warn!("{}: {}, decoding lossily", path.display(), e);
            decode_text_lossy(&bytes)
        }
    };
    let mut scanned = scan_text(path, &text);
    scanned.lossy = lossy;
    if scanned.is_low_confidence() {
        log::debug!("{}: no CRC or serial found", path.display());
    }
    Ok(scanned)
}

/// Recursively list cheat files under `root`, sorted by path.
pub fn find_cheat_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    let mut files = Vec::new();
    collect_cheat_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_cheat_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.flatten().collect();
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            if let Err(e) = collect_cheat_files(&path, files) {
                log::warn!("Skipping {}: {}", path.display(), e);
            }
        } else if has_cheat_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_cheat_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(CHEAT_EXTENSION))
}

/// Scan every cheat file under `root` on the current thread.
///
/// Unreadable files are logged and skipped. A missing root is an error;
/// a root without cheat files is an empty result.
pub fn scan_folder(root: &Path) -> Result<Vec<ScannedFile>, ScanError> {
    let files = find_cheat_files(root)?;
    log::info!("Found {} PNACH files in {}", files.len(), root.display());

    Ok(files
        .iter()
        .filter_map(|path| match scan_file(path) {
            Ok(scanned) => Some(scanned),
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect())
}

/// Scan every cheat file under `root` with `workers` concurrent tasks.
///
/// Each file is parsed on the blocking thread pool (see
/// [`scan_paths`](crate::scan_pool::scan_paths)). Results are gathered once
/// all workers finish and returned sorted by path, so the output is
/// identical to [`scan_folder`].
pub async fn scan_folder_parallel(
    root: &Path,
    workers: usize,
) -> Result<Vec<ScannedFile>, ScanError> {
    let files = find_cheat_files(root)?;
    let total = files.len();
    log::info!("Found {} PNACH files in {}", total, root.display());

    let mut scanned = Vec::with_capacity(total);
    for (path, result) in scan_paths(files, workers).await {
        match result {
            Ok(file) => scanned.push(file),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    scanned.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(scanned)
}

/// Aggregate scan results into a provisional database.
///
/// Files without cheats are left out. Files sharing a `(crc, serial)` key
/// have their cheats concatenated in scan order without deduplication; a
/// file whose serial maps to another region gets its own region bucket in
/// the same entry. The entry title comes from the first file of each key.
pub fn build_database(files: &[ScannedFile]) -> CheatDatabase {
    let mut games: Vec<GameEntry> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for file in files.iter().filter(|f| !f.cheats.is_empty()) {
        let slot = *index.entry(file.key()).or_insert_with(|| {
            games.push(GameEntry::new(file.title.clone()));
            games.len() - 1
        });
        let bucket = games[slot]
            .regions
            .entry(file.region)
            .or_insert_with(|| RegionData {
                serial: file.serial.clone().unwrap_or_default(),
                crc: file.crc.clone().unwrap_or_default(),
                cheats: Vec::new(),
            });
        bucket.cheats.extend(file.cheats.iter().cloned());
    }

    let mut db = CheatDatabase::new(games);
    db.source = Some(LOCAL_SCAN_SOURCE.to_string());
    db.total_files = Some(files.len());
    db.refresh_totals();
    db
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
