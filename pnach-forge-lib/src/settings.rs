//! Shared settings file (`~/.config/pnach-forge/settings.toml`).
//!
//! ```toml
//! [paths]
//! cheats_dir = "/games/ps2/cheats"
//! database = "/games/ps2/ps2_cheats_database.json"
//! logs_dir = "/home/me/.config/PCSX2/logs"
//!
//! [scan]
//! workers = 8
//! ```
//!
//! Updates go through `toml::Value` so keys this crate does not know about
//! are preserved, and the file is replaced atomically.

use std::io;
use std::path::{Path, PathBuf};

/// Default cheats folder when neither a flag nor the settings name one.
pub const DEFAULT_CHEATS_DIR: &str = "./PS2 Cheats";
/// Default database file.
pub const DEFAULT_DATABASE: &str = "ps2_cheats_database.json";
/// Default merge output file.
pub const DEFAULT_MERGED_DATABASE: &str = "ps2_cheats_database_merged.json";

/// Keys accepted by [`set_value`] and [`unset_value`].
pub const KNOWN_KEYS: &[&str] = &["paths.cheats_dir", "paths.database", "paths.logs_dir", "scan.workers"];

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pnach-forge").join("settings.toml")
}

fn load_document(path: &Path) -> toml::Value {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.parse().ok())
        .unwrap_or_else(|| toml::Value::Table(Default::default()))
}

fn split_key(key: &str) -> io::Result<(&str, &str)> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown setting '{key}' (known: {})", KNOWN_KEYS.join(", ")),
        ));
    }
    key.split_once('.')
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "setting key needs a section"))
}

/// Read a dotted key (`paths.database`) from a settings file.
pub fn get_value_in(path: &Path, key: &str) -> Option<toml::Value> {
    let (section, name) = key.split_once('.')?;
    load_document(path).get(section)?.get(name).cloned()
}

fn get_path_in(path: &Path, key: &str) -> Option<PathBuf> {
    match get_value_in(path, key)? {
        toml::Value::String(s) if !s.is_empty() => Some(PathBuf::from(s)),
        _ => None,
    }
}

/// Set a known key in a settings file. `scan.workers` must be a positive
/// integer; path keys are stored as strings.
pub fn set_value_in(path: &Path, key: &str, value: &str) -> io::Result<()> {
    let (section, name) = split_key(key)?;
    let value = if key == "scan.workers" {
        let workers: i64 = value
            .trim()
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "scan.workers must be a positive integer")
            })?;
        toml::Value::Integer(workers)
    } else {
        toml::Value::String(value.to_string())
    };

    update_document(path, |doc| {
        let table = doc
            .as_table_mut()
            .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
        let section_value = table
            .entry(section)
            .or_insert_with(|| toml::Value::Table(Default::default()));
        let section_table = section_value
            .as_table_mut()
            .ok_or_else(|| io::Error::other(format!("[{section}] is not a table")))?;
        section_table.insert(name.to_string(), value);
        Ok(())
    })
}

/// Remove a known key from a settings file.
pub fn unset_value_in(path: &Path, key: &str) -> io::Result<()> {
    let (section, name) = split_key(key)?;
    update_document(path, |doc| {
        if let Some(section_table) = doc.get_mut(section).and_then(|s| s.as_table_mut()) {
            section_table.remove(name);
        }
        Ok(())
    })
}

fn update_document(
    path: &Path,
    edit: impl FnOnce(&mut toml::Value) -> io::Result<()>,
) -> io::Result<()> {
    let mut doc = load_document(path);
    edit(&mut doc)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Set a key in the user's settings file.
pub fn set_value(key: &str, value: &str) -> io::Result<()> {
    set_value_in(&settings_path(), key, value)
}

/// Remove a key from the user's settings file.
pub fn unset_value(key: &str) -> io::Result<()> {
    unset_value_in(&settings_path(), key)
}

/// Resolve the cheats folder: CLI flag, then `paths.cheats_dir`, then
/// [`DEFAULT_CHEATS_DIR`].
pub fn resolve_cheats_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_cheats_dir_in(&settings_path(), cli_override)
}

pub fn resolve_cheats_dir_in(settings: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    cli_override
        .or_else(|| get_path_in(settings, "paths.cheats_dir"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHEATS_DIR))
}

/// Resolve the database file: CLI flag, then `paths.database`, then
/// [`DEFAULT_DATABASE`].
pub fn resolve_database(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_database_in(&settings_path(), cli_override)
}

pub fn resolve_database_in(settings: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    cli_override
        .or_else(|| get_path_in(settings, "paths.database"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

/// Emulator logs folder from the CLI flag or `paths.logs_dir`, if any.
pub fn resolve_logs_dir(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    cli_override.or_else(|| get_path_in(&settings_path(), "paths.logs_dir"))
}

/// Scan worker count: CLI flag, then `scan.workers`, then available
/// parallelism capped at 8.
pub fn resolve_workers(cli_override: Option<usize>) -> usize {
    resolve_workers_in(&settings_path(), cli_override)
}

pub fn resolve_workers_in(settings: &Path, cli_override: Option<usize>) -> usize {
    cli_override
        .or_else(|| {
            get_value_in(settings, "scan.workers")
                .and_then(|v| v.as_integer())
                .and_then(|n| usize::try_from(n).ok())
        })
        .filter(|n| *n > 0)
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get().min(8))
                .unwrap_or(4)
        })
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
