//! Reading and writing database files.

use std::fs;
use std::path::Path;

use crate::error::DbError;
use crate::types::CheatDatabase;

/// Load a database from a JSON file.
pub fn load_database(path: &Path) -> Result<CheatDatabase, DbError> {
    if !path.exists() {
        return Err(DbError::not_found(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    let db: CheatDatabase = serde_json::from_str(&contents)?;
    log::debug!("Loaded {} games from {}", db.games.len(), path.display());
    Ok(db)
}

/// Write a database as pretty-printed JSON, creating parent directories.
///
/// The file is written next to the target and renamed into place so a
/// failed write never leaves a truncated database behind.
pub fn save_database(db: &CheatDatabase, path: &Path) -> Result<(), DbError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(db)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    log::info!("Database saved: {}", path.display());
    Ok(())
}

/// Load every readable source, in order.
///
/// A source that is missing or malformed is logged and left out; the
/// remaining sources are still returned.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Vec<CheatDatabase> {
    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match load_database(path) {
            Ok(db) => loaded.push(db),
            Err(e) => log::warn!("Skipping source {}: {}", path.display(), e),
        }
    }
    loaded
}

#[cfg(test)]
#[path = "tests/io_tests.rs"]
mod tests;
