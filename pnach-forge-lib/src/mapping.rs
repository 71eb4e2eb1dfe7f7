//! Title mapping dictionary: CRC or serial to game title.
//!
//! Users supply their own lists as JSON (`{"SLUS-21234": "Title"}`) or CSV
//! with a key column (`key`, `id`, `crc` or `serial`) and a title column
//! (`title` or `name`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pnach_forge_core::{normalize_serial, serial_key};

use crate::error::MappingError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMapping {
    entries: HashMap<String, String>,
}

const KEY_COLUMNS: &[&str] = &["key", "id", "crc", "serial"];
const TITLE_COLUMNS: &[&str] = &["title", "name"];

impl TitleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a `.json` file, or CSV for any other extension.
    pub fn load(path: &Path) -> Result<Self, MappingError> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let mapping = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_csv_str(&contents)?
        };
        log::info!("Loaded {} title mappings from {}", mapping.len(), path.display());
        Ok(mapping)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, MappingError> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        let object = value
            .as_object()
            .ok_or_else(|| MappingError::invalid("JSON mapping must be an object"))?;
        let mut mapping = Self::new();
        for (key, title) in object {
            let title = match title {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            mapping.insert(key, &title);
        }
        Ok(mapping)
    }

    pub fn from_csv_str(contents: &str) -> Result<Self, MappingError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(contents.as_bytes());
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect();
        let column = |names: &[&str]| names.iter().find_map(|n| headers.iter().position(|h| h == n));
        let (Some(key_col), Some(title_col)) = (column(KEY_COLUMNS), column(TITLE_COLUMNS)) else {
            return Err(MappingError::invalid(
                "CSV mapping needs a key/id/crc/serial column and a title/name column",
            ));
        };

        let mut mapping = Self::new();
        for record in reader.records() {
            let record = record?;
            if let (Some(key), Some(title)) = (record.get(key_col), record.get(title_col)) {
                mapping.insert(key, title);
            }
        }
        Ok(mapping)
    }

    /// Add one entry. Serial keys are stored without separators, which is
    /// the form [`get`](Self::get) falls back to.
    pub fn insert(&mut self, key: &str, title: &str) {
        let mut key = key.trim().to_ascii_uppercase();
        let title = title.trim();
        if key.is_empty() || title.is_empty() {
            return;
        }
        if normalize_serial(&key).is_some() {
            key = serial_key(&key);
        }
        self.entries.insert(key, title.to_string());
    }

    /// Title for a single CRC or serial key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let upper = key.trim().to_ascii_uppercase();
        self.entries
            .get(&upper)
            .or_else(|| self.entries.get(&serial_key(&upper)))
            .map(String::as_str)
    }

    /// Try the CRC first, then each serial in order.
    pub fn lookup<S: AsRef<str>>(&self, crc: Option<&str>, serials: &[S]) -> Option<&str> {
        crc.into_iter()
            .chain(serials.iter().map(AsRef::as_ref))
            .find_map(|key| self.get(key))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod tests;
