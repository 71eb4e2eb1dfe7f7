//! Multi-source database merge.
//!
//! Sources are folded in order; earlier sources form the base and later
//! ones may extend or replace it. Entries are matched per region on
//! `(normalized title, SERIAL, CRC)`, so one game whose regions carry
//! different serials ends up as several merged entries.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::types::{CheatDatabase, GameEntry, RegionData, normalize_title};

/// How conflicting region buckets are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Replace an existing bucket whenever the incoming one has more
    /// cheats. When false, only empty buckets are replaced.
    pub prefer_larger: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            prefer_larger: true,
        }
    }
}

/// Identity of a merged entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub title: String,
    pub serial: String,
    pub crc: String,
}

impl MergeKey {
    pub fn new(title: &str, region: &RegionData) -> Self {
        Self {
            title: normalize_title(title),
            serial: region.serial.to_uppercase(),
            crc: region.crc.to_uppercase(),
        }
    }
}

/// Merge databases, stamping the result with the current local time.
pub fn merge_databases(databases: &[CheatDatabase], options: MergeOptions) -> CheatDatabase {
    merge_databases_at(databases, options, chrono::Local::now().to_rfc3339())
}

/// Merge databases with an explicit `merge_date`.
///
/// When the same key and region come from two sources, the bucket with
/// more cheats wins outright. The lists are never unioned, so cheats that
/// only exist in the smaller bucket are dropped.
pub fn merge_databases_at(
    databases: &[CheatDatabase],
    options: MergeOptions,
    merge_date: String,
) -> CheatDatabase {
    let mut games: Vec<GameEntry> = Vec::new();
    let mut index: HashMap<MergeKey, usize> = HashMap::new();
    let mut replaced = 0usize;

    for db in databases {
        for game in &db.games {
            for (region, incoming) in &game.regions {
                let key = MergeKey::new(&game.title, incoming);
                let slot = *index.entry(key).or_insert_with(|| {
                    games.push(GameEntry {
                        title: game.title.clone(),
                        regions: BTreeMap::new(),
                    });
                    games.len() - 1
                });

                match games[slot].regions.entry(*region) {
                    Entry::Vacant(bucket) => {
                        bucket.insert(incoming.clone());
                    }
                    Entry::Occupied(mut bucket) => {
                        if merge_region(bucket.get_mut(), incoming, options) {
                            replaced += 1;
                        }
                    }
                }
            }
        }
    }

    let mut merged = CheatDatabase::new(games);
    merged.merge_date = Some(merge_date);
    merged.refresh_totals();

    log::info!(
        "Merged {} sources: {} games, {} cheats ({} buckets replaced)",
        databases.len(),
        merged.games.len(),
        merged.total_cheats.unwrap_or(0),
        replaced,
    );

    merged
}

/// Apply the replacement policy to one bucket. Returns true if replaced.
fn merge_region(existing: &mut RegionData, incoming: &RegionData, options: MergeOptions) -> bool {
    let new_count = incoming.cheats.len();
    let old_count = existing.cheats.len();

    let replace = (options.prefer_larger && new_count > old_count) || (new_count > 0 && old_count == 0);
    if !replace {
        return false;
    }

    existing.cheats = incoming.cheats.clone();
    if existing.serial.is_empty() {
        existing.serial = incoming.serial.clone();
    }
    if existing.crc.is_empty() {
        existing.crc = incoming.crc.clone();
    }
    true
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
