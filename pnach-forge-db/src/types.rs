//! The canonical cheat database as stored on disk.
//!
//! ```json
//! {
//!   "games": [
//!     {
//!       "title": "Test Game",
//!       "regions": {
//!         "NTSC-U": {
//!           "serial": "SLUS-21234",
//!           "crc": "DEADBEEF",
//!           "cheats": [{ "name": "Infinite Health", "description": "", "codes": ["patch=1,EE,..."] }]
//!         }
//!       }
//!     }
//!   ],
//!   "merge_date": "2024-01-01T12:00:00+00:00",
//!   "total_games": 1,
//!   "total_cheats": 1
//! }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use pnach_forge_core::Region;

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_title))
}

fn unknown_title() -> String {
    "Unknown".to_string()
}

/// Read the `regions` map, combining buckets whose codes land on the same
/// [`Region`] (any unrecognized code reads as `Unknown`).
fn combine_region_buckets<'de, D>(deserializer: D) -> Result<BTreeMap<Region, RegionData>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BucketVisitor;

    impl<'de> Visitor<'de> for BucketVisitor {
        type Value = BTreeMap<Region, RegionData>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of region codes to cheat buckets")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut regions = BTreeMap::new();
            while let Some((region, data)) = map.next_entry::<Region, RegionData>()? {
                match regions.entry(region) {
                    Entry::Vacant(slot) => {
                        slot.insert(data);
                    }
                    Entry::Occupied(mut slot) => {
                        log::warn!(
                            "Region {} appears more than once; combining {} cheat(s) into it",
                            region,
                            data.cheats.len()
                        );
                        slot.get_mut().absorb(data);
                    }
                }
            }
            Ok(regions)
        }
    }

    deserializer.deserialize_map(BucketVisitor)
}

/// Lowercase, trimmed title used for matching entries across sources.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A single named cheat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheat {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// `patch=` lines or `ADDR VALUE` pairs.
    #[serde(default)]
    pub codes: Vec<String>,
}

impl Cheat {
    pub fn new(name: impl Into<String>, codes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            codes,
        }
    }
}

/// Cheats for one regional release of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionData {
    /// Empty when unknown. `null` in the source reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub serial: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub crc: String,
    #[serde(default)]
    pub cheats: Vec<Cheat>,
}

impl RegionData {
    /// Append `other`'s cheats, taking its serial and CRC where ours are empty.
    fn absorb(&mut self, other: RegionData) {
        if self.serial.is_empty() {
            self.serial = other.serial;
        }
        if self.crc.is_empty() {
            self.crc = other.crc;
        }
        self.cheats.extend(other.cheats);
    }
}

/// One game and its regional cheat buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(default = "unknown_title", deserialize_with = "null_as_unknown")]
    pub title: String,
    #[serde(default, deserialize_with = "combine_region_buckets")]
    pub regions: BTreeMap<Region, RegionData>,
}

impl GameEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            regions: BTreeMap::new(),
        }
    }

    /// Total cheats over all regions.
    pub fn cheat_count(&self) -> usize {
        self.regions.values().map(|r| r.cheats.len()).sum()
    }
}

/// A whole database file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheatDatabase {
    #[serde(default)]
    pub games: Vec<GameEntry>,
    /// Where the entries came from, e.g. `"local_scan"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_games: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cheats: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_files: Option<usize>,
}

impl CheatDatabase {
    pub fn new(games: Vec<GameEntry>) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    /// Sum of cheats over every region of every game.
    pub fn count_cheats(&self) -> usize {
        self.games.iter().map(GameEntry::cheat_count).sum()
    }

    /// Recompute `total_games` and `total_cheats` from the entries.
    pub fn refresh_totals(&mut self) {
        self.total_games = Some(self.games.len());
        self.total_cheats = Some(self.count_cheats());
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
