//! Canonical cheat database: model, JSON storage, merging and queries.

pub mod error;
pub mod io;
pub mod lookup;
pub mod merge;
pub mod stats;
pub mod types;

pub use error::DbError;
pub use io::{load_database, load_sources, save_database};
pub use lookup::{RegionCheats, find_game_cheats};
pub use merge::{MergeKey, MergeOptions, merge_databases, merge_databases_at};
pub use stats::{DatabaseStats, database_stats};
pub use types::{Cheat, CheatDatabase, GameEntry, RegionData, normalize_title};
