//! Summary numbers for a database.

use std::collections::BTreeMap;

use serde::Serialize;

use pnach_forge_core::Region;

use crate::types::CheatDatabase;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseStats {
    pub total_games: usize,
    pub total_cheats: usize,
    /// Cheats per region.
    pub by_region: BTreeMap<Region, usize>,
    /// Region buckets per region, i.e. games released there.
    pub games_by_region: BTreeMap<Region, usize>,
    /// Largest single region bucket.
    pub max_cheats_per_game: usize,
    /// Mean cheats per region bucket.
    pub avg_cheats_per_game: f64,
}

/// Compute statistics over every region bucket of every game.
pub fn database_stats(db: &CheatDatabase) -> DatabaseStats {
    let mut stats = DatabaseStats {
        total_games: db.games.len(),
        ..DatabaseStats::default()
    };
    let mut buckets = 0usize;

    for game in &db.games {
        for (region, data) in &game.regions {
            let count = data.cheats.len();
            stats.total_cheats += count;
            *stats.by_region.entry(*region).or_default() += count;
            *stats.games_by_region.entry(*region).or_default() += 1;
            stats.max_cheats_per_game = stats.max_cheats_per_game.max(count);
            buckets += 1;
        }
    }

    if buckets > 0 {
        stats.avg_cheats_per_game = stats.total_cheats as f64 / buckets as f64;
    }
    stats
}
