use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_db::{database_stats, load_database};
use pnach_forge_lib::settings::resolve_database;

use crate::CliError;

pub(crate) fn run_stats(db: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let db_path = resolve_database(db);
    let db = load_database(&db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })?;
    let stats = database_stats(&db);

    if json {
        let text = serde_json::to_string_pretty(&stats)
            .map_err(|e| CliError::database(format!("Failed to serialize stats: {}", e)))?;
        println!("{text}");
        return Ok(());
    }

    log::info!(
        "{}",
        "Cheat Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    if let Some(date) = &db.merge_date {
        log::info!("  Merged:   {}", date);
    }
    crate::log_blank();
    log::info!("  Games:          {:>8}", stats.total_games);
    log::info!("  Cheats:         {:>8}", stats.total_cheats);
    log::info!("  Max per region: {:>8}", stats.max_cheats_per_game);
    log::info!("  Avg per region: {:>8.1}", stats.avg_cheats_per_game);
    crate::log_blank();
    log::info!("  {:<8} {:>8} {:>8}", "Region", "Games", "Cheats");
    for (region, cheats) in &stats.by_region {
        let games = stats.games_by_region.get(region).copied().unwrap_or(0);
        log::info!(
            "  {} {:>8} {:>8}",
            format!("{:<8}", region.code()).if_supports_color(Stdout, |t| t.cyan()),
            games,
            cheats
        );
    }
    Ok(())
}
