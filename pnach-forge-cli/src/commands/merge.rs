use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_db::{MergeOptions, load_sources, merge_databases, save_database};
use pnach_forge_lib::settings::{DEFAULT_MERGED_DATABASE, resolve_database};

use super::scan::scan_to_database;
use crate::CliError;

/// Entry point for `merge`.
///
/// Merge order is the existing database, then each `--source` in the order
/// given, then the local folder scan, so later inputs update earlier ones.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_merge(
    local_folder: Option<PathBuf>,
    existing: Option<PathBuf>,
    sources: Vec<PathBuf>,
    keep_existing: bool,
    threads: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let existing = resolve_database(existing);
    let mut paths = Vec::with_capacity(sources.len() + 1);
    if existing.exists() {
        paths.push(existing);
    } else {
        log::info!(
            "No existing database at {}; starting empty",
            existing.display()
        );
    }
    paths.extend(sources);

    let mut databases = load_sources(&paths);
    log::debug!("Loaded {} of {} source database(s)", databases.len(), paths.len());

    if let Some(folder) = local_folder {
        let (files, db) = scan_to_database(&folder, threads, quiet)?;
        log::info!(
            "Scanned {} file(s) from {}",
            files.len(),
            folder.display()
        );
        databases.push(db);
    }

    if databases.is_empty() {
        return Err(CliError::database("No readable databases to merge"));
    }

    let options = MergeOptions {
        prefer_larger: !keep_existing,
    };
    let merged = merge_databases(&databases, options);

    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_MERGED_DATABASE));
    save_database(&merged, &output).map_err(|e| CliError::database(e.to_string()))?;

    log::info!(
        "{} {} games, {} cheats -> {}",
        "Merged:".if_supports_color(Stdout, |t| t.green()),
        merged.games.len(),
        merged.count_cheats(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
