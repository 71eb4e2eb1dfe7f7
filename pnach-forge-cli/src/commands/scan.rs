use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_db::{CheatDatabase, save_database};
use pnach_forge_lib::settings::{resolve_cheats_dir, resolve_workers};
use pnach_forge_lib::{ScannedFile, build_database, scan_folder_parallel};

use super::{build_runtime, spinner};
use crate::CliError;

/// Scan `root` on a worker pool and aggregate the result.
pub(crate) fn scan_to_database(
    root: &Path,
    threads: Option<usize>,
    quiet: bool,
) -> Result<(Vec<ScannedFile>, CheatDatabase), CliError> {
    let workers = resolve_workers(threads);
    log::debug!("Scanning {} with {} workers", root.display(), workers);

    let rt = build_runtime()?;
    let pb = spinner(quiet, format!("Scanning {}...", root.display()));
    let files = rt
        .block_on(scan_folder_parallel(root, workers))
        .map_err(|e| CliError::scan(e.to_string()))?;
    pb.finish_and_clear();

    let db = build_database(&files);
    Ok((files, db))
}

/// Entry point for `scan`.
pub(crate) fn run_scan(
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    summary: bool,
    threads: Option<usize>,
    quiet: bool,
) -> Result<(), CliError> {
    let root = resolve_cheats_dir(dir);
    let (files, db) = scan_to_database(&root, threads, quiet)?;

    if summary {
        for file in &files {
            print_file(file);
        }
        crate::log_blank();
    }

    let uncertain = files.iter().filter(|f| f.is_low_confidence()).count();
    let empty = files.iter().filter(|f| f.cheats.is_empty()).count();
    log::info!(
        "{}",
        "Scan Summary".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  Folder:        {}", root.display());
    log::info!("  Files:         {:>6}", files.len());
    log::info!("  Games:         {:>6}", db.games.len());
    log::info!("  Cheats:        {:>6}", db.count_cheats());
    log::info!("  Empty files:   {:>6}", empty);
    if uncertain > 0 {
        log::info!(
            "  No CRC/serial: {}",
            format!("{:>6}", uncertain).if_supports_color(Stdout, |t| t.yellow())
        );
    }

    if let Some(output) = output {
        save_database(&db, &output).map_err(|e| CliError::database(e.to_string()))?;
    }
    Ok(())
}

fn print_file(file: &ScannedFile) {
    let name = file
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.path.display().to_string());
    let ids = format!(
        "{} / {}",
        file.crc.as_deref().unwrap_or("-"),
        file.serial.as_deref().unwrap_or("-")
    );
    log::info!(
        "  {} {} {} [{}] {} cheat(s)",
        name.if_supports_color(Stdout, |t| t.bold()),
        ids.if_supports_color(Stdout, |t| t.cyan()),
        file.title,
        file.region,
        file.cheats.len(),
    );
}
