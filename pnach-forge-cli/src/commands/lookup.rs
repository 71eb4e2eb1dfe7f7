use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_core::Region;
use pnach_forge_db::{find_game_cheats, load_database};

use crate::CliError;

/// Entry point for `lookup`.
pub(crate) fn run_lookup(
    db_path: &Path,
    title: &str,
    serial: Option<&str>,
    region: Option<Region>,
    show_codes: bool,
) -> Result<(), CliError> {
    let db = load_database(db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })?;

    let matches = find_game_cheats(&db, title, serial, region);
    if matches.is_empty() {
        log::warn!("No cheats found for \"{}\"", title);
        return Ok(());
    }

    for found in &matches {
        let ids = match (found.serial.is_empty(), found.crc.is_empty()) {
            (false, false) => format!("{} / {}", found.serial, found.crc),
            (false, true) => found.serial.clone(),
            (true, false) => found.crc.clone(),
            (true, true) => "no serial or CRC".to_string(),
        };
        log::info!(
            "{} {} {}",
            found.region.if_supports_color(Stdout, |t| t.bold()),
            ids.if_supports_color(Stdout, |t| t.dimmed()),
            format!("({} cheats)", found.cheats.len()).if_supports_color(Stdout, |t| t.green()),
        );
        for cheat in &found.cheats {
            log::info!("  {}", cheat.name);
            if !cheat.description.is_empty() {
                log::info!(
                    "    {}",
                    cheat.description.if_supports_color(Stdout, |t| t.dimmed())
                );
            }
            if show_codes {
                for code in &cheat.codes {
                    log::info!("    {}", code);
                }
            }
        }
    }
    Ok(())
}
