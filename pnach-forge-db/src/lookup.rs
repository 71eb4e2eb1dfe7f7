//! Queries against a loaded database.

use pnach_forge_core::{Region, serial_key};

use crate::types::{Cheat, CheatDatabase, normalize_title};

/// One region bucket that matched a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCheats {
    pub region: Region,
    pub serial: String,
    pub crc: String,
    pub cheats: Vec<Cheat>,
}

/// Find the cheats for a game by title.
///
/// Titles match after trimming and lowercasing. The optional serial is
/// compared without separators or case, so `slus_21234` finds `SLUS-21234`.
/// Buckets without cheats are never returned.
pub fn find_game_cheats(
    db: &CheatDatabase,
    title: &str,
    serial: Option<&str>,
    region: Option<Region>,
) -> Vec<RegionCheats> {
    let wanted_title = normalize_title(title);
    let wanted_serial = serial.map(serial_key);

    db.games
        .iter()
        .filter(|game| normalize_title(&game.title) == wanted_title)
        .flat_map(|game| game.regions.iter())
        .filter(|(r, _)| region.is_none_or(|wanted| **r == wanted))
        .filter(|(_, data)| {
            wanted_serial
                .as_deref()
                .is_none_or(|wanted| serial_key(&data.serial) == wanted)
        })
        .filter(|(_, data)| !data.cheats.is_empty())
        .map(|(r, data)| RegionCheats {
            region: *r,
            serial: data.serial.clone(),
            crc: data.crc.clone(),
            cheats: data.cheats.clone(),
        })
        .collect()
}
