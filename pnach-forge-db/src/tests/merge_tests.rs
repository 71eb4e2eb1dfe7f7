use super::*;
use crate::types::Cheat;
use pnach_forge_core::Region;

fn cheats(n: usize, prefix: &str) -> Vec<Cheat> {
    (0..n)
        .map(|i| Cheat::new(format!("{prefix} {i}"), vec![format!("0020000{i} 00000001")]))
        .collect()
}

fn db_with(title: &str, region: Region, serial: &str, crc: &str, n: usize, prefix: &str) -> CheatDatabase {
    let mut game = GameEntry::new(title);
    game.regions.insert(
        region,
        RegionData {
            serial: serial.to_string(),
            crc: crc.to_string(),
            cheats: cheats(n, prefix),
        },
    );
    CheatDatabase::new(vec![game])
}

#[test]
fn denser_source_replaces_wholesale() {
    let base = db_with("Test Game", Region::NtscU, "SLUS-21234", "DEADBEEF", 2, "base");
    let other = db_with("test game ", Region::NtscU, "slus-21234", "deadbeef", 5, "other");
    let merged = merge_databases_at(&[base, other], MergeOptions::default(), "now".into());

    assert_eq!(merged.games.len(), 1);
    let bucket = &merged.games[0].regions[&Region::NtscU];
    assert_eq!(bucket.cheats.len(), 5);
    assert!(bucket.cheats.iter().all(|c| c.name.starts_with("other")));
    assert_eq!(merged.games[0].title, "Test Game");
    assert_eq!(merged.total_cheats, Some(5));
}

#[test]
fn smaller_source_never_replaces() {
    let base = db_with("Game", Region::Pal, "SLES-50001", "", 5, "base");
    let other = db_with("Game", Region::Pal, "SLES-50001", "", 2, "other");
    let merged = merge_databases_at(&[base, other], MergeOptions::default(), "now".into());
    let bucket = &merged.games[0].regions[&Region::Pal];
    assert_eq!(bucket.cheats.len(), 5);
    assert!(bucket.cheats.iter().all(|c| c.name.starts_with("base")));
}

#[test]
fn empty_bucket_is_filled_even_without_prefer_larger() {
    let base = db_with("Game", Region::Pal, "SLES-50001", "", 0, "base");
    let denser = db_with("Game", Region::Pal, "SLES-50001", "", 3, "other");
    let sparse_then_dense = db_with("Game", Region::Pal, "SLES-50001", "", 4, "later");
    let options = MergeOptions {
        prefer_larger: false,
    };
    let merged = merge_databases_at(&[base, denser, sparse_then_dense], options, "now".into());
    let bucket = &merged.games[0].regions[&Region::Pal];
    assert_eq!(bucket.cheats.len(), 3);
}

#[test]
fn new_region_is_added_to_the_same_key() {
    let base = db_with("Game", Region::NtscU, "", "12345678", 1, "us");
    let other = db_with("Game", Region::Unknown, "", "12345678", 2, "unk");
    let merged = merge_databases_at(&[base, other], MergeOptions::default(), "now".into());
    assert_eq!(merged.games.len(), 1);
    assert_eq!(merged.games[0].regions.len(), 2);
    assert_eq!(merged.total_cheats, Some(3));
}

#[test]
fn different_serials_stay_separate() {
    let base = db_with("Game", Region::NtscU, "SLUS-20001", "", 1, "a");
    let other = db_with("Game", Region::NtscU, "SLUS-20002", "", 1, "b");
    let merged = merge_databases_at(&[base, other], MergeOptions::default(), "now".into());
    assert_eq!(merged.games.len(), 2);
    assert_eq!(merged.total_games, Some(2));
}

#[test]
fn self_merge_changes_nothing() {
    let mut db = db_with("Test Game", Region::NtscU, "SLUS-21234", "DEADBEEF", 3, "c");
    let mut pal = GameEntry::new("Other");
    pal.regions.insert(Region::Pal, RegionData::default());
    db.games.push(pal);

    let once = merge_databases_at(&[db.clone()], MergeOptions::default(), "t".into());
    let twice = merge_databases_at(&[db.clone(), db.clone()], MergeOptions::default(), "t".into());
    assert_eq!(once, twice);
    assert_eq!(twice.games, db.games);
    assert_eq!(twice.total_cheats, Some(db.count_cheats()));
}

#[test]
fn merge_date_is_set() {
    let merged = merge_databases(&[], MergeOptions::default());
    assert!(merged.merge_date.is_some());
    assert_eq!(merged.total_games, Some(0));
}
