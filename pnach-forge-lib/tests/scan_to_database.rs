use std::fs;

use pnach_forge_core::Region;
use pnach_forge_db::{MergeOptions, find_game_cheats, load_database, merge_databases, save_database};
use pnach_forge_lib::*;

#[test]
fn scanned_folder_merges_with_an_existing_database() {
    let dir = tempfile::tempdir().unwrap();
    let cheats = dir.path().join("PS2 Cheats");
    fs::create_dir_all(cheats.join("nested")).unwrap();

    fs::write(
        cheats.join("0001171A - Some Title SLUS-20563.pnach"),
        "[Cheats/Infinite Health]\npatch=1,EE,2033A5C0,extended,0000270F\n\
         [Cheats/Max Money]\npatch=1,EE,20400000,extended,05F5E0FF\n\
         [Cheats/Moon Jump]\npatch=1,EE,10400000,extended,0000FFFF\n",
    )
    .unwrap();
    fs::write(
        cheats.join("nested").join("SLES-50001_12345678.pnach"),
        "gametitle=Euro Game\n[Cheats/All Items]\ncode0=patch=1,EE,20500000,extended,00000063\n",
    )
    .unwrap();

    let scanned = scan_folder(&cheats).unwrap();
    assert_eq!(scanned.len(), 2);
    let local = build_database(&scanned);
    assert_eq!(local.total_games, Some(2));

    // Older database knows the same game with a single cheat.
    let existing_path = dir.path().join("ps2_cheats_database.json");
    fs::write(
        &existing_path,
        r#"{"games": [{"title": "Some Title", "regions": {"NTSC-U": {"serial": "SLUS-20563", "crc": "0001171A", "cheats": [{"name": "Old", "codes": ["x"]}]}}}]}"#,
    )
    .unwrap();
    let existing = load_database(&existing_path).unwrap();

    let merged = merge_databases(&[existing, local], MergeOptions::default());
    assert_eq!(merged.total_games, Some(2));
    assert_eq!(merged.total_cheats, Some(4));

    let out = dir.path().join("merged.json");
    save_database(&merged, &out).unwrap();
    let reloaded = load_database(&out).unwrap();
    let some_title = find_game_cheats(&reloaded, "some title", None, Some(Region::NtscU));
    assert_eq!(some_title[0].cheats.len(), 3);
    let euro = find_game_cheats(&reloaded, "Euro Game", Some("SLES-50001"), None);
    assert_eq!(euro[0].crc, "12345678");
    assert_eq!(euro[0].cheats[0].codes, vec!["patch=1,EE,20500000,extended,00000063"]);
}
