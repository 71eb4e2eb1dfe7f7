use super::*;
use crate::types::{Cheat, GameEntry, RegionData};
use pnach_forge_core::Region;

fn sample() -> CheatDatabase {
    let mut game = GameEntry::new("Test Game");
    game.regions.insert(
        Region::NtscU,
        RegionData {
            serial: "SLUS-21234".to_string(),
            crc: "DEADBEEF".to_string(),
            cheats: vec![Cheat::new("Max HP", vec!["patch=1,EE,00200000,extended,00000001".to_string()])],
        },
    );
    CheatDatabase::new(vec![game])
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("db.json");
    save_database(&sample(), &path).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_database(&path).unwrap(), sample());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_database(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));
}

#[test]
fn bad_sources_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    let wrong_shape = dir.path().join("list.json");
    save_database(&sample(), &good).unwrap();
    std::fs::write(&bad, "{ not json").unwrap();
    std::fs::write(&wrong_shape, "[1, 2, 3]").unwrap();

    let loaded = load_sources(&[
        bad.clone(),
        dir.path().join("missing.json"),
        good.clone(),
        wrong_shape,
    ]);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].games[0].title, "Test Game");
}

#[test]
fn unrecognized_region_codes_keep_every_cheat() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(
        &path,
        r#"{"games":[{"title":"Test Game","regions":{
            "USA":{"serial":"","crc":"DEADBEEF","cheats":[{"name":"Max HP","codes":["00200000 00000001"]}]},
            "Europe":{"serial":"SLES-50001","crc":"","cheats":[{"name":"Max MP","codes":["00200004 00000001"]}]}
        }}]}"#,
    )
    .unwrap();

    let db = load_database(&path).unwrap();
    assert_eq!(db.count_cheats(), 2);
    let bucket = &db.games[0].regions[&Region::Unknown];
    assert_eq!(bucket.crc, "DEADBEEF");
    assert_eq!(bucket.serial, "SLES-50001");
    let names: Vec<&str> = bucket.cheats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Max HP", "Max MP"]);
}
