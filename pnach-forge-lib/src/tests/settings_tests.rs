use super::*;

#[test]
fn defaults_without_a_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    assert_eq!(resolve_cheats_dir_in(&settings, None), PathBuf::from(DEFAULT_CHEATS_DIR));
    assert_eq!(resolve_database_in(&settings, None), PathBuf::from(DEFAULT_DATABASE));
    assert!(resolve_workers_in(&settings, None) >= 1);
}

#[test]
fn flag_beats_settings_beats_default() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("cfg").join("settings.toml");
    set_value_in(&settings, "paths.cheats_dir", "/from/settings").unwrap();
    set_value_in(&settings, "scan.workers", "3").unwrap();

    assert_eq!(resolve_cheats_dir_in(&settings, None), PathBuf::from("/from/settings"));
    assert_eq!(
        resolve_cheats_dir_in(&settings, Some(PathBuf::from("/from/flag"))),
        PathBuf::from("/from/flag")
    );
    assert_eq!(resolve_workers_in(&settings, None), 3);
    assert_eq!(resolve_workers_in(&settings, Some(6)), 6);
}

#[test]
fn updates_preserve_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "[gui]\ntheme = \"dark\"\n").unwrap();

    set_value_in(&settings, "paths.database", "db.json").unwrap();
    unset_value_in(&settings, "paths.database").unwrap();

    let contents = std::fs::read_to_string(&settings).unwrap();
    assert!(contents.contains("theme = \"dark\""));
    assert!(!contents.contains("db.json"));
    assert!(!settings.with_extension("toml.tmp").exists());
}

#[test]
fn rejects_unknown_keys_and_bad_workers() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    assert!(set_value_in(&settings, "paths.nope", "x").is_err());
    assert!(set_value_in(&settings, "scan.workers", "0").is_err());
    assert!(set_value_in(&settings, "scan.workers", "many").is_err());
    assert!(!settings.exists());
}
