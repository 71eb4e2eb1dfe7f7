use super::*;

#[test]
fn json_keys_are_case_and_separator_insensitive() {
    let mapping = TitleMapping::from_json_str(r#"{"slus-21234": "Test Game", "deadbeef": "By CRC"}"#).unwrap();
    assert_eq!(mapping.get("SLUS_21234"), Some("Test Game"));
    assert_eq!(mapping.get("SLUS21234"), Some("Test Game"));
    assert_eq!(mapping.get("DEADBEEF"), Some("By CRC"));
    assert_eq!(mapping.get("SLES-00001"), None);
}

#[test]
fn json_must_be_an_object() {
    assert!(matches!(
        TitleMapping::from_json_str("[1, 2]"),
        Err(MappingError::Invalid(_))
    ));
}

#[test]
fn csv_with_alternate_columns() {
    let csv = "Serial, Name, Notes\nSLES-50001, Euro Game, x\n,Missing Key,\nSLPS-25001,,\n";
    let mapping = TitleMapping::from_csv_str(csv).unwrap();
    assert_eq!(mapping.get("SLES-50001"), Some("Euro Game"));
    assert_eq!(mapping.get("SLPS-25001"), None);
}

#[test]
fn csv_without_usable_columns_is_rejected() {
    assert!(matches!(
        TitleMapping::from_csv_str("a,b\n1,2\n"),
        Err(MappingError::Invalid(_))
    ));
}

#[test]
fn lookup_prefers_crc() {
    let mut mapping = TitleMapping::new();
    mapping.insert("SLUS-21234", "By Serial");
    mapping.insert("DEADBEEF", "By CRC");
    assert_eq!(mapping.lookup(Some("deadbeef"), &["SLUS-21234"]), Some("By CRC"));
    assert_eq!(mapping.lookup(Some("00000000"), &["SLUS-21234"]), Some("By Serial"));
    assert_eq!(mapping.lookup::<&str>(None, &[]), None);
}

#[test]
fn load_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("map.JSON");
    let csv = dir.path().join("map.csv");
    std::fs::write(&json, r#"{"SCUS-97199": "Ratchet & Clank"}"#).unwrap();
    std::fs::write(&csv, "key,title\n7546A1E0,Ratchet & Clank\n").unwrap();

    assert_eq!(TitleMapping::load(&json).unwrap().get("SCUS-97199"), Some("Ratchet & Clank"));
    assert_eq!(TitleMapping::load(&csv).unwrap().get("7546a1e0"), Some("Ratchet & Clank"));
}

#[test]
fn each_key_counts_once() {
    let mapping = TitleMapping::from_json_str(
        r#"{"SLUS-21234": "Test Game", "SLUS_21234": "Same Serial", "DEADBEEF": "By CRC"}"#,
    )
    .unwrap();
    assert_eq!(mapping.len(), 2);
    assert!(mapping.get("SLUS21234").is_some());
}
