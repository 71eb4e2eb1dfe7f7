use super::*;

#[test]
fn serials_are_canonicalized_and_deduplicated() {
    let text = "Works with slus_21234, SLUS 21234 and SLUS21234.\nAlso SLES-50001";
    assert_eq!(extract_serials(text), vec!["SLES-50001", "SLUS-21234"]);
}

#[test]
fn serials_need_a_known_prefix_and_digit_run() {
    assert!(extract_serials("ABCD-12345").is_empty());
    assert!(extract_serials("SLUS-12").is_empty());
    assert!(extract_serials("SLUS-1234567").is_empty());
}

#[test]
fn serial_inside_a_longer_word_is_ignored() {
    assert!(extract_serials("XSLUS-21234").is_empty());
}

#[test]
fn normalize_serial_is_idempotent() {
    let once = normalize_serial("scps_15001").unwrap();
    assert_eq!(once, "SCPS-15001");
    assert_eq!(normalize_serial(&once).unwrap(), once);
    assert_eq!(normalize_serial("not a serial"), None);
}

#[test]
fn serial_key_drops_separators() {
    assert_eq!(serial_key("slus-212_3 4"), "SLUS21234");
}

#[test]
fn crc_requires_label() {
    assert_eq!(extract_crc("// CRC: 0xdeadbeef").as_deref(), Some("DEADBEEF"));
    assert_eq!(extract_crc("CRC=0001171A").as_deref(), Some("0001171A"));
    assert_eq!(extract_crc("checksum DEADBEEF"), None);
    assert_eq!(extract_crc("CRC: 0xDEADBEE"), None);
}

#[test]
fn first_crc_wins() {
    let text = "notes mention CRC=11111111 early\n// CRC: 0x22222222";
    assert_eq!(extract_crc(text).as_deref(), Some("11111111"));
}

#[test]
fn title_comes_from_first_key_line() {
    let text = "// header\nGameTitle = Some Game (NTSC-U)\ngametitle=Other";
    assert_eq!(extract_title(text).as_deref(), Some("Some Game (NTSC-U)"));
}

#[test]
fn empty_title_lines_are_skipped() {
    let text = "gametitle=   \ngametitle=Real";
    assert_eq!(extract_title(text).as_deref(), Some("Real"));
    assert!(is_title_line("gametitle=   "));
}

#[test]
fn absence_is_soft() {
    let ids = extract_identifiers("nothing useful here");
    assert_eq!(ids, Identifiers::default());
    assert!(ids.is_low_confidence());
}

#[test]
fn full_header_is_extracted() {
    let text = "gametitle=Test Game\n// serials: SLUS-21234\n// CRC: 0xDEADBEEF\n";
    let ids = extract_identifiers(text);
    assert_eq!(ids.title.as_deref(), Some("Test Game"));
    assert_eq!(ids.serials, vec!["SLUS-21234"]);
    assert_eq!(ids.crc.as_deref(), Some("DEADBEEF"));
    assert!(!ids.is_low_confidence());
}
