use super::*;

fn pair(a: &str, v: &str) -> PatchPair {
    PatchPair::new(a, v).unwrap()
}

#[test]
fn from_pairs_builds_a_matching_layout() {
    let record = PatchRecord::from_pairs(vec![pair("00200000", "1"), pair("00200004", "2")]);
    assert_eq!(record.pairs.len(), 2);
    assert!(matches!(record.layout().as_ref(), [LineItem::Patch { pair: 0, .. }, LineItem::Patch { pair: 1, .. }]));
}

#[test]
fn direct_edits_fall_back_to_comments_then_pairs() {
    let mut record = PatchRecord::from_pairs(vec![pair("00200000", "1")]);
    record.pairs.push(pair("00200004", "2"));
    record.comment_lines.push("// note".to_string());

    let layout = record.layout();
    assert_eq!(layout.len(), 3);
    assert_eq!(layout[0], LineItem::Comment(0));
    assert!(matches!(layout[2], LineItem::Patch { pair: 1, .. }));
}

#[test]
fn with_serial_keeps_serials_sorted_and_distinct() {
    let record = PatchRecord::new()
        .with_serial("SLUS-21234")
        .with_serial("SLES-50001")
        .with_serial("SLUS-21234");
    assert_eq!(record.serials, vec!["SLES-50001", "SLUS-21234"]);
}

#[test]
fn low_confidence_without_crc_or_serial() {
    assert!(PatchRecord::new().with_title("Game").is_low_confidence());
    assert!(!PatchRecord::new().with_crc("DEADBEEF").is_low_confidence());
}
