use super::*;
use crate::parser::parse_pnach_text;
use pnach_forge_core::PatchPair;

fn pair(a: &str, v: &str) -> PatchPair {
    PatchPair::new(a, v).unwrap()
}

fn scenario_record() -> PatchRecord {
    let mut record = PatchRecord::new()
        .with_title("Test Game")
        .with_crc("DEADBEEF")
        .with_serial("SLUS-21234");
    record.push_pair(pair("00200000", "00000001"), None);
    record
}

#[test]
fn header_block_and_patch_line() {
    let text = generate_pnach(&scenario_record());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "gametitle=Test Game");
    assert_eq!(lines[1], "// serials: SLUS-21234");
    assert_eq!(lines[2], "// CRC: 0xDEADBEEF");
    assert_eq!(lines.iter().filter(|l| **l == "gametitle=Test Game").count(), 1);
    assert_eq!(
        lines
            .iter()
            .filter(|l| **l == "patch=1,EE,00200000,extended,00000001")
            .count(),
        1
    );
}

#[test]
fn ends_with_signature_and_one_newline() {
    let text = generate_pnach(&scenario_record());
    assert!(text.ends_with(&format!("{GENERATOR_SIGNATURE}\n")));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn serials_are_semicolon_joined() {
    let record = PatchRecord::new()
        .with_serial("SLUS-21234")
        .with_serial("SLES-50001");
    let text = render_pnach(&record, &[]);
    assert!(text.starts_with("// serials: SLES-50001; SLUS-21234\n"));
}

#[test]
fn size_keyword_is_always_extended() {
    let record = parse_pnach_text("// Walk Speed\npatch=1,EE,0033A5C0,short,1\npatch=1,EE,0033A5C4,byte,2");
    let text = generate_pnach(&record);
    assert!(text.contains("[Cheats/Walk Speed]\npatch=1,EE,0033A5C0,extended,00000001\npatch=1,EE,0033A5C4,extended,00000002\n"));
    assert!(!text.contains(",short,"));
}

#[test]
fn free_text_comments_are_kept_and_metadata_is_not_duplicated() {
    let source = "gametitle=Game
// CRC: 0x12345678
// serials: SLUS-20001
Some notes about the codes
[Cheats/Infinite Health]
patch=1,EE,2033A5C0,extended,0000270F
";
    let text = generate_pnach(&parse_pnach_text(source));
    assert_eq!(text.matches("// CRC:").count(), 1);
    assert_eq!(text.matches("// serials:").count(), 1);
    assert_eq!(text.matches("[Cheats/Infinite Health]").count(), 1);
    assert!(text.contains("Some notes about the codes\n"));
}

#[test]
fn empty_record_is_only_the_signature() {
    assert_eq!(render_pnach(&PatchRecord::new(), &[]), format!("{GENERATOR_SIGNATURE}\n"));
}

#[test]
fn empty_groups_are_skipped() {
    let groups = vec![CheatGroup {
        label: "Nothing".to_string(),
        pairs: Vec::new(),
    }];
    let text = render_pnach(&PatchRecord::new(), &groups);
    assert!(!text.contains("[Cheats/Nothing]"));
}

#[test]
fn bracketed_labels_survive_regeneration() {
    let source = "// Infinite HP [P1]
patch=1,EE,2033A5C0,extended,00000001

// Max Money
patch=1,EE,20400000,extended,00000002
";
    let first = generate_pnach(&parse_pnach_text(source));
    assert!(first.contains("[Cheats/Infinite HP (P1)]\n"));
    let second = generate_pnach(&parse_pnach_text(&first));
    assert_eq!(first, second);
}
