use super::*;

#[test]
fn patch_lines_are_kept_verbatim() {
    let out = normalize_code_lines(&["  patch=1,EE,2033A5C0,word,0001  "]);
    assert_eq!(out, vec!["patch=1,EE,2033A5C0,word,0001"]);
}

#[test]
fn short_pairs_are_padded() {
    let out = normalize_code_lines(&["2033a5c0 ff", "00200000:1", "10200000,00ff"]);
    assert_eq!(
        out,
        vec!["2033A5C0 000000FF", "00200000 00000001", "10200000 000000FF"]
    );
}

#[test]
fn multiple_pairs_on_one_line_are_split() {
    let out = normalize_code_lines(&["Max HP: 2033A5C0 0000270F 2033A5C4 0000270F"]);
    assert_eq!(out, vec!["2033A5C0 0000270F", "2033A5C4 0000270F"]);
}

#[test]
fn odd_trailing_token_is_dropped() {
    let out = normalize_code_lines(&["code 11111111 22222222 33333333"]);
    assert_eq!(out, vec!["11111111 22222222"]);
}

#[test]
fn plain_text_and_blank_lines_are_dropped() {
    let out = normalize_code_lines(&["", "   ", "Infinite Health", "Press L1+R1"]);
    assert!(out.is_empty());
}

#[test]
fn normalizing_twice_changes_nothing() {
    let once = normalize_code_lines(&["2033a5c0 ff", "patch=1,EE,00100000,extended,1"]);
    let twice = normalize_code_lines(&once);
    assert_eq!(once, twice);
}

#[test]
fn codeblock_text_is_split_into_lines() {
    let out = parse_codeblock_text("// Max money\n2044AAAA 05F5E0FF\n\n2044AAAC 00000001\n");
    assert_eq!(out, vec!["2044AAAA 05F5E0FF", "2044AAAC 00000001"]);
}

#[test]
fn collaborator_entry_normalizes_its_codes() {
    let entry: CollaboratorEntry = serde_json::from_str(
        r#"{"source": "forum", "title": "Test Game", "codes": ["2033A5C0 1", "junk"]}"#,
    )
    .unwrap();
    assert_eq!(entry.normalized_codes(), vec!["2033A5C0 00000001"]);
    assert!(entry.link.is_none());
}
