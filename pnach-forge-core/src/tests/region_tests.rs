use super::*;

#[test]
fn serial_prefixes_map_to_regions() {
    let cases = [
        ("SLUS-21234", Region::NtscU),
        ("SLES-50001", Region::Pal),
        ("SLPS-25001", Region::NtscJ),
        ("SCPS-15001", Region::NtscJ),
        ("SLPM-62543", Region::NtscJ),
        ("SLKA-25001", Region::NtscK),
        ("slus-20563", Region::NtscU),
    ];
    for (serial, expected) in cases {
        assert_eq!(Region::from_serial(serial), expected, "serial {serial}");
    }
}

#[test]
fn unlisted_prefixes_are_unknown() {
    assert_eq!(Region::from_serial("SCUS-97481"), Region::Unknown);
    assert_eq!(Region::from_serial(""), Region::Unknown);
    assert_eq!(Region::from_serial("SL"), Region::Unknown);
}

#[test]
fn codes_round_trip_through_from_str() {
    for &region in Region::all() {
        let parsed: Region = region.code().parse().unwrap();
        assert_eq!(parsed, region);
    }
}

#[test]
fn serde_uses_region_codes() {
    let json = serde_json::to_string(&Region::NtscJ).unwrap();
    assert_eq!(json, "\"NTSC-J\"");
    let back: Region = serde_json::from_str("\"PAL\"").unwrap();
    assert_eq!(back, Region::Pal);
}

#[test]
fn unrecognized_codes_deserialize_as_unknown() {
    let back: Region = serde_json::from_str("\"NTSC-C\"").unwrap();
    assert_eq!(back, Region::Unknown);
}
