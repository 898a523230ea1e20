use insta::assert_snapshot;

use super::*;

#[test]
fn test_format_groups_thousands() {
    assert_eq!(format(1), "1");
    assert_eq!(format(999), "999");
    assert_eq!(format(1_000), "1.000");
    assert_eq!(format(15_000_000), "15.000.000");
    assert_eq!(format(123_456_789), "123.456.789");
}

#[test]
fn test_format_zero_is_empty() {
    assert_eq!(format(0), "");
}

#[test]
fn test_format_max_value() {
    assert_snapshot!(format(u64::MAX), @"18.446.744.073.709.551.615");
}

#[test]
fn test_parse_strips_separators() {
    assert_eq!(parse("30.000.000"), 30_000_000);
    assert_eq!(parse("1.5"), 15);
    assert_eq!(parse("42"), 42);
}

#[test]
fn test_parse_degrades_to_zero() {
    assert_eq!(parse(""), 0);
    assert_eq!(parse("abc"), 0);
    assert_eq!(parse("."), 0);
    assert_eq!(parse("-5"), 0);
    assert_eq!(parse("99999999999999999999999"), 0);
}

#[test]
fn test_parse_reads_leading_digits() {
    assert_eq!(parse("12abc"), 12);
    assert_eq!(parse("  7.000 rupiah"), 7_000);
}

#[test]
fn test_format_parse_format_is_stable() {
    let samples = [
        0,
        1,
        9,
        10,
        999,
        1_000,
        1_001,
        65_536,
        999_999,
        1_000_000,
        15_000_000,
        30_000_000,
        u64::MAX / 7,
        u64::MAX,
    ];

    for n in samples {
        assert_eq!(format(parse(&format(n))), format(n), "amount {n}");
    }
}

#[test]
fn test_rupiah() {
    assert_snapshot!(rupiah(30_000_000), @"Rp 30.000.000");
    assert_snapshot!(rupiah(0), @"Rp 0");
}
