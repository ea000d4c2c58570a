use crate::quantity::{
    format_duration, format_file_size, parse_duration, parse_file_size, Duration, FileSize,
};

#[test]
fn duration_empty() {
    assert_eq!(format_duration(0), "");
    assert_eq!(parse_duration(""), 0);
}

#[test]
fn duration_format() {
    assert_eq!(format_duration(1), "1s");
    assert_eq!(format_duration(59), "59s");
    assert_eq!(format_duration(60), "1m");
    assert_eq!(format_duration(61), "1m 1s");
    assert_eq!(format_duration(3599), "59m 59s");
    assert_eq!(format_duration(3600), "1h");
    assert_eq!(format_duration(3601), "1h");
    assert_eq!(format_duration(3661), "1h 1m");
    assert_eq!(format_duration(90_000), "25h");
}

#[test]
fn duration_parse() {
    assert_eq!(parse_duration("2h 30m"), 9000);
    assert_eq!(parse_duration("90m"), 5400);
    assert_eq!(parse_duration("1h 5m 30s"), 3930);
    // Order and repetition don't matter.
    assert_eq!(parse_duration("30s 2h 30s"), 7260);
    // Double spaces produce empty tokens which are skipped.
    assert_eq!(parse_duration("1m  1s"), 61);
}

#[test]
fn duration_parse_is_lenient() {
    assert_eq!(parse_duration("3x"), 0);
    assert_eq!(parse_duration("3x 2m"), 120);
    assert_eq!(parse_duration("h"), 0);
    assert_eq!(parse_duration("ah 10s"), 10);
    assert_eq!(parse_duration("-1h"), 0);
    assert_eq!(parse_duration("ten minutes"), 0);
    assert_eq!(parse_duration("5é"), 0);
}

#[test]
fn duration_parse_saturates() {
    assert_eq!(parse_duration("18446744073709551615h"), u64::MAX);
    assert_eq!(
        parse_duration("18446744073709551615s 18446744073709551615s"),
        u64::MAX
    );
}

#[test]
fn duration_round_trip() {
    for seconds in (0..3600).chain((0..1000).map(|n| n * 60 + 3600)) {
        assert_eq!(parse_duration(&format_duration(seconds)), seconds);
    }

    // Seconds are dropped once hours are present.
    for seconds in [3601, 3661, 7199, 86_399] {
        assert_eq!(
            parse_duration(&format_duration(seconds)),
            seconds - seconds % 60
        );
    }
}

#[test]
fn duration_canonical_form() {
    assert_eq!(format_duration(parse_duration("90m")), "1h 30m");
    assert_eq!(format_duration(parse_duration("75s")), "1m 15s");
}

#[test]
fn file_size_empty() {
    assert_eq!(format_file_size(0), "");
    assert_eq!(parse_file_size(""), 0);
}

#[test]
fn file_size_format() {
    assert_eq!(format_file_size(1), "1.00 B");
    assert_eq!(format_file_size(999), "999.00 B");
    assert_eq!(format_file_size(1000), "1.00 KB");
    assert_eq!(format_file_size(1500), "1.50 KB");
    assert_eq!(format_file_size(2_500_000), "2.50 MB");
    assert_eq!(format_file_size(3_000_000_000), "3.00 GB");
    assert_eq!(format_file_size(4_000_000_000_000), "4.00 TB");
    assert_eq!(format_file_size(5_000_000_000_000_000), "5.00 PB");
    assert_eq!(format_file_size(6_000_000_000_000_000_000), "6.00 EB");
}

#[test]
fn file_size_rounds_up() {
    assert_eq!(format_file_size(1234), "1.24 KB");
    // Rounding up to 1000 moves on to the next unit.
    assert_eq!(format_file_size(999_999), "1.00 MB");
}

#[test]
fn file_size_largest_unit() {
    assert_eq!(format_file_size(u64::MAX), "18.45 EB");
}

#[test]
fn file_size_parse() {
    assert_eq!(parse_file_size("1.50 KB"), 1500);
    assert_eq!(parse_file_size("500"), 500);
    assert_eq!(parse_file_size("500 B"), 500);
    assert_eq!(parse_file_size("2.50 MB"), 2_500_000);
    assert_eq!(parse_file_size("1 EB"), 1_000_000_000_000_000_000);
    // Fractional bytes are truncated.
    assert_eq!(parse_file_size("1.5"), 1);
    assert_eq!(parse_file_size("0.0015 KB"), 1);
}

#[test]
fn file_size_parse_is_lenient() {
    assert_eq!(parse_file_size("10 XX"), 10);
    assert_eq!(parse_file_size("10 kb"), 10);
    assert_eq!(parse_file_size("big"), 0);
    assert_eq!(parse_file_size("-5 KB"), 0);
    assert_eq!(parse_file_size("100 EB"), u64::MAX);
}

#[test]
fn file_size_round_trip_within_rounding() {
    const SCALES: [u64; 7] = [
        1,
        1_000,
        1_000_000,
        1_000_000_000,
        1_000_000_000_000,
        1_000_000_000_000_000,
        1_000_000_000_000_000_000,
    ];

    for bytes in [
        1,
        999,
        1_001,
        123_456,
        987_654_321,
        1_000_000_000_007,
        u64::MAX / 3,
    ] {
        let formatted = format_file_size(bytes);
        let scale = SCALES[(bytes.ilog10() / 3) as usize];
        let parsed = parse_file_size(&formatted);
        assert!(
            parsed.abs_diff(bytes) <= scale / 100 + 1,
            "{bytes} formatted as {formatted} parsed as {parsed}"
        );
    }
}

#[test]
fn newtypes() {
    let duration: Duration = "1h 2m".parse().unwrap();
    assert_eq!(duration, Duration::from_secs(3720));
    assert_eq!(u64::from(duration), 3720);
    assert_eq!(duration.to_string(), "1h 2m");

    let size: FileSize = "3.00 GB".parse().unwrap();
    assert_eq!(size, FileSize::from(3_000_000_000));
    assert_eq!(size.to_string(), "3.00 GB");
    assert_eq!(FileSize::default().to_string(), "");
}
