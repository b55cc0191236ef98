use crate::parse::{ParseErrorKind, parse_line};
use crate::record::parse_timestamp;
use pretty_assertions::assert_eq;

fn kind_of(line: &str) -> ParseErrorKind {
    parse_line(line).unwrap_err().kind
}

#[test]
fn parses_well_formed_line() {
    // Act
    let record = parse_line("2024-01-15 10:23:45 | user_1001 | /product/12345 | 250ms | 200").unwrap();

    // Assert
    assert_eq!(record.timestamp, parse_timestamp("2024-01-15 10:23:45").unwrap());
    assert_eq!(record.user_id, "user_1001");
    assert_eq!(record.path, "/product/12345");
    assert_eq!(record.response_time_ms, 250);
    assert_eq!(record.status_code, 200);
    assert!(!record.is_error());
}

#[test]
fn trims_whitespace_around_fields_and_line_endings() {
    let record = parse_line("  2024-01-15 10:23:45 |  user_7  | /cart/add |   0ms | 404  \r\n").unwrap();

    assert_eq!(record.user_id, "user_7");
    assert_eq!(record.path, "/cart/add");
    assert_eq!(record.response_time_ms, 0);
    assert!(record.is_error());
}

#[test]
fn blank_and_whitespace_lines_are_blank() {
    assert_eq!(kind_of(""), ParseErrorKind::BlankLine);
    assert_eq!(kind_of("   \t  "), ParseErrorKind::BlankLine);
    assert!(parse_line("\n").unwrap_err().is_blank());
}

#[test]
fn comment_line_is_field_count_mismatch() {
    assert_eq!(
        kind_of("# ERROR LINE"),
        ParseErrorKind::FieldCountMismatch { found: 1 }
    );
}

#[test]
fn extra_field_is_field_count_mismatch() {
    assert_eq!(
        kind_of("2024-01-15 10:23:45 | u | /a | 1ms | 200 | extra"),
        ParseErrorKind::FieldCountMismatch { found: 6 }
    );
}

#[test]
fn pipe_without_spaces_does_not_split() {
    assert_eq!(
        kind_of("2024-01-15 10:23:45|u|/a|1ms|200"),
        ParseErrorKind::FieldCountMismatch { found: 1 }
    );
}

#[test]
fn bad_timestamps_are_rejected() {
    for ts in [
        "2024-01-15T10:23:45",
        "2024-13-01 10:00:00",
        "yesterday",
        "2024-01-15",
        "2024-1-5 1:2:3",
        "2024-01-15 23:59:60",
    ] {
        let line = format!("{ts} | u | /a | 1ms | 200");
        assert_eq!(kind_of(&line), ParseErrorKind::TimestampUnparsable, "{ts}");
    }
}

#[test]
fn bad_response_times_are_rejected() {
    for rt in ["250", "ms", "-5ms", "+5ms", "2.5ms", "250 ms", "abcms"] {
        let line = format!("2024-01-15 10:23:45 | u | /a | {rt} | 200");
        assert_eq!(kind_of(&line), ParseErrorKind::ResponseTimeInvalid, "{rt}");
    }
}

#[test]
fn bad_status_codes_are_rejected() {
    for status in ["99", "600", "abc", "-200", "2OO", "70000"] {
        let line = format!("2024-01-15 10:23:45 | u | /a | 1ms | {status}");
        assert_eq!(kind_of(&line), ParseErrorKind::StatusCodeInvalid, "{status}");
    }
}

#[test]
fn status_code_bounds_are_inclusive() {
    assert_eq!(
        parse_line("2024-01-15 10:23:45 | u | /a | 1ms | 100").unwrap().status_code,
        100
    );
    assert_eq!(
        parse_line("2024-01-15 10:23:45 | u | /a | 1ms | 599").unwrap().status_code,
        599
    );
}

#[test]
fn first_failing_check_wins() {
    // Both timestamp and status are broken; timestamp is checked first.
    assert_eq!(
        kind_of("not-a-time | u | /a | 1ms | 999"),
        ParseErrorKind::TimestampUnparsable
    );
}

#[test]
fn error_keeps_raw_line() {
    let err = parse_line("bad line").unwrap_err();
    assert_eq!(err.raw_line, "bad line");
}

#[test]
fn parsing_is_idempotent() {
    for line in [
        "2024-01-15 10:23:45 | user_1001 | /product/12345 | 250ms | 200",
        "bad line",
        "",
        "2024-01-15 10:23:45 | u | /a | 1ms | 600",
    ] {
        assert_eq!(parse_line(line), parse_line(line));
    }
}
