//! Access log line parser.
//!
//! Lines look like:
//!
//! ```text
//! 2024-01-15 10:23:45 | user_1001 | /product/12345 | 250ms | 200
//! ```
//!
//! Parsing never panics and never aborts a caller; every rejected line comes
//! back as a [`ParseError`] tagged with the first check it failed.

mod error;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::record::{LogRecord, parse_timestamp};

pub const FIELD_SEPARATOR: &str = " | ";
const RESPONSE_TIME_SUFFIX: &str = "ms";

pub type ParseOutcome = Result<LogRecord, ParseError>;

pub fn parse_line(line: &str) -> ParseOutcome {
    if line.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::BlankLine, line));
    }

    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
    let [timestamp, user_id, path, response_time, status] = fields[..] else {
        return Err(ParseError::new(
            ParseErrorKind::FieldCountMismatch {
                found: fields.len(),
            },
            line,
        ));
    };

    let timestamp = parse_timestamp(timestamp)
        .ok_or_else(|| ParseError::new(ParseErrorKind::TimestampUnparsable, line))?;

    let response_time_ms = parse_response_time(response_time)
        .ok_or_else(|| ParseError::new(ParseErrorKind::ResponseTimeInvalid, line))?;

    let status_code = parse_status(status)
        .ok_or_else(|| ParseError::new(ParseErrorKind::StatusCodeInvalid, line))?;

    Ok(LogRecord {
        timestamp,
        user_id: user_id.to_string(),
        path: path.to_string(),
        response_time_ms,
        status_code,
    })
}

fn parse_response_time(field: &str) -> Option<u64> {
    let digits = field.strip_suffix(RESPONSE_TIME_SUFFIX)?;
    // u64::from_str accepts a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_status(field: &str) -> Option<u16> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field
        .parse::<u16>()
        .ok()
        .filter(|code| (100..=599).contains(code))
}
