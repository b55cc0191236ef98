use thiserror::Error;

/// Why a line was rejected. Every kind except `BlankLine` is a data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 5 fields, found {found}")]
    FieldCountMismatch { found: usize },

    #[error("timestamp does not match YYYY-MM-DD HH:MM:SS")]
    TimestampUnparsable,

    #[error("response time must be a non-negative integer followed by 'ms'")]
    ResponseTimeInvalid,

    #[error("status code must be an integer in 100..=599")]
    StatusCodeInvalid,

    #[error("blank line")]
    BlankLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {raw_line:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub raw_line: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, raw_line: &str) -> Self {
        Self {
            kind,
            raw_line: raw_line.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind == ParseErrorKind::BlankLine
    }
}
