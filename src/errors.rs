//! timecvt errors
use thiserror::Error;

use hifitime::errors::HifitimeError;

/// Errors raised while interpreting a time literal.
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("hifitime error: {0}")]
    Hifitime(#[from] HifitimeError),
    #[error("failed to parse integer number")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("failed to parse float number")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    #[error("\"%{0}\" cannot be used to parse a time")]
    NonParsableDirective(char),
    #[error("unknown month name \"{0}\"")]
    UnknownMonthName(String),
    #[error("literal does not match \"{0}\" expected by the pattern")]
    LiteralMismatch(char),
    #[error("literal ended before \"%{0}\" could be captured")]
    UnexpectedEndOfLiteral(char),
    #[error("captured fields do not form a complete time")]
    IncompleteTime,
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum FormattingError {
    #[error("i/o error: {0}")]
    Stdio(#[from] std::io::Error),
}
