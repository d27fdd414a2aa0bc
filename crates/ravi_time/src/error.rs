//! Error types for calendar and Julian Day conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating or parsing a calendar instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range (month 13, Feb 30, hour 24, NaN seconds...).
    InvalidDate(String),
    /// Year is outside `MIN_YEAR..=MAX_YEAR`.
    YearOutOfRange(i32),
    /// Text could not be parsed as `YYYY-MM-DD[Thh:mm:ss[.fff]][Z]`.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::YearOutOfRange(y) => write!(
                f,
                "year {y} outside supported range {}..={}",
                crate::MIN_YEAR,
                crate::MAX_YEAR
            ),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for TimeError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::Parse(e.to_string())
    }
}
