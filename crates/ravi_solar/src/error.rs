//! Error types for solar longitude queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ravi_time::TimeError;

/// Errors from solar position calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// The instant failed calendar validation.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid instant: {e}"),
        }
    }
}

impl Error for SolarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
        }
    }
}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
