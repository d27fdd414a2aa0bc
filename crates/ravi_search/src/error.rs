//! Error types for longitude searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ravi_time::TimeError;

/// Errors from scans and crossing searches.
///
/// A scan that finds nothing is not an error: it returns an empty
/// collection (or `None`), and the caller may widen the tolerance.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid instant or year.
    Time(TimeError),
    /// Target longitude is not a finite value in [0, 360).
    InvalidTarget(f64),
    /// Invalid search configuration parameter.
    InvalidConfig(&'static str),
    /// The cancellation flag was raised during a scan.
    Cancelled,
    /// The scan ran past its deadline.
    DeadlineExceeded,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid input: {e}"),
            Self::InvalidTarget(v) => write!(f, "target longitude {v} not in [0, 360)"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::DeadlineExceeded => write!(f, "search deadline exceeded"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Reject targets outside [0, 360).
pub(crate) fn validate_target(target_deg: f64) -> Result<(), SearchError> {
    if target_deg.is_finite() && (0.0..360.0).contains(&target_deg) {
        Ok(())
    } else {
        Err(SearchError::InvalidTarget(target_deg))
    }
}
