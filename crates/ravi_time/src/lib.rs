//! Calendar instants and Julian Day conversion for the solar engine.
//!
//! This crate provides:
//! - `UtcTime`, the instant type accepted by every engine operation
//! - Proleptic Gregorian ↔ Julian Date conversion
//! - `JulianMoment`: Julian Day plus Julian centuries since J2000.0
//! - `PrecisionWarning` for instants outside the solar series' accuracy window
//!
//! No time-scale normalization happens here: an instant is assumed to be
//! expressed on one consistent scale already.

pub mod error;
pub mod julian;
pub mod moment;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, days_in_year,
    is_leap_year, jd_to_calendar, jd_to_centuries,
};
pub use moment::{ACCURACY_LIMIT_CENTURIES, JulianMoment, PrecisionWarning};
pub use utc_time::UtcTime;

/// Earliest calendar year accepted by [`UtcTime::validate`].
pub const MIN_YEAR: i32 = -4712;

/// Latest calendar year accepted by [`UtcTime::validate`].
pub const MAX_YEAR: i32 = 9999;
