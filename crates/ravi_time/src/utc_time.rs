//! Calendar instant with sub-second precision.
//!
//! `UtcTime` is the instant type accepted and returned by every engine
//! operation. It is taken to be on one uniform time scale: no leap-second
//! table or UT/TT offset is applied on the way to a Julian Date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, civil_from_days, days_in_month,
};
use crate::{MAX_YEAR, MIN_YEAR};

const MS_PER_DAY: i64 = SECONDS_PER_DAY as i64 * 1000;

/// Calendar date and time of day with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Midnight on January 1st of `year`.
    pub fn start_of_year(year: i32) -> Self {
        Self::date(year, 1, 1)
    }

    /// Check every field against the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(TimeError::YearOutOfRange(self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {} not in 1..=12", self.month)));
        }
        let dim = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > dim {
            return Err(TimeError::InvalidDate(format!(
                "day {} not in 1..={dim} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate(format!("hour {} not in 0..=23", self.hour)));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "minute {} not in 0..=59",
                self.minute
            )));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!(
                "second {} not in [0, 60)",
                self.second
            )));
        }
        Ok(())
    }

    /// Julian Date of this instant. Does not validate; see [`Self::validate`].
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar instant for a Julian Date, rounded to the nearest millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let total_ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY as f64).round() as i64;
        let days = total_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = total_ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.fff]`,
    /// each with an optional trailing `Z`. A leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let mut year: i32 = date_parts[0].parse()?;
        if negative {
            year = -year;
        }
        let month: u32 = date_parts[1].parse()?;
        let day: u32 = date_parts[2].parse()?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let parts: Vec<&str> = t.split(':').collect();
                match parts.as_slice() {
                    [h, m] => (h.parse::<u32>()?, m.parse::<u32>()?, 0.0),
                    [h, m, sec] => (
                        h.parse::<u32>()?,
                        m.parse::<u32>()?,
                        sec.parse::<f64>()?,
                    ),
                    _ => return Err(TimeError::Parse(format!("invalid time of day: {t}"))),
                }
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for UtcTime {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond().min(999_999_999) as f64 * 1e-9,
        )
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for UtcTime {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from(dt.naive_utc())
    }
}
