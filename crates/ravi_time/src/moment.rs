//! Julian Day and J2000 century offset of an instant.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::jd_to_centuries;
use crate::utc_time::UtcTime;

/// Centuries from J2000.0 within which the solar series holds its
/// ±0.01° design accuracy (1500–2500 CE).
///
/// Outside this window results are still computed, but the truncated
/// series drifts: by ±30 centuries (roughly ±3000 years) the longitude is
/// only good for qualitative use.
pub const ACCURACY_LIMIT_CENTURIES: f64 = 5.0;

/// Julian Day and Julian centuries since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JulianMoment {
    /// Julian Date (continuous day count, days start at noon).
    pub julian_day: f64,
    /// `(julian_day - 2451545.0) / 36525`.
    pub centuries: f64,
}

impl JulianMoment {
    /// Moment for a raw Julian Date.
    pub fn from_jd(julian_day: f64) -> Self {
        Self {
            julian_day,
            centuries: jd_to_centuries(julian_day),
        }
    }

    /// Validate the instant and convert it.
    pub fn from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Ok(Self::from_jd(utc.to_jd()))
    }

    /// `Some` when this moment lies outside the accuracy window.
    pub fn precision_warning(&self) -> Option<PrecisionWarning> {
        (self.centuries.abs() > ACCURACY_LIMIT_CENTURIES).then_some(PrecisionWarning {
            centuries: self.centuries,
            limit_centuries: ACCURACY_LIMIT_CENTURIES,
        })
    }

    /// Calendar form of this moment.
    pub fn to_utc(&self) -> UtcTime {
        UtcTime::from_jd(self.julian_day)
    }
}

/// Non-fatal signal that a result lies outside the series' accuracy window.
///
/// The computation still completes; the caller decides whether to use it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrecisionWarning {
    /// Offset of the instant from J2000.0 in Julian centuries.
    pub centuries: f64,
    /// The bound that was exceeded.
    pub limit_centuries: f64,
}

impl Display for PrecisionWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "instant is {:.2} centuries from J2000.0 (accuracy guaranteed within ±{:.1})",
            self.centuries, self.limit_centuries
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_is_zero_centuries() {
        let m = JulianMoment::from_jd(J2000_JD);
        assert_eq!(m.centuries, 0.0);
        assert!(m.precision_warning().is_none());
    }

    #[test]
    fn from_utc_2024() {
        let m = JulianMoment::from_utc(&UtcTime::date(2024, 1, 1)).unwrap();
        assert!((m.julian_day - 2_460_310.5).abs() < 1e-9);
        assert!((m.centuries - 0.239_986_310_746).abs() < 1e-9);
    }

    #[test]
    fn from_utc_rejects_invalid() {
        assert!(JulianMoment::from_utc(&UtcTime::date(2024, 2, 30)).is_err());
    }

    #[test]
    fn warning_outside_window() {
        let m = JulianMoment::from_utc(&UtcTime::date(1200, 6, 1)).unwrap();
        let w = m.precision_warning().expect("800 years back should warn");
        assert!(w.centuries < -5.0);
        assert_eq!(w.limit_centuries, ACCURACY_LIMIT_CENTURIES);
        assert!(w.to_string().contains("centuries"));
    }

    #[test]
    fn no_warning_inside_window() {
        for year in [1600, 1900, 2024, 2400] {
            let m = JulianMoment::from_utc(&UtcTime::date(year, 6, 1)).unwrap();
            assert!(m.precision_warning().is_none(), "year {year}");
        }
    }
}
