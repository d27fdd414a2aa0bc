//! Apparent ecliptic longitude: mean longitude + equation of center + aberration.

use ravi_time::{JulianMoment, PrecisionWarning, UtcTime};
use tracing::warn;

use crate::error::SolarError;
use crate::kepler::{KeplerCorrection, kepler_correction};
use crate::series::mean_longitude_deg;
use crate::util::normalize_360;

/// Full breakdown of the Sun's apparent longitude at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarLongitude {
    /// The instant the longitude was evaluated at.
    pub moment: JulianMoment,
    /// Mean longitude from the periodic series, degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Equation of center and aberration.
    pub correction: KeplerCorrection,
    /// Apparent ecliptic longitude, degrees [0, 360).
    pub apparent_longitude_deg: f64,
    /// Set when the instant lies outside the series' accuracy window.
    pub warning: Option<PrecisionWarning>,
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0. This is the hot path used by the
/// scans: no allocation, no validation, no logging.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let k = kepler_correction(t);
    normalize_360(mean_longitude_deg(t) + k.equation_of_center_deg + k.aberration_deg)
}

/// Apparent longitude with its components for a Julian moment.
pub fn solar_longitude(moment: &JulianMoment) -> SolarLongitude {
    let t = moment.centuries;
    let mean = mean_longitude_deg(t);
    let correction = kepler_correction(t);
    let warning = moment.precision_warning();
    if let Some(w) = &warning {
        warn!(jd = moment.julian_day, "solar longitude outside accuracy window: {w}");
    }
    SolarLongitude {
        moment: *moment,
        mean_longitude_deg: normalize_360(mean),
        correction,
        apparent_longitude_deg: normalize_360(mean + correction.total_deg()),
        warning,
    }
}

/// Validate a calendar instant and compute the Sun's apparent longitude.
pub fn solar_longitude_for(utc: &UtcTime) -> Result<SolarLongitude, SolarError> {
    let moment = JulianMoment::from_utc(utc)?;
    Ok(solar_longitude(&moment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravi_time::J2000_JD;

    #[test]
    fn j2000_longitude() {
        // Mean 280.466, C ≈ -0.08 at M ≈ 357.5
        let lon = apparent_longitude_deg(0.0);
        assert!((lon - 280.37).abs() < 0.02, "lon={lon}");
    }

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0: apparent longitude 199.909
        let m = JulianMoment::from_jd(2_448_908.5);
        let sl = solar_longitude(&m);
        assert!(
            (sl.apparent_longitude_deg - 199.909).abs() < 0.02,
            "got {}",
            sl.apparent_longitude_deg
        );
    }

    #[test]
    fn composed_matches_hot_path() {
        for i in -40..40 {
            let m = JulianMoment::from_jd(J2000_JD + i as f64 * 91.3);
            let sl = solar_longitude(&m);
            let fast = apparent_longitude_deg(m.centuries);
            assert!((sl.apparent_longitude_deg - fast).abs() < 1e-9);
        }
    }

    #[test]
    fn always_in_range() {
        for i in 0..2000 {
            let t = -3.0 + i as f64 * 0.003;
            let lon = apparent_longitude_deg(t);
            assert!((0.0..360.0).contains(&lon), "t={t} lon={lon}");
        }
    }

    #[test]
    fn deterministic() {
        let utc = UtcTime::new(2024, 5, 17, 6, 30, 0.0);
        let a = solar_longitude_for(&utc).unwrap();
        let b = solar_longitude_for(&utc).unwrap();
        assert_eq!(
            a.apparent_longitude_deg.to_bits(),
            b.apparent_longitude_deg.to_bits()
        );
    }

    #[test]
    fn rejects_invalid_instant() {
        let utc = UtcTime::date(2024, 2, 31);
        assert!(matches!(solar_longitude_for(&utc), Err(SolarError::Time(_))));
    }

    #[test]
    fn warns_far_from_epoch() {
        let sl = solar_longitude_for(&UtcTime::date(3000, 6, 21)).unwrap();
        assert!(sl.warning.is_some());
        assert!((0.0..360.0).contains(&sl.apparent_longitude_deg));
        let sl = solar_longitude_for(&UtcTime::date(2024, 6, 21)).unwrap();
        assert!(sl.warning.is_none());
    }
}
