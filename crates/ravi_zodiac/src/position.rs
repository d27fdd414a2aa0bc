//! Decomposition of an ecliptic longitude into sign, degree and decan.

use ravi_solar::{SolarError, normalize_360, solar_longitude_for};
use ravi_time::{PrecisionWarning, UtcTime};

use crate::decan::{decan_from_degree, decan_ruler};
use crate::planet::Planet;
use crate::sign::{ALL_SIGNS, SIGN_SPAN_DEG, ZodiacSign};

/// An angle split into sexagesimal parts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dms {
    pub degrees: u16,
    /// 0 through 59.
    pub minutes: u8,
    /// Fractional, below 60.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Inverse of [`deg_to_dms`] for non-negative angles.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let minutes = dms.minutes as f64 + dms.seconds / 60.0;
    dms.degrees as f64 + minutes / 60.0
}

/// Split an angle into degrees, arc-minutes and arc-seconds.
///
/// The sign is dropped: `-12.5` and `12.5` give the same parts.
pub fn deg_to_dms(deg: f64) -> Dms {
    let magnitude = deg.abs();
    let degrees = magnitude.trunc();
    let arc_minutes = (magnitude - degrees) * 60.0;
    let minutes = arc_minutes.trunc();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arc_minutes - minutes) * 60.0,
    }
}

/// Zodiacal coordinates of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZodiacPosition {
    /// Ecliptic longitude in degrees [0, 360).
    pub absolute_longitude_deg: f64,
    /// Sign containing the longitude.
    pub sign: ZodiacSign,
    /// Decimal degrees within the sign [0, 30).
    pub degree_in_sign: f64,
    /// `degree_in_sign` as DMS.
    pub dms: Dms,
    /// Decan within the sign: 1, 2 or 3.
    pub decan: u8,
    /// Ruling planet of the decan.
    pub decan_ruler: Planet,
    /// Keywords of the sign.
    pub keywords: &'static [&'static str],
    /// Set by [`zodiac_position_for_date`] when the instant lies outside the
    /// solar model's accuracy window; a bare longitude carries none.
    pub warning: Option<PrecisionWarning>,
}

impl ZodiacPosition {
    /// 0-based sign index (Aries = 0).
    pub fn sign_index(&self) -> u8 {
        self.sign.index()
    }
}

/// Decompose an ecliptic longitude (any value; normalized first).
///
/// `sign = floor(lon / 30)`, `degree_in_sign = lon mod 30`,
/// `decan = floor(degree_in_sign / 10) + 1`.
pub fn zodiac_position(longitude_deg: f64) -> ZodiacPosition {
    let lon = normalize_360(longitude_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = ((lon / SIGN_SPAN_DEG).floor() as u8).min(11);
    let sign = ALL_SIGNS[sign_idx as usize];
    let degree_in_sign = lon - sign.start_longitude_deg();
    let decan = decan_from_degree(degree_in_sign);
    let decan_ruler = decan_ruler(sign, decan);
    debug_assert_ne!(decan_ruler, Planet::Unknown, "decan {decan} out of range");

    ZodiacPosition {
        absolute_longitude_deg: lon,
        sign,
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
        decan,
        decan_ruler,
        keywords: sign.keywords(),
        warning: None,
    }
}

/// Zodiac position of the Sun at a calendar instant.
pub fn zodiac_position_for_date(utc: &UtcTime) -> Result<ZodiacPosition, SolarError> {
    let sl = solar_longitude_for(utc)?;
    Ok(ZodiacPosition {
        warning: sl.warning,
        ..zodiac_position(sl.apparent_longitude_deg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn obliquity_in_sexagesimal() {
        // 23.4392911° = 23° 26' 21.448"
        let d = deg_to_dms(23.439_291_1);
        assert_eq!((d.degrees, d.minutes), (23, 26));
        assert!((d.seconds - 21.448).abs() < 0.001, "{}", d.seconds);
        assert!((dms_to_deg(&d) - 23.439_291_1).abs() < 1e-9);
    }

    #[test]
    fn negative_angle_drops_sign() {
        assert_eq!(deg_to_dms(-12.5), deg_to_dms(12.5));
    }

    #[test]
    fn date_position_carries_warning() {
        let far = zodiac_position_for_date(&UtcTime::date(1200, 6, 1)).unwrap();
        assert!(far.warning.is_some());
        let near = zodiac_position_for_date(&UtcTime::date(2024, 6, 1)).unwrap();
        assert!(near.warning.is_none());
        assert_eq!(near.sign, ZodiacSign::Gemini);
        assert!(zodiac_position(123.0).warning.is_none());
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30'00.00\"");
    }

    #[test]
    fn boundary_0() {
        let p = zodiac_position(0.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert!(p.degree_in_sign.abs() < 1e-10);
        assert_eq!(p.decan, 1);
        assert_eq!(p.decan_ruler, Planet::Mars);
    }

    #[test]
    fn all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let p = zodiac_position(lon);
            assert_eq!(p.sign_index(), i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn mid_sign() {
        let p = zodiac_position(45.5);
        assert_eq!(p.sign, ZodiacSign::Taurus);
        assert!((p.degree_in_sign - 15.5).abs() < 1e-10);
        assert_eq!(p.decan, 2);
        assert_eq!(p.decan_ruler, Planet::Mercury);
        assert_eq!(p.dms.degrees, 15);
        assert_eq!(p.dms.minutes, 30);
    }

    #[test]
    fn wrap_around() {
        let p = zodiac_position(365.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert!((p.degree_in_sign - 5.0).abs() < 1e-10);
    }

    #[test]
    fn negative() {
        let p = zodiac_position(-10.0);
        assert_eq!(p.sign, ZodiacSign::Pisces); // 350 deg
        assert!((p.degree_in_sign - 20.0).abs() < 1e-10);
        assert_eq!(p.decan, 3);
        assert_eq!(p.decan_ruler, Planet::Mars);
    }

    #[test]
    fn just_below_360() {
        let p = zodiac_position(359.999_999_999);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert!(p.degree_in_sign < 30.0);
        assert_eq!(p.decan, 3);
    }

    #[test]
    fn reconstructs_longitude() {
        for i in 0..36_000 {
            let lon = i as f64 * 0.01;
            let p = zodiac_position(lon);
            let back = p.sign_index() as f64 * 30.0 + p.degree_in_sign;
            assert!((back - lon).abs() < 1e-9, "lon={lon} back={back}");
            assert!((0.0..30.0).contains(&p.degree_in_sign));
            assert_eq!(p.decan, (p.degree_in_sign / 10.0).floor() as u8 + 1);
        }
    }

    #[test]
    fn keywords_come_from_sign() {
        let p = zodiac_position(125.0);
        assert_eq!(p.keywords, ZodiacSign::Leo.keywords());
    }
}
