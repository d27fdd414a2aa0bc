//! Mean anomaly, equation of center and aberration.
//!
//! The equation of center is the difference between the Sun's true
//! (elliptic) longitude and its mean (uniform circular) longitude. Earth
//! moves fastest near perihelion in early January, so the correction peaks
//! at about ±1.915° and vanishes at perihelion and aphelion.
//!
//! Sources: Meeus, *Astronomical Algorithms* 2nd ed., Ch. 25 (mean anomaly
//! and equation-of-center coefficients).

use crate::util::normalize_360;

/// Equation-of-center amplitudes of `sin M`, `sin 2M` and `sin 3M` at `t`.
pub(crate) fn eoc_coefficients(t: f64) -> [f64; 3] {
    [
        1.914_602 - 0.004_817 * t - 0.000_014 * t * t,
        0.019_993 - 0.000_101 * t,
        0.000_289,
    ]
}

/// Rate of the mean anomaly in degrees per Julian century.
pub(crate) const MEAN_ANOMALY_RATE_DEG_PER_CENTURY: f64 = 35_999.050_29;

/// Corrections applied to the mean longitude at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeplerCorrection {
    /// Mean anomaly `M` in degrees [0, 360).
    pub mean_anomaly_deg: f64,
    /// Equation of center in degrees.
    pub equation_of_center_deg: f64,
    /// Aberration (with the dominant nutation term) in degrees.
    pub aberration_deg: f64,
}

impl KeplerCorrection {
    /// Sum of the longitude corrections in degrees.
    pub fn total_deg(&self) -> f64 {
        self.equation_of_center_deg + self.aberration_deg
    }
}

/// Mean anomaly of the Sun in degrees [0, 360).
///
/// `M = 357.52911 + 35999.05029·T − 0.0001537·T²`
pub fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + MEAN_ANOMALY_RATE_DEG_PER_CENTURY * t - 0.000_153_7 * t * t)
}

/// Equation of center in degrees for mean anomaly `m_deg` at `t`.
pub fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let [c1, c2, c3] = eoc_coefficients(t);
    let m = m_deg.to_radians();
    c1 * m.sin() + c2 * (2.0 * m).sin() + c3 * (3.0 * m).sin()
}

/// Aberration correction in degrees, about −20.5″ on average.
///
/// `−0.00569 − 0.00478·sin(259.2° − 1934.134°·T)`; the periodic part
/// follows the Moon's ascending node.
pub fn aberration_deg(t: f64) -> f64 {
    -0.005_69 - 0.004_78 * (259.2 - 1_934.134 * t).to_radians().sin()
}

/// All corrections at `t` Julian centuries since J2000.0.
pub fn kepler_correction(t: f64) -> KeplerCorrection {
    let mean_anomaly_deg = mean_anomaly_deg(t);
    KeplerCorrection {
        mean_anomaly_deg,
        equation_of_center_deg: equation_of_center_deg(t, mean_anomaly_deg),
        aberration_deg: aberration_deg(t),
    }
}
