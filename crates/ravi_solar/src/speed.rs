//! Instantaneous apparent angular speed of the Sun.
//!
//! Closed-form: the mean rate of one tropical year plus the time derivative
//! of the equation of center,
//!
//! ```text
//! dλ/dt ≈ 360/365.2422 + (c1·cos M + 2·c2·cos 2M + 3·c3·cos 3M) · dM/dt
//! ```
//!
//! with `dM/dt` in radians per day. Fastest near perihelion (~1.019°/day in
//! early January), slowest near aphelion (~0.953°/day in early July).

use ravi_time::{DAYS_PER_CENTURY, JulianMoment, PrecisionWarning, UtcTime};
use tracing::warn;

use crate::error::SolarError;
use crate::kepler::{MEAN_ANOMALY_RATE_DEG_PER_CENTURY, eoc_coefficients, mean_anomaly_deg};

/// Tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_2;

/// Mean solar motion in degrees per day.
pub const MEAN_DAILY_MOTION_DEG: f64 = 360.0 / TROPICAL_YEAR_DAYS;

/// Apparent speed estimate at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarSpeed {
    /// Apparent angular velocity in degrees per day.
    pub deg_per_day: f64,
    /// Mean anomaly the estimate was evaluated at, degrees [0, 360).
    pub mean_anomaly_deg: f64,
    pub warning: Option<PrecisionWarning>,
}

/// Apparent solar speed in degrees/day at `t` Julian centuries since J2000.0.
pub fn solar_speed_deg_per_day(t: f64) -> f64 {
    eoc_rate(t, mean_anomaly_deg(t)) + MEAN_DAILY_MOTION_DEG
}

/// Validate a calendar instant and estimate the Sun's apparent speed.
pub fn solar_speed(utc: &UtcTime) -> Result<SolarSpeed, SolarError> {
    let moment = JulianMoment::from_utc(utc)?;
    let t = moment.centuries;
    let m = mean_anomaly_deg(t);
    let warning = moment.precision_warning();
    if let Some(w) = &warning {
        warn!(jd = moment.julian_day, "solar speed outside accuracy window: {w}");
    }
    Ok(SolarSpeed {
        deg_per_day: MEAN_DAILY_MOTION_DEG + eoc_rate(t, m),
        mean_anomaly_deg: m,
        warning,
    })
}

/// Time derivative of the equation of center in degrees per day.
fn eoc_rate(t: f64, m_deg: f64) -> f64 {
    let [c1, c2, c3] = eoc_coefficients(t);
    let m = m_deg.to_radians();
    let dm_dt = (MEAN_ANOMALY_RATE_DEG_PER_CENTURY / DAYS_PER_CENTURY).to_radians();
    (c1 * m.cos() + 2.0 * c2 * (2.0 * m).cos() + 3.0 * c3 * (3.0 * m).cos()) * dm_dt
}
