//! Apparent ecliptic longitude of the Sun.
//!
//! This crate provides:
//! - A VSOP87-style truncated periodic series for the mean longitude
//! - Mean anomaly, equation of center and aberration corrections
//! - Composition into the apparent longitude, normalized to [0, 360)
//! - A closed-form estimate of the Sun's apparent angular speed
//!
//! Design accuracy is ±0.01° within five centuries of J2000.0. Every
//! function here is pure and deterministic; nothing holds mutable state.

pub mod apparent;
pub mod error;
pub mod kepler;
pub mod series;
pub mod speed;
pub mod util;

pub use apparent::{SolarLongitude, apparent_longitude_deg, solar_longitude, solar_longitude_for};
pub use error::SolarError;
pub use kepler::{
    KeplerCorrection, aberration_deg, equation_of_center_deg, kepler_correction, mean_anomaly_deg,
};
pub use series::{evaluate_series, mean_longitude_deg};
pub use speed::{
    MEAN_DAILY_MOTION_DEG, SolarSpeed, TROPICAL_YEAR_DAYS, solar_speed, solar_speed_deg_per_day,
};
pub use util::{angular_distance, normalize_360, normalize_to_pm180};
