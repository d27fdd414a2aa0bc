//! Reverse-time solar longitude search.
//!
//! This crate provides:
//! - Date ranges during which the Sun is at a target longitude
//! - Equinoxes and solstices by closest hourly approach
//! - Per-sign durations from boundary crossings
//! - Exact sign ingresses refined by bisection
//!
//! Scans are fold/reduce passes over lazily evaluated samples and run on
//! the rayon thread pool unless [`ScanConfig::sequential`] is requested.
//! Both paths return identical results.

pub mod cardinal;
pub mod config;
pub mod error;
pub mod ingress;
pub mod longitude_ranges;
pub mod sample;
pub(crate) mod scan;
pub mod sign_duration;
pub mod types;

pub use cardinal::cardinal_points;
pub use config::{
    Cancellation, DEFAULT_TOLERANCE_DEG, IngressConfig, ScanConfig, ScanStep, SearchDirection,
};
pub use error::SearchError;
pub use ingress::{
    next_ingress, next_longitude_crossing, next_specific_ingress, prev_ingress,
    prev_longitude_crossing, prev_specific_ingress, search_ingresses,
};
pub use longitude_ranges::{
    find_longitude_ranges, find_longitude_ranges_between, first_crossing_jd,
};
pub use sign_duration::sign_durations;
pub use types::{
    ALL_CARDINAL_KINDS, CardinalKind, CardinalPoint, CardinalPoints, DateRange, IngressEvent,
    SignDurationTable,
};
