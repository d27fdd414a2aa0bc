//! Zodiacal decomposition of ecliptic longitude.
//!
//! This crate provides:
//! - The 12 tropical signs with element, modality, ruler and keywords
//! - Decans (10° faces) and their triplicity rulers
//! - `zodiac_position`: sign, degree-in-sign, DMS, decan and decan ruler
//! - `zodiac_position_for_date`: the same for the Sun at a calendar instant
//!
//! Lookup tables are immutable statics; every function is pure.

pub mod decan;
pub mod planet;
pub mod position;
pub mod sign;

pub use decan::{DECAN_SPAN_DEG, decan_from_degree, decan_ruler};
pub use planet::Planet;
pub use position::{
    Dms, ZodiacPosition, deg_to_dms, dms_to_deg, zodiac_position, zodiac_position_for_date,
};
pub use sign::{ALL_SIGNS, Element, Modality, SIGN_SPAN_DEG, ZodiacSign};
