//! Decans: the three 10° faces of each sign and their ruling planets.
//!
//! Rulers follow the triplicity scheme: the first decan belongs to the
//! sign's own ruler, the second and third to the rulers of the next two
//! signs of the same element. Leo runs Sun (Leo), Jupiter (Sagittarius),
//! Mars (Aries).

use crate::planet::Planet;
use crate::sign::ZodiacSign;

/// Width of one decan in degrees.
pub const DECAN_SPAN_DEG: f64 = 10.0;

/// Decan rulers indexed by `[sign index][decan - 1]`.
#[rustfmt::skip]
static DECAN_RULERS: [[Planet; 3]; 12] = {
    use Planet::*;
    [
        [Mars,    Sun,     Jupiter], // Aries
        [Venus,   Mercury, Saturn ], // Taurus
        [Mercury, Venus,   Saturn ], // Gemini
        [Moon,    Mars,    Jupiter], // Cancer
        [Sun,     Jupiter, Mars   ], // Leo
        [Mercury, Saturn,  Venus  ], // Virgo
        [Venus,   Saturn,  Mercury], // Libra
        [Mars,    Jupiter, Moon   ], // Scorpio
        [Jupiter, Mars,    Sun    ], // Sagittarius
        [Saturn,  Venus,   Mercury], // Capricorn
        [Saturn,  Mercury, Venus  ], // Aquarius
        [Jupiter, Moon,    Mars   ], // Pisces
    ]
};

/// Decan number (1, 2 or 3) for a position within a sign.
pub fn decan_from_degree(degree_in_sign: f64) -> u8 {
    let d = (degree_in_sign / DECAN_SPAN_DEG).floor();
    (d.clamp(0.0, 2.0) as u8) + 1
}

/// Ruling planet of `decan` (1..=3) within `sign`.
///
/// Returns [`Planet::Unknown`] for a decan outside 1..=3; positions built
/// by [`crate::zodiac_position`] never produce one.
pub fn decan_ruler(sign: ZodiacSign, decan: u8) -> Planet {
    match decan {
        1..=3 => DECAN_RULERS[sign.index() as usize][decan as usize - 1],
        _ => Planet::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;

    #[test]
    fn first_decan_is_sign_ruler() {
        for s in ALL_SIGNS {
            assert_eq!(decan_ruler(s, 1), s.ruler(), "{s}");
        }
    }

    #[test]
    fn later_decans_follow_element() {
        for s in ALL_SIGNS {
            let second = ZodiacSign::from_index((s.index() + 4) % 12).unwrap();
            let third = ZodiacSign::from_index((s.index() + 8) % 12).unwrap();
            assert_eq!(decan_ruler(s, 2), second.ruler(), "{s} decan 2");
            assert_eq!(decan_ruler(s, 3), third.ruler(), "{s} decan 3");
        }
    }

    #[test]
    fn leo_decans() {
        assert_eq!(decan_ruler(ZodiacSign::Leo, 1), Planet::Sun);
        assert_eq!(decan_ruler(ZodiacSign::Leo, 2), Planet::Jupiter);
        assert_eq!(decan_ruler(ZodiacSign::Leo, 3), Planet::Mars);
    }

    #[test]
    fn out_of_range_decan_is_unknown() {
        assert_eq!(decan_ruler(ZodiacSign::Aries, 0), Planet::Unknown);
        assert_eq!(decan_ruler(ZodiacSign::Aries, 4), Planet::Unknown);
    }

    #[test]
    fn decan_boundaries() {
        assert_eq!(decan_from_degree(0.0), 1);
        assert_eq!(decan_from_degree(9.999), 1);
        assert_eq!(decan_from_degree(10.0), 2);
        assert_eq!(decan_from_degree(19.5), 2);
        assert_eq!(decan_from_degree(20.0), 3);
        assert_eq!(decan_from_degree(29.999_999), 3);
    }
}
