//! The twelve tropical zodiac signs and their traditional attributes.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting from
//! Aries at the vernal equinox (0°).

use std::fmt::{Display, Formatter};

use crate::planet::Planet;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Width of one sign in degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Quality of a sign: where it falls within its season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Modality {
    /// Opens a season (begins at an equinox or solstice).
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl ZodiacSign {
    /// Lowercase key, e.g. `"leo"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Capitalized English name, e.g. `"Leo"`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a 0-based index, `None` above 11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// The following sign (Pisces wraps to Aries).
    pub const fn next(self) -> Self {
        ALL_SIGNS[(self as usize + 1) % 12]
    }

    /// Ecliptic longitude at which the sign begins.
    pub const fn start_longitude_deg(self) -> f64 {
        self as u8 as f64 * SIGN_SPAN_DEG
    }

    /// Element, cycling Fire, Earth, Air, Water from Aries.
    pub const fn element(self) -> Element {
        match self as u8 % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Modality, cycling Cardinal, Fixed, Mutable from Aries.
    pub const fn modality(self) -> Modality {
        match self as u8 % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Traditional domicile ruler.
    pub const fn ruler(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// Short descriptive keywords for the sign.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Aries => &["initiative", "courage", "impulse"],
            Self::Taurus => &["stability", "sensuality", "persistence"],
            Self::Gemini => &["curiosity", "communication", "versatility"],
            Self::Cancer => &["nurture", "home", "memory"],
            Self::Leo => &["vitality", "creativity", "generosity"],
            Self::Virgo => &["analysis", "service", "craft"],
            Self::Libra => &["balance", "harmony", "partnership"],
            Self::Scorpio => &["intensity", "depth", "transformation"],
            Self::Sagittarius => &["exploration", "optimism", "philosophy"],
            Self::Capricorn => &["discipline", "ambition", "structure"],
            Self::Aquarius => &["innovation", "independence", "community"],
            Self::Pisces => &["intuition", "compassion", "imagination"],
        }
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), Some(*s));
        }
        assert_eq!(ZodiacSign::from_index(12), None);
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
            assert_eq!(s.name(), s.display_name().to_lowercase());
            assert_eq!(s.keywords().len(), 3);
        }
    }

    #[test]
    fn elements_follow_triplicities() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Sagittarius.element(), Element::Fire);
        assert_eq!(ZodiacSign::Taurus.element(), Element::Earth);
        assert_eq!(ZodiacSign::Gemini.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn cardinal_signs_start_seasons() {
        let cardinal: Vec<_> = ALL_SIGNS
            .iter()
            .filter(|s| s.modality() == Modality::Cardinal)
            .map(|s| s.start_longitude_deg())
            .collect();
        assert_eq!(cardinal, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(ZodiacSign::Pisces.next(), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::Leo.next(), ZodiacSign::Virgo);
    }

    #[test]
    fn rulers() {
        assert_eq!(ZodiacSign::Leo.ruler(), Planet::Sun);
        assert_eq!(ZodiacSign::Cancer.ruler(), Planet::Moon);
        assert_eq!(ZodiacSign::Aquarius.ruler(), Planet::Saturn);
    }
}
