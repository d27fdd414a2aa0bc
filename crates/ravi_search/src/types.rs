//! Result types for longitude searches.

use ravi_time::{JulianMoment, PrecisionWarning, UtcTime};
use ravi_zodiac::{ALL_SIGNS, ZodiacSign};

/// A contiguous interval during which the Sun's longitude was at or
/// passing through a target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    pub start: UtcTime,
    pub end: UtcTime,
    pub start_jd: f64,
    pub end_jd: f64,
    /// Set when the range's midpoint lies outside the model's accuracy window.
    pub warning: Option<PrecisionWarning>,
}

impl DateRange {
    pub fn from_jd(start_jd: f64, end_jd: f64) -> Self {
        let midpoint = 0.5 * (start_jd + end_jd);
        Self {
            start: UtcTime::from_jd(start_jd),
            end: UtcTime::from_jd(end_jd),
            start_jd,
            end_jd,
            warning: JulianMoment::from_jd(midpoint).precision_warning(),
        }
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_days() * 24.0
    }

    /// Centre of the range, taken as the crossing instant.
    pub fn midpoint_jd(&self) -> f64 {
        0.5 * (self.start_jd + self.end_jd)
    }

    pub fn contains_jd(&self, jd: f64) -> bool {
        (self.start_jd..=self.end_jd).contains(&jd)
    }
}

/// One of the four equinox/solstice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardinalKind {
    SpringEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

/// All four kinds in longitude order (0°, 90°, 180°, 270°).
pub const ALL_CARDINAL_KINDS: [CardinalKind; 4] = [
    CardinalKind::SpringEquinox,
    CardinalKind::SummerSolstice,
    CardinalKind::AutumnEquinox,
    CardinalKind::WinterSolstice,
];

impl CardinalKind {
    pub const fn target_longitude_deg(self) -> f64 {
        match self {
            Self::SpringEquinox => 0.0,
            Self::SummerSolstice => 90.0,
            Self::AutumnEquinox => 180.0,
            Self::WinterSolstice => 270.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "spring equinox",
            Self::SummerSolstice => "summer solstice",
            Self::AutumnEquinox => "autumn equinox",
            Self::WinterSolstice => "winter solstice",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Sampled instant of closest approach to a cardinal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardinalPoint {
    pub kind: CardinalKind,
    pub instant: UtcTime,
    pub jd: f64,
    /// Apparent longitude at `instant`.
    pub longitude_deg: f64,
    /// Wrapped distance from the target longitude.
    pub distance_deg: f64,
}

/// The equinoxes and solstices of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardinalPoints {
    pub year: i32,
    pub spring_equinox: CardinalPoint,
    pub summer_solstice: CardinalPoint,
    pub autumn_equinox: CardinalPoint,
    pub winter_solstice: CardinalPoint,
    /// Set when the year lies outside the model's accuracy window.
    pub warning: Option<PrecisionWarning>,
}

impl CardinalPoints {
    pub fn get(&self, kind: CardinalKind) -> &CardinalPoint {
        match kind {
            CardinalKind::SpringEquinox => &self.spring_equinox,
            CardinalKind::SummerSolstice => &self.summer_solstice,
            CardinalKind::AutumnEquinox => &self.autumn_equinox,
            CardinalKind::WinterSolstice => &self.winter_solstice,
        }
    }

    pub fn as_array(&self) -> [CardinalPoint; 4] {
        [
            self.spring_equinox,
            self.summer_solstice,
            self.autumn_equinox,
            self.winter_solstice,
        ]
    }
}

/// Days the Sun spends in each sign, starting from crossings in one year.
///
/// An entry is `None` when a boundary crossing could not be located.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignDurationTable {
    pub year: i32,
    /// Indexed by sign (Aries = 0).
    pub durations_days: [Option<f64>; 12],
    pub warning: Option<PrecisionWarning>,
}

impl SignDurationTable {
    pub fn get(&self, sign: ZodiacSign) -> Option<f64> {
        self.durations_days[sign.index() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZodiacSign, Option<f64>)> + '_ {
        ALL_SIGNS.iter().copied().zip(self.durations_days.iter().copied())
    }

    /// Sum of all durations, or `None` if any entry is missing.
    pub fn total_days(&self) -> Option<f64> {
        self.durations_days.iter().copied().sum()
    }

    pub fn is_complete(&self) -> bool {
        self.durations_days.iter().all(Option::is_some)
    }
}

/// The Sun crossing a target longitude, refined by bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IngressEvent {
    pub instant: UtcTime,
    pub jd: f64,
    pub target_longitude_deg: f64,
    /// Apparent longitude at the refined instant.
    pub longitude_deg: f64,
    /// Sign containing the target longitude; for a boundary target this is
    /// the sign being entered.
    pub sign: ZodiacSign,
    pub warning: Option<PrecisionWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_duration() {
        let r = DateRange::from_jd(2_460_389.5, 2_460_390.5);
        assert!((r.duration_hours() - 24.0).abs() < 1e-9);
        assert!((r.midpoint_jd() - 2_460_390.0).abs() < 1e-9);
        assert_eq!(r.start, UtcTime::date(2024, 3, 20));
        assert_eq!(r.end, UtcTime::date(2024, 3, 21));
        assert!(r.contains_jd(2_460_390.0));
        assert!(!r.contains_jd(2_460_391.0));
        assert!(r.warning.is_none());
    }

    #[test]
    fn date_range_far_from_epoch_carries_warning() {
        // 1200-03-15
        let r = DateRange::from_jd(2_159_424.5, 2_159_425.5);
        let w = r.warning.unwrap();
        assert!(w.centuries < -7.9 && w.centuries > -8.1, "{w:?}");
    }

    #[test]
    fn cardinal_kind_targets() {
        for (i, k) in ALL_CARDINAL_KINDS.iter().enumerate() {
            assert_eq!(k.index(), i);
            assert!((k.target_longitude_deg() - 90.0 * i as f64).abs() < 1e-12);
        }
        assert_eq!(CardinalKind::WinterSolstice.name(), "winter solstice");
    }

    #[test]
    fn duration_table_total() {
        let mut t = SignDurationTable {
            year: 2024,
            durations_days: [Some(30.0); 12],
            warning: None,
        };
        assert!(t.is_complete());
        assert!((t.total_days().unwrap() - 360.0).abs() < 1e-9);
        assert_eq!(t.get(ZodiacSign::Leo), Some(30.0));

        t.durations_days[3] = None;
        assert!(!t.is_complete());
        assert_eq!(t.total_days(), None);
        assert_eq!(t.get(ZodiacSign::Cancer), None);
        assert_eq!(t.iter().filter(|(_, d)| d.is_none()).count(), 1);
    }
}
