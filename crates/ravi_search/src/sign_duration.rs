//! Time the Sun spends in each zodiac sign.

use rayon::prelude::*;
use ravi_time::MAX_YEAR;
use ravi_zodiac::{ALL_SIGNS, ZodiacSign};
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::longitude_ranges::first_crossing_jd;
use crate::sample::SampleGrid;
use crate::types::SignDurationTable;

/// Days from each sign's first boundary crossing in `year` to the next
/// sign's boundary crossing.
///
/// A crossing instant is the midpoint of the first range found for the
/// boundary longitude. When the next boundary's first crossing in `year`
/// does not come after this sign's start (Capricorn into Aquarius, for a
/// January start), it is taken from `year + 1` instead. A boundary with
/// no crossing leaves the affected entries `None`.
pub fn sign_durations(year: i32, config: &ScanConfig) -> Result<SignDurationTable, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let warning = SampleGrid::for_year(year, config.step.days())?.precision_warning();
    if let Some(w) = &warning {
        warn!(year, "{w}");
    }
    let crossings = boundary_crossings(year, config)?;

    let mut durations_days = [None; 12];
    for (i, sign) in ALL_SIGNS.iter().enumerate() {
        let Some(start) = crossings[i] else {
            warn!(year, sign = sign.name(), "no boundary crossing found");
            continue;
        };
        let next = sign.next();
        let end = match crossings[next.index() as usize] {
            Some(end) if end > start => Some(end),
            _ if year < MAX_YEAR - 1 => {
                first_crossing_jd(next.start_longitude_deg(), year + 1, config)?
                    .filter(|&end| end > start)
            }
            _ => None,
        };
        durations_days[i] = end.map(|end| end - start);
    }

    let table = SignDurationTable {
        year,
        durations_days,
        warning,
    };
    debug!(year, total_days = ?table.total_days(), "sign durations");
    Ok(table)
}

fn boundary_crossings(year: i32, config: &ScanConfig) -> Result<Vec<Option<f64>>, SearchError> {
    let crossing = |sign: &ZodiacSign| first_crossing_jd(sign.start_longitude_deg(), year, config);
    if config.parallel {
        ALL_SIGNS.par_iter().map(crossing).collect()
    } else {
        ALL_SIGNS.iter().map(crossing).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_2024() {
        let t = sign_durations(2024, &ScanConfig::daily()).unwrap();
        assert!(t.is_complete());
        for (sign, d) in t.iter() {
            let d = d.unwrap();
            assert!((29.0..=32.0).contains(&d), "{sign}: {d}");
        }
        let total = t.total_days().unwrap();
        assert!((total - 365.2422).abs() < 1.0, "total {total}");
    }

    #[test]
    fn summer_signs_longer_than_winter() {
        let t = sign_durations(2024, &ScanConfig::daily()).unwrap();
        let cancer = t.get(ZodiacSign::Cancer).unwrap();
        let capricorn = t.get(ZodiacSign::Capricorn).unwrap();
        assert!(cancer > capricorn + 1.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let par = sign_durations(2025, &ScanConfig::daily()).unwrap();
        let seq = sign_durations(2025, &ScanConfig::daily().sequential()).unwrap();
        assert_eq!(par, seq);
    }

    #[test]
    fn far_year_carries_warning() {
        let t = sign_durations(1200, &ScanConfig::daily()).unwrap();
        assert!(t.warning.is_some());
        assert!(t.is_complete());
    }

    #[test]
    fn rejects_bad_year() {
        assert!(sign_durations(MAX_YEAR, &ScanConfig::daily()).is_err());
    }
}
