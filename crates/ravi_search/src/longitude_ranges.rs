//! Date ranges during which the Sun is at a target longitude.

use ravi_time::UtcTime;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::{SearchError, validate_target};
use crate::sample::SampleGrid;
use crate::scan::scan_spans;
use crate::types::DateRange;

/// Ranges within calendar year `year` during which the Sun is at or
/// passing through `target_deg`.
///
/// Samples run from Jan 1 00:00 of `year` through Jan 1 00:00 of the next
/// year at `config.step`. Ranges are chronological and disjoint; an empty
/// result means no match, not an error.
pub fn find_longitude_ranges(
    target_deg: f64,
    year: i32,
    config: &ScanConfig,
) -> Result<Vec<DateRange>, SearchError> {
    validate_target(target_deg)?;
    config.validate().map_err(SearchError::InvalidConfig)?;
    let grid = SampleGrid::for_year(year, config.step.days())?;
    let ranges = ranges_on_grid(&grid, target_deg, config)?;
    debug!(target_deg, year, ranges = ranges.len(), "longitude ranges found");
    Ok(ranges)
}

/// As [`find_longitude_ranges`], over an arbitrary window `[start, end]`.
pub fn find_longitude_ranges_between(
    target_deg: f64,
    start: &UtcTime,
    end: &UtcTime,
    config: &ScanConfig,
) -> Result<Vec<DateRange>, SearchError> {
    validate_target(target_deg)?;
    config.validate().map_err(SearchError::InvalidConfig)?;
    start.validate()?;
    end.validate()?;
    let (start_jd, end_jd) = (start.to_jd(), end.to_jd());
    if end_jd <= start_jd {
        return Ok(Vec::new());
    }
    let grid = SampleGrid::new(start_jd, end_jd, config.step.days());
    ranges_on_grid(&grid, target_deg, config)
}

/// Instant at which the Sun first crosses `target_deg` in `year`: the
/// midpoint of the first matching range.
pub fn first_crossing_jd(
    target_deg: f64,
    year: i32,
    config: &ScanConfig,
) -> Result<Option<f64>, SearchError> {
    Ok(find_longitude_ranges(target_deg, year, config)?
        .first()
        .map(DateRange::midpoint_jd))
}

fn ranges_on_grid(
    grid: &SampleGrid,
    target_deg: f64,
    config: &ScanConfig,
) -> Result<Vec<DateRange>, SearchError> {
    if let Some(w) = grid.precision_warning() {
        warn!(target_deg, "{w}");
    }
    Ok(scan_spans(grid, target_deg, config)?
        .into_iter()
        .map(|s| DateRange::from_jd(s.start_jd, s.end_jd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravi_time::TimeError;

    #[test]
    fn equinox_2024_single_range() {
        let ranges = find_longitude_ranges(0.0, 2024, &ScanConfig::daily()).unwrap();
        assert_eq!(ranges.len(), 1);
        let r = ranges[0];
        assert_eq!(r.start, UtcTime::date(2024, 3, 20));
        assert_eq!(r.end, UtcTime::date(2024, 3, 21));
        assert!((r.duration_hours() - 24.0).abs() < 1e-6);
    }

    #[test]
    fn ranges_chronological_and_disjoint() {
        let ranges =
            find_longitude_ranges(123.4, 2030, &ScanConfig::hourly().with_tolerance(1.0)).unwrap();
        assert!(!ranges.is_empty());
        for r in &ranges {
            assert!(r.end_jd > r.start_jd);
        }
        for w in ranges.windows(2) {
            assert!(w[0].end_jd < w[1].start_jd);
        }
    }

    #[test]
    fn wide_tolerance_lengthens_range() {
        let narrow = find_longitude_ranges(200.0, 2024, &ScanConfig::daily()).unwrap();
        let wide =
            find_longitude_ranges(200.0, 2024, &ScanConfig::daily().with_tolerance(5.0)).unwrap();
        assert_eq!(narrow.len(), 1);
        assert_eq!(wide.len(), 1);
        assert!(wide[0].duration_days() > narrow[0].duration_days() + 6.0);
        assert!(wide[0].start_jd < narrow[0].start_jd);
        assert!(wide[0].end_jd > narrow[0].end_jd);
    }

    #[test]
    fn between_window_without_match_is_empty() {
        let ranges = find_longitude_ranges_between(
            0.0,
            &UtcTime::date(2024, 6, 1),
            &UtcTime::date(2024, 7, 1),
            &ScanConfig::hourly(),
        )
        .unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn between_window_finds_solstice() {
        let ranges = find_longitude_ranges_between(
            90.0,
            &UtcTime::date(2024, 6, 1),
            &UtcTime::date(2024, 7, 1),
            &ScanConfig::hourly(),
        )
        .unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start.month, 6);
        assert_eq!(ranges[0].start.day, 20);
    }

    #[test]
    fn first_crossing_midpoint() {
        let jd = first_crossing_jd(0.0, 2024, &ScanConfig::daily())
            .unwrap()
            .unwrap();
        assert!((jd - 2_460_390.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let c = ScanConfig::daily();
        assert_eq!(
            find_longitude_ranges(360.0, 2024, &c),
            Err(SearchError::InvalidTarget(360.0))
        );
        assert!(matches!(
            find_longitude_ranges(f64::NAN, 2024, &c),
            Err(SearchError::InvalidTarget(_))
        ));
        assert_eq!(
            find_longitude_ranges(10.0, 12_000, &c),
            Err(SearchError::Time(TimeError::YearOutOfRange(12_000)))
        );
        assert!(matches!(
            find_longitude_ranges(10.0, 2024, &c.clone().with_tolerance(-1.0)),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
