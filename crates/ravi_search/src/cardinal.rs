//! Equinoxes and solstices by closest sampled approach.

use rayon::prelude::*;
use ravi_solar::angular_distance;
use ravi_time::UtcTime;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::sample::{Sample, SampleGrid};
use crate::types::{ALL_CARDINAL_KINDS, CardinalPoint, CardinalPoints};

const CANCEL_CHECK_INTERVAL: usize = 24;

#[derive(Debug, Clone, Copy)]
struct Closest {
    jd: f64,
    longitude_deg: f64,
    distance_deg: f64,
}

impl Closest {
    const NONE: Self = Self {
        jd: f64::INFINITY,
        longitude_deg: f64::NAN,
        distance_deg: f64::INFINITY,
    };

    /// Strictly closer, or equally close and earlier.
    fn beats(&self, other: &Self) -> bool {
        self.distance_deg < other.distance_deg
            || (self.distance_deg == other.distance_deg && self.jd < other.jd)
    }
}

/// Running argmin for all four cardinal longitudes at once.
#[derive(Debug, Clone, Copy)]
struct CardinalFold([Closest; 4]);

impl Default for CardinalFold {
    fn default() -> Self {
        Self([Closest::NONE; 4])
    }
}

impl CardinalFold {
    fn offer(mut self, sample: Sample) -> Self {
        for (best, kind) in self.0.iter_mut().zip(ALL_CARDINAL_KINDS) {
            let candidate = Closest {
                jd: sample.jd,
                longitude_deg: sample.longitude_deg,
                distance_deg: angular_distance(sample.longitude_deg, kind.target_longitude_deg()),
            };
            if candidate.beats(best) {
                *best = candidate;
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for (best, candidate) in self.0.iter_mut().zip(other.0) {
            if candidate.beats(best) {
                *best = candidate;
            }
        }
        self
    }
}

/// Spring equinox, summer solstice, autumn equinox and winter solstice of
/// `year`, each the sample closest to 0°, 90°, 180° and 270°.
///
/// Samples run from Jan 1 00:00 at `config.step` up to (not including)
/// Jan 1 of the next year. Ties resolve to the earlier sample. Use
/// [`ScanConfig::hourly`] for hour resolution; `tolerance_deg` is unused.
pub fn cardinal_points(year: i32, config: &ScanConfig) -> Result<CardinalPoints, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let grid = SampleGrid::for_year(year, config.step.days())?;
    let warning = grid.precision_warning();
    if let Some(w) = &warning {
        warn!(year, "{w}");
    }
    let cancel = &config.cancellation;

    let fold = if config.parallel {
        (0..grid.arc_count())
            .into_par_iter()
            .try_fold(CardinalFold::default, |acc, i| {
                if i % CANCEL_CHECK_INTERVAL == 0 {
                    cancel.check()?;
                }
                Ok::<_, SearchError>(acc.offer(grid.sample(i)))
            })
            .try_reduce(CardinalFold::default, |a, b| Ok(a.merge(b)))?
    } else {
        grid.samples()
            .take(grid.arc_count())
            .enumerate()
            .try_fold(CardinalFold::default(), |acc, (i, sample)| {
                if i % CANCEL_CHECK_INTERVAL == 0 {
                    cancel.check()?;
                }
                Ok::<_, SearchError>(acc.offer(sample))
            })?
    };

    let [spring, summer, autumn, winter] = ALL_CARDINAL_KINDS.map(|kind| {
        let c = fold.0[kind.index()];
        CardinalPoint {
            kind,
            instant: UtcTime::from_jd(c.jd),
            jd: c.jd,
            longitude_deg: c.longitude_deg,
            distance_deg: c.distance_deg,
        }
    });
    debug!(
        year,
        spring = %spring.instant,
        summer = %summer.instant,
        autumn = %autumn.instant,
        winter = %winter.instant,
        "cardinal points"
    );
    Ok(CardinalPoints {
        year,
        spring_equinox: spring,
        summer_solstice: summer,
        autumn_equinox: autumn,
        winter_solstice: winter,
        warning,
    })
}
