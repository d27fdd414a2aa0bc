//! Lazily evaluated longitude samples over a time window.

use ravi_solar::{apparent_longitude_deg, normalize_360};
use ravi_time::{
    JulianMoment, MAX_YEAR, MIN_YEAR, PrecisionWarning, TimeError, UtcTime, jd_to_centuries,
};

use crate::error::SearchError;

/// Apparent solar longitude at one sampled instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub jd: f64,
    pub longitude_deg: f64,
}

impl Sample {
    pub fn at(jd: f64) -> Self {
        Self {
            jd,
            longitude_deg: apparent_longitude_deg(jd_to_centuries(jd)),
        }
    }
}

/// Two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleArc {
    pub from: Sample,
    pub to: Sample,
}

impl SampleArc {
    /// Forward angular sweep from `from` to `to`, in [0, 360).
    pub fn sweep_deg(&self) -> f64 {
        normalize_360(self.to.longitude_deg - self.from.longitude_deg)
    }

    /// Whether the Sun is at or passing through `target_deg` during this arc.
    ///
    /// The arc claims the half-open longitude window `[from − w, to + w)`,
    /// where `w` is the part of `tolerance_deg` exceeding half the sweep.
    /// With `w = 0` consecutive arcs partition the circle, so a crossing
    /// belongs to exactly one arc even when a sample lands on the target.
    /// A wider tolerance grows the window symmetrically and the matching
    /// arcs stay contiguous.
    pub fn touches(&self, target_deg: f64, tolerance_deg: f64) -> bool {
        let sweep = self.sweep_deg();
        let widen = (tolerance_deg - 0.5 * sweep).max(0.0);
        let window = sweep + 2.0 * widen;
        window >= 360.0 || normalize_360(target_deg - (self.from.longitude_deg - widen)) < window
    }
}

/// Evenly spaced instants from `start_jd` to `end_jd` inclusive.
///
/// The last step is shortened when the window is not a whole number of
/// steps, so the final sample always lands exactly on `end_jd`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    arc_count: usize,
}

impl SampleGrid {
    pub fn new(start_jd: f64, end_jd: f64, step_days: f64) -> Self {
        let span = (end_jd - start_jd).max(0.0);
        let arc_count = ((span / step_days) - 1e-9).ceil().max(1.0) as usize;
        Self {
            start_jd,
            end_jd,
            step_days,
            arc_count,
        }
    }

    /// Grid spanning Jan 1 00:00 of `year` through Jan 1 00:00 of `year + 1`.
    pub fn for_year(year: i32, step_days: f64) -> Result<Self, SearchError> {
        let (start, end) = year_bounds_jd(year)?;
        Ok(Self::new(start, end, step_days))
    }

    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    pub fn end_jd(&self) -> f64 {
        self.end_jd
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn sample_count(&self) -> usize {
        self.arc_count + 1
    }

    /// Instant of sample `i`.
    pub fn jd_at(&self, i: usize) -> f64 {
        if i >= self.arc_count {
            self.end_jd
        } else {
            self.start_jd + i as f64 * self.step_days
        }
    }

    pub fn sample(&self, i: usize) -> Sample {
        Sample::at(self.jd_at(i))
    }

    /// Arc from sample `i` to sample `i + 1`.
    pub fn arc(&self, i: usize) -> SampleArc {
        SampleArc {
            from: self.sample(i),
            to: self.sample(i + 1),
        }
    }

    /// Accuracy warning for whichever end of the window lies farther from
    /// J2000.0.
    pub fn precision_warning(&self) -> Option<PrecisionWarning> {
        let start = JulianMoment::from_jd(self.start_jd);
        let end = JulianMoment::from_jd(self.end_jd);
        if end.centuries.abs() > start.centuries.abs() {
            end.precision_warning()
        } else {
            start.precision_warning()
        }
    }

    /// All samples in order, evaluated on demand.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.sample_count()).map(|i| self.sample(i))
    }

    /// All arcs in order, each sample evaluated once.
    pub fn arcs(&self) -> impl Iterator<Item = SampleArc> + '_ {
        let mut samples = self.samples();
        let first = samples.next();
        samples.scan(first, |prev, to| {
            let from = prev.replace(to)?;
            Some(SampleArc { from, to })
        })
    }
}

/// Julian Dates of Jan 1 00:00 of `year` and of `year + 1`.
pub(crate) fn year_bounds_jd(year: i32) -> Result<(f64, f64), SearchError> {
    if !(MIN_YEAR..MAX_YEAR).contains(&year) {
        return Err(TimeError::YearOutOfRange(year).into());
    }
    Ok((
        UtcTime::start_of_year(year).to_jd(),
        UtcTime::start_of_year(year + 1).to_jd(),
    ))
}
