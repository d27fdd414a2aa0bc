//! Range detection over sampled arcs.
//!
//! Each arc is classified inside or outside the target, and a two-state
//! machine folds the classifications into `[start, end]` spans. A span
//! opens at the start of its first inside arc and closes at the end of its
//! last one. Folding is associative, so contiguous shards of arcs can be
//! folded independently and merged in order; this is what the rayon path
//! relies on.

use rayon::prelude::*;
use tracing::trace;

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::sample::{SampleArc, SampleGrid};

/// Cancellation is polled once per this many arcs.
const CANCEL_CHECK_INTERVAL: usize = 24;

/// A closed interval of Julian Dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start_jd: f64,
    pub end_jd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Outside,
    Inside { start_jd: f64 },
}

/// Partial result of folding a contiguous run of arcs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeFold {
    spans: Vec<Span>,
    state: ScanState,
    /// Classification of the first arc folded, `None` while empty.
    head_inside: Option<bool>,
    /// End of the last arc folded.
    tail_jd: f64,
}

impl Default for RangeFold {
    fn default() -> Self {
        Self {
            spans: Vec::new(),
            state: ScanState::Outside,
            head_inside: None,
            tail_jd: f64::NAN,
        }
    }
}

impl RangeFold {
    pub(crate) fn push(mut self, arc: &SampleArc, inside: bool) -> Self {
        if self.head_inside.is_none() {
            self.head_inside = Some(inside);
        }
        self.state = match (self.state, inside) {
            (ScanState::Outside, true) => ScanState::Inside {
                start_jd: arc.from.jd,
            },
            (ScanState::Inside { start_jd }, false) => {
                self.spans.push(Span {
                    start_jd,
                    end_jd: self.tail_jd,
                });
                ScanState::Outside
            }
            (state, _) => state,
        };
        self.tail_jd = arc.to.jd;
        self
    }

    /// Append `other`, which must cover the arcs immediately after `self`.
    pub(crate) fn merge(mut self, mut other: Self) -> Self {
        let Some(other_head) = other.head_inside else {
            return self;
        };
        if self.head_inside.is_none() {
            return other;
        }
        if let ScanState::Inside { start_jd } = self.state {
            if other_head {
                // The open span continues into `other`: its first span (or
                // its still-open state) started at the shard boundary.
                match other.spans.first_mut() {
                    Some(first) => first.start_jd = start_jd,
                    None => other.state = ScanState::Inside { start_jd },
                }
            } else {
                self.spans.push(Span {
                    start_jd,
                    end_jd: self.tail_jd,
                });
            }
        }
        self.spans.append(&mut other.spans);
        self.state = other.state;
        self.tail_jd = other.tail_jd;
        self
    }

    /// Close any open span at the end of the last arc.
    pub(crate) fn finish(mut self) -> Vec<Span> {
        if let ScanState::Inside { start_jd } = self.state {
            self.spans.push(Span {
                start_jd,
                end_jd: self.tail_jd,
            });
        }
        self.spans
    }
}

/// All spans of `grid` during which the Sun touches `target_deg`.
pub(crate) fn scan_spans(
    grid: &SampleGrid,
    target_deg: f64,
    config: &ScanConfig,
) -> Result<Vec<Span>, SearchError> {
    let tolerance = config.tolerance_deg;
    let cancel = &config.cancellation;

    let fold = if config.parallel {
        (0..grid.arc_count())
            .into_par_iter()
            .try_fold(RangeFold::default, |acc, i| {
                if i % CANCEL_CHECK_INTERVAL == 0 {
                    cancel.check()?;
                }
                let arc = grid.arc(i);
                Ok::<_, SearchError>(acc.push(&arc, arc.touches(target_deg, tolerance)))
            })
            .try_reduce(RangeFold::default, |a, b| Ok(a.merge(b)))?
    } else {
        grid.arcs()
            .enumerate()
            .try_fold(RangeFold::default(), |acc, (i, arc)| {
                if i % CANCEL_CHECK_INTERVAL == 0 {
                    cancel.check()?;
                }
                Ok::<_, SearchError>(acc.push(&arc, arc.touches(target_deg, tolerance)))
            })?
    };

    let spans = fold.finish();
    trace!(
        target_deg,
        arcs = grid.arc_count(),
        spans = spans.len(),
        parallel = config.parallel,
        "span scan done"
    );
    Ok(spans)
}
