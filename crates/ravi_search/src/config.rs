//! Configuration for longitude scans and crossing refinement.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::SearchError;

/// Default proximity tolerance for range scans, in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 0.01;

/// Sampling interval of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    /// One sample per day at 00:00.
    Daily,
    /// One sample per hour.
    Hourly,
    /// One sample every `n` minutes (1..=1440).
    Minutes(u32),
}

impl ScanStep {
    /// Step length in days.
    pub fn days(self) -> f64 {
        match self {
            Self::Daily => 1.0,
            Self::Hourly => 1.0 / 24.0,
            Self::Minutes(n) => n as f64 / 1440.0,
        }
    }
}

/// Cooperative cancellation for long scans.
///
/// Workers poll [`Cancellation::check`] periodically; once the flag is set
/// or the deadline has passed, the scan stops with an error.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    deadline: Option<Instant>,
    flag: Option<Arc<AtomicBool>>,
}

impl Cancellation {
    /// Never cancels.
    pub fn none() -> Self {
        Self::default()
    }

    /// Stop once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stop once `timeout` has elapsed from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Stop once `flag` is set to `true` by another thread.
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some() || self.flag.is_some()
    }

    /// `Err` if the scan should stop now.
    pub fn check(&self) -> Result<(), SearchError> {
        if self.flag.as_ref().is_some_and(|f| f.load(Ordering::Relaxed)) {
            return Err(SearchError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(SearchError::DeadlineExceeded);
        }
        Ok(())
    }
}

/// Configuration for sampled longitude scans.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Sampling interval.
    pub step: ScanStep,
    /// Proximity band around the target. Only the part exceeding half of a
    /// step's sweep widens ranges; see [`crate::sample::SampleArc::touches`].
    pub tolerance_deg: f64,
    /// Evaluate samples on the rayon thread pool.
    pub parallel: bool,
    /// Deadline and/or flag polled while scanning.
    pub cancellation: Cancellation,
}

impl ScanConfig {
    /// Daily samples at 00:00, 0.01° tolerance, parallel.
    pub fn daily() -> Self {
        Self {
            step: ScanStep::Daily,
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            parallel: true,
            cancellation: Cancellation::none(),
        }
    }

    /// Hourly samples, 0.01° tolerance, parallel.
    pub fn hourly() -> Self {
        Self {
            step: ScanStep::Hourly,
            ..Self::daily()
        }
    }

    pub fn with_step(mut self, step: ScanStep) -> Self {
        self.step = step;
        self
    }

    pub fn with_tolerance(mut self, tolerance_deg: f64) -> Self {
        self.tolerance_deg = tolerance_deg;
        self
    }

    /// Single-threaded evaluation. Results are identical to the parallel path.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if let ScanStep::Minutes(n) = self.step {
            if !(1..=1440).contains(&n) {
                return Err("step minutes must be in 1..=1440");
            }
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg < 0.0 {
            return Err("tolerance_deg must be non-negative");
        }
        if self.tolerance_deg >= 90.0 {
            return Err("tolerance_deg must be below 90");
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::daily()
    }
}

/// Configuration for bisection refinement of a longitude crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressConfig {
    /// Coarse scan step size in days.
    pub step_size_days: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-8, ~0.86 ms).
    pub convergence_days: f64,
}

impl IngressConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        // The Sun covers about one degree per day; a larger step could
        // skip a whole sign boundary pair.
        if self.step_size_days > 10.0 {
            return Err("step_size_days must be at most 10");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-8,
        }
    }
}

/// Direction of a crossing search relative to the starting instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}
