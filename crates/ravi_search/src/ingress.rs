//! Exact solar longitude crossings (sign ingresses) by bisection.
//!
//! A coarse scan steps through time looking for a sign change of
//! `f(t) = normalize_to_pm180(L(t) - target)`, then bisects the bracketing
//! step down to `convergence_days`. The apparent longitude is monotonic, so
//! one root per bracket is guaranteed once wrap-around jumps are excluded.

use ravi_solar::{apparent_longitude_deg, normalize_360, normalize_to_pm180};
use ravi_time::{JulianMoment, UtcTime, jd_to_centuries};
use ravi_zodiac::{SIGN_SPAN_DEG, ZodiacSign, zodiac_position};
use tracing::trace;

use crate::config::{IngressConfig, SearchDirection};
use crate::error::{SearchError, validate_target};
use crate::types::IngressEvent;

/// Maximum scan range in days; every longitude recurs within a year.
const MAX_SCAN_DAYS: f64 = 400.0;

fn longitude_at(jd: f64) -> f64 {
    apparent_longitude_deg(jd_to_centuries(jd))
}

/// Signed offset of the Sun from `target_deg`, in (-180, 180].
fn offset_from_target(target_deg: f64, jd: f64) -> f64 {
    normalize_to_pm180(longitude_at(jd) - target_deg)
}

/// A sign change that is not the ±180° wrap-around jump.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    (f_a <= 0.0) != (f_b <= 0.0) && (f_a - f_b).abs() < 270.0
}

fn sign_index_at(jd: f64) -> u8 {
    ((longitude_at(jd) / SIGN_SPAN_DEG).floor() as u8).min(11)
}

fn bisect_refinement(
    target_deg: f64,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &IngressConfig,
) -> IngressEvent {
    let mut iterations = 0;
    while iterations < config.max_iterations && (t_b - t_a).abs() >= config.convergence_days {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset_from_target(target_deg, t_mid);
        if (f_a <= 0.0) != (f_mid <= 0.0) {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        iterations += 1;
    }
    let jd = 0.5 * (t_a + t_b);
    trace!(target_deg, jd, iterations, "crossing refined");
    make_event(target_deg, jd)
}

fn make_event(target_deg: f64, jd: f64) -> IngressEvent {
    IngressEvent {
        instant: UtcTime::from_jd(jd),
        jd,
        target_longitude_deg: target_deg,
        longitude_deg: longitude_at(jd),
        sign: zodiac_position(target_deg).sign,
        warning: JulianMoment::from_jd(jd).precision_warning(),
    }
}

/// Core scan: step from `jd_start` in `direction` until a crossing of
/// `target_deg` is bracketed, then refine it.
fn find_crossing(
    target_deg: f64,
    jd_start: f64,
    direction: SearchDirection,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let step = match direction {
        SearchDirection::Forward => config.step_size_days,
        SearchDirection::Backward => -config.step_size_days,
    };
    let max_steps = (MAX_SCAN_DAYS / config.step_size_days).ceil() as usize;

    let mut t_prev = jd_start;
    let mut f_prev = offset_from_target(target_deg, t_prev);

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = offset_from_target(target_deg, t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            // Ensure t_a < t_b for bisection
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            return Ok(Some(bisect_refinement(target_deg, t_a, f_a, t_b, config)));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

fn crossing_from(
    target_deg: f64,
    from: &UtcTime,
    direction: SearchDirection,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    validate_target(target_deg)?;
    from.validate()?;
    find_crossing(target_deg, from.to_jd(), direction, config)
}

/// Next instant after `from` at which the Sun reaches `target_deg`.
pub fn next_longitude_crossing(
    target_deg: f64,
    from: &UtcTime,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    crossing_from(target_deg, from, SearchDirection::Forward, config)
}

/// Last instant before `from` at which the Sun reached `target_deg`.
pub fn prev_longitude_crossing(
    target_deg: f64,
    from: &UtcTime,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    crossing_from(target_deg, from, SearchDirection::Backward, config)
}

/// Next time the Sun enters a new sign.
pub fn next_ingress(
    from: &UtcTime,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    from.validate()?;
    let current = sign_index_at(from.to_jd());
    let target = normalize_360(f64::from(current + 1) * SIGN_SPAN_DEG);
    find_crossing(target, from.to_jd(), SearchDirection::Forward, config)
}

/// The ingress that began the sign the Sun is in at `from`.
pub fn prev_ingress(
    from: &UtcTime,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    from.validate()?;
    let current = sign_index_at(from.to_jd());
    let target = f64::from(current) * SIGN_SPAN_DEG;
    find_crossing(target, from.to_jd(), SearchDirection::Backward, config)
}

/// Next time the Sun enters `sign`.
pub fn next_specific_ingress(
    from: &UtcTime,
    sign: ZodiacSign,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    next_longitude_crossing(sign.start_longitude_deg(), from, config)
}

/// Last time the Sun entered `sign` before `from`.
pub fn prev_specific_ingress(
    from: &UtcTime,
    sign: ZodiacSign,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    prev_longitude_crossing(sign.start_longitude_deg(), from, config)
}

/// All sign ingresses in `[start, end]`, in chronological order.
pub fn search_ingresses(
    start: &UtcTime,
    end: &UtcTime,
    config: &IngressConfig,
) -> Result<Vec<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    start.validate()?;
    end.validate()?;
    let (jd_start, jd_end) = (start.to_jd(), end.to_jd());
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events = Vec::new();
    let mut t_prev = jd_start;
    let mut sign_prev = sign_index_at(t_prev);

    loop {
        let t_curr = (t_prev + config.step_size_days).min(jd_end);
        let sign_curr = sign_index_at(t_curr);

        if sign_curr != sign_prev {
            let target = f64::from(sign_curr) * SIGN_SPAN_DEG;
            let f_prev = offset_from_target(target, t_prev);
            let event = bisect_refinement(target, t_prev, f_prev, t_curr, config);
            if event.jd >= jd_start && event.jd <= jd_end {
                events.push(event);
            }
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        sign_prev = sign_curr;
    }

    Ok(events)
}
