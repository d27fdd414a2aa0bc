//! Angle helpers shared by the solar model and the searches built on it.

/// Normalize an angle to [0, 360) degrees.
///
/// `((x mod 360) + 360) mod 360`, so negative input wraps forward.
/// Tiny negative input such as `-1e-15` would otherwise round to 360.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Shortest angular distance between two longitudes, in [0, 180].
///
/// `min(d, 360 - d)` on the normalized difference, so 359.99° and 0.01°
/// are 0.02° apart rather than 359.98°.
pub fn angular_distance(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    d.min(360.0 - d)
}
