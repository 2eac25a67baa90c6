/// Rounds half away from zero to `decimals` places.
#[inline]
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Human-friendly step size (1, 2, 5, 10, 20, 50...) splitting `range`
/// into roughly `target_count` pieces. Never below `min_step`.
pub fn calculate_adaptive_step(range: f64, target_count: f64, min_step: f64) -> f64 {
    if !(range.is_finite() && range > 0.0) {
        return min_step;
    }
    let raw_step = range / target_count.max(1.0);
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    (nice_step * mag).max(min_step)
}
