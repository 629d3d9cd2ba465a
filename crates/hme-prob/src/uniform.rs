//! Uniform distribution on a closed interval.

/// Density of `Uniform(lower, upper)` at `x`.
///
/// NaN when `upper <= lower`.
pub fn pdf(x: f64, lower: f64, upper: f64) -> f64 {
    if x.is_nan() || lower.is_nan() || upper.is_nan() {
        return x + lower + upper;
    }
    if upper <= lower {
        return f64::NAN;
    }
    if lower <= x && x <= upper { 1.0 / (upper - lower) } else { 0.0 }
}

/// Bounds are not estimated.
pub fn grad(_x: f64, _lower: f64, _upper: f64) -> [f64; 2] {
    [0.0, 0.0]
}
