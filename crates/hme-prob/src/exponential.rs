//! Exponential distribution, parameterized by rate (mean `1/rate`).

/// Density of `Exp(rate)` at `x`. Support: `x >= 0`.
pub fn pdf(x: f64, rate: f64) -> f64 {
    if x.is_nan() || rate.is_nan() {
        return x + rate;
    }
    if rate < 0.0 {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    rate * (-rate * x).exp()
}

/// `[d/drate]` of the density: `(1 - rate x) exp(-rate x)`.
pub fn grad(x: f64, rate: f64) -> [f64; 1] {
    if x < 0.0 {
        return [0.0];
    }
    [(1.0 - rate * x) * (-rate * x).exp()]
}
