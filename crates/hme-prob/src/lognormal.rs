//! Log-normal distribution (`ln X ~ N(meanlog, sdlog)`).

use crate::math::normal_pdf;

/// Density of `LogNormal(meanlog, sdlog)` at `x`. Support: `x > 0`.
pub fn pdf(x: f64, meanlog: f64, sdlog: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return if sdlog < 0.0 { f64::NAN } else { 0.0 };
    }
    normal_pdf(x.ln(), meanlog, sdlog) / x
}

/// `[d/dmeanlog, d/dsdlog]` of the density.
pub fn grad(x: f64, meanlog: f64, sdlog: f64) -> [f64; 2] {
    if x <= 0.0 {
        return [0.0, 0.0];
    }
    let f = pdf(x, meanlog, sdlog);
    let z = (x.ln() - meanlog) / sdlog;
    [f * z / sdlog, f * (z * z - 1.0) / sdlog]
}
