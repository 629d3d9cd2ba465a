//! Location-scale Student-t distribution.

use crate::math::digamma;
use statrs::function::gamma::ln_gamma;

/// Natural log of π.
const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Density at `x` of a Student-t with location `mean`, scale `scale` and `df`
/// degrees of freedom.
///
/// Equal to `(1/scale) dt((x - mean)/scale, df)`.
pub fn pdf(x: f64, mean: f64, scale: f64, df: f64) -> f64 {
    if x.is_nan() || mean.is_nan() || scale.is_nan() || df.is_nan() {
        return x + mean + scale + df;
    }
    if scale <= 0.0 || df <= 0.0 {
        return f64::NAN;
    }

    let z = (x - mean) / scale;
    let a = ln_gamma(0.5 * (df + 1.0)) - ln_gamma(0.5 * df);
    let b = -0.5 * (df.ln() + LN_PI);
    let c = -scale.ln();
    let d = -0.5 * (df + 1.0) * (z * z / df).ln_1p();
    (a + b + c + d).exp()
}

/// `[d/dmean, d/dscale, d/ddf]` of the density.
///
/// With `q = (x - mean)^2` and `s = scale`:
/// - `d/dmean = f (x - mean)(df + 1) / (df s^2 + q)`
/// - `d/dscale = f (-1/s + (df + 1) q / (df s^3 + s q))`
/// - `d/ddf = f/2 (ψ((df+1)/2) - ψ(df/2) - 1/df - ln(1 + q/(df s^2))
///   + (df + 1) q / ((df s)^2 + df q))`
pub fn grad(x: f64, mean: f64, scale: f64, df: f64) -> [f64; 3] {
    let f = pdf(x, mean, scale, df);
    let dev = x - mean;
    let q = dev * dev;
    let s2 = scale * scale;
    let d_mean = f * dev * (df + 1.0) / (df * s2 + q);
    let d_scale = f * (-1.0 / scale + (df + 1.0) * q / (df * s2 * scale + scale * q));
    let d_df = 0.5
        * f
        * (digamma(0.5 * (df + 1.0)) - digamma(0.5 * df) - 1.0 / df - (q / (df * s2)).ln_1p()
            + (df + 1.0) * q / (df * df * s2 + df * q));
    [d_mean, d_scale, d_df]
}
