//! Truncated normal and measurement-error observation models.
//!
//! The measurement-error forms follow Satten and Longini: a latent value
//! (truncated normal, or uniform) is observed with additive
//! `N(meanerr, sderr)` noise, and the marginal density has a closed form.
//! None of these has an analytic parameter gradient.

use crate::math::{normal_cdf, normal_pdf};

/// Density of `N(mean, sd)` truncated to `[lower, upper]`.
///
/// Infinite bounds are allowed. Zero outside the bounds.
pub fn pdf(x: f64, mean: f64, sd: f64, lower: f64, upper: f64) -> f64 {
    if x < lower || x > upper {
        return 0.0;
    }
    let mass = normal_cdf(upper, mean, sd) - normal_cdf(lower, mean, sd);
    normal_pdf(x, mean, sd) / mass
}

/// Density of `latent + e`, latent truncated `N(mean, sd)` on `[lower, upper]`,
/// `e ~ N(meanerr, sderr)`.
///
/// The untruncated convolution `N(mean + meanerr, sqrt(sd^2 + sderr^2))` is
/// reweighted by the posterior mass of the latent value inside the bounds
/// over its prior mass.
pub fn me_pdf(x: f64, mean: f64, sd: f64, lower: f64, upper: f64, sderr: f64, meanerr: f64) -> f64 {
    let var = sd * sd + sderr * sderr;
    let post_sd = sd * sderr / var.sqrt();
    let post_mean = ((x - meanerr) * sd * sd + mean * sderr * sderr) / var;
    let prior_mass = normal_cdf(upper, mean, sd) - normal_cdf(lower, mean, sd);
    let post_mass = normal_cdf(upper, post_mean, post_sd) - normal_cdf(lower, post_mean, post_sd);
    post_mass / prior_mass * normal_pdf(x, meanerr + mean, var.sqrt())
}

/// Density of `latent + e`, latent `Uniform(lower, upper)`, `e ~ N(meanerr, sderr)`.
pub fn me_uniform_pdf(x: f64, lower: f64, upper: f64, sderr: f64, meanerr: f64) -> f64 {
    (normal_cdf(x, meanerr + lower, sderr) - normal_cdf(x, meanerr + upper, sderr))
        / (upper - lower)
}
