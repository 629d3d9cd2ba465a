//! Normal distribution.

use crate::math::normal_pdf;

/// Density of `N(mean, sd)` at `x`.
pub fn pdf(x: f64, mean: f64, sd: f64) -> f64 {
    normal_pdf(x, mean, sd)
}

/// `[d/dmean, d/dsd]` of the density.
///
/// With `z = (x - mean)/sd`: `d/dmean = f z/sd`, `d/dsd = f (z^2 - 1)/sd`.
pub fn grad(x: f64, mean: f64, sd: f64) -> [f64; 2] {
    let f = pdf(x, mean, sd);
    let z = (x - mean) / sd;
    [f * z / sd, f * (z * z - 1.0) / sd]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetry() {
        assert_relative_eq!(pdf(1.3, 0.0, 2.0), pdf(-1.3, 0.0, 2.0), epsilon = 1e-15);
    }

    #[test]
    fn test_grad_vanishes_at_mode() {
        let g = grad(0.7, 0.7, 1.5);
        assert_eq!(g[0], 0.0);
        // d/dsd at the mode is -f/sd
        assert_relative_eq!(g[1], -pdf(0.7, 0.7, 1.5) / 1.5, epsilon = 1e-15);
    }
}
