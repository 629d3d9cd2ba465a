//! Weibull distribution with shape `k` and scale `lambda`.

/// Density of `Weibull(shape, scale)` at `x`. Support: `x >= 0`.
///
/// At `x = 0` the density is infinite for `shape < 1`, `1/scale` for
/// `shape == 1`, and zero otherwise.
pub fn pdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x.is_nan() || shape.is_nan() || scale.is_nan() {
        return x + shape + scale;
    }
    if shape <= 0.0 || scale <= 0.0 {
        return f64::NAN;
    }
    if x < 0.0 || !x.is_finite() {
        return 0.0;
    }
    if x == 0.0 && shape < 1.0 {
        return f64::INFINITY;
    }
    let u = x / scale;
    let t = u.powf(shape - 1.0);
    shape * t * (-t * u).exp() / scale
}

/// `[d/dshape, d/dscale]` of the density.
///
/// With `r = (x/scale)^shape`:
/// - `d/dshape = f (1/shape + ln(x/scale) (1 - r))`
/// - `d/dscale = f shape/scale (r - 1)`
pub fn grad(x: f64, shape: f64, scale: f64) -> [f64; 2] {
    if x <= 0.0 || !x.is_finite() {
        return [0.0, 0.0];
    }
    let f = pdf(x, shape, scale);
    let u = x / scale;
    let r = u.powf(shape);
    [f * (1.0 / shape + u.ln() * (1.0 - r)), f * (shape / scale * (r - 1.0))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_value() {
        assert_relative_eq!(pdf(1.1, 1.8, 1.4), 0.554_622_231_832_375_7, max_relative = 1e-12);
    }

    #[test]
    fn test_shape_one_matches_exponential() {
        let rate = 2.0;
        assert_relative_eq!(
            pdf(0.7, 1.0, 1.0 / rate),
            crate::exponential::pdf(0.7, rate),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_boundary_at_zero() {
        assert!(pdf(0.0, 0.5, 1.0).is_infinite());
        assert_relative_eq!(pdf(0.0, 1.0, 4.0), 0.25, epsilon = 1e-15);
        assert_eq!(pdf(0.0, 2.0, 1.0), 0.0);
    }

    #[test]
    fn test_out_of_support() {
        assert_eq!(pdf(-0.1, 2.0, 1.0), 0.0);
        assert_eq!(grad(-0.1, 2.0, 1.0), [0.0, 0.0]);
    }
}
