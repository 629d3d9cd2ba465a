//! The closed catalogue of emission distribution families.
//!
//! A [`Variant`] fixes the meaning of every position in a parameter vector.
//! The metadata here (names, structural slots, natural domains) is what a host
//! engine needs to lay out its own parameter table and choose link functions.

use std::fmt;
use std::str::FromStr;

use hme_core::Error;
use serde::{Deserialize, Serialize};

/// Natural domain of a single parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDomain {
    /// Any real number, infinities included (truncation bounds).
    Real,
    /// `(0, +inf)`.
    Positive,
    /// `[0, +inf)`.
    NonNegative,
    /// `[0, 1]`.
    Probability,
}

impl ParamDomain {
    /// Whether `value` lies in the domain. NaN never does.
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::Real => !value.is_nan(),
            Self::Positive => value > 0.0,
            Self::NonNegative => value >= 0.0,
            Self::Probability => (0.0..=1.0).contains(&value),
        }
    }

    /// Domain as a `(min, max)` pair.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Real => (f64::NEG_INFINITY, f64::INFINITY),
            Self::Positive | Self::NonNegative => (0.0, f64::INFINITY),
            Self::Probability => (0.0, 1.0),
        }
    }
}

/// One member of the supported emission distribution families.
///
/// Parameter order per variant is fixed; see [`Variant::param_names`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `[ncats, basecat, p_1, ..., p_ncats]`
    Categorical,
    /// `[value]`
    Identity,
    /// `[lower, upper]`
    Uniform,
    /// `[mean, sd]`
    Normal,
    /// `[meanlog, sdlog]`
    LogNormal,
    /// `[rate]`
    Exponential,
    /// `[shape, rate]`
    Gamma,
    /// `[shape, scale]`
    Weibull,
    /// `[lambda]`
    Poisson,
    /// `[size, prob]`
    Binomial,
    /// `[size, meanp, sdp]`
    #[serde(rename = "betabinom")]
    BetaBinomial,
    /// `[mean, sd, lower, upper]`
    #[serde(rename = "truncnorm")]
    TruncatedNormal,
    /// `[mean, sd, lower, upper, sderr, meanerr]`
    #[serde(rename = "metruncnorm")]
    MeTruncatedNormal,
    /// `[lower, upper, sderr, meanerr]`
    #[serde(rename = "meuniform")]
    MeUniform,
    /// `[size, prob]`
    #[serde(rename = "nbinom")]
    NegativeBinomial,
    /// `[shape1, shape2]`
    Beta,
    /// `[mean, scale, df]`
    #[serde(rename = "t")]
    StudentT,
    /// `[size, prob, pi]`
    #[serde(rename = "zinbinom")]
    ZeroInflatedNegativeBinomial,
}

impl Variant {
    /// Every variant, in catalogue order.
    pub const ALL: [Variant; 18] = [
        Variant::Categorical,
        Variant::Identity,
        Variant::Uniform,
        Variant::Normal,
        Variant::LogNormal,
        Variant::Exponential,
        Variant::Gamma,
        Variant::Weibull,
        Variant::Poisson,
        Variant::Binomial,
        Variant::BetaBinomial,
        Variant::TruncatedNormal,
        Variant::MeTruncatedNormal,
        Variant::MeUniform,
        Variant::NegativeBinomial,
        Variant::Beta,
        Variant::StudentT,
        Variant::ZeroInflatedNegativeBinomial,
    ];

    /// Short name, as used in model specifications.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Categorical => "categorical",
            Variant::Identity => "identity",
            Variant::Uniform => "uniform",
            Variant::Normal => "normal",
            Variant::LogNormal => "lognormal",
            Variant::Exponential => "exponential",
            Variant::Gamma => "gamma",
            Variant::Weibull => "weibull",
            Variant::Poisson => "poisson",
            Variant::Binomial => "binomial",
            Variant::BetaBinomial => "betabinom",
            Variant::TruncatedNormal => "truncnorm",
            Variant::MeTruncatedNormal => "metruncnorm",
            Variant::MeUniform => "meuniform",
            Variant::NegativeBinomial => "nbinom",
            Variant::Beta => "beta",
            Variant::StudentT => "t",
            Variant::ZeroInflatedNegativeBinomial => "zinbinom",
        }
    }

    /// Names of the fixed-position parameters.
    ///
    /// For [`Variant::Categorical`] this is only the `[ncats, basecat]` header;
    /// the probability slots follow.
    fn fixed_names(self) -> &'static [&'static str] {
        match self {
            Variant::Categorical => &["ncats", "basecat"],
            Variant::Identity => &["value"],
            Variant::Uniform => &["lower", "upper"],
            Variant::Normal => &["mean", "sd"],
            Variant::LogNormal => &["meanlog", "sdlog"],
            Variant::Exponential => &["rate"],
            Variant::Gamma => &["shape", "rate"],
            Variant::Weibull => &["shape", "scale"],
            Variant::Poisson => &["lambda"],
            Variant::Binomial => &["size", "prob"],
            Variant::BetaBinomial => &["size", "meanp", "sdp"],
            Variant::TruncatedNormal => &["mean", "sd", "lower", "upper"],
            Variant::MeTruncatedNormal => &["mean", "sd", "lower", "upper", "sderr", "meanerr"],
            Variant::MeUniform => &["lower", "upper", "sderr", "meanerr"],
            Variant::NegativeBinomial => &["size", "prob"],
            Variant::Beta => &["shape1", "shape2"],
            Variant::StudentT => &["mean", "scale", "df"],
            Variant::ZeroInflatedNegativeBinomial => &["size", "prob", "pi"],
        }
    }

    /// Parameter vector length, or `None` for the variable-length categorical.
    pub fn n_params(self) -> Option<usize> {
        match self {
            Variant::Categorical => None,
            v => Some(v.fixed_names().len()),
        }
    }

    /// Length `params` must have for this variant.
    ///
    /// For [`Variant::Categorical`] the length is read from `params[0]`
    /// (`2 + ncats`); `None` when that header is missing or not a positive count.
    pub fn expected_len(self, params: &[f64]) -> Option<usize> {
        match self {
            Variant::Categorical => {
                let ncats = params.first()?.round();
                (ncats >= 1.0 && ncats.is_finite()).then(|| 2 + ncats as usize)
            }
            v => v.n_params(),
        }
    }

    /// Positional parameter names for a vector laid out like `params`.
    ///
    /// Categorical probabilities are named `p1`, `p2`, ...
    pub fn param_names(self, params: &[f64]) -> Vec<String> {
        let mut names: Vec<String> = self.fixed_names().iter().map(|s| s.to_string()).collect();
        if self == Variant::Categorical {
            let n = self.expected_len(params).unwrap_or(2);
            names.extend((1..=n.saturating_sub(2)).map(|i| format!("p{i}")));
        }
        names
    }

    /// Structural slots: part of the model layout, never estimated.
    ///
    /// Gradient slots for these are reported as zero where they are not
    /// already zero by construction.
    pub fn is_auxiliary(self, slot: usize) -> bool {
        match self {
            Variant::Categorical => slot < 2,
            Variant::Identity => slot == 0,
            Variant::Uniform => slot < 2,
            Variant::Binomial | Variant::BetaBinomial => slot == 0,
            Variant::TruncatedNormal => matches!(slot, 2 | 3),
            Variant::MeTruncatedNormal => matches!(slot, 2 | 3 | 5),
            Variant::MeUniform => matches!(slot, 0 | 1 | 3),
            _ => false,
        }
    }

    /// Natural domain of parameter `slot`.
    pub fn domain(self, slot: usize) -> ParamDomain {
        if self == Variant::Categorical {
            return match slot {
                0 => ParamDomain::Positive,
                1 => ParamDomain::Real,
                _ => ParamDomain::Probability,
            };
        }
        match self.fixed_names().get(slot).copied() {
            Some("prob" | "meanp" | "pi") => ParamDomain::Probability,
            Some("size") => ParamDomain::NonNegative,
            Some(
                "sd" | "sdlog" | "sderr" | "sdp" | "rate" | "lambda" | "shape" | "scale"
                | "shape1" | "shape2" | "df",
            ) => ParamDomain::Positive,
            _ => ParamDomain::Real,
        }
    }

    /// Natural range of parameter `slot` as `(min, max)`.
    pub fn bounds(self, slot: usize) -> (f64, f64) {
        self.domain(slot).bounds()
    }

    /// Whether [`crate::gradient`] returns real derivatives for this variant.
    ///
    /// The truncated-normal family is density-only: its gradient is all zeros
    /// and fitting it needs a derivative-free optimizer.
    pub fn has_analytic_gradient(self) -> bool {
        !matches!(
            self,
            Variant::TruncatedNormal | Variant::MeTruncatedNormal | Variant::MeUniform
        )
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| Error::Validation(format!("unknown emission distribution '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>().unwrap(), v);
            assert_eq!(v.to_string(), v.name());
        }
        assert!("gaussian".parse::<Variant>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for v in Variant::ALL {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.name()));
            let back: Variant = serde_json::from_str(&json).unwrap();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn test_param_counts() {
        assert_eq!(Variant::Normal.n_params(), Some(2));
        assert_eq!(Variant::MeTruncatedNormal.n_params(), Some(6));
        assert_eq!(Variant::ZeroInflatedNegativeBinomial.n_params(), Some(3));
        assert_eq!(Variant::Categorical.n_params(), None);
        assert_eq!(Variant::Categorical.expected_len(&[3.0, 0.0]), Some(5));
        assert_eq!(Variant::Categorical.expected_len(&[]), None);
        assert_eq!(Variant::Categorical.expected_len(&[0.0]), None);
    }

    #[test]
    fn test_param_names() {
        assert_eq!(Variant::StudentT.param_names(&[]), ["mean", "scale", "df"]);
        assert_eq!(
            Variant::Categorical.param_names(&[3.0, 0.0, 0.2, 0.5, 0.3]),
            ["ncats", "basecat", "p1", "p2", "p3"]
        );
    }

    #[test]
    fn test_auxiliary_slots() {
        assert!(Variant::Binomial.is_auxiliary(0));
        assert!(!Variant::Binomial.is_auxiliary(1));
        assert!(!Variant::NegativeBinomial.is_auxiliary(0));
        assert!(Variant::Categorical.is_auxiliary(1));
        assert!(!Variant::Categorical.is_auxiliary(2));
        assert!(Variant::TruncatedNormal.is_auxiliary(3));
    }

    #[test]
    fn test_domains() {
        assert_eq!(Variant::Normal.domain(1), ParamDomain::Positive);
        assert_eq!(Variant::Binomial.domain(1), ParamDomain::Probability);
        assert_eq!(Variant::TruncatedNormal.bounds(2), (f64::NEG_INFINITY, f64::INFINITY));
        assert!(ParamDomain::Real.contains(f64::NEG_INFINITY));
        assert!(!ParamDomain::Positive.contains(0.0));
        assert!(ParamDomain::NonNegative.contains(0.0));
        assert!(!ParamDomain::Probability.contains(f64::NAN));
    }

    #[test]
    fn test_gradient_support_flags() {
        let unsupported: Vec<_> =
            Variant::ALL.into_iter().filter(|v| !v.has_analytic_gradient()).collect();
        assert_eq!(
            unsupported,
            [Variant::TruncatedNormal, Variant::MeTruncatedNormal, Variant::MeUniform]
        );
    }
}
