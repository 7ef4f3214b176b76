//! Price and delta over a ladder of spots.
//!
//! Every point reuses the request's seed, so neighbouring points differ by
//! the spot shift rather than by sampling noise.

use tracing::debug;

use crate::greeks::PathwiseEstimator;
use crate::mc::config::ensure_positive;
use crate::mc::{ConfigError, LookbackParams};

/// Spot ladder as multipliers of the base spot.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::curve::CurveConfig;
///
/// let config = CurveConfig::default();
/// assert_eq!(config.n_points, 21);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConfig {
    /// Lowest spot as a multiple of `S0`.
    pub lower: f64,
    /// Highest spot as a multiple of `S0`.
    pub upper: f64,
    /// Number of equally spaced spots, both ends included.
    pub n_points: usize,
}

impl Default for CurveConfig {
    /// `[0.5·S0, 1.5·S0]` in 21 points.
    fn default() -> Self {
        Self {
            lower: 0.5,
            upper: 1.5,
            n_points: 21,
        }
    }
}

impl CurveConfig {
    /// Validates the ladder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` unless `0 < lower < upper`
    /// (both finite) and `n_points >= 2`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("curve_lower", self.lower)?;
        ensure_positive("curve_upper", self.upper)?;
        if self.lower >= self.upper {
            return Err(ConfigError::parameter(
                "curve_upper",
                format!("{} must exceed lower {}", self.upper, self.lower),
            ));
        }
        if self.n_points < 2 {
            return Err(ConfigError::parameter(
                "curve_n_points",
                format!("{} must be at least 2", self.n_points),
            ));
        }
        Ok(())
    }

    /// Spot multipliers from `lower` to `upper`.
    pub fn multipliers(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.upper - self.lower) / (self.n_points - 1) as f64;
        (0..self.n_points).map(move |i| self.lower + i as f64 * step)
    }
}

/// One point of a spot curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Spot the point was priced at.
    pub spot: f64,
    /// Monte Carlo price.
    pub price: f64,
    /// Pathwise delta.
    pub delta: f64,
}

/// Prices the option and its delta at each spot of the ladder.
///
/// # Errors
///
/// Returns `ConfigError` if `params` or `config` is invalid.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::curve::{spot_curve, CurveConfig};
/// use pricer_lookback::mc::LookbackParams;
///
/// let params = LookbackParams {
///     n_paths: 2_000,
///     n_steps: 20,
///     ..LookbackParams::default()
/// };
/// let config = CurveConfig { lower: 0.8, upper: 1.2, n_points: 5 };
///
/// let curve = spot_curve(&params, &config, 42).unwrap();
/// assert_eq!(curve.len(), 5);
/// assert!(curve.windows(2).all(|w| w[0].price < w[1].price));
/// ```
pub fn spot_curve(
    params: &LookbackParams,
    config: &CurveConfig,
    seed: u64,
) -> Result<Vec<CurvePoint>, ConfigError> {
    params.validate()?;
    config.validate()?;

    let curve = config
        .multipliers()
        .map(|m| {
            let spot = params.spot * m;
            let estimate = PathwiseEstimator::new(params.with_spot(spot))?.estimate(seed);
            Ok(CurvePoint {
                spot,
                price: estimate.price,
                delta: estimate.delta,
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    debug!(
        seed,
        variant = ?params.variant,
        n_points = curve.len(),
        "lookback spot curve"
    );
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::MonteCarloPricer;
    use crate::path_dependent::LookbackVariant;
    use approx::assert_relative_eq;

    fn params(variant: LookbackVariant) -> LookbackParams {
        LookbackParams {
            variant,
            n_paths: 2_000,
            n_steps: 30,
            ..LookbackParams::default()
        }
    }

    #[test]
    fn test_default_ladder_spans_half_to_one_and_a_half() {
        let m: Vec<f64> = CurveConfig::default().multipliers().collect();
        assert_eq!(m.len(), 21);
        assert_relative_eq!(m[0], 0.5);
        assert_relative_eq!(m[10], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[20], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let cases = [
            CurveConfig { lower: 0.0, ..Default::default() },
            CurveConfig { lower: 1.5, upper: 0.5, ..Default::default() },
            CurveConfig { lower: 1.0, upper: 1.0, ..Default::default() },
            CurveConfig { upper: f64::INFINITY, ..Default::default() },
            CurveConfig { n_points: 1, ..Default::default() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?} accepted", config);
            assert!(spot_curve(&params(LookbackVariant::Call), &config, 1).is_err());
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        let bad = LookbackParams {
            spot: -1.0,
            ..params(LookbackVariant::Call)
        };
        assert!(matches!(
            spot_curve(&bad, &CurveConfig::default(), 1),
            Err(ConfigError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_points_match_single_runs() {
        let p = params(LookbackVariant::Put);
        let curve = spot_curve(&p, &CurveConfig::default(), 314).unwrap();

        let mid = curve[10];
        assert_relative_eq!(mid.spot, 100.0, epsilon = 1e-10);
        let direct = MonteCarloPricer::new(p.with_spot(mid.spot)).unwrap().price(314);
        assert_eq!(mid.price, direct.price);
    }

    #[test]
    fn test_price_scales_with_spot_under_shared_seed() {
        for variant in [LookbackVariant::Call, LookbackVariant::Put] {
            let curve = spot_curve(&params(variant), &CurveConfig::default(), 7).unwrap();
            let base = curve[10];
            for point in &curve {
                assert_relative_eq!(
                    point.price,
                    base.price * point.spot / base.spot,
                    max_relative = 1e-10
                );
                assert_relative_eq!(point.delta, base.delta, max_relative = 1e-10);
            }
        }
    }
}
