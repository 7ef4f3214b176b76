//! Pathwise delta and vega in a single simulation pass.
//!
//! The lookback payoff is almost everywhere differentiable in `S₀` and `σ`,
//! so the derivative of the simulated payoff is an unbiased estimator of
//! the derivative of the price.
//!
//! # Vega tangent
//!
//! Alongside the spot recursion the estimator carries `D_k = ∂S_k/∂σ`:
//! ```text
//! D_0     = 0
//! D_{k+1} = S_{k+1} × (D_k / S_k - σ dt + √dt × Z_k)
//! ```
//! and records `D` at the step where the running minimum (call) or maximum
//! (put) was last improved. At maturity
//! ```text
//! call: ∂payoff/∂σ = D_T - D_at_min
//! put:  ∂payoff/∂σ = D_at_max - D_T
//! ```
//!
//! # Delta
//!
//! Scaling `S₀` scales the whole discretised path, so `∂payoff/∂S₀ = payoff / S₀`.

use tracing::debug;

use super::result::PathwiseEstimate;
use crate::mc::estimate::PayoffAccumulator;
use crate::mc::{ConfigError, GbmStepper, LookbackParams};
use crate::path_dependent::{ExtremeUpdate, LookbackVariant, RunningExtremes};
use crate::rng::PricerRng;

/// Single-pass estimator of price, delta and vega.
///
/// Consumes exactly the draws a [`MonteCarloPricer`](crate::mc::MonteCarloPricer)
/// run with the same seed consumes, in the same order, and applies the
/// same step, so its `price` and `std_error` are identical to that run's.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::greeks::PathwiseEstimator;
/// use pricer_lookback::mc::{LookbackParams, MonteCarloPricer};
///
/// let params = LookbackParams {
///     n_paths: 5_000,
///     n_steps: 50,
///     ..LookbackParams::default()
/// };
///
/// let pathwise = PathwiseEstimator::new(params).unwrap().estimate(7);
/// let direct = MonteCarloPricer::new(params).unwrap().price(7);
///
/// assert_eq!(pathwise.price, direct.price);
/// assert!(pathwise.delta > 0.0);
/// assert!(pathwise.vega > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathwiseEstimator {
    params: LookbackParams,
}

impl PathwiseEstimator {
    /// Creates a new estimator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parameters are invalid.
    pub fn new(params: LookbackParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &LookbackParams {
        &self.params
    }

    /// Runs one pass with a generator seeded from `seed`.
    pub fn estimate(&self, seed: u64) -> PathwiseEstimate {
        let params = &self.params;
        let stepper = GbmStepper::new(
            params.rate,
            params.volatility,
            params.maturity,
            params.n_steps,
        );
        let vol_dt = params.volatility * stepper.dt();
        let sqrt_dt = stepper.sqrt_dt();
        let discount = params.discount_factor();

        let mut rng = PricerRng::from_seed(seed);
        let mut accumulator = PayoffAccumulator::new(discount);
        let mut delta_sum = 0.0;
        let mut vega_sum = 0.0;

        for _ in 0..params.n_paths {
            let mut spot = params.spot;
            let mut tangent = 0.0;
            let mut tangent_at_min = 0.0;
            let mut tangent_at_max = 0.0;
            let mut extremes = RunningExtremes::new(spot);

            for _ in 0..params.n_steps {
                let z = rng.gen_normal();
                let next = stepper.step(spot, z);
                tangent = next * (tangent / spot - vol_dt + sqrt_dt * z);
                spot = next;

                match extremes.observe(spot) {
                    ExtremeUpdate::NewMinimum => tangent_at_min = tangent,
                    ExtremeUpdate::NewMaximum => tangent_at_max = tangent,
                    ExtremeUpdate::Unchanged => {}
                }
            }

            let payoff = params.variant.payoff_from(spot, &extremes);
            let payoff_vega = match params.variant {
                LookbackVariant::Call => tangent - tangent_at_min,
                LookbackVariant::Put => tangent_at_max - tangent,
            };

            accumulator.add(payoff);
            delta_sum += payoff / params.spot;
            vega_sum += payoff_vega;
        }

        let n = params.n_paths as f64;
        let price = accumulator.estimate();
        let estimate = PathwiseEstimate {
            price: price.price,
            std_error: price.std_error,
            delta: discount * delta_sum / n,
            vega: discount * vega_sum / n,
        };

        debug!(
            seed,
            variant = ?params.variant,
            n_paths = params.n_paths,
            n_steps = params.n_steps,
            price = estimate.price,
            delta = estimate.delta,
            vega = estimate.vega,
            "pathwise lookback estimate"
        );
        estimate
    }
}
