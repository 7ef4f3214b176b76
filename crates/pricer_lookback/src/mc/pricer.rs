//! Monte Carlo pricing engine for floating-strike lookbacks.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (one [`PricerRng`] per run)
//! 2. Path evolution (via [`GbmStepper`])
//! 3. Running extrema and payoff (via [`RunningExtremes`] and [`LookbackVariant`](crate::path_dependent::LookbackVariant))
//! 4. Discounting and aggregation
//!
//! Paths are never stored: each path advances a scalar spot and updates its
//! running extrema in place.

use tracing::debug;

use super::config::LookbackParams;
use super::error::ConfigError;
use super::estimate::{PayoffAccumulator, PriceEstimate};
use super::paths::GbmStepper;
use crate::path_dependent::RunningExtremes;
use crate::rng::PricerRng;

/// Monte Carlo pricer for one set of validated parameters.
///
/// The pricer holds no generator; each call to [`price`](Self::price)
/// seeds its own, so repeated calls with one seed return identical results
/// and the pricer can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::mc::{LookbackParams, MonteCarloPricer};
///
/// let params = LookbackParams {
///     n_paths: 10_000,
///     n_steps: 50,
///     ..LookbackParams::default()
/// };
/// let pricer = MonteCarloPricer::new(params).unwrap();
///
/// let estimate = pricer.price(42);
/// println!("Price: {:.4} +/- {:.4}", estimate.price, estimate.std_error);
/// assert_eq!(estimate, pricer.price(42));
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    params: LookbackParams,
}

impl MonteCarloPricer {
    /// Creates a new pricer.
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

    /// Prices the option with a generator seeded from `seed`.
    ///
    /// All `n_paths` paths consume one stream in sequence; increasing the
    /// path count extends the sample rather than repeating it.
    pub fn price(&self, seed: u64) -> PriceEstimate {
        let params = &self.params;
        let stepper = GbmStepper::new(
            params.rate,
            params.volatility,
            params.maturity,
            params.n_steps,
        );
        let mut rng = PricerRng::from_seed(seed);
        let mut accumulator = PayoffAccumulator::new(params.discount_factor());

        for _ in 0..params.n_paths {
            let mut spot = params.spot;
            let mut extremes = RunningExtremes::new(spot);

            for _ in 0..params.n_steps {
                spot = stepper.step(spot, rng.gen_normal());
                extremes.observe(spot);
            }

            accumulator.add(params.variant.payoff_from(spot, &extremes));
        }

        let estimate = accumulator.estimate();
        debug!(
            seed = rng.seed(),
            variant = ?params.variant,
            spot = params.spot,
            rate = params.rate,
            volatility = params.volatility,
            maturity = params.maturity,
            n_paths = params.n_paths,
            n_steps = params.n_steps,
            price = estimate.price,
            std_error = estimate.std_error,
            "monte carlo lookback price"
        );
        estimate
    }
}
