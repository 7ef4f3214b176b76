//! Finite-difference Greeks with common random numbers.
//!
//! Every bumped run reseeds the generator from the same seed, so the base
//! and bumped prices share their draws and the noise cancels in the
//! differences:
//!
//! ```text
//! gamma = (V(S₀+h) - 2V(S₀) + V(S₀-h)) / h²
//! rho   = (V(r+h) - V(r-h)) / 2h
//! theta = -(V(T+h) - V(T-h)) / 2h
//! ```
//!
//! Delta and vega come from the pathwise pass; [`bumped_delta`] and
//! [`bumped_vega`] provide central-difference cross-checks.
//!
//! [`bumped_delta`]: FiniteDifferenceGreeks::bumped_delta
//! [`bumped_vega`]: FiniteDifferenceGreeks::bumped_vega

use tracing::{debug, trace};

use super::config::GreeksBumps;
use super::pathwise::PathwiseEstimator;
use super::result::GreeksResult;
use crate::mc::{ConfigError, LookbackParams, MonteCarloPricer};

/// Greeks calculator combining the pathwise pass with bumped reruns.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::greeks::{FiniteDifferenceGreeks, GreeksBumps};
/// use pricer_lookback::mc::LookbackParams;
///
/// let params = LookbackParams {
///     n_paths: 4_000,
///     n_steps: 50,
///     ..LookbackParams::default()
/// };
/// let calculator = FiniteDifferenceGreeks::new(params, GreeksBumps::default()).unwrap();
/// let greeks = calculator.compute(42).unwrap();
///
/// assert!(greeks.delta > 0.0);
/// assert!(greeks.rho > 0.0);
/// assert!(greeks.gamma.abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct FiniteDifferenceGreeks {
    params: LookbackParams,
    bumps: GreeksBumps,
}

impl FiniteDifferenceGreeks {
    /// Creates a calculator after validating parameters and bumps.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parameters are invalid or a bump is
    /// not positive or would push a down-bumped input to zero or below.
    pub fn new(params: LookbackParams, bumps: GreeksBumps) -> Result<Self, ConfigError> {
        params.validate()?;
        bumps.validate(&params)?;
        Ok(Self { params, bumps })
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &LookbackParams {
        &self.params
    }

    /// Returns the bump sizes.
    #[inline]
    pub fn bumps(&self) -> &GreeksBumps {
        &self.bumps
    }

    /// Computes the price and all five Greeks.
    ///
    /// Runs one pathwise pass for price, delta and vega, then seven plain
    /// pricing runs (base and spot up/down for gamma, rate up/down for
    /// rho, maturity up/down for theta), all seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an up-bumped input overflows to a
    /// non-finite value.
    pub fn compute(&self, seed: u64) -> Result<GreeksResult, ConfigError> {
        let pathwise = PathwiseEstimator::new(self.params)?.estimate(seed);
        let p = &self.params;
        let h = &self.bumps;

        let base = self.price_at(*p, seed)?;
        let spot_up = self.price_at(p.with_spot(p.spot + h.spot), seed)?;
        let spot_down = self.price_at(p.with_spot(p.spot - h.spot), seed)?;
        let gamma = (spot_up - 2.0 * base + spot_down) / (h.spot * h.spot);

        let rate_up = self.price_at(p.with_rate(p.rate + h.rate), seed)?;
        let rate_down = self.price_at(p.with_rate(p.rate - h.rate), seed)?;
        let rho = (rate_up - rate_down) / (2.0 * h.rate);

        let maturity_up = self.price_at(p.with_maturity(p.maturity + h.maturity), seed)?;
        let maturity_down = self.price_at(p.with_maturity(p.maturity - h.maturity), seed)?;
        let theta = -(maturity_up - maturity_down) / (2.0 * h.maturity);

        let result = GreeksResult {
            price: pathwise.price,
            delta: pathwise.delta,
            gamma,
            theta,
            vega: pathwise.vega,
            rho,
        };

        debug!(
            seed,
            variant = ?p.variant,
            price = result.price,
            delta = result.delta,
            gamma = result.gamma,
            theta = result.theta,
            vega = result.vega,
            rho = result.rho,
            "lookback greeks"
        );
        Ok(result)
    }

    /// Central-difference delta with common random numbers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the up-bumped spot is not finite.
    pub fn bumped_delta(&self, seed: u64) -> Result<f64, ConfigError> {
        let p = &self.params;
        let h = self.bumps.spot;
        let up = self.price_at(p.with_spot(p.spot + h), seed)?;
        let down = self.price_at(p.with_spot(p.spot - h), seed)?;
        Ok((up - down) / (2.0 * h))
    }

    /// Central-difference vega with common random numbers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the up-bumped volatility is not finite.
    pub fn bumped_vega(&self, seed: u64) -> Result<f64, ConfigError> {
        let p = &self.params;
        let h = self.bumps.volatility;
        let up = self.price_at(p.with_volatility(p.volatility + h), seed)?;
        let down = self.price_at(p.with_volatility(p.volatility - h), seed)?;
        Ok((up - down) / (2.0 * h))
    }

    fn price_at(&self, params: LookbackParams, seed: u64) -> Result<f64, ConfigError> {
        let price = MonteCarloPricer::new(params)?.price(seed).price;
        trace!(
            seed,
            spot = params.spot,
            rate = params.rate,
            volatility = params.volatility,
            maturity = params.maturity,
            price,
            "bumped lookback run"
        );
        Ok(price)
    }
}
