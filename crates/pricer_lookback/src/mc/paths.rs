//! GBM path generation.
//!
//! Euler-Maruyama in log space, which for GBM is the exact transition:
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! [`GbmStepper`] holds the precomputed constants and is the single place
//! the step arithmetic lives. The path simulator, the Monte Carlo pricer and
//! the pathwise estimator all advance the spot through it, drawing one
//! normal per step from one generator, which makes their outputs comparable
//! bit-for-bit for equal seeds.

use super::config::validate_model;
use super::error::ConfigError;
use crate::rng::PricerRng;

/// Precomputed per-step constants of the discretised GBM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    dt: f64,
    sqrt_dt: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStepper {
    /// Precomputes `dt = T / n_steps`, `(r - 0.5σ²)dt` and `σ√dt`.
    ///
    /// Inputs are assumed validated; `n_steps` must be at least 1.
    #[inline]
    pub fn new(rate: f64, volatility: f64, maturity: f64, n_steps: usize) -> Self {
        let dt = maturity / n_steps as f64;
        let sqrt_dt = dt.sqrt();
        Self {
            dt,
            sqrt_dt,
            drift_dt: (rate - 0.5 * volatility * volatility) * dt,
            vol_sqrt_dt: volatility * sqrt_dt,
        }
    }

    /// Time step `dt`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Square root of the time step.
    #[inline]
    pub fn sqrt_dt(&self) -> f64 {
        self.sqrt_dt
    }

    /// Advances the spot by one step given the normal draw `z`.
    #[inline]
    pub fn step(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

/// Simulates one discretised GBM path of `n_steps + 1` spot values.
///
/// `path[0] == spot`; the remaining values consume `n_steps` normal draws
/// from a generator seeded with `seed`. Identical inputs reproduce an
/// identical path, and the path equals the first path of a pricing run with
/// the same model inputs and seed.
///
/// # Errors
///
/// Returns `ConfigError` if `n_steps` is 0, `spot`/`volatility`/`maturity`
/// is not finite and positive, or `rate` is not finite.
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::mc::simulate_path;
///
/// let path = simulate_path(100.0, 0.05, 0.2, 1.0, 252, 42).unwrap();
/// assert_eq!(path.len(), 253);
/// assert_eq!(path[0], 100.0);
/// ```
pub fn simulate_path(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
    seed: u64,
) -> Result<Vec<f64>, ConfigError> {
    validate_model(spot, rate, volatility, maturity, n_steps)?;

    let stepper = GbmStepper::new(rate, volatility, maturity, n_steps);
    let mut rng = PricerRng::from_seed(seed);

    let mut path = Vec::with_capacity(n_steps + 1);
    let mut current = spot;
    path.push(current);
    for _ in 0..n_steps {
        current = stepper.step(current, rng.gen_normal());
        path.push(current);
    }

    Ok(path)
}
