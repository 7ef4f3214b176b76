//! Model parameters for a lookback pricing request.
//!
//! [`LookbackParams`] is an immutable value record. Construct it with
//! [`LookbackParams::builder`] (validated at build time) or directly as a
//! struct literal; every pricing entry point re-validates before simulating.

use super::error::ConfigError;
use crate::path_dependent::LookbackVariant;

/// Model and simulation parameters for one pricing request.
///
/// # Model
///
/// Under the risk-neutral measure the spot follows
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::mc::LookbackParams;
/// use pricer_lookback::path_dependent::LookbackVariant;
///
/// let params = LookbackParams::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .variant(LookbackVariant::Call)
///     .n_paths(10_000)
///     .n_steps(252)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.n_steps, 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookbackParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r), annualised, continuously compounded.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
    /// Call or put.
    pub variant: LookbackVariant,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Number of time steps per path.
    pub n_steps: usize,
}

impl LookbackParams {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> LookbackParamsBuilder {
        LookbackParamsBuilder::default()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` or `n_steps` is 0
    /// - `spot`, `volatility` or `maturity` is not finite and strictly positive
    /// - `rate` is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        validate_model(
            self.spot,
            self.rate,
            self.volatility,
            self.maturity,
            self.n_steps,
        )
    }

    /// Discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Returns a copy with a different maturity.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }
}

impl Default for LookbackParams {
    /// At-the-money call: `S0=100, r=5%, σ=20%, T=1`, 100,000 paths of 252 steps.
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            variant: LookbackVariant::Call,
            n_paths: 100_000,
            n_steps: 252,
        }
    }
}

/// Validates the GBM model inputs shared by every simulation entry point.
pub(crate) fn validate_model(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
) -> Result<(), ConfigError> {
    if n_steps == 0 {
        return Err(ConfigError::InvalidStepCount(n_steps));
    }
    ensure_positive("spot", spot)?;
    ensure_finite("rate", rate)?;
    ensure_positive("volatility", volatility)?;
    ensure_positive("maturity", maturity)?;
    Ok(())
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::parameter(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Builder for [`LookbackParams`].
///
/// Model inputs and counts must all be set; `variant` defaults to
/// [`LookbackVariant::Call`].
#[derive(Clone, Debug, Default)]
pub struct LookbackParamsBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    variant: LookbackVariant,
    n_paths: Option<usize>,
    n_steps: Option<usize>,
}

impl LookbackParamsBuilder {
    /// Sets the initial spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the option variant.
    #[inline]
    pub fn variant(mut self, variant: LookbackVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the number of simulated paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` for a missing field, or the
    /// error reported by [`LookbackParams::validate`].
    pub fn build(self) -> Result<LookbackParams, ConfigError> {
        let params = LookbackParams {
            spot: required("spot", self.spot)?,
            rate: required("rate", self.rate)?,
            volatility: required("volatility", self.volatility)?,
            maturity: required("maturity", self.maturity)?,
            variant: self.variant,
            n_paths: required("n_paths", self.n_paths)?,
            n_steps: required("n_steps", self.n_steps)?,
        };

        params.validate()?;
        Ok(params)
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::parameter(name, "must be specified"))
}
