//! Floating-strike lookback closed forms.
//!
//! # Mathematical Background
//!
//! With `m` the minimum observed so far, the continuously monitored call
//! is worth
//!
//! ```text
//! a1 = [ln(S/m) + (r + σ²/2) T] / (σ √T)
//! a2 = a1 - σ √T
//! a3 = [ln(S/m) + (-r + σ²/2) T] / (σ √T)
//! Y1 = -2 (r - σ²/2) ln(S/m) / σ²
//!
//! C = S [N(a1) - σ²/(2r) N(-a1)]
//!   - m e^{-rT} [N(a2) - σ²/(2r) e^{Y1} N(-a3)]
//! ```
//!
//! and with `M` the maximum observed so far, the put is worth
//!
//! ```text
//! b1 = [ln(M/S) + (-r + σ²/2) T] / (σ √T)
//! b2 = b1 - σ √T
//! b3 = [ln(M/S) + (r - σ²/2) T] / (σ √T)
//! Y2 = 2 (r - σ²/2) ln(S/M) / σ²
//!
//! P = M e^{-rT} [N(b1) - σ²/(2r) e^{Y2} N(-b3)]
//!   + S [σ²/(2r) N(-b2) - N(b2)]
//! ```
//!
//! The `σ²/(2r)` coefficient makes `r = 0` degenerate and `σ = 0` divides
//! by zero; both produce non-finite output rather than an error.
//!
//! # References
//!
//! - Goldman, M.B., Sosin, H.B. and Gatto, M.A. (1979). "Path Dependent
//!   Options: Buy at the Low, Sell at the High." Journal of Finance, 34, 1111-1127.
//! - Broadie, M., Glasserman, P. and Kou, S. (1999). "Connecting Discrete and
//!   Continuous Path-Dependent Options." Finance and Stochastics, 3, 55-82.

use statrs::function::erf::erfc;
use tracing::warn;

use crate::path_dependent::LookbackVariant;

/// Continuity-correction constant `β = -ζ(1/2) / √(2π)`.
pub const BGK_BETA: f64 = 0.582_597_157_939_010_6;

/// Standard normal CDF, `N(x) = erfc(-x/√2) / 2`.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Continuously monitored floating-strike lookback call.
///
/// # Arguments
///
/// * `spot` - Current spot price (S)
/// * `minimum` - Minimum observed so far (m), `minimum <= spot`
/// * `rate` - Risk-free interest rate (r), non-zero
/// * `volatility` - Annualised volatility (σ)
/// * `maturity` - Time to maturity (T)
///
/// # Example
///
/// ```rust
/// use pricer_lookback::analytical::lookback_call_exact;
///
/// let price = lookback_call_exact(100.0, 100.0, 0.05, 0.2, 1.0);
/// assert!((price - 17.2168).abs() < 1e-4);
/// ```
pub fn lookback_call_exact(
    spot: f64,
    minimum: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> f64 {
    let sqrt_t = maturity.sqrt();
    let var = volatility * volatility;
    let vol_sqrt_t = volatility * sqrt_t;
    let log_sm = (spot / minimum).ln();

    let a1 = (log_sm + (rate + 0.5 * var) * maturity) / vol_sqrt_t;
    let a2 = a1 - vol_sqrt_t;
    let a3 = (log_sm + (-rate + 0.5 * var) * maturity) / vol_sqrt_t;
    let y1 = -2.0 * (rate - 0.5 * var) * log_sm / var;

    let discount = (-rate * maturity).exp();
    let coeff = var / (2.0 * rate);

    spot * (norm_cdf(a1) - coeff * norm_cdf(-a1))
        - minimum * discount * (norm_cdf(a2) - coeff * y1.exp() * norm_cdf(-a3))
}

/// Continuously monitored floating-strike lookback put.
///
/// # Arguments
///
/// * `spot` - Current spot price (S)
/// * `maximum` - Maximum observed so far (M), `maximum >= spot`
/// * `rate` - Risk-free interest rate (r), non-zero
/// * `volatility` - Annualised volatility (σ)
/// * `maturity` - Time to maturity (T)
///
/// # Example
///
/// ```rust
/// use pricer_lookback::analytical::lookback_put_exact;
///
/// let price = lookback_put_exact(100.0, 100.0, 0.05, 0.2, 1.0);
/// assert!((price - 14.2906).abs() < 1e-4);
/// ```
pub fn lookback_put_exact(
    spot: f64,
    maximum: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> f64 {
    let sqrt_t = maturity.sqrt();
    let var = volatility * volatility;
    let vol_sqrt_t = volatility * sqrt_t;
    let log_ms = (maximum / spot).ln();

    let b1 = (log_ms + (-rate + 0.5 * var) * maturity) / vol_sqrt_t;
    let b2 = b1 - vol_sqrt_t;
    let b3 = (log_ms + (rate - 0.5 * var) * maturity) / vol_sqrt_t;
    let y2 = 2.0 * (rate - 0.5 * var) * (spot / maximum).ln() / var;

    let discount = (-rate * maturity).exp();
    let coeff = var / (2.0 * rate);

    maximum * discount * (norm_cdf(b1) - coeff * y2.exp() * norm_cdf(-b3))
        + spot * (coeff * norm_cdf(-b2) - norm_cdf(b2))
}

/// Continuously monitored price for either variant.
///
/// `extremum` is the observed minimum for a call and the observed maximum
/// for a put; pass `spot` for a contract starting today. A non-finite
/// result is returned as is and logged at `warn` level.
pub fn exact_price(
    spot: f64,
    extremum: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    variant: LookbackVariant,
) -> f64 {
    let price = match variant {
        LookbackVariant::Call => lookback_call_exact(spot, extremum, rate, volatility, maturity),
        LookbackVariant::Put => lookback_put_exact(spot, extremum, rate, volatility, maturity),
    };

    if !price.is_finite() {
        warn!(
            spot,
            extremum,
            rate,
            volatility,
            maturity,
            variant = ?variant,
            price,
            "lookback closed form is not finite"
        );
    }
    price
}

/// Closed form corrected for extrema observed on `n_steps` equally spaced dates.
///
/// Shifts the continuous price of a fresh contract by `β σ √dt`:
///
/// ```text
/// call: S - e^{ β σ √dt} (S - C)
/// put:  e^{-β σ √dt} (P + S) - S
/// ```
///
/// # Example
///
/// ```rust
/// use pricer_lookback::analytical::discrete_monitoring_price;
/// use pricer_lookback::path_dependent::LookbackVariant;
///
/// let price = discrete_monitoring_price(100.0, 0.05, 0.2, 1.0, 252, LookbackVariant::Put);
/// assert!((price - 13.4547).abs() < 1e-3);
/// ```
pub fn discrete_monitoring_price(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_steps: usize,
    variant: LookbackVariant,
) -> f64 {
    let continuous = exact_price(spot, spot, rate, volatility, maturity, variant);
    let dt = maturity / n_steps as f64;
    let shift = BGK_BETA * volatility * dt.sqrt();

    match variant {
        LookbackVariant::Call => spot - shift.exp() * (spot - continuous),
        LookbackVariant::Put => (-shift).exp() * (continuous + spot) - spot,
    }
}
