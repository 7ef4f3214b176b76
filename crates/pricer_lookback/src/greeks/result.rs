//! Greeks result types.

/// Price and the five Greeks from one estimation request.
///
/// All fields are filled before the result is returned.
///
/// - `delta`: ∂V/∂S₀
/// - `gamma`: ∂²V/∂S₀²
/// - `theta`: -∂V/∂T (sensitivity to the passage of time)
/// - `vega`: ∂V/∂σ
/// - `rho`: ∂V/∂r
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::greeks::GreeksResult;
///
/// let result = GreeksResult {
///     price: 16.6,
///     delta: 0.166,
///     gamma: 0.0,
///     theta: -9.0,
///     vega: 65.0,
///     rho: 45.0,
/// };
/// assert!(result.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Present value.
    pub price: f64,
    /// Delta: ∂V/∂S₀.
    pub delta: f64,
    /// Gamma: ∂²V/∂S₀².
    pub gamma: f64,
    /// Theta: -∂V/∂T.
    pub theta: f64,
    /// Vega: ∂V/∂σ.
    pub vega: f64,
    /// Rho: ∂V/∂r.
    pub rho: f64,
}

impl GreeksResult {
    /// Returns true if every field is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        [
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Output of one pathwise pass: price, its standard error, delta and vega.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathwiseEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price.
    pub std_error: f64,
    /// Pathwise delta: discounted mean of `payoff / S₀`.
    pub delta: f64,
    /// Pathwise vega: discounted mean of `∂payoff/∂σ`.
    pub vega: f64,
}
