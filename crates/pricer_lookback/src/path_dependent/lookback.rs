//! Floating-strike lookback payoffs.
//!
//! - **Floating Strike Lookback Call**: max(S_T - S_min, 0)
//! - **Floating Strike Lookback Put**: max(S_max - S_T, 0)
//!
//! Because `S_min <= S_T <= S_max` by construction the clamp never binds in
//! exact arithmetic; it is kept to absorb floating-point drift.

use super::RunningExtremes;

/// Floating-strike lookback option variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookbackVariant {
    /// Floating strike call: S_T - S_min.
    #[default]
    Call,
    /// Floating strike put: S_max - S_T.
    Put,
}

impl LookbackVariant {
    /// Returns true for the call variant.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, LookbackVariant::Call)
    }

    /// Undiscounted payoff given the terminal spot and the path extrema.
    #[inline]
    pub fn payoff(&self, terminal: f64, minimum: f64, maximum: f64) -> f64 {
        payoff(terminal, minimum, maximum, *self)
    }

    /// Undiscounted payoff from a terminal spot and running extremes.
    #[inline]
    pub fn payoff_from(&self, terminal: f64, extremes: &RunningExtremes) -> f64 {
        payoff(terminal, extremes.minimum(), extremes.maximum(), *self)
    }
}

/// Undiscounted floating-strike lookback payoff.
///
/// # Examples
///
/// ```
/// use pricer_lookback::path_dependent::{payoff, LookbackVariant};
///
/// // Path [100, 90, 95, 110]
/// assert_eq!(payoff(110.0, 90.0, 110.0, LookbackVariant::Call), 20.0);
/// assert_eq!(payoff(110.0, 90.0, 110.0, LookbackVariant::Put), 0.0);
/// ```
#[inline]
pub fn payoff(terminal: f64, minimum: f64, maximum: f64, variant: LookbackVariant) -> f64 {
    match variant {
        LookbackVariant::Call => (terminal - minimum).max(0.0),
        LookbackVariant::Put => (maximum - terminal).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_variant() {
        assert_eq!(LookbackVariant::default(), LookbackVariant::Call);
        assert!(LookbackVariant::Call.is_call());
        assert!(!LookbackVariant::Put.is_call());
    }

    #[test]
    fn test_floating_call() {
        // Path: [100, 90, 95, 110] -> min = 90, terminal = 110
        let mut extremes = RunningExtremes::new(100.0);
        for price in [90.0, 95.0, 110.0] {
            extremes.observe(price);
        }
        assert_eq!(LookbackVariant::Call.payoff_from(110.0, &extremes), 20.0);
    }

    #[test]
    fn test_floating_call_terminal_at_min() {
        // Path: [100, 110, 95, 90] -> min = terminal = 90
        assert_eq!(payoff(90.0, 90.0, 110.0, LookbackVariant::Call), 0.0);
    }

    #[test]
    fn test_floating_put() {
        // Path: [100, 120, 110, 95] -> max = 120, terminal = 95
        let mut extremes = RunningExtremes::new(100.0);
        for price in [120.0, 110.0, 95.0] {
            extremes.observe(price);
        }
        assert_eq!(LookbackVariant::Put.payoff_from(95.0, &extremes), 25.0);
    }

    #[test]
    fn test_floating_put_terminal_at_max() {
        assert_eq!(payoff(120.0, 100.0, 120.0, LookbackVariant::Put), 0.0);
    }

    #[test]
    fn test_clamp_absorbs_drift() {
        // Inconsistent extrema (terminal below the recorded minimum) clamp to zero
        assert_eq!(payoff(99.999_999, 100.0, 120.0, LookbackVariant::Call), 0.0);
        assert_eq!(payoff(120.000_001, 100.0, 120.0, LookbackVariant::Put), 0.0);
    }

    proptest! {
        #[test]
        fn prop_payoff_non_negative(
            terminal in 1e-3..1e4_f64,
            minimum in 1e-3..1e4_f64,
            maximum in 1e-3..1e4_f64,
        ) {
            prop_assert!(payoff(terminal, minimum, maximum, LookbackVariant::Call) >= 0.0);
            prop_assert!(payoff(terminal, minimum, maximum, LookbackVariant::Put) >= 0.0);
        }
    }
}
