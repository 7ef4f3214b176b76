//! Bump sizes for finite-difference Greeks.

use crate::mc::config::ensure_positive;
use crate::mc::{ConfigError, LookbackParams};

/// Absolute bump sizes for the central differences.
///
/// Fields are named rather than positional, so the bump order can not be
/// confused between call sites. No calibration is performed: the caller
/// balances truncation error (bump too large) against cancellation error
/// (bump too small).
///
/// # Examples
///
/// ```rust
/// use pricer_lookback::greeks::GreeksBumps;
///
/// let bumps = GreeksBumps {
///     spot: 0.5,
///     ..GreeksBumps::default()
/// };
/// assert_eq!(bumps.maturity, 1.0 / 365.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksBumps {
    /// Spot bump (gamma, bumped delta).
    pub spot: f64,
    /// Volatility bump (bumped vega cross-check).
    pub volatility: f64,
    /// Rate bump (rho).
    pub rate: f64,
    /// Maturity bump in years (theta).
    pub maturity: f64,
}

impl Default for GreeksBumps {
    /// One unit of spot, one basis point of volatility, one percent of rate
    /// and one calendar day of maturity.
    fn default() -> Self {
        Self {
            spot: 1.0,
            volatility: 1e-4,
            rate: 0.01,
            maturity: 1.0 / 365.0,
        }
    }
}

impl GreeksBumps {
    /// Validates the bumps against the parameters they will perturb.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if a bump is not finite and
    /// positive, or if a down-bump would leave `spot`, `volatility` or
    /// `maturity` non-positive.
    pub fn validate(&self, params: &LookbackParams) -> Result<(), ConfigError> {
        ensure_positive("bump_spot", self.spot)?;
        ensure_positive("bump_volatility", self.volatility)?;
        ensure_positive("bump_rate", self.rate)?;
        ensure_positive("bump_maturity", self.maturity)?;

        ensure_below("bump_spot", self.spot, "spot", params.spot)?;
        ensure_below(
            "bump_volatility",
            self.volatility,
            "volatility",
            params.volatility,
        )?;
        ensure_below("bump_maturity", self.maturity, "maturity", params.maturity)?;
        Ok(())
    }
}

fn ensure_below(
    name: &'static str,
    bump: f64,
    target: &'static str,
    value: f64,
) -> Result<(), ConfigError> {
    if bump < value {
        Ok(())
    } else {
        Err(ConfigError::parameter(
            name,
            format!("{} must stay positive after the down-bump ({} - {})", target, value, bump),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bumps_are_valid() {
        let bumps = GreeksBumps::default();
        assert!(bumps.validate(&LookbackParams::default()).is_ok());
        assert_eq!(bumps.spot, 1.0);
        assert_eq!(bumps.volatility, 1e-4);
        assert_eq!(bumps.rate, 0.01);
    }

    #[test]
    fn test_non_positive_bumps_rejected() {
        let params = LookbackParams::default();
        for (bumps, name) in [
            (GreeksBumps { spot: 0.0, ..Default::default() }, "bump_spot"),
            (GreeksBumps { volatility: -1e-4, ..Default::default() }, "bump_volatility"),
            (GreeksBumps { rate: f64::NAN, ..Default::default() }, "bump_rate"),
            (GreeksBumps { maturity: 0.0, ..Default::default() }, "bump_maturity"),
        ] {
            match bumps.validate(&params) {
                Err(ConfigError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected error for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_down_bump_must_keep_inputs_positive() {
        let params = LookbackParams {
            maturity: 0.002,
            ..LookbackParams::default()
        };
        let result = GreeksBumps::default().validate(&params);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "bump_maturity",
                ..
            })
        ));

        let bumps = GreeksBumps {
            spot: 100.0,
            ..Default::default()
        };
        assert!(bumps.validate(&LookbackParams::default()).is_err());
    }
}
