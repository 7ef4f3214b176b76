//! Error types for the lookback pricing engine.
//!
//! Every entry point validates its inputs before a generator is created, so
//! a [`ConfigError`] always means no simulation work was started.

use thiserror::Error;

/// Configuration error for the Monte Carlo engine and the Greeks estimators.
///
/// # Examples
///
/// ```
/// use pricer_lookback::mc::ConfigError;
///
/// let err = ConfigError::InvalidStepCount(0);
/// assert_eq!(err.to_string(), "Invalid step count 0: must be at least 1");
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count below 1.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count below 1.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidParameter`].
    pub(crate) fn parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
