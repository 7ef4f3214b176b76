//! Analytical (closed-form) solutions for floating-strike lookbacks.
//!
//! These are used to verify Monte Carlo pricing accuracy.
//!
//! # Available Solutions
//!
//! - **Continuous monitoring**: Goldman-Sosin-Gatto (1979) closed form
//! - **Discrete monitoring**: Broadie-Glasserman-Kou (1999) continuity
//!   correction of the closed form
//!
//! # Usage
//!
//! ```rust
//! use pricer_lookback::analytical::{discrete_monitoring_price, exact_price};
//! use pricer_lookback::path_dependent::LookbackVariant;
//!
//! // Fresh contract: the observed extremum is the current spot
//! let continuous = exact_price(100.0, 100.0, 0.05, 0.2, 1.0, LookbackVariant::Call);
//!
//! // Extremum observed on 252 dates only
//! let daily = discrete_monitoring_price(100.0, 0.05, 0.2, 1.0, 252, LookbackVariant::Call);
//!
//! assert!(daily < continuous);
//! ```

pub mod lookback;

pub use lookback::{
    discrete_monitoring_price, exact_price, lookback_call_exact, lookback_put_exact, norm_cdf,
    BGK_BETA,
};
