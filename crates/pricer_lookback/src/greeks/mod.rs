//! Greeks for floating-strike lookbacks.
//!
//! Delta and vega are estimated pathwise in the same pass that produces the
//! price. Gamma, rho and theta are central differences of plain pricing
//! runs that all reuse the request's seed.
//!
//! # Examples
//!
//! ```rust
//! use pricer_lookback::greeks::{FiniteDifferenceGreeks, GreeksBumps};
//! use pricer_lookback::mc::LookbackParams;
//! use pricer_lookback::path_dependent::LookbackVariant;
//!
//! let params = LookbackParams {
//!     variant: LookbackVariant::Put,
//!     n_paths: 4_000,
//!     n_steps: 50,
//!     ..LookbackParams::default()
//! };
//! let greeks = FiniteDifferenceGreeks::new(params, GreeksBumps::default())
//!     .unwrap()
//!     .compute(1)
//!     .unwrap();
//!
//! assert!(greeks.vega > 0.0);
//! assert!(greeks.rho < 0.0);
//! ```

mod config;
mod finite_difference;
mod pathwise;
mod result;


pub use config::GreeksBumps;
pub use finite_difference::FiniteDifferenceGreeks;
pub use pathwise::PathwiseEstimator;
pub use result::{GreeksResult, PathwiseEstimate};
