//! Monte Carlo simulation of floating-strike lookbacks under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── LookbackParams     (validated model and simulation inputs)
//! ├── PricerRng          (seeded per run)
//! ├── GbmStepper         (shared log-space step)
//! ├── RunningExtremes    (streaming min/max)
//! └── PayoffAccumulator  (discounted sum and sum of squares)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_lookback::mc::{LookbackParams, MonteCarloPricer};
//! use pricer_lookback::path_dependent::LookbackVariant;
//!
//! let params = LookbackParams::builder()
//!     .spot(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .variant(LookbackVariant::Put)
//!     .n_paths(5_000)
//!     .n_steps(52)
//!     .build()
//!     .unwrap();
//!
//! let estimate = MonteCarloPricer::new(params).unwrap().price(42);
//! assert!(estimate.price > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod paths;
pub mod pricer;

pub use config::{LookbackParams, LookbackParamsBuilder};
pub use error::ConfigError;
pub use estimate::PriceEstimate;
pub use paths::{simulate_path, GbmStepper};
pub use pricer::MonteCarloPricer;
