//! Path-dependent payoff infrastructure for lookback options.
//!
//! # Key Components
//!
//! - [`RunningExtremes`]: streaming minimum/maximum accumulation
//! - [`LookbackVariant`]: call/put tag consumed by explicit `match`
//! - [`payoff`]: the undiscounted floating-strike payoff

mod lookback;
mod observer;

pub use lookback::{payoff, LookbackVariant};
pub use observer::{ExtremeUpdate, RunningExtremes};
