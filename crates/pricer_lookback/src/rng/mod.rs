//! # Random Number Generation
//!
//! Every simulation run owns exactly one [`PricerRng`], created from the
//! caller's seed at the start of the run and dropped at its end. There is
//! no process-wide generator.
//!
//! ## Common Random Numbers
//!
//! The finite-difference Greeks rely on paired runs consuming *identical*
//! normal draws. That holds because a run never shares or reuses a
//! generator: each run calls [`PricerRng::from_seed`] afresh, so two runs
//! with the same seed observe the same stream bit-for-bit.
//!
//! ```rust
//! use pricer_lookback::rng::PricerRng;
//!
//! let mut a = PricerRng::from_seed(12345);
//! let mut b = PricerRng::from_seed(12345);
//! assert_eq!(a.gen_normal(), b.gen_normal());
//! ```
//!
//! ## Algorithm
//!
//! - Uniform source: `rand::rngs::StdRng` seeded via `seed_from_u64`
//! - Normal variates: Ziggurat sampling via `rand_distr::StandardNormal`

mod prng;

pub use prng::PricerRng;

#[cfg(test)]
mod tests;
