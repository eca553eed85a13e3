//! # TokenSwap AMM Library - Exact Swap Mathematics
//!
//! ## Purpose
//!
//! Pure quote functions turning a deposit amount and the current pool state
//! into an output amount, with zero precision loss. Two pricing modes are
//! supported, selected per pool at registration time and never mixed within
//! one pool's lifetime:
//!
//! - **Fixed ratio**: an engine-wide constant exchange rate; inputs on the
//!   divided side must be exact multiples of the ratio.
//! - **Constant product**: the `x * y = k` invariant over the pool's live
//!   reserves, with rounding that always favors the pool so the invariant
//!   can never be violated by quote arithmetic.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool reserves from the engine registry, trade
//!   parameters from callers
//! - **Output Destinations**: the swap execution engine, speculative preview
//!   calls
//! - **Precision**: `u64` smallest-unit amounts, `u128` intermediates, no
//!   floating point
//!
//! Quotes are side-effect free: nothing here reads or writes pool state, so
//! any number of readers may price trades concurrently.

pub mod constant_product;
pub mod error;
pub mod fixed_ratio;

pub use constant_product::ConstantProduct;
pub use error::QuoteError;
pub use fixed_ratio::FixedRatio;
