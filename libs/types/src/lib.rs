//! # TokenSwap Shared Types
//!
//! Identifier newtypes and exact integer arithmetic shared by every crate in
//! the TokenSwap workspace.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: all amounts are unsigned integers in the smallest
//!   indivisible unit of each asset; there is no floating point anywhere in
//!   amount math.
//! - **Type Safety**: `AssetId` and `AccountId` are distinct newtypes so an
//!   account can never be passed where a token is expected.
//! - **Checked Arithmetic**: every multiplication that can exceed `u64` widens
//!   through `u128` and every division has an explicit zero-denominator path.

pub mod errors;
pub mod identifiers;
pub mod precision;

pub use errors::ArithmeticError;
pub use identifiers::{AccountId, AssetId};
pub use precision::{div_ceil_wide, mul_div_floor, mul_wide};
