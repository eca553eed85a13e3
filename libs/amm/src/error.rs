//! Quote failure taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::ArithmeticError;

/// Errors that can occur while pricing a trade
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteError {
    /// Fixed-ratio input that is not an exact multiple of the ratio
    #[error("amount {amount} is not divisible by the swap ratio {ratio}")]
    NotDivisible { amount: u64, ratio: u64 },

    /// Zero input or a pool with an empty reserve side
    #[error("insufficient liquidity for this trade")]
    InsufficientLiquidity,

    /// Widening arithmetic failed
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
