//! Error taxonomy for the engine crate
//!
//! Every failure is surfaced to the caller synchronously; nothing is
//! swallowed or retried inside the engine. Failures before input collection
//! guarantee zero mutation, so callers may retry with adjusted parameters.

use amm::QuoteError;
use thiserror::Error;
use types::{ArithmeticError, AssetId};

/// Errors from pool registration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The asset already has a registered pool
    #[error("pool for {0} already exists")]
    AlreadyExists(AssetId),

    /// Initial liquidity must be positive on both sides
    #[error("initial liquidity amounts must both be positive")]
    InvalidLiquidity,
}

/// Errors from the external asset ledger
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    /// The debited account does not hold enough of the asset
    #[error("insufficient balance of {asset}: needed {needed}, available {available}")]
    InsufficientBalance {
        asset: AssetId,
        needed: u64,
        available: u64,
    },

    /// Crediting the destination would wrap its balance
    #[error("balance overflow for {asset}")]
    BalanceOverflow { asset: AssetId },
}

/// Errors from swap execution
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// Unknown, inactive, or self-swap asset
    #[error("asset {0} is not supported for swaps")]
    UnsupportedAsset(AssetId),

    /// Zero input amount
    #[error("swap amount must be positive")]
    InvalidAmount,

    /// Quoted output fell below the caller's bound; no state was mutated
    #[error("slippage exceeded: quoted {quoted}, minimum acceptable {min_amount_out}")]
    SlippageExceeded { quoted: u64, min_amount_out: u64 },

    /// Collecting the input from the caller failed; no state was mutated
    #[error("failed to collect swap input")]
    TransferInFailed(#[source] TransferError),

    /// Disbursing the output failed; reserves and input were rolled back
    #[error("failed to disburse swap output")]
    TransferOutFailed(#[source] TransferError),

    /// The staged reserve update would drop the product below `k`
    #[error("swap would violate the pool invariant")]
    InvariantViolation,

    /// Non-zero input whose output rounds to zero (donation-drain guard)
    #[error("swap output rounds to zero")]
    ZeroOutput,

    /// Pricing rejected the trade
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Reserve bookkeeping arithmetic failed
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Errors from owner-gated admin operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdminError {
    /// Caller is not the configured owner
    #[error("caller is not the engine owner")]
    NotOwner,

    /// No pool is registered for the asset
    #[error("no pool registered for {0}")]
    UnknownAsset(AssetId),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}
