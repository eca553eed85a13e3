//! Engine configuration
//!
//! The owner identity, the quote asset, and the fixed-ratio rate are injected
//! once at engine construction and never change afterwards; there is no
//! mutable global configuration.

use serde::{Deserialize, Serialize};
use types::{AccountId, AssetId};

/// Default values shared by deployments
pub mod defaults {
    /// Units of base asset per unit of quote asset in fixed-ratio pools
    /// (the production deployments all ran with 3).
    pub const SWAP_RATIO: u64 = 3;
}

/// Immutable engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The only account allowed to register pools or withdraw funds
    pub owner: AccountId,
    /// Asset "B": the fixed counterpart of every pool
    pub quote_asset: AssetId,
    /// Rate applied to every fixed-ratio pool
    pub swap_ratio: u64,
}

impl EngineConfig {
    pub fn new(owner: AccountId, quote_asset: AssetId) -> Self {
        Self {
            owner,
            quote_asset,
            swap_ratio: defaults::SWAP_RATIO,
        }
    }

    pub fn with_swap_ratio(mut self, swap_ratio: u64) -> Self {
        self.swap_ratio = swap_ratio;
        self
    }
}
