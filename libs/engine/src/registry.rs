//! Pool registry
//!
//! Maps each base asset to its pool and remembers registration order for
//! enumeration. Pools are never removed; taking one out of service is a
//! boolean flip so historical reserve accounting stays consistent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use types::{mul_wide, AssetId};

use crate::error::PoolError;

/// Pricing mode, fixed at registration for the pool's lifetime.
///
/// Pools registered without liquidity trade at the engine-wide fixed ratio
/// and carry no reserves of their own; pools registered with liquidity trade
/// on their constant-product curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolPricing {
    FixedRatio,
    ConstantProduct {
        reserve_a: u64,
        reserve_b: u64,
        /// `reserve_a * reserve_b` frozen at registration; the floor the
        /// invariant check enforces. Never decreases except by re-seeding.
        k: u128,
    },
}

/// Per-asset pool state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pricing: PoolPricing,
    active: bool,
}

impl Pool {
    pub fn pricing(&self) -> &PoolPricing {
        &self.pricing
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Reserve snapshot exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolInfo {
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub k: u128,
}

/// Registry of every pool the engine has ever created
#[derive(Debug, Default, Clone)]
pub struct PoolRegistry {
    pools: HashMap<AssetId, Pool>,
    order: Vec<AssetId>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed-ratio pool, immediately able to trade.
    pub fn register(&mut self, asset: AssetId) -> Result<(), PoolError> {
        if self.pools.contains_key(&asset) {
            return Err(PoolError::AlreadyExists(asset));
        }
        self.pools.insert(
            asset,
            Pool {
                pricing: PoolPricing::FixedRatio,
                active: true,
            },
        );
        self.order.push(asset);
        Ok(())
    }

    /// Add a constant-product pool seeded with both reserves.
    pub fn register_with_liquidity(
        &mut self,
        asset: AssetId,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<(), PoolError> {
        if amount_a == 0 || amount_b == 0 {
            return Err(PoolError::InvalidLiquidity);
        }
        if self.pools.contains_key(&asset) {
            return Err(PoolError::AlreadyExists(asset));
        }
        self.pools.insert(
            asset,
            Pool {
                pricing: PoolPricing::ConstantProduct {
                    reserve_a: amount_a,
                    reserve_b: amount_b,
                    k: mul_wide(amount_a, amount_b),
                },
                active: true,
            },
        );
        self.order.push(asset);
        Ok(())
    }

    pub fn get(&self, asset: AssetId) -> Option<&Pool> {
        self.pools.get(&asset)
    }

    /// Registration-order enumeration; a fresh pass each call.
    pub fn assets(&self) -> impl Iterator<Item = AssetId> + '_ {
        self.order.iter().copied()
    }

    pub fn pool_info(&self, asset: AssetId) -> Option<PoolInfo> {
        self.pools.get(&asset).map(|pool| match pool.pricing {
            PoolPricing::FixedRatio => PoolInfo {
                reserve_a: 0,
                reserve_b: 0,
                k: 0,
            },
            PoolPricing::ConstantProduct {
                reserve_a,
                reserve_b,
                k,
            } => PoolInfo {
                reserve_a,
                reserve_b,
                k,
            },
        })
    }

    /// Flip a pool in or out of service. Returns false for unknown assets.
    pub fn set_active(&mut self, asset: AssetId, active: bool) -> bool {
        match self.pools.get_mut(&asset) {
            Some(pool) => {
                pool.active = active;
                true
            }
            None => false,
        }
    }

    /// Overwrite a constant-product pool's reserves after a committed swap.
    /// `k` is left untouched. No-op for fixed-ratio pools.
    pub(crate) fn commit_reserves(&mut self, asset: AssetId, reserve_a: u64, reserve_b: u64) {
        if let Some(pool) = self.pools.get_mut(&asset) {
            if let PoolPricing::ConstantProduct {
                reserve_a: ra,
                reserve_b: rb,
                ..
            } = &mut pool.pricing
            {
                *ra = reserve_a;
                *rb = reserve_b;
            }
        }
    }
}
