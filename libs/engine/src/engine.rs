//! Swap execution and admin operations
//!
//! One `SwapEngine` instance owns the pool registry and drives the ledger.
//! Execution order per swap: validate, quote, stage the reserve update and
//! check the invariant, collect the input, commit reserves, disburse the
//! output. Nothing external is called until validation is complete, and the
//! disbursement runs strictly after internal state is final so a re-entrant
//! ledger would only ever observe fully consistent post-swap state.

use amm::{ConstantProduct, FixedRatio};
use tracing::{debug, error, info, warn};
use types::{mul_wide, AccountId, ArithmeticError, AssetId};

use crate::config::EngineConfig;
use crate::error::{AdminError, PoolError, SwapError};
use crate::ledger::AssetLedger;
use crate::registry::{PoolInfo, PoolPricing, PoolRegistry};

/// Trade direction relative to the pool: base asset A against quote asset B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    AtoB,
    BtoA,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::AtoB => "a_to_b",
            Direction::BtoA => "b_to_a",
        }
    }
}

/// The exchange core: registry, configuration, and ledger handle.
#[derive(Debug)]
pub struct SwapEngine<L: AssetLedger> {
    config: EngineConfig,
    fixed_ratio: FixedRatio,
    registry: PoolRegistry,
    ledger: L,
}

impl<L: AssetLedger> SwapEngine<L> {
    /// A zero `swap_ratio` is rejected here, before any pool can exist.
    pub fn new(config: EngineConfig, ledger: L) -> Result<Self, ArithmeticError> {
        let fixed_ratio = FixedRatio::new(config.swap_ratio)?;
        Ok(Self {
            config,
            fixed_ratio,
            registry: PoolRegistry::new(),
            ledger,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // ---- caller-facing reads -------------------------------------------

    /// Preview the output of an A-to-B swap. Pure: no state is touched.
    pub fn quote_a_to_b(&self, asset: AssetId, amount_in: u64) -> Result<u64, SwapError> {
        let pricing = self.lookup_active(asset)?;
        self.quote_pricing(pricing, Direction::AtoB, amount_in)
    }

    /// Preview the output of a B-to-A swap. Pure: no state is touched.
    pub fn quote_b_to_a(&self, asset: AssetId, amount_in: u64) -> Result<u64, SwapError> {
        let pricing = self.lookup_active(asset)?;
        self.quote_pricing(pricing, Direction::BtoA, amount_in)
    }

    pub fn pool_info(&self, asset: AssetId) -> Option<PoolInfo> {
        self.registry.pool_info(asset)
    }

    /// Every registered base asset, in registration order.
    pub fn supported_assets(&self) -> Vec<AssetId> {
        self.registry.assets().collect()
    }

    /// Engine-held balance of `asset`. After an emergency withdrawal this
    /// may be lower than the nominal reserves; swaps tolerate that and fail
    /// on disbursement instead.
    pub fn asset_balance(&self, asset: AssetId) -> u64 {
        self.ledger.vault_balance(asset)
    }

    // ---- swaps ----------------------------------------------------------

    /// Deposit `amount_in` of the base asset, receive quote asset.
    pub fn swap_a_to_b(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, SwapError> {
        self.execute_swap(caller, asset, Direction::AtoB, amount_in, min_amount_out)
    }

    /// Deposit `amount_in` of the quote asset, receive base asset.
    pub fn swap_b_to_a(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, SwapError> {
        self.execute_swap(caller, asset, Direction::BtoA, amount_in, min_amount_out)
    }

    fn execute_swap(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        direction: Direction,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64, SwapError> {
        let pricing = self.lookup_active(asset)?;
        if amount_in == 0 {
            return Err(SwapError::InvalidAmount);
        }

        let amount_out = self.quote_pricing(pricing, direction, amount_in)?;
        if amount_out == 0 {
            return Err(SwapError::ZeroOutput);
        }
        if amount_out < min_amount_out {
            debug!(
                %asset,
                direction = direction.label(),
                quoted = amount_out,
                min_amount_out,
                "swap rejected: slippage bound not met"
            );
            return Err(SwapError::SlippageExceeded {
                quoted: amount_out,
                min_amount_out,
            });
        }

        // Stage the reserve update; nothing moves until it passes the
        // invariant check.
        let staged = match pricing {
            PoolPricing::FixedRatio => None,
            PoolPricing::ConstantProduct {
                reserve_a,
                reserve_b,
                k,
            } => {
                let (new_a, new_b) = match direction {
                    Direction::AtoB => (
                        reserve_a
                            .checked_add(amount_in)
                            .ok_or(ArithmeticError::Overflow)?,
                        reserve_b
                            .checked_sub(amount_out)
                            .ok_or(SwapError::InvariantViolation)?,
                    ),
                    Direction::BtoA => (
                        reserve_a
                            .checked_sub(amount_out)
                            .ok_or(SwapError::InvariantViolation)?,
                        reserve_b
                            .checked_add(amount_in)
                            .ok_or(ArithmeticError::Overflow)?,
                    ),
                };
                if mul_wide(new_a, new_b) < k {
                    return Err(SwapError::InvariantViolation);
                }
                Some(((reserve_a, reserve_b), (new_a, new_b)))
            }
        };

        let (asset_in, asset_out) = match direction {
            Direction::AtoB => (asset, self.config.quote_asset),
            Direction::BtoA => (self.config.quote_asset, asset),
        };

        self.ledger
            .transfer_in(asset_in, caller, amount_in)
            .map_err(SwapError::TransferInFailed)?;

        if let Some((_, (new_a, new_b))) = staged {
            self.registry.commit_reserves(asset, new_a, new_b);
        }

        if let Err(err) = self.ledger.transfer_out(asset_out, caller, amount_out) {
            // Disbursement failed after the reserve commit: restore the
            // prior reserves and hand the collected input back, so both
            // legs commit or neither.
            if let Some(((old_a, old_b), _)) = staged {
                self.registry.commit_reserves(asset, old_a, old_b);
            }
            if let Err(refund_err) = self.ledger.transfer_out(asset_in, caller, amount_in) {
                error!(
                    %asset,
                    ?refund_err,
                    "refund after failed disbursement also failed; ledger and books disagree"
                );
            }
            return Err(SwapError::TransferOutFailed(err));
        }

        info!(
            %asset,
            direction = direction.label(),
            amount_in,
            amount_out,
            "swap committed"
        );
        Ok(amount_out)
    }

    // ---- admin ----------------------------------------------------------

    /// Register `asset` as a fixed-ratio pool. Owner only.
    pub fn add_asset(&mut self, caller: AccountId, asset: AssetId) -> Result<(), AdminError> {
        self.ensure_owner(caller)?;
        self.registry.register(asset)?;
        info!(%asset, "registered fixed-ratio pool");
        Ok(())
    }

    /// Register `asset` as a constant-product pool, pulling both seed legs
    /// from the owner's external balance. Owner only. On any failure no pool
    /// exists and no funds are retained.
    pub fn add_asset_with_liquidity(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<(), AdminError> {
        self.ensure_owner(caller)?;
        if amount_a == 0 || amount_b == 0 {
            return Err(PoolError::InvalidLiquidity.into());
        }
        if self.registry.get(asset).is_some() {
            return Err(PoolError::AlreadyExists(asset).into());
        }

        self.ledger.transfer_in(asset, caller, amount_a)?;
        if let Err(err) = self
            .ledger
            .transfer_in(self.config.quote_asset, caller, amount_b)
        {
            // Second leg failed; return the first so the seed is all-or-nothing.
            if let Err(refund_err) = self.ledger.transfer_out(asset, caller, amount_a) {
                error!(%asset, ?refund_err, "refund of seed liquidity failed");
            }
            return Err(err.into());
        }

        self.registry
            .register_with_liquidity(asset, amount_a, amount_b)?;
        info!(%asset, amount_a, amount_b, "registered constant-product pool");
        Ok(())
    }

    /// Flip a pool in or out of service. Owner only.
    pub fn set_asset_active(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        active: bool,
    ) -> Result<(), AdminError> {
        self.ensure_owner(caller)?;
        if !self.registry.set_active(asset, active) {
            return Err(AdminError::UnknownAsset(asset));
        }
        info!(%asset, active, "pool service state changed");
        Ok(())
    }

    /// Move `amount` of `asset` from the vault to the owner with no reserve
    /// bookkeeping and no invariant check. This can leave nominal reserves
    /// above the actual backing; subsequent swaps fail on disbursement
    /// rather than here.
    pub fn emergency_withdraw(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        amount: u64,
    ) -> Result<(), AdminError> {
        self.ensure_owner(caller)?;
        self.ledger.transfer_out(asset, self.config.owner, amount)?;
        warn!(%asset, amount, "emergency withdrawal bypassed reserve bookkeeping");
        Ok(())
    }

    // ---- internals ------------------------------------------------------

    fn ensure_owner(&self, caller: AccountId) -> Result<(), AdminError> {
        if caller != self.config.owner {
            return Err(AdminError::NotOwner);
        }
        Ok(())
    }

    /// Resolve an asset to its pricing mode, rejecting the quote asset
    /// itself (self-swap), unknown assets, and out-of-service pools.
    fn lookup_active(&self, asset: AssetId) -> Result<PoolPricing, SwapError> {
        if asset == self.config.quote_asset {
            return Err(SwapError::UnsupportedAsset(asset));
        }
        match self.registry.get(asset) {
            Some(pool) if pool.is_active() => Ok(*pool.pricing()),
            _ => Err(SwapError::UnsupportedAsset(asset)),
        }
    }

    fn quote_pricing(
        &self,
        pricing: PoolPricing,
        direction: Direction,
        amount_in: u64,
    ) -> Result<u64, SwapError> {
        let quoted = match pricing {
            PoolPricing::FixedRatio => match direction {
                Direction::AtoB => self.fixed_ratio.quote_a_to_b(amount_in),
                Direction::BtoA => self.fixed_ratio.quote_b_to_a(amount_in),
            },
            PoolPricing::ConstantProduct {
                reserve_a,
                reserve_b,
                ..
            } => {
                // Always price against the live reserves, never the frozen k.
                let (reserve_in, reserve_out) = match direction {
                    Direction::AtoB => (reserve_a, reserve_b),
                    Direction::BtoA => (reserve_b, reserve_a),
                };
                ConstantProduct::swap_output(amount_in, reserve_in, reserve_out)
            }
        };
        quoted.map_err(SwapError::from)
    }
}
