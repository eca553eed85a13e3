//! Asset ledger boundary
//!
//! The engine never holds token balances itself; it instructs an external
//! ledger to move them. Both transfer directions are fallible — a missing
//! approval, an underfunded caller, or a drained vault all surface as
//! [`TransferError`] and the engine decides what to unwind.

use std::collections::HashMap;

use types::{AccountId, AssetId};

use crate::error::TransferError;

/// External holder of real token balances.
///
/// `transfer_in` debits a caller into the engine vault, `transfer_out`
/// credits a caller from it. Implementations must apply each call atomically:
/// either both legs of the bookkeeping move or neither does.
pub trait AssetLedger {
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: u64,
    ) -> Result<(), TransferError>;

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), TransferError>;

    /// Engine-held balance of `asset`, across all pools.
    fn vault_balance(&self, asset: AssetId) -> u64;
}

/// In-process ledger keeping per-account balances and the engine vault in
/// plain maps. Used by the test suites and by embedders that do not bridge
/// to an external balance system.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    accounts: HashMap<(AccountId, AssetId), u64>,
    vault: HashMap<AssetId, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` of `asset` into an external account.
    pub fn fund(&mut self, account: AccountId, asset: AssetId, amount: u64) {
        *self.accounts.entry((account, asset)).or_insert(0) += amount;
    }

    /// Mint `amount` of `asset` directly into the engine vault, the way the
    /// original deployments pre-funded the contract before fixed-ratio
    /// trading opened.
    pub fn fund_vault(&mut self, asset: AssetId, amount: u64) {
        *self.vault.entry(asset).or_insert(0) += amount;
    }

    pub fn balance_of(&self, account: AccountId, asset: AssetId) -> u64 {
        self.accounts.get(&(account, asset)).copied().unwrap_or(0)
    }

    fn debit(
        entry: &mut u64,
        asset: AssetId,
        amount: u64,
    ) -> Result<(), TransferError> {
        if *entry < amount {
            return Err(TransferError::InsufficientBalance {
                asset,
                needed: amount,
                available: *entry,
            });
        }
        *entry -= amount;
        Ok(())
    }

    fn credit(entry: &mut u64, asset: AssetId, amount: u64) -> Result<(), TransferError> {
        *entry = entry
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow { asset })?;
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: u64,
    ) -> Result<(), TransferError> {
        let account = self.accounts.entry((from, asset)).or_insert(0);
        Self::debit(account, asset, amount)?;
        let vault = self.vault.entry(asset).or_insert(0);
        if let Err(err) = Self::credit(vault, asset, amount) {
            // Undo the debit so the failed call leaves no trace.
            *self.accounts.entry((from, asset)).or_insert(0) += amount;
            return Err(err);
        }
        Ok(())
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), TransferError> {
        let vault = self.vault.entry(asset).or_insert(0);
        Self::debit(vault, asset, amount)?;
        let account = self.accounts.entry((to, asset)).or_insert(0);
        if let Err(err) = Self::credit(account, asset, amount) {
            *self.vault.entry(asset).or_insert(0) += amount;
            return Err(err);
        }
        Ok(())
    }

    fn vault_balance(&self, asset: AssetId) -> u64 {
        self.vault.get(&asset).copied().unwrap_or(0)
    }
}
