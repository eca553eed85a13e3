//! Opaque identifiers for assets and accounts
//!
//! Both are plain `u64` handles assigned by the embedding environment; the
//! engine only ever compares and hashes them. Distinct newtypes keep the two
//! namespaces from mixing at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a token (base asset or the quote asset).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssetId(u64);

impl AssetId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset:{:#x}", self.0)
    }
}

/// Identifier of an external balance holder (owner, trader, the engine vault).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account:{:#x}", self.0)
    }
}
