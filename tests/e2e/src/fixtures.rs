//! Deployment-shaped fixtures
//!
//! Account and funding numbers mirror the reference deployment: the owner
//! seeds a 60000/20000 constant-product pool, pre-funds the vault for
//! fixed-ratio trading, and hands a trader a small working balance.

use engine::{EngineConfig, InMemoryLedger, SwapEngine};
use types::{AccountId, AssetId};

pub const OWNER: AccountId = AccountId::new(0x01);
pub const TRADER: AccountId = AccountId::new(0x02);
pub const INTRUDER: AccountId = AccountId::new(0x03);

/// Asset "B", the fixed counterpart of every pool.
pub const QUOTE_TOKEN: AssetId = AssetId::new(0x10);
/// Asset "A" used by most scenarios.
pub const BASE_TOKEN: AssetId = AssetId::new(0x20);
/// Never registered anywhere.
pub const UNLISTED_TOKEN: AssetId = AssetId::new(0x99);

pub const SEED_RESERVE_A: u64 = 60_000;
pub const SEED_RESERVE_B: u64 = 20_000;
pub const SEED_K: u128 = 1_200_000_000;

pub const TRADER_BASE_FUNDS: u64 = 10_000;
pub const TRADER_QUOTE_FUNDS: u64 = 1_000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Ledger with the owner and trader funded, vault empty.
pub fn funded_ledger() -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new();
    ledger.fund(OWNER, BASE_TOKEN, 2_000_000);
    ledger.fund(OWNER, QUOTE_TOKEN, 1_000_000);
    ledger.fund(TRADER, BASE_TOKEN, TRADER_BASE_FUNDS);
    ledger.fund(TRADER, QUOTE_TOKEN, TRADER_QUOTE_FUNDS);
    ledger
}

/// Engine with `BASE_TOKEN` registered as a constant-product pool seeded
/// with the deployment reserves.
pub fn engine_with_seeded_pool() -> SwapEngine<InMemoryLedger> {
    init_tracing();
    let mut engine =
        SwapEngine::new(EngineConfig::new(OWNER, QUOTE_TOKEN), funded_ledger()).unwrap();
    engine
        .add_asset_with_liquidity(OWNER, BASE_TOKEN, SEED_RESERVE_A, SEED_RESERVE_B)
        .unwrap();
    engine
}

/// Engine with `BASE_TOKEN` registered as a fixed-ratio pool and the vault
/// pre-funded on both sides, the way the original deployment transferred
/// inventory into the contract before trading opened.
pub fn engine_with_fixed_ratio_pool() -> SwapEngine<InMemoryLedger> {
    init_tracing();
    let mut ledger = funded_ledger();
    ledger.fund_vault(BASE_TOKEN, 300_000);
    ledger.fund_vault(QUOTE_TOKEN, 100_000);
    let mut engine = SwapEngine::new(EngineConfig::new(OWNER, QUOTE_TOKEN), ledger).unwrap();
    engine.add_asset(OWNER, BASE_TOKEN).unwrap();
    engine
}
