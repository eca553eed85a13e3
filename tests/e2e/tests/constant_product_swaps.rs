//! Constant-product pool lifecycle: quotes, swaps, slippage, atomicity.

use assert_matches::assert_matches;
use engine::SwapError;
use tokenswap_e2e_tests::fixtures::{
    self, BASE_TOKEN, QUOTE_TOKEN, SEED_K, SEED_RESERVE_A, SEED_RESERVE_B, TRADER,
    TRADER_BASE_FUNDS, TRADER_QUOTE_FUNDS, UNLISTED_TOKEN,
};
use types::mul_wide;

#[test]
fn seeded_pool_reports_deployment_reserves() {
    let engine = fixtures::engine_with_seeded_pool();
    let info = engine.pool_info(BASE_TOKEN).unwrap();
    assert_eq!(info.reserve_a, SEED_RESERVE_A);
    assert_eq!(info.reserve_b, SEED_RESERVE_B);
    assert_eq!(info.k, SEED_K);
    assert_eq!(engine.asset_balance(BASE_TOKEN), SEED_RESERVE_A);
    assert_eq!(engine.asset_balance(QUOTE_TOKEN), SEED_RESERVE_B);
}

#[test]
fn swap_a_to_b_moves_balances_and_reserves() -> anyhow::Result<()> {
    let mut engine = fixtures::engine_with_seeded_pool();

    let quoted = engine.quote_a_to_b(BASE_TOKEN, 3_000)?;
    assert_eq!(quoted, 952);

    let received = engine.swap_a_to_b(TRADER, BASE_TOKEN, 3_000, quoted)?;
    assert_eq!(received, quoted);

    let info = engine.pool_info(BASE_TOKEN).unwrap();
    assert_eq!(info.reserve_a, 63_000);
    assert_eq!(info.reserve_b, 19_048);
    assert!(mul_wide(info.reserve_a, info.reserve_b) >= SEED_K);

    let ledger = engine.ledger();
    assert_eq!(ledger.balance_of(TRADER, BASE_TOKEN), TRADER_BASE_FUNDS - 3_000);
    assert_eq!(ledger.balance_of(TRADER, QUOTE_TOKEN), TRADER_QUOTE_FUNDS + 952);
    assert_eq!(engine.asset_balance(BASE_TOKEN), SEED_RESERVE_A + 3_000);
    assert_eq!(engine.asset_balance(QUOTE_TOKEN), SEED_RESERVE_B - 952);
    Ok(())
}

#[test]
fn swap_b_to_a_mirrors_the_curve() -> anyhow::Result<()> {
    let mut engine = fixtures::engine_with_seeded_pool();

    let quoted = engine.quote_b_to_a(BASE_TOKEN, 1_000)?;
    assert_eq!(quoted, 2_857);

    let received = engine.swap_b_to_a(TRADER, BASE_TOKEN, 1_000, quoted)?;
    assert_eq!(received, 2_857);

    let info = engine.pool_info(BASE_TOKEN).unwrap();
    assert_eq!(info.reserve_a, SEED_RESERVE_A - 2_857);
    assert_eq!(info.reserve_b, SEED_RESERVE_B + 1_000);
    assert!(mul_wide(info.reserve_a, info.reserve_b) >= SEED_K);
    Ok(())
}

#[test]
fn product_never_decreases_across_a_trade_sequence() -> anyhow::Result<()> {
    let mut engine = fixtures::engine_with_seeded_pool();
    let mut product = SEED_K;

    for amount in [3_000u64, 300, 999, 1] {
        match engine.swap_a_to_b(TRADER, BASE_TOKEN, amount, 0) {
            Ok(_) | Err(SwapError::ZeroOutput) => {}
            Err(other) => return Err(other.into()),
        }
        let info = engine.pool_info(BASE_TOKEN).unwrap();
        let now = mul_wide(info.reserve_a, info.reserve_b);
        assert!(now >= product);
        product = now;
    }
    assert!(product >= SEED_K);
    Ok(())
}

#[test]
fn slippage_bound_rejects_without_mutation() {
    let mut engine = fixtures::engine_with_seeded_pool();
    let quoted = engine.quote_a_to_b(BASE_TOKEN, 3_000).unwrap();

    let before = engine.pool_info(BASE_TOKEN).unwrap();
    let result = engine.swap_a_to_b(TRADER, BASE_TOKEN, 3_000, quoted + 1);
    assert_matches!(
        result,
        Err(SwapError::SlippageExceeded { quoted: q, min_amount_out: m })
            if q == quoted && m == quoted + 1
    );

    assert_eq!(engine.pool_info(BASE_TOKEN).unwrap(), before);
    assert_eq!(
        engine.ledger().balance_of(TRADER, BASE_TOKEN),
        TRADER_BASE_FUNDS
    );
}

#[test]
fn unregistered_asset_is_rejected_without_transfer() {
    let mut engine = fixtures::engine_with_seeded_pool();
    assert_matches!(
        engine.swap_a_to_b(TRADER, UNLISTED_TOKEN, 3_000, 0),
        Err(SwapError::UnsupportedAsset(asset)) if asset == UNLISTED_TOKEN
    );
    assert_eq!(
        engine.ledger().balance_of(TRADER, BASE_TOKEN),
        TRADER_BASE_FUNDS
    );
}

#[test]
fn quote_asset_cannot_be_swapped_against_itself() {
    let mut engine = fixtures::engine_with_seeded_pool();
    assert_matches!(
        engine.swap_a_to_b(TRADER, QUOTE_TOKEN, 300, 0),
        Err(SwapError::UnsupportedAsset(asset)) if asset == QUOTE_TOKEN
    );
}

#[test]
fn zero_amount_is_invalid() {
    let mut engine = fixtures::engine_with_seeded_pool();
    assert_matches!(
        engine.swap_a_to_b(TRADER, BASE_TOKEN, 0, 0),
        Err(SwapError::InvalidAmount)
    );
}

#[test]
fn dust_input_is_rejected_as_zero_output() {
    let mut engine = fixtures::engine_with_seeded_pool();
    let before = engine.pool_info(BASE_TOKEN).unwrap();
    assert_matches!(
        engine.swap_a_to_b(TRADER, BASE_TOKEN, 1, 0),
        Err(SwapError::ZeroOutput)
    );
    assert_eq!(engine.pool_info(BASE_TOKEN).unwrap(), before);
}

#[test]
fn underfunded_caller_fails_at_collection_with_no_mutation() {
    let mut engine = fixtures::engine_with_seeded_pool();
    let before = engine.pool_info(BASE_TOKEN).unwrap();

    // Divisible by nothing in particular; just more than the trader holds.
    assert_matches!(
        engine.swap_a_to_b(TRADER, BASE_TOKEN, TRADER_BASE_FUNDS + 3, 0),
        Err(SwapError::TransferInFailed(_))
    );

    assert_eq!(engine.pool_info(BASE_TOKEN).unwrap(), before);
    assert_eq!(
        engine.ledger().balance_of(TRADER, BASE_TOKEN),
        TRADER_BASE_FUNDS
    );
    assert_eq!(engine.asset_balance(BASE_TOKEN), SEED_RESERVE_A);
}
