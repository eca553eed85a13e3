//! Constant-product pricing using the `x * y = k` invariant
//!
//! The output is derived from the pool's live reserves, not the frozen `k`
//! recorded at registration, so rounding dust accumulated by earlier trades
//! stays captured in the pool. The new output-side reserve is rounded *up*
//! (output rounded down), which guarantees the post-swap product is never
//! below the pre-swap product:
//!
//! ```text
//! out      = reserve_out - ceil(reserve_in * reserve_out / (reserve_in + in))
//! product' = (reserve_in + in) * (reserve_out - out) >= reserve_in * reserve_out
//! ```

use crate::error::QuoteError;
use types::{div_ceil_wide, mul_wide};

/// Constant-product swap math, factored out of the pool for reuse in both
/// trade directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProduct;

impl ConstantProduct {
    /// Output amount for depositing `amount_in` against the
    /// `(reserve_in, reserve_out)` side of a pool.
    ///
    /// Guaranteed to fit `u64`: the new output-side reserve is strictly less
    /// than `reserve_out` whenever `amount_in > 0`.
    pub fn swap_output(
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
    ) -> Result<u64, QuoteError> {
        if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
            return Err(QuoteError::InsufficientLiquidity);
        }

        let product = mul_wide(reserve_in, reserve_out);
        let new_reserve_in = u128::from(reserve_in) + u128::from(amount_in);
        let new_reserve_out = div_ceil_wide(product, new_reserve_in)?;

        // ceil(product / new_reserve_in) <= reserve_out because
        // new_reserve_in > reserve_in, so the subtraction cannot underflow
        // and the result narrows losslessly.
        let out = u128::from(reserve_out) - new_reserve_out;
        Ok(out as u64)
    }
}
