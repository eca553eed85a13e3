//! Fixed-ratio pricing
//!
//! One unit of quote asset B buys `ratio` units of base asset A, engine-wide.
//! The rate never moves with volume; pools priced this way carry no reserves
//! for pricing purposes. A-side inputs must divide exactly so no dust is ever
//! created or destroyed by a trade.

use crate::error::QuoteError;
use types::ArithmeticError;

/// Engine-wide fixed exchange rate between the quote asset and every
/// fixed-ratio pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRatio {
    ratio: u64,
}

impl FixedRatio {
    /// A zero ratio would make every A-side quote a division by zero;
    /// construction rejects it up front.
    pub fn new(ratio: u64) -> Result<Self, ArithmeticError> {
        if ratio == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> u64 {
        self.ratio
    }

    /// `amount_a_in / ratio` units of B; `amount_a_in` must be an exact
    /// multiple of the ratio.
    pub fn quote_a_to_b(&self, amount_a_in: u64) -> Result<u64, QuoteError> {
        if amount_a_in % self.ratio != 0 {
            return Err(QuoteError::NotDivisible {
                amount: amount_a_in,
                ratio: self.ratio,
            });
        }
        Ok(amount_a_in / self.ratio)
    }

    /// `amount_b_in * ratio` units of A, checked.
    pub fn quote_b_to_a(&self, amount_b_in: u64) -> Result<u64, QuoteError> {
        amount_b_in
            .checked_mul(self.ratio)
            .ok_or(QuoteError::Arithmetic(ArithmeticError::Overflow))
    }
}
