//! Widening integer arithmetic for reserve calculations
//!
//! Every product of two `u64` amounts is computed in `u128` so it cannot
//! wrap; results are narrowed back only after the division that brings them
//! into range. Division rounding direction is chosen by the caller:
//! truncation for plain rate math, ceiling when the result becomes a reserve
//! that must not be understated.

use crate::errors::ArithmeticError;

/// Widening product of two `u64` values. Cannot overflow.
#[inline]
pub fn mul_wide(a: u64, b: u64) -> u128 {
    u128::from(a) * u128::from(b)
}

/// `value * numerator / denominator` with a `u128` intermediate, truncating
/// toward zero.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64, ArithmeticError> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let wide = mul_wide(value, numerator) / u128::from(denominator);
    u64::try_from(wide).map_err(|_| ArithmeticError::Overflow)
}

/// Ceiling division over wide intermediates.
pub fn div_ceil_wide(numerator: u128, denominator: u128) -> Result<u128, ArithmeticError> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        Ok(quotient + 1)
    }
}
