//! Error types for exact integer arithmetic
//!
//! Reserve math must never wrap or divide by zero silently; both conditions
//! surface as typed errors the caller can act on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during widening integer arithmetic
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticError {
    /// Result does not fit the target integer width
    #[error("overflow: result exceeds maximum representable value")]
    Overflow,

    /// Division with a zero denominator
    #[error("division by zero")]
    DivisionByZero,
}
