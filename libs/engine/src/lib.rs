//! # TokenSwap Engine
//!
//! ## Purpose
//!
//! The stateful core of the exchange: a registry of per-asset pools, the
//! swap execution state machine, and the owner-gated admin surface. Pricing
//! itself is delegated to the pure [`amm`] crate; this crate owns the rules
//! about when a trade may run and how reserves and balances move.
//!
//! ## Integration Points
//!
//! - **Input Sources**: caller swap/quote requests, owner admin requests
//! - **Output Destinations**: an [`AssetLedger`] implementation holding the
//!   real token balances (the engine never assumes transfers cannot fail)
//! - **Concurrency**: single-writer by construction — every mutation goes
//!   through `&mut SwapEngine`, quotes take `&self` and are freely shareable
//!
//! ## Atomicity
//!
//! A swap either fully applies or leaves no trace. All validation runs before
//! any balance moves; reserves are committed before disbursement
//! (checks-effects-interactions), and a failed disbursement rolls both the
//! reserve commit and the collected input back.

pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod registry;

pub use config::EngineConfig;
pub use engine::SwapEngine;
pub use error::{AdminError, PoolError, SwapError, TransferError};
pub use ledger::{AssetLedger, InMemoryLedger};
pub use registry::{Pool, PoolInfo, PoolPricing, PoolRegistry};
