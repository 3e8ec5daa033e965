//! Token consumer
//!
//! Constant-product pools, each pairing the bridge token with one local
//! asset (native denom or CW20). Cross-chain applications use it to turn a
//! user's asset into bridge tokens before `Send` and back after delivery or
//! revert. Liquidity is provided by the owner.

pub mod contract;
pub mod error;
pub mod msg;
pub mod pool;
pub mod state;

pub use crate::error::ContractError;
