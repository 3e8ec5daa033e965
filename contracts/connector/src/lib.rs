//! ZetaLink Connector
//!
//! The chain-local gateway for cross-chain messages. Applications call
//! `Send`; the TSS relayer calls `OnReceive` on the destination chain or
//! `OnRevert` on the source chain. Value moves with the message in one of two
//! accounting modes:
//! - `LockUnlock` - bridge tokens are held in custody on send and released on
//!   receive or revert
//! - `MintBurn` - bridge tokens are burnt on send and minted on receive or
//!   revert, bounded by an optional max supply
//!
//! The implementation is split into:
//! - `execute/` - messaging and role administration handlers
//! - `query` - query handlers

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
