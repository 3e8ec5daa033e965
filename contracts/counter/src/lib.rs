//! Cross-chain counter
//!
//! `CrossChainCount` bumps the caller's counter locally and asks the peer on
//! the destination chain to bump it there. A revert undoes the local bump.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
