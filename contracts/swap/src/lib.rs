//! Cross-chain swap
//!
//! Origin chain: the user's input asset is converted into bridge tokens
//! through the local token consumer and sent to the peer on the destination
//! chain with a `CROSS_CHAIN_SWAP_MESSAGE`.
//!
//! Destination chain: the delivered bridge tokens are converted into the
//! requested output asset and paid to the recipient.
//!
//! On revert the remaining bridge tokens are converted back into the input
//! asset and refunded to the original sender. The local conversion is not
//! atomic with the remote leg.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
