//! ZetaLink bridge token
//!
//! A CW20 token for chains that account bridged value by minting and
//! burning. Transfers, allowances and the standard CW20 queries behave as in
//! `cw20-base`; supply only changes through the connector:
//! - `Mint` is accepted from the connector alone and records the relayer's
//!   `internal_send_hash`
//! - `BurnFrom` is accepted from the connector alone and consumes the
//!   owner's allowance to the connector
//!
//! There is no holder-initiated burn.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
