//! State definitions for the Connector contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// How bridged value is accounted on this chain
#[cw_serde]
pub enum ConnectorMode {
    /// Value is held in custody on send and released on receive/revert
    LockUnlock,
    /// Value is burnt on send and minted on receive/revert
    MintBurn,
}

impl ConnectorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorMode::LockUnlock => "lock_unlock",
            ConnectorMode::MintBurn => "mint_burn",
        }
    }
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Bridge token: a plain CW20 in lock mode, a connector-gated token in mint mode
    pub zeta_token: Addr,
    pub mode: ConnectorMode,
    /// Id of the chain this connector serves
    pub chain_id: u64,
    /// Sole caller of OnReceive, OnRevert and SetMaxSupply
    pub tss: Addr,
    /// Sole caller allowed to rotate the tss
    pub tss_updater: Addr,
    /// Sole caller allowed to pause, unpause and rotate itself
    pub pauser: Addr,
    pub paused: bool,
    /// Cap on the bridge token's total supply in mint mode; zero means unbounded
    pub max_supply: Uint128,
}

pub const CONTRACT_NAME: &str = "crates.io:zeta-connector";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Bridge tokens held in custody (lock mode only)
pub const LOCKED_AMOUNT: Item<Uint128> = Item::new("locked_amount");

/// Nonce of the last outbound message
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");
