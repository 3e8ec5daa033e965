//! Message types for the Connector contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use zeta_common::ZetaSendInput;

use crate::state::ConnectorMode;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge token contract
    pub zeta_token: String,
    pub mode: ConnectorMode,
    /// Id of the chain this connector serves
    pub chain_id: u64,
    pub tss: String,
    pub tss_updater: String,
    pub pauser: String,
    /// Mint mode supply cap, zero or absent for unbounded
    pub max_supply: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Messaging
    // ========================================================================
    /// Send a message and value to another chain.
    ///
    /// The caller must have granted this contract a CW20 allowance of
    /// `zeta_value_and_gas` on the bridge token.
    Send(ZetaSendInput),

    /// Deliver an inbound message.
    ///
    /// Authorization: tss
    OnReceive {
        zeta_tx_sender_address: Binary,
        source_chain_id: u64,
        destination_address: String,
        zeta_value_and_gas: Uint128,
        message: Binary,
        internal_send_hash: Binary,
    },

    /// Return the value of an undeliverable message to its local sender.
    ///
    /// Authorization: tss
    OnRevert {
        zeta_tx_sender_address: String,
        source_chain_id: u64,
        destination_address: Binary,
        destination_chain_id: u64,
        remaining_zeta_value: Uint128,
        message: Binary,
        internal_send_hash: Binary,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Authorization: pauser
    Pause {},

    /// Authorization: pauser
    Unpause {},

    /// Authorization: tss updater
    UpdateTssAddress { tss: String },

    /// Hand the updater role to the current tss (one-way).
    ///
    /// Authorization: tss updater
    RenounceTssAddressUpdater {},

    /// Authorization: pauser
    UpdatePauserAddress { pauser: String },

    /// Authorization: tss
    SetMaxSupply { max_supply: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Bridge tokens held by the connector
    #[returns(LockedAmountResponse)]
    LockedAmount {},

    /// Nonce of the last outbound message
    #[returns(NonceResponse)]
    Nonce {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub zeta_token: Addr,
    pub mode: ConnectorMode,
    pub chain_id: u64,
    pub tss: Addr,
    pub tss_updater: Addr,
    pub pauser: Addr,
    pub paused: bool,
    pub max_supply: Uint128,
}

#[cw_serde]
pub struct LockedAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}
