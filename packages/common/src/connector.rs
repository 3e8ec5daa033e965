//! Connector wire interface.
//!
//! Applications call `Send` on their chain-local connector; connectors call
//! the `on_zeta_message` / `on_zeta_revert` hooks on destination contracts.
//! Remote addresses are opaque bytes: a chain never interprets another
//! chain's address format.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Input of `Send`
#[cw_serde]
pub struct ZetaSendInput {
    /// Chain the message is addressed to
    pub destination_chain_id: u64,
    /// Receiving contract on the destination chain (opaque bytes)
    pub destination_address: Binary,
    /// Gas the relayer should budget for the destination call
    pub destination_gas_limit: Uint128,
    /// Application payload, delivered verbatim
    pub message: Binary,
    /// Bridge token amount moved with the message (may be zero)
    pub zeta_value_and_gas: Uint128,
    /// Relayer parameters, opaque to the connector
    pub zeta_params: Binary,
}

/// Subset of the connector's execute interface that applications use
#[cw_serde]
pub enum ConnectorExecuteMsg {
    Send(ZetaSendInput),
}

/// Payload of the `on_zeta_message` hook
#[cw_serde]
pub struct ZetaMessage {
    /// Originating contract on the source chain (opaque bytes)
    pub zeta_tx_sender_address: Binary,
    pub source_chain_id: u64,
    /// Local receiving contract
    pub destination_address: String,
    /// Bridge tokens released to `destination_address` before the hook runs
    pub zeta_value: Uint128,
    pub message: Binary,
}

/// Payload of the `on_zeta_revert` hook
#[cw_serde]
pub struct ZetaRevert {
    /// Local contract that called `Send`
    pub zeta_tx_sender_address: String,
    /// Chain the original `Send` happened on (this chain)
    pub source_chain_id: u64,
    pub destination_address: Binary,
    pub destination_chain_id: u64,
    /// Bridge tokens returned to `zeta_tx_sender_address` before the hook runs
    pub remaining_zeta_value: Uint128,
    pub message: Binary,
}

/// Hooks a connector invokes on destination contracts
#[cw_serde]
pub enum ZetaReceiverExecuteMsg {
    OnZetaMessage(ZetaMessage),
    OnZetaRevert(ZetaRevert),
}

impl ZetaReceiverExecuteMsg {
    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}

/// Build the `Send` call to a connector.
pub fn send_msg(connector: &Addr, input: ZetaSendInput) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: connector.to_string(),
        msg: to_json_binary(&ConnectorExecuteMsg::Send(input))?,
        funds: vec![],
    }))
}

/// Opaque byte form of a local address, as carried across chains.
pub fn address_bytes(addr: &Addr) -> Binary {
    Binary::from(addr.as_bytes())
}
