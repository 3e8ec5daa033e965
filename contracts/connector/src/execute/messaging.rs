//! Outbound and inbound message handlers.
//!
//! Value always moves before the destination hook runs, so a hook observes
//! the tokens it was sent. A failing hook aborts the whole delivery; the
//! relayer is then expected to revert on the source chain.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use zeta_common::{ZetaMessage, ZetaReceiverExecuteMsg, ZetaRevert, ZetaSendInput};

use crate::error::ContractError;
use crate::state::{Config, ConnectorMode, CONFIG, LOCKED_AMOUNT, OUTGOING_NONCE};

/// Lowercase hex with a `0x` prefix, the event encoding for binary fields.
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

fn assert_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::ConnectorPaused);
    }
    Ok(())
}

fn assert_tss(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.tss {
        return Err(ContractError::CallerIsNotTss {
            caller: sender.to_string(),
        });
    }
    Ok(())
}

fn token_msg<T: serde::Serialize>(config: &Config, msg: &T) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.zeta_token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

// ============================================================================
// Send
// ============================================================================

/// Take `zeta_value_and_gas` from the caller and emit `zeta_sent`.
///
/// The destination is not validated here; an unknown chain or receiver is
/// resolved by the relayer reverting the message.
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    input: ZetaSendInput,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_paused(&config)?;

    let amount = input.zeta_value_and_gas;
    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount.is_zero() {
        match config.mode {
            ConnectorMode::LockUnlock => {
                messages.push(token_msg(
                    &config,
                    &Cw20ExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount,
                    },
                )?);
                let locked = LOCKED_AMOUNT.load(deps.storage)?;
                LOCKED_AMOUNT.save(deps.storage, &locked.checked_add(amount)?)?;
            }
            ConnectorMode::MintBurn => {
                messages.push(token_msg(
                    &config,
                    &zeta_token::msg::ExecuteMsg::BurnFrom {
                        owner: info.sender.to_string(),
                        amount,
                    },
                )?);
            }
        }
    }

    let nonce = OUTGOING_NONCE.load(deps.storage)? + 1;
    OUTGOING_NONCE.save(deps.storage, &nonce)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "zeta_sent")
        .add_attribute("zeta_tx_sender_address", info.sender)
        .add_attribute("source_chain_id", config.chain_id.to_string())
        .add_attribute(
            "destination_chain_id",
            input.destination_chain_id.to_string(),
        )
        .add_attribute("destination_address", to_hex(&input.destination_address))
        .add_attribute("zeta_value_and_gas", amount)
        .add_attribute("destination_gas_limit", input.destination_gas_limit)
        .add_attribute("message", to_hex(&input.message))
        .add_attribute("zeta_params", to_hex(&input.zeta_params))
        .add_attribute("nonce", nonce.to_string()))
}

// ============================================================================
// OnReceive / OnRevert
// ============================================================================

/// Deliver an inbound message: release the value to the destination, then
/// call its `on_zeta_message` hook when a payload is attached.
pub fn execute_on_receive(
    deps: DepsMut,
    info: MessageInfo,
    msg: ZetaMessage,
    internal_send_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_paused(&config)?;
    assert_tss(&config, &info.sender)?;

    let destination = deps.api.addr_validate(&msg.destination_address)?;

    let mut messages = release_value(
        deps,
        &config,
        &destination,
        msg.zeta_value,
        &internal_send_hash,
    )?;

    let attributes = vec![
        ("action", "zeta_received".to_string()),
        ("zeta_tx_sender_address", to_hex(&msg.zeta_tx_sender_address)),
        ("source_chain_id", msg.source_chain_id.to_string()),
        ("destination_address", destination.to_string()),
        ("zeta_value", msg.zeta_value.to_string()),
        ("message", to_hex(&msg.message)),
        ("internal_send_hash", to_hex(&internal_send_hash)),
    ];

    if !msg.message.is_empty() {
        messages.push(ZetaReceiverExecuteMsg::OnZetaMessage(msg).into_cosmos_msg(destination)?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

/// Return the remaining value of an undeliverable message to the local
/// sender, then call its `on_zeta_revert` hook when a payload is attached.
pub fn execute_on_revert(
    deps: DepsMut,
    info: MessageInfo,
    revert: ZetaRevert,
    internal_send_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_paused(&config)?;
    assert_tss(&config, &info.sender)?;

    let sender = deps.api.addr_validate(&revert.zeta_tx_sender_address)?;

    let mut messages = release_value(
        deps,
        &config,
        &sender,
        revert.remaining_zeta_value,
        &internal_send_hash,
    )?;

    let attributes = vec![
        ("action", "zeta_reverted".to_string()),
        ("zeta_tx_sender_address", sender.to_string()),
        ("source_chain_id", revert.source_chain_id.to_string()),
        ("destination_chain_id", revert.destination_chain_id.to_string()),
        ("destination_address", to_hex(&revert.destination_address)),
        ("remaining_zeta_value", revert.remaining_zeta_value.to_string()),
        ("message", to_hex(&revert.message)),
        ("internal_send_hash", to_hex(&internal_send_hash)),
    ];

    if !revert.message.is_empty() {
        messages.push(ZetaReceiverExecuteMsg::OnZetaRevert(revert).into_cosmos_msg(sender)?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

/// Unlock (lock mode) or mint (mint mode) `amount` to `recipient`.
fn release_value(
    deps: DepsMut,
    config: &Config,
    recipient: &Addr,
    amount: Uint128,
    internal_send_hash: &Binary,
) -> Result<Vec<CosmosMsg>, ContractError> {
    if amount.is_zero() {
        return Ok(vec![]);
    }

    let msg = match config.mode {
        ConnectorMode::LockUnlock => {
            let locked = LOCKED_AMOUNT.load(deps.storage)?;
            if locked < amount {
                return Err(ContractError::InsufficientLockedAmount {
                    locked,
                    requested: amount,
                });
            }
            LOCKED_AMOUNT.save(deps.storage, &(locked - amount))?;

            token_msg(
                config,
                &Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                },
            )?
        }
        ConnectorMode::MintBurn => {
            assert_within_max_supply(deps.as_ref(), config, amount)?;

            token_msg(
                config,
                &zeta_token::msg::ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount,
                    internal_send_hash: internal_send_hash.clone(),
                },
            )?
        }
    };

    Ok(vec![msg])
}

fn assert_within_max_supply(
    deps: Deps,
    config: &Config,
    amount: Uint128,
) -> Result<(), ContractError> {
    if config.max_supply.is_zero() {
        return Ok(());
    }

    let info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(&config.zeta_token, &Cw20QueryMsg::TokenInfo {})?;
    // A sum past u128 is over any cap
    let over_cap = info
        .total_supply
        .checked_add(amount)
        .map_or(true, |total| total > config.max_supply);
    if over_cap {
        return Err(ContractError::ExceedsMaxSupply {
            max_supply: config.max_supply,
        });
    }
    Ok(())
}
