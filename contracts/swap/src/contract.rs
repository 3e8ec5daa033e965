use cosmwasm_std::{
    coins, entry_point, from_json, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use token_consumer::msg::{
    ExecuteMsg as ConsumerExecuteMsg, QueryMsg as ConsumerQueryMsg,
    ReceiveMsg as ConsumerReceiveMsg, SimulationResponse,
};
use zeta_common::{
    decode_message, encode_message, send_msg, AssetInfo, ZetaMessage, ZetaRevert, ZetaSendInput,
};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, CrossChainSwap, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg,
    SwapParams,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CROSS_CHAIN_SWAP_MESSAGE,
    DESTINATION_GAS_LIMIT, INTERACTOR,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    INTERACTOR.initialize(deps.storage, deps.api, &owner, &msg.connector, msg.chain_id)?;

    let config = Config {
        zeta_token: deps.api.addr_validate(&msg.zeta_token)?,
        token_consumer: deps.api.addr_validate(&msg.token_consumer)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("zeta_token", config.zeta_token)
        .add_attribute("token_consumer", config.token_consumer))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SwapTokensForTokensCrossChain(params) => {
            let (asset, amount) = match info.funds.as_slice() {
                [coin] => (
                    AssetInfo::Native {
                        denom: coin.denom.clone(),
                    },
                    coin.amount,
                ),
                _ => {
                    return Err(ContractError::InvalidAmount {
                        reason: "exactly one native coin required".to_string(),
                    })
                }
            };
            execute_swap(deps, info.sender, asset, amount, params)
        }
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::SetInteractorByChainId { chain_id, address } => Ok(INTERACTOR
            .execute_set_interactor_by_chain_id(deps, &info, chain_id, address)?),
        ExecuteMsg::UpdateOwnership(action) => {
            Ok(INTERACTOR.execute_update_ownership(deps, &info, action)?)
        }
        ExecuteMsg::OnZetaMessage(msg) => execute_on_zeta_message(deps, info, msg),
        ExecuteMsg::OnZetaRevert(revert) => execute_on_zeta_revert(deps, env, info, revert),
    }
}

fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match msg {
        ReceiveMsg::SwapTokensForTokensCrossChain(params) => execute_swap(
            deps,
            sender,
            AssetInfo::Cw20 {
                contract_addr: info.sender,
            },
            cw20_msg.amount,
            params,
        ),
    }
}

// ============================================================================
// Outbound
// ============================================================================

fn execute_swap(
    deps: DepsMut,
    sender: Addr,
    received: AssetInfo,
    amount: Uint128,
    params: SwapParams,
) -> Result<Response, ContractError> {
    let peer = INTERACTOR.assert_valid_chain_id(deps.storage, params.destination_chain_id)?;

    let declared = params
        .origin_input_token
        .ok_or(ContractError::MissingOriginInputTokenAddress)?;
    if declared != received {
        return Err(ContractError::InputTokenMismatch {
            declared: declared.to_string(),
            received: received.to_string(),
        });
    }
    if params.is_out_token_zeta == params.destination_out_token.is_some() {
        return Err(ContractError::OutTokenInvariant);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "input amount must be positive".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let interactor = INTERACTOR.config(deps.storage)?;

    let (mut messages, zeta_amount) = convert_to_zeta(deps.as_ref(), &config, &received, amount)?;

    let message = encode_message(
        CROSS_CHAIN_SWAP_MESSAGE,
        &CrossChainSwap {
            sender: sender.to_string(),
            origin_input_token: received.clone(),
            origin_input_amount: amount,
            destination_out_token: params.destination_out_token,
            is_out_token_zeta: params.is_out_token_zeta,
            destination_recipient: params.destination_recipient,
            min_amount_out: params.min_amount_out,
        },
    )?;

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.zeta_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
            spender: interactor.connector.to_string(),
            amount: zeta_amount,
            expires: None,
        })?,
        funds: vec![],
    }));
    messages.push(send_msg(
        &interactor.connector,
        ZetaSendInput {
            destination_chain_id: params.destination_chain_id,
            destination_address: peer,
            destination_gas_limit: Uint128::from(DESTINATION_GAS_LIMIT),
            message,
            zeta_value_and_gas: zeta_amount,
            zeta_params: Binary::default(),
        },
    )?);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "swap_tokens_for_tokens_cross_chain")
        .add_attribute("sender", sender)
        .add_attribute("input_token", received.to_string())
        .add_attribute("input_amount", amount)
        .add_attribute("zeta_amount", zeta_amount)
        .add_attribute(
            "destination_chain_id",
            params.destination_chain_id.to_string(),
        ))
}

// ============================================================================
// Inbound
// ============================================================================

/// Pay the delivered bridge tokens out as the requested asset.
fn execute_on_zeta_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: ZetaMessage,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_message(deps.storage, &info.sender, &msg)?;
    let body: CrossChainSwap = decode_message(CROSS_CHAIN_SWAP_MESSAGE, &msg.message)?;
    let config = CONFIG.load(deps.storage)?;

    let recipient = String::from_utf8(body.destination_recipient.to_vec())
        .map_err(|_| ContractError::InvalidAddress {
            reason: "destination recipient is not a local address".to_string(),
        })
        .and_then(|r| Ok(deps.api.addr_validate(&r)?))?;

    let out_token = if body.is_out_token_zeta {
        zeta_asset(&config)
    } else {
        body.destination_out_token
            .ok_or(ContractError::OutTokenInvariant)?
    };

    let (payout, amount_out) = convert_from_zeta(
        deps.as_ref(),
        &config,
        &out_token,
        msg.zeta_value,
        &recipient,
        body.min_amount_out,
    )?;

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "swapped")
        .add_attribute("sender", body.sender)
        .add_attribute("source_chain_id", msg.source_chain_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("out_token", out_token.to_string())
        .add_attribute("zeta_value", msg.zeta_value)
        .add_attribute("amount_out", amount_out))
}

/// Refund the returned bridge tokens to the original sender as the input asset.
fn execute_on_zeta_revert(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    revert: ZetaRevert,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_revert(deps.storage, &env, &info.sender, &revert)?;
    let body: CrossChainSwap = decode_message(CROSS_CHAIN_SWAP_MESSAGE, &revert.message)?;
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_validate(&body.sender)?;

    let mut response = Response::new();
    let mut refunded = Uint128::zero();
    if !revert.remaining_zeta_value.is_zero() {
        let (refund, amount) = convert_from_zeta(
            deps.as_ref(),
            &config,
            &body.origin_input_token,
            revert.remaining_zeta_value,
            &sender,
            Uint128::zero(),
        )?;
        response = response.add_message(refund);
        refunded = amount;
    }

    Ok(response
        .add_attribute("action", "reverted_swap")
        .add_attribute("sender", sender)
        .add_attribute("input_token", body.origin_input_token.to_string())
        .add_attribute("input_amount", body.origin_input_amount)
        .add_attribute("remaining_zeta_value", revert.remaining_zeta_value)
        .add_attribute("refunded", refunded))
}

// ============================================================================
// Conversion
// ============================================================================

fn zeta_asset(config: &Config) -> AssetInfo {
    AssetInfo::Cw20 {
        contract_addr: config.zeta_token.clone(),
    }
}

/// Messages turning `amount` of `asset` held by this contract into bridge
/// tokens, with the bridge amount they yield. The pool output is fixed by the
/// simulation since nothing else touches the pool within this transaction.
fn convert_to_zeta(
    deps: Deps,
    config: &Config,
    asset: &AssetInfo,
    amount: Uint128,
) -> Result<(Vec<CosmosMsg>, Uint128), ContractError> {
    if *asset == zeta_asset(config) {
        return Ok((vec![], amount));
    }

    let sim: SimulationResponse = deps.querier.query_wasm_smart(
        &config.token_consumer,
        &ConsumerQueryMsg::SimulateGetZetaFromToken {
            asset: asset.clone(),
            amount_in: amount,
        },
    )?;

    let msg = match asset {
        AssetInfo::Native { denom } => WasmMsg::Execute {
            contract_addr: config.token_consumer.to_string(),
            msg: to_json_binary(&ConsumerExecuteMsg::GetZetaFromToken {
                destination: None,
                min_amount_out: sim.amount_out,
            })?,
            funds: coins(amount.u128(), denom),
        },
        AssetInfo::Cw20 { contract_addr } => WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: config.token_consumer.to_string(),
                amount,
                msg: to_json_binary(&ConsumerReceiveMsg::GetZetaFromToken {
                    destination: None,
                    min_amount_out: sim.amount_out,
                })?,
            })?,
            funds: vec![],
        },
    };

    Ok((vec![msg.into()], sim.amount_out))
}

/// Message paying `amount` bridge tokens held by this contract to
/// `recipient` as `asset`, with the amount of `asset` paid.
fn convert_from_zeta(
    deps: Deps,
    config: &Config,
    asset: &AssetInfo,
    amount: Uint128,
    recipient: &Addr,
    min_amount_out: Uint128,
) -> Result<(CosmosMsg, Uint128), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "no bridge tokens to convert".to_string(),
        });
    }

    if *asset == zeta_asset(config) {
        if amount < min_amount_out {
            return Err(ContractError::MinimumOutputNotMet {
                amount_out: amount,
                min_amount_out,
            });
        }
        return Ok((asset.transfer_msg(recipient, amount)?, amount));
    }

    let sim: SimulationResponse = deps.querier.query_wasm_smart(
        &config.token_consumer,
        &ConsumerQueryMsg::SimulateGetTokenFromZeta {
            asset: asset.clone(),
            amount_in: amount,
        },
    )?;

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.zeta_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: config.token_consumer.to_string(),
            amount,
            msg: to_json_binary(&ConsumerReceiveMsg::GetTokenFromZeta {
                output_asset: asset.clone(),
                destination: Some(recipient.to_string()),
                min_amount_out,
            })?,
        })?,
        funds: vec![],
    });

    Ok((msg, sim.amount_out))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            let interactor = INTERACTOR.config(deps.storage)?;
            to_json_binary(&ConfigResponse {
                connector: interactor.connector,
                chain_id: interactor.current_chain_id,
                zeta_token: config.zeta_token,
                token_consumer: config.token_consumer,
            })
        }
        QueryMsg::Ownership {} => to_json_binary(&INTERACTOR.query_ownership(deps.storage)?),
        QueryMsg::InteractorByChainId { chain_id } => {
            to_json_binary(&INTERACTOR.query_interactor_by_chain_id(deps.storage, chain_id)?)
        }
        QueryMsg::Interactors { start_after, limit } => {
            to_json_binary(&INTERACTOR.query_interactors(deps.storage, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
