use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use zeta_common::{
    decode_message, encode_message, send_msg, ZetaMessage, ZetaRevert, ZetaSendInput,
};

use crate::error::ContractError;
use crate::msg::{
    CounterResponse, CrossChainIncrement, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, COUNTERS, CROSS_CHAIN_INCREMENT_MESSAGE,
    DESTINATION_GAS_LIMIT, INTERACTOR,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    let config =
        INTERACTOR.initialize(deps.storage, deps.api, &owner, &msg.connector, msg.chain_id)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("connector", config.connector)
        .add_attribute("chain_id", config.current_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CrossChainCount {
            destination_chain_id,
        } => execute_cross_chain_count(deps, info, destination_chain_id),
        ExecuteMsg::SetInteractorByChainId { chain_id, address } => Ok(INTERACTOR
            .execute_set_interactor_by_chain_id(deps, &info, chain_id, address)?),
        ExecuteMsg::UpdateOwnership(action) => {
            Ok(INTERACTOR.execute_update_ownership(deps, &info, action)?)
        }
        ExecuteMsg::OnZetaMessage(msg) => execute_on_zeta_message(deps, info, msg),
        ExecuteMsg::OnZetaRevert(revert) => execute_on_zeta_revert(deps, env, info, revert),
    }
}

fn execute_cross_chain_count(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain_id: u64,
) -> Result<Response, ContractError> {
    let peer = INTERACTOR.assert_valid_chain_id(deps.storage, destination_chain_id)?;
    let config = INTERACTOR.config(deps.storage)?;

    let count = increment(deps, info.sender.as_str())?;

    let message = encode_message(
        CROSS_CHAIN_INCREMENT_MESSAGE,
        &CrossChainIncrement {
            from: info.sender.to_string(),
        },
    )?;
    let send = send_msg(
        &config.connector,
        ZetaSendInput {
            destination_chain_id,
            destination_address: peer,
            destination_gas_limit: Uint128::from(DESTINATION_GAS_LIMIT),
            message,
            zeta_value_and_gas: Uint128::zero(),
            zeta_params: Binary::default(),
        },
    )?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "cross_chain_count")
        .add_attribute("from", info.sender)
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("count", count.to_string()))
}

fn execute_on_zeta_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: ZetaMessage,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_message(deps.storage, &info.sender, &msg)?;
    let body: CrossChainIncrement = decode_message(CROSS_CHAIN_INCREMENT_MESSAGE, &msg.message)?;

    let count = increment(deps, &body.from)?;

    Ok(Response::new()
        .add_attribute("action", "counter_incremented")
        .add_attribute("from", body.from)
        .add_attribute("source_chain_id", msg.source_chain_id.to_string())
        .add_attribute("count", count.to_string()))
}

fn execute_on_zeta_revert(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    revert: ZetaRevert,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_revert(deps.storage, &env, &info.sender, &revert)?;
    let body: CrossChainIncrement =
        decode_message(CROSS_CHAIN_INCREMENT_MESSAGE, &revert.message)?;

    let count = COUNTERS
        .may_load(deps.storage, &body.from)?
        .unwrap_or_default()
        .saturating_sub(1);
    COUNTERS.save(deps.storage, &body.from, &count)?;

    Ok(Response::new()
        .add_attribute("action", "counter_decremented")
        .add_attribute("from", body.from)
        .add_attribute("destination_chain_id", revert.destination_chain_id.to_string())
        .add_attribute("count", count.to_string()))
}

fn increment(deps: DepsMut, from: &str) -> StdResult<u64> {
    let count = COUNTERS.may_load(deps.storage, from)?.unwrap_or_default() + 1;
    COUNTERS.save(deps.storage, from, &count)?;
    Ok(count)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Counter { address } => {
            let count = COUNTERS.may_load(deps.storage, &address)?.unwrap_or_default();
            to_json_binary(&CounterResponse { address, count })
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
