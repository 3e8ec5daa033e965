//! ZetaLink Connector - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use zeta_common::{ZetaMessage, ZetaRevert};

use crate::error::ContractError;
use crate::execute::{
    execute_on_receive, execute_on_revert, execute_pause, execute_renounce_tss_address_updater,
    execute_send, execute_set_max_supply, execute_unpause, execute_update_pauser_address,
    execute_update_tss_address, validate_role,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_locked_amount, query_nonce};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LOCKED_AMOUNT, OUTGOING_NONCE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        zeta_token: validate_role(deps.as_ref(), &msg.zeta_token)?,
        mode: msg.mode,
        chain_id: msg.chain_id,
        tss: validate_role(deps.as_ref(), &msg.tss)?,
        tss_updater: validate_role(deps.as_ref(), &msg.tss_updater)?,
        pauser: validate_role(deps.as_ref(), &msg.pauser)?,
        paused: false,
        max_supply: msg.max_supply.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;
    LOCKED_AMOUNT.save(deps.storage, &Uint128::zero())?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("zeta_token", config.zeta_token)
        .add_attribute("mode", config.mode.as_str())
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("tss", config.tss)
        .add_attribute("max_supply", config.max_supply))
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
        // Messaging
        ExecuteMsg::Send(input) => execute_send(deps, env, info, input),
        ExecuteMsg::OnReceive {
            zeta_tx_sender_address,
            source_chain_id,
            destination_address,
            zeta_value_and_gas,
            message,
            internal_send_hash,
        } => execute_on_receive(
            deps,
            info,
            ZetaMessage {
                zeta_tx_sender_address,
                source_chain_id,
                destination_address,
                zeta_value: zeta_value_and_gas,
                message,
            },
            internal_send_hash,
        ),
        ExecuteMsg::OnRevert {
            zeta_tx_sender_address,
            source_chain_id,
            destination_address,
            destination_chain_id,
            remaining_zeta_value,
            message,
            internal_send_hash,
        } => execute_on_revert(
            deps,
            info,
            ZetaRevert {
                zeta_tx_sender_address,
                source_chain_id,
                destination_address,
                destination_chain_id,
                remaining_zeta_value,
                message,
            },
            internal_send_hash,
        ),

        // Administration
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::UpdateTssAddress { tss } => execute_update_tss_address(deps, info, tss),
        ExecuteMsg::RenounceTssAddressUpdater {} => {
            execute_renounce_tss_address_updater(deps, info)
        }
        ExecuteMsg::UpdatePauserAddress { pauser } => {
            execute_update_pauser_address(deps, info, pauser)
        }
        ExecuteMsg::SetMaxSupply { max_supply } => execute_set_max_supply(deps, info, max_supply),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LockedAmount {} => to_json_binary(&query_locked_amount(deps, env)?),
        QueryMsg::Nonce {} => to_json_binary(&query_nonce(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
