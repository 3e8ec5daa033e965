//! ZetaLink bridge token - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_burn_from, execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{execute_send, execute_transfer, query_balance, query_token_info};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ZetaConfigResponse};
use crate::state::{ZetaConfig, CONTRACT_NAME, CONTRACT_VERSION, ZETA_CONFIG};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // Minting is handled here, not by cw20-base's single minter
    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info,
        cw20_base::msg::InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            initial_balances: msg.initial_balances,
            mint: None,
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = ZetaConfig {
        tss: validate_role(deps.as_ref(), &msg.tss)?,
        tss_updater: validate_role(deps.as_ref(), &msg.tss_updater)?,
        connector: msg
            .connector
            .map(|c| validate_role(deps.as_ref(), &c))
            .transpose()?,
    };
    ZETA_CONFIG.save(deps.storage, &config)?;

    let total_supply = TOKEN_INFO.load(deps.storage)?.total_supply;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("tss", config.tss)
        .add_attribute("tss_updater", config.tss_updater)
        .add_attribute("total_supply", total_supply))
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
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(deps, env, info, owner, recipient, amount)?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(deps, env, info, owner, contract, amount, msg)?),

        ExecuteMsg::Mint {
            recipient,
            amount,
            internal_send_hash,
        } => execute_mint(deps, info, recipient, amount, internal_send_hash),
        ExecuteMsg::BurnFrom { owner, amount } => execute_connector_burn_from(deps, env, info, owner, amount),

        ExecuteMsg::UpdateTssAndConnectorAddresses { tss, connector } => {
            execute_update_tss_and_connector(deps, info, tss, connector)
        }
        ExecuteMsg::RenounceTssAddressUpdater {} => execute_renounce_tss_address_updater(deps, info),
    }
}

fn assert_connector(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = ZETA_CONFIG.load(deps.storage)?;
    if config.connector.as_ref() != Some(&info.sender) {
        return Err(ContractError::CallerIsNotConnector {
            caller: info.sender.to_string(),
        });
    }
    Ok(())
}

/// Mint bridged value. Supply caps are enforced by the connector.
fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    internal_send_hash: Binary,
) -> Result<Response, ContractError> {
    assert_connector(deps.as_ref(), &info)?;

    if amount.is_zero() {
        return Err(cw20_base::ContractError::InvalidZeroAmount {}.into());
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    BALANCES.update(
        deps.storage,
        &recipient_addr,
        |balance| -> StdResult<_> { Ok(balance.unwrap_or_default().checked_add(amount)?) },
    )?;

    Ok(Response::new()
        .add_attribute("action", "minted")
        .add_attribute("mintee", recipient_addr)
        .add_attribute("amount", amount)
        .add_attribute(
            "internal_send_hash",
            format!("0x{}", hex::encode(&internal_send_hash)),
        )
        .add_attribute("total_supply", token_info.total_supply))
}

fn execute_connector_burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_connector(deps.as_ref(), &info)?;

    let burner = info.sender.clone();
    // Deducts the owner's allowance to the connector, the balance and the supply
    execute_burn_from(deps, env, info, owner.clone(), amount)?;

    Ok(Response::new()
        .add_attribute("action", "burnt")
        .add_attribute("burnee", owner)
        .add_attribute("by", burner)
        .add_attribute("amount", amount))
}

fn execute_update_tss_and_connector(
    deps: DepsMut,
    info: MessageInfo,
    tss: String,
    connector: String,
) -> Result<Response, ContractError> {
    let mut config = ZETA_CONFIG.load(deps.storage)?;
    if info.sender != config.tss_updater && info.sender != config.tss {
        return Err(ContractError::CallerIsNotTssOrUpdater {
            caller: info.sender.to_string(),
        });
    }

    config.tss = validate_role(deps.as_ref(), &tss)?;
    config.connector = Some(validate_role(deps.as_ref(), &connector)?);
    ZETA_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_tss_and_connector_addresses")
        .add_attribute("tss", tss)
        .add_attribute("connector", connector))
}

fn execute_renounce_tss_address_updater(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = ZETA_CONFIG.load(deps.storage)?;
    if info.sender != config.tss_updater {
        return Err(ContractError::CallerIsNotTssUpdater {
            caller: info.sender.to_string(),
        });
    }

    config.tss_updater = config.tss.clone();
    ZETA_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "renounce_tss_address_updater")
        .add_attribute("tss_updater", config.tss_updater))
}

fn validate_role(deps: Deps, address: &str) -> Result<cosmwasm_std::Addr, ContractError> {
    if address.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "role address must not be empty".to_string(),
        });
    }
    deps.api
        .addr_validate(address)
        .map_err(|err| ContractError::InvalidAddress {
            reason: err.to_string(),
        })
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::ZetaConfig {} => {
            let config = ZETA_CONFIG.load(deps.storage)?;
            to_json_binary(&ZetaConfigResponse {
                tss: config.tss,
                tss_updater: config.tss_updater,
                connector: config.connector,
            })
        }
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
