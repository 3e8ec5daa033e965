use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::execute::{
    execute_borrow, execute_claim_refund, execute_deposit, execute_on_zeta_message, execute_on_zeta_revert,
    execute_provide_liquidity, execute_repay, execute_set_asset, execute_set_price,
    execute_update_config, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg};
use crate::query;
use crate::state::{
    Config, BPS_DENOMINATOR, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_FEE_BPS, INTERACTOR,
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
    let interactor =
        INTERACTOR.initialize(deps.storage, deps.api, &owner, &msg.connector, msg.chain_id)?;

    let fee_bps = msg.fee_bps.unwrap_or(DEFAULT_FEE_BPS);
    if fee_bps > BPS_DENOMINATOR {
        return Err(ContractError::InvalidAmount {
            reason: format!("fee_bps {} exceeds {}", fee_bps, BPS_DENOMINATOR),
        });
    }
    let config = Config {
        fee_wallet: deps.api.addr_validate(&msg.fee_wallet)?,
        fee_bps,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("connector", interactor.connector)
        .add_attribute("chain_id", interactor.current_chain_id.to_string())
        .add_attribute("fee_wallet", config.fee_wallet)
        .add_attribute("fee_bps", fee_bps.to_string()))
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
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::Withdraw { symbol, amount } => execute_withdraw(deps, info, symbol, amount),
        ExecuteMsg::ClaimRefund { symbol } => execute_claim_refund(deps, info, symbol),
        ExecuteMsg::Borrow {
            destination_chain_id,
            collateral_symbol,
            borrow_symbol,
            amount,
        } => execute_borrow(
            deps,
            info,
            destination_chain_id,
            collateral_symbol,
            borrow_symbol,
            amount,
        ),

        ExecuteMsg::SetAsset {
            symbol,
            decimals,
            price,
            collateral_ratio_bps,
            local_token,
        } => execute_set_asset(
            deps,
            info,
            symbol,
            decimals,
            price,
            collateral_ratio_bps,
            local_token,
        ),
        ExecuteMsg::SetPrice { symbol, price } => execute_set_price(deps, info, symbol, price),
        ExecuteMsg::UpdateConfig {
            fee_wallet,
            fee_bps,
        } => execute_update_config(deps, info, fee_wallet, fee_bps),

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
        ReceiveMsg::Deposit {} => execute_deposit(deps, info.sender, sender, cw20_msg.amount),
        ReceiveMsg::ProvideLiquidity {} => {
            execute_provide_liquidity(deps, info.sender, sender, cw20_msg.amount)
        }
        ReceiveMsg::Repay {
            destination_chain_id,
            collateral_symbol,
        } => execute_repay(
            deps,
            info.sender,
            sender,
            cw20_msg.amount,
            destination_chain_id,
            collateral_symbol,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::Asset { symbol } => to_json_binary(&query::query_asset(deps, symbol)?),
        QueryMsg::Assets { start_after, limit } => {
            to_json_binary(&query::query_assets(deps, start_after, limit)?)
        }
        QueryMsg::Position { address, symbol } => {
            to_json_binary(&query::query_position(deps, address, symbol)?)
        }
        QueryMsg::Debt {
            borrower,
            collateral_symbol,
            borrow_symbol,
        } => to_json_binary(&query::query_debt(
            deps,
            borrower,
            collateral_symbol,
            borrow_symbol,
        )?),
        QueryMsg::Liquidity { symbol } => to_json_binary(&query::query_liquidity(deps, symbol)?),
        QueryMsg::Refund { address, symbol } => {
            to_json_binary(&query::query_refund(deps, address, symbol)?)
        }
        QueryMsg::RequiredCollateral {
            collateral_symbol,
            borrow_symbol,
            amount,
        } => to_json_binary(&query::query_required_collateral(
            deps,
            collateral_symbol,
            borrow_symbol,
            amount,
        )?),
        QueryMsg::Ownership {} => to_json_binary(&INTERACTOR.query_ownership(deps.storage)?),
        QueryMsg::InteractorByChainId { chain_id } => {
            to_json_binary(&INTERACTOR.query_interactor_by_chain_id(deps.storage, chain_id)?)
        }
        QueryMsg::Interactors { start_after, limit } => {
            to_json_binary(&INTERACTOR.query_interactors(deps.storage, start_after, limit)?)
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
