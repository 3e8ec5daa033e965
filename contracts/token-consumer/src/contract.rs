use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Order, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_storage_plus::Bound;
use zeta_common::AssetInfo;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, PoolsResponse, QueryMsg, ReceiveMsg,
    SimulationResponse,
};
use crate::pool::get_amount_out;
use crate::state::{Config, Pool, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OWNERSHIP, POOLS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = OWNERSHIP.initialize(deps.storage, deps.api, &msg.owner)?;
    let config = Config {
        zeta_token: deps.api.addr_validate(&msg.zeta_token)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("zeta_token", config.zeta_token))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::GetZetaFromToken {
            destination,
            min_amount_out,
        } => {
            let (asset, amount_in) = single_native_coin(&info)?;
            execute_get_zeta_from_token(
                deps,
                info.sender,
                asset,
                amount_in,
                destination,
                min_amount_out,
            )
        }
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::CreatePool { asset } => execute_create_pool(deps, info, asset),
        ExecuteMsg::ProvideLiquidity {
            asset,
            asset_amount,
            zeta_amount,
        } => execute_provide_liquidity(deps, env, info, asset, asset_amount, zeta_amount),
        ExecuteMsg::UpdateOwnership(action) => Ok(OWNERSHIP.execute(deps, &info, action)?),
    }
}

fn single_native_coin(info: &MessageInfo) -> Result<(AssetInfo, Uint128), ContractError> {
    match info.funds.as_slice() {
        [coin] if !coin.amount.is_zero() => Ok((
            AssetInfo::Native {
                denom: coin.denom.clone(),
            },
            coin.amount,
        )),
        _ => Err(ContractError::InvalidAmount {
            reason: "exactly one native coin required".to_string(),
        }),
    }
}

fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let is_zeta = info.sender == config.zeta_token;

    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match msg {
        ReceiveMsg::GetZetaFromToken {
            destination,
            min_amount_out,
        } => {
            if is_zeta {
                return Err(ContractError::InvalidPoolAsset);
            }
            execute_get_zeta_from_token(
                deps,
                sender,
                AssetInfo::Cw20 {
                    contract_addr: info.sender,
                },
                cw20_msg.amount,
                destination,
                min_amount_out,
            )
        }
        ReceiveMsg::GetTokenFromZeta {
            output_asset,
            destination,
            min_amount_out,
        } => {
            if !is_zeta {
                return Err(ContractError::UnexpectedToken {
                    token: info.sender.to_string(),
                });
            }
            execute_get_token_from_zeta(
                deps,
                sender,
                output_asset,
                cw20_msg.amount,
                destination,
                min_amount_out,
            )
        }
    }
}

fn load_pool(deps: Deps, asset: &AssetInfo) -> Result<Pool, ContractError> {
    POOLS
        .may_load(deps.storage, &asset.key())?
        .ok_or(ContractError::PoolNotFound {
            asset: asset.to_string(),
        })
}

fn check_min_out(amount_out: Uint128, min_amount_out: Uint128) -> Result<(), ContractError> {
    if amount_out < min_amount_out {
        return Err(ContractError::MinimumOutputNotMet {
            amount_out,
            min_amount_out,
        });
    }
    Ok(())
}

fn recipient(deps: Deps, sender: Addr, destination: Option<String>) -> StdResult<Addr> {
    destination.map_or(Ok(sender), |d| deps.api.addr_validate(&d))
}

fn execute_get_zeta_from_token(
    deps: DepsMut,
    sender: Addr,
    asset: AssetInfo,
    amount_in: Uint128,
    destination: Option<String>,
    min_amount_out: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut pool = load_pool(deps.as_ref(), &asset)?;
    let recipient = recipient(deps.as_ref(), sender, destination)?;

    let amount_out = get_amount_out(amount_in, pool.asset_reserve, pool.zeta_reserve)?;
    check_min_out(amount_out, min_amount_out)?;

    pool.asset_reserve = pool.asset_reserve.checked_add(amount_in)?;
    pool.zeta_reserve = pool.zeta_reserve.checked_sub(amount_out)?;
    POOLS.save(deps.storage, &asset.key(), &pool)?;

    let zeta = AssetInfo::Cw20 {
        contract_addr: config.zeta_token,
    };

    Ok(Response::new()
        .add_message(zeta.transfer_msg(&recipient, amount_out)?)
        .add_attribute("action", "get_zeta_from_token")
        .add_attribute("input_asset", asset.to_string())
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("recipient", recipient))
}

fn execute_get_token_from_zeta(
    deps: DepsMut,
    sender: Addr,
    output_asset: AssetInfo,
    amount_in: Uint128,
    destination: Option<String>,
    min_amount_out: Uint128,
) -> Result<Response, ContractError> {
    let mut pool = load_pool(deps.as_ref(), &output_asset)?;
    let recipient = recipient(deps.as_ref(), sender, destination)?;

    let amount_out = get_amount_out(amount_in, pool.zeta_reserve, pool.asset_reserve)?;
    check_min_out(amount_out, min_amount_out)?;

    pool.zeta_reserve = pool.zeta_reserve.checked_add(amount_in)?;
    pool.asset_reserve = pool.asset_reserve.checked_sub(amount_out)?;
    POOLS.save(deps.storage, &output_asset.key(), &pool)?;

    Ok(Response::new()
        .add_message(output_asset.transfer_msg(&recipient, amount_out)?)
        .add_attribute("action", "get_token_from_zeta")
        .add_attribute("output_asset", output_asset.to_string())
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("recipient", recipient))
}

fn execute_create_pool(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let asset = match asset {
        AssetInfo::Cw20 { contract_addr } => {
            let contract_addr = deps.api.addr_validate(contract_addr.as_str())?;
            if contract_addr == config.zeta_token {
                return Err(ContractError::InvalidPoolAsset);
            }
            AssetInfo::Cw20 { contract_addr }
        }
        native => native,
    };

    let key = asset.key();
    if POOLS.has(deps.storage, &key) {
        return Err(ContractError::PoolAlreadyExists {
            asset: asset.to_string(),
        });
    }

    POOLS.save(
        deps.storage,
        &key,
        &Pool {
            asset: asset.clone(),
            asset_reserve: Uint128::zero(),
            zeta_reserve: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "create_pool")
        .add_attribute("asset", asset.to_string()))
}

fn execute_provide_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
    asset_amount: Uint128,
    zeta_amount: Uint128,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let mut pool = load_pool(deps.as_ref(), &asset)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !zeta_amount.is_zero() {
        messages.push(transfer_from_msg(
            &config.zeta_token,
            &info.sender,
            &env.contract.address,
            zeta_amount,
        )?);
    }
    if !asset_amount.is_zero() {
        match &pool.asset {
            AssetInfo::Native { denom } => {
                let attached = info
                    .funds
                    .iter()
                    .find(|c| &c.denom == denom)
                    .map(|c| c.amount)
                    .unwrap_or_default();
                if attached != asset_amount {
                    return Err(ContractError::InvalidAmount {
                        reason: format!("expected {} {} attached", asset_amount, denom),
                    });
                }
            }
            AssetInfo::Cw20 { contract_addr } => {
                messages.push(transfer_from_msg(
                    contract_addr,
                    &info.sender,
                    &env.contract.address,
                    asset_amount,
                )?);
            }
        }
    }

    pool.asset_reserve = pool.asset_reserve.checked_add(asset_amount)?;
    pool.zeta_reserve = pool.zeta_reserve.checked_add(zeta_amount)?;
    POOLS.save(deps.storage, &asset.key(), &pool)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "provide_liquidity")
        .add_attribute("asset", asset.to_string())
        .add_attribute("asset_reserve", pool.asset_reserve)
        .add_attribute("zeta_reserve", pool.zeta_reserve))
}

fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                zeta_token: config.zeta_token,
            })
        }
        QueryMsg::Pool { asset } => to_json_binary(&POOLS.load(deps.storage, &asset.key())?),
        QueryMsg::Pools { start_after, limit } => {
            to_json_binary(&query_pools(deps, start_after, limit)?)
        }
        QueryMsg::SimulateGetZetaFromToken { asset, amount_in } => {
            let pool = POOLS.load(deps.storage, &asset.key())?;
            to_json_binary(&simulate(amount_in, pool.asset_reserve, pool.zeta_reserve)?)
        }
        QueryMsg::SimulateGetTokenFromZeta { asset, amount_in } => {
            let pool = POOLS.load(deps.storage, &asset.key())?;
            to_json_binary(&simulate(amount_in, pool.zeta_reserve, pool.asset_reserve)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&OWNERSHIP.query(deps.storage)?),
    }
}

fn simulate(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> StdResult<SimulationResponse> {
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out)
        .map_err(|err| cosmwasm_std::StdError::generic_err(err.to_string()))?;
    Ok(SimulationResponse { amount_out })
}

fn query_pools(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PoolsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let pools = POOLS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, pool)| pool))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PoolsResponse { pools })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
