use cosmwasm_std::{Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::math::{required_collateral, usd_value};
use crate::msg::{
    AssetResponse, AssetsResponse, ConfigResponse, DebtResponse, LiquidityResponse,
    PositionResponse, RefundResponse, RequiredCollateralResponse,
};
use crate::state::{
    AssetConfig, ASSETS, COLLATERAL, CONFIG, DEBTS, INTERACTOR, LIQUIDITY, REFUNDS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let interactor = INTERACTOR.config(deps.storage)?;
    Ok(ConfigResponse {
        connector: interactor.connector,
        chain_id: interactor.current_chain_id,
        fee_wallet: config.fee_wallet,
        fee_bps: config.fee_bps,
    })
}

fn asset_response(symbol: String, asset: AssetConfig) -> AssetResponse {
    AssetResponse {
        symbol,
        decimals: asset.decimals,
        price: asset.price,
        collateral_ratio_bps: asset.collateral_ratio_bps,
        local_token: asset.local_token,
    }
}

pub fn query_asset(deps: Deps, symbol: String) -> StdResult<AssetResponse> {
    let asset = ASSETS.load(deps.storage, &symbol)?;
    Ok(asset_response(symbol, asset))
}

pub fn query_assets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AssetsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let assets = ASSETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(symbol, asset)| asset_response(symbol, asset)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AssetsResponse { assets })
}

pub fn query_position(deps: Deps, address: String, symbol: String) -> StdResult<PositionResponse> {
    let address = deps.api.addr_validate(&address)?;
    let position = COLLATERAL
        .may_load(deps.storage, (&address, symbol.as_str()))?
        .unwrap_or_default();

    let value_usd = match ASSETS.may_load(deps.storage, &symbol)? {
        Some(asset) => Uint128::try_from(usd_value(
            &asset,
            position.unlocked.checked_add(position.locked)?,
        )?)?,
        None => Uint128::zero(),
    };

    Ok(PositionResponse {
        address,
        symbol,
        unlocked: position.unlocked,
        locked: position.locked,
        value_usd,
    })
}

pub fn query_debt(
    deps: Deps,
    borrower: String,
    collateral_symbol: String,
    borrow_symbol: String,
) -> StdResult<DebtResponse> {
    let borrower = deps.api.addr_validate(&borrower)?;
    let debt = DEBTS
        .may_load(
            deps.storage,
            (&borrower, collateral_symbol.as_str(), borrow_symbol.as_str()),
        )?
        .unwrap_or_default();
    Ok(DebtResponse {
        amount: debt.amount,
        locked: debt.locked,
    })
}

pub fn query_liquidity(deps: Deps, symbol: String) -> StdResult<LiquidityResponse> {
    let amount = LIQUIDITY
        .may_load(deps.storage, &symbol)?
        .unwrap_or_default();
    Ok(LiquidityResponse { symbol, amount })
}

pub fn query_refund(deps: Deps, address: String, symbol: String) -> StdResult<RefundResponse> {
    let address = deps.api.addr_validate(&address)?;
    let amount = REFUNDS
        .may_load(deps.storage, (&address, symbol.as_str()))?
        .unwrap_or_default();
    Ok(RefundResponse { amount })
}

pub fn query_required_collateral(
    deps: Deps,
    collateral_symbol: String,
    borrow_symbol: String,
    amount: Uint128,
) -> StdResult<RequiredCollateralResponse> {
    let collateral = ASSETS.load(deps.storage, &collateral_symbol)?;
    let borrow = ASSETS.load(deps.storage, &borrow_symbol)?;
    Ok(RequiredCollateralResponse {
        amount: required_collateral(&borrow, amount, &collateral)?,
    })
}
