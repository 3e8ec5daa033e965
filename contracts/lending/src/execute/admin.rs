use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::load_asset;
use crate::state::{AssetConfig, ASSETS, BPS_DENOMINATOR, CONFIG, INTERACTOR, TOKEN_SYMBOLS};

/// Register or replace an asset. Positions and debts in it are kept.
pub fn execute_set_asset(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    decimals: u8,
    price: Uint128,
    collateral_ratio_bps: u64,
    local_token: Option<String>,
) -> Result<Response, ContractError> {
    INTERACTOR
        .ownership
        .assert_owner(deps.storage, &info.sender)?;
    if price.is_zero() {
        return Err(ContractError::InvalidPrice { symbol });
    }

    let local_token = local_token
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;

    if let Some(previous) = ASSETS.may_load(deps.storage, &symbol)? {
        if let Some(token) = previous.local_token {
            TOKEN_SYMBOLS.remove(deps.storage, &token);
        }
    }
    if let Some(token) = &local_token {
        TOKEN_SYMBOLS.save(deps.storage, token, &symbol)?;
    }

    ASSETS.save(
        deps.storage,
        &symbol,
        &AssetConfig {
            decimals,
            price,
            collateral_ratio_bps,
            local_token: local_token.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_asset")
        .add_attribute("symbol", symbol)
        .add_attribute("decimals", decimals.to_string())
        .add_attribute("price", price)
        .add_attribute("collateral_ratio_bps", collateral_ratio_bps.to_string())
        .add_attribute(
            "local_token",
            local_token.map(|t| t.to_string()).unwrap_or_default(),
        ))
}

pub fn execute_set_price(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    price: Uint128,
) -> Result<Response, ContractError> {
    INTERACTOR
        .ownership
        .assert_owner(deps.storage, &info.sender)?;
    if price.is_zero() {
        return Err(ContractError::InvalidPrice { symbol });
    }

    let mut asset = load_asset(deps.storage, &symbol)?;
    asset.price = price;
    ASSETS.save(deps.storage, &symbol, &asset)?;

    Ok(Response::new()
        .add_attribute("action", "set_price")
        .add_attribute("symbol", symbol)
        .add_attribute("price", price))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    fee_wallet: Option<String>,
    fee_bps: Option<u64>,
) -> Result<Response, ContractError> {
    INTERACTOR
        .ownership
        .assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if let Some(fee_wallet) = fee_wallet {
        config.fee_wallet = deps.api.addr_validate(&fee_wallet)?;
    }
    if let Some(fee_bps) = fee_bps {
        if fee_bps > BPS_DENOMINATOR {
            return Err(ContractError::InvalidAmount {
                reason: format!("fee_bps {} exceeds {}", fee_bps, BPS_DENOMINATOR),
            });
        }
        config.fee_bps = fee_bps;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("fee_wallet", config.fee_wallet)
        .add_attribute("fee_bps", config.fee_bps.to_string()))
}
