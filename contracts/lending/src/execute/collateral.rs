use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage, Uint128};
use zeta_common::AssetInfo;

use crate::error::ContractError;
use crate::state::{AssetConfig, ASSETS, COLLATERAL, LIQUIDITY, TOKEN_SYMBOLS};

pub fn load_asset(storage: &dyn Storage, symbol: &str) -> Result<AssetConfig, ContractError> {
    ASSETS
        .may_load(storage, symbol)?
        .ok_or_else(|| ContractError::UnknownAsset {
            symbol: symbol.to_string(),
        })
}

/// Local CW20 of `symbol` as an asset.
pub fn local_asset(asset: &AssetConfig, symbol: &str) -> Result<AssetInfo, ContractError> {
    asset
        .local_token
        .clone()
        .map(|contract_addr| AssetInfo::Cw20 { contract_addr })
        .ok_or_else(|| ContractError::AssetNotOnChain {
            symbol: symbol.to_string(),
        })
}

/// Symbol registered for the CW20 that called `Receive`.
pub fn symbol_of(storage: &dyn Storage, token: &Addr) -> Result<String, ContractError> {
    TOKEN_SYMBOLS
        .may_load(storage, token)?
        .ok_or_else(|| ContractError::UnexpectedToken {
            token: token.to_string(),
        })
}

pub fn execute_deposit(
    deps: DepsMut,
    token: Addr,
    depositor: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let symbol = symbol_of(deps.storage, &token)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit must be positive".to_string(),
        });
    }

    let mut position = COLLATERAL
        .may_load(deps.storage, (&depositor, symbol.as_str()))?
        .unwrap_or_default();
    position.unlocked = position.unlocked.checked_add(amount)?;
    COLLATERAL.save(deps.storage, (&depositor, symbol.as_str()), &position)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("depositor", depositor)
        .add_attribute("symbol", symbol)
        .add_attribute("amount", amount)
        .add_attribute("unlocked", position.unlocked))
}

pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let asset = load_asset(deps.storage, &symbol)?;
    let token = local_asset(&asset, &symbol)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdrawal must be positive".to_string(),
        });
    }

    let mut position = COLLATERAL
        .may_load(deps.storage, (&info.sender, symbol.as_str()))?
        .unwrap_or_default();
    if position.unlocked < amount {
        return Err(ContractError::NotEnoughCollateral {
            required: amount,
            available: position.unlocked,
        });
    }
    position.unlocked -= amount;
    COLLATERAL.save(deps.storage, (&info.sender, symbol.as_str()), &position)?;

    Ok(Response::new()
        .add_message(token.transfer_msg(&info.sender, amount)?)
        .add_attribute("action", "withdraw")
        .add_attribute("owner", info.sender)
        .add_attribute("symbol", symbol)
        .add_attribute("amount", amount)
        .add_attribute("unlocked", position.unlocked))
}

pub fn execute_provide_liquidity(
    deps: DepsMut,
    token: Addr,
    provider: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let symbol = symbol_of(deps.storage, &token)?;
    let liquidity = LIQUIDITY
        .may_load(deps.storage, &symbol)?
        .unwrap_or_default()
        .checked_add(amount)?;
    LIQUIDITY.save(deps.storage, &symbol, &liquidity)?;

    Ok(Response::new()
        .add_attribute("action", "provide_liquidity")
        .add_attribute("provider", provider)
        .add_attribute("symbol", symbol)
        .add_attribute("amount", amount)
        .add_attribute("liquidity", liquidity))
}
