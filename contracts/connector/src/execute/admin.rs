//! Administration handlers.
//!
//! This module handles:
//! - Pause/unpause (pauser)
//! - TSS and TSS updater rotation
//! - Pauser rotation
//! - Max supply (tss)

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

fn assert_pauser(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.pauser {
        return Err(ContractError::CallerIsNotPauser {
            caller: sender.to_string(),
        });
    }
    Ok(())
}

fn assert_tss_updater(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.tss_updater {
        return Err(ContractError::CallerIsNotTssUpdater {
            caller: sender.to_string(),
        });
    }
    Ok(())
}

/// Validate a role address, rejecting empty and malformed input alike.
pub fn validate_role(deps: Deps, address: &str) -> Result<Addr, ContractError> {
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
// Pause/Unpause
// ============================================================================

/// Pause Send, OnReceive and OnRevert.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_pauser(&config, &info.sender)?;
    if config.paused {
        return Err(ContractError::AlreadyPaused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "pause")
        .add_attribute("pauser", info.sender))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_pauser(&config, &info.sender)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "unpause")
        .add_attribute("pauser", info.sender))
}

// ============================================================================
// Roles
// ============================================================================

pub fn execute_update_tss_address(
    deps: DepsMut,
    info: MessageInfo,
    tss: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_tss_updater(&config, &info.sender)?;

    config.tss = validate_role(deps.as_ref(), &tss)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_tss_address")
        .add_attribute("tss", config.tss))
}

/// Hand the updater role to the current tss. There is no way back.
pub fn execute_renounce_tss_address_updater(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_tss_updater(&config, &info.sender)?;

    config.tss_updater = config.tss.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "renounce_tss_address_updater")
        .add_attribute("tss_updater", config.tss_updater))
}

pub fn execute_update_pauser_address(
    deps: DepsMut,
    info: MessageInfo,
    pauser: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_pauser(&config, &info.sender)?;

    config.pauser = validate_role(deps.as_ref(), &pauser)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_pauser_address")
        .add_attribute("pauser", config.pauser))
}

// ============================================================================
// Max Supply
// ============================================================================

/// Set the mint mode supply cap. Zero removes the cap.
pub fn execute_set_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    max_supply: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.tss {
        return Err(ContractError::CallerIsNotTss {
            caller: info.sender.to_string(),
        });
    }

    config.max_supply = max_supply;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_max_supply")
        .add_attribute("max_supply", max_supply))
}
