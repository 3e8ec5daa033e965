//! Query handlers for the Connector contract.

use cosmwasm_std::{Deps, Env, StdResult};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::msg::{ConfigResponse, LockedAmountResponse, NonceResponse};
use crate::state::{ConnectorMode, CONFIG, LOCKED_AMOUNT, OUTGOING_NONCE};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        zeta_token: config.zeta_token,
        mode: config.mode,
        chain_id: config.chain_id,
        tss: config.tss,
        tss_updater: config.tss_updater,
        pauser: config.pauser,
        paused: config.paused,
        max_supply: config.max_supply,
    })
}

/// Tracked custody in lock mode; the connector's own token balance in mint mode.
pub fn query_locked_amount(deps: Deps, env: Env) -> StdResult<LockedAmountResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = match config.mode {
        ConnectorMode::LockUnlock => LOCKED_AMOUNT.load(deps.storage)?,
        ConnectorMode::MintBurn => {
            let res: BalanceResponse = deps.querier.query_wasm_smart(
                &config.zeta_token,
                &Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            res.balance
        }
    };
    Ok(LockedAmountResponse { amount })
}

pub fn query_nonce(deps: Deps) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: OUTGOING_NONCE.load(deps.storage)?,
    })
}
