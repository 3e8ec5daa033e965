//! Borrow and repay legs.
//!
//! Collateral chain: `Borrow` locks collateral and records the debt before the
//! message leaves; the borrow revert hook undoes both. The repay hook releases
//! collateral in proportion to the repaid share of the debt.
//!
//! Debt chain: the borrow hook pays out of pool liquidity; `Repay` takes the
//! tokens back into liquidity before the message leaves and the repay revert
//! hook refunds the payer.
//!
//! A repayment can settle before the borrow it pays off is reverted. The
//! borrow revert hook then only unlocks what is still locked and sends the
//! part of the borrow already repaid back to the debt chain as a refund.

use std::cmp::min;

use cosmwasm_std::{
    Addr, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage, Uint128,
};
use zeta_common::{
    decode_message, encode_message, message_type, peek_message_type, send_msg, InteractorError,
    ZetaMessage, ZetaRevert, ZetaSendInput,
};

use crate::error::ContractError;
use crate::execute::{load_asset, local_asset, symbol_of};
use crate::math::{released_collateral, required_collateral};
use crate::msg::{CrossChainBorrow, CrossChainRefund, CrossChainRepay};
use crate::state::{
    CONFIG, COLLATERAL, CROSS_CHAIN_BORROW_MESSAGE, CROSS_CHAIN_REFUND_MESSAGE,
    CROSS_CHAIN_REPAY_MESSAGE, DEBTS, DESTINATION_GAS_LIMIT, INTERACTOR, LIQUIDITY, REFUNDS,
};

fn cross_chain_send(
    storage: &dyn Storage,
    destination_chain_id: u64,
    message: Binary,
) -> Result<CosmosMsg, ContractError> {
    let peer = INTERACTOR.assert_valid_chain_id(storage, destination_chain_id)?;
    let config = INTERACTOR.config(storage)?;
    Ok(send_msg(
        &config.connector,
        ZetaSendInput {
            destination_chain_id,
            destination_address: peer,
            destination_gas_limit: Uint128::from(DESTINATION_GAS_LIMIT),
            message,
            zeta_value_and_gas: Uint128::zero(),
            zeta_params: Binary::default(),
        },
    )?)
}

// ============================================================================
// Outbound
// ============================================================================

pub fn execute_borrow(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain_id: u64,
    collateral_symbol: String,
    borrow_symbol: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    INTERACTOR.assert_valid_chain_id(deps.storage, destination_chain_id)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "borrow must be positive".to_string(),
        });
    }

    let collateral = load_asset(deps.storage, &collateral_symbol)?;
    let borrow = load_asset(deps.storage, &borrow_symbol)?;
    let required = required_collateral(&borrow, amount, &collateral)?;

    let borrower = info.sender;
    let mut position = COLLATERAL
        .may_load(deps.storage, (&borrower, collateral_symbol.as_str()))?
        .unwrap_or_default();
    if position.unlocked < required {
        return Err(ContractError::NotEnoughCollateral {
            required,
            available: position.unlocked,
        });
    }
    position.unlocked -= required;
    position.locked = position.locked.checked_add(required)?;
    COLLATERAL.save(deps.storage, (&borrower, collateral_symbol.as_str()), &position)?;

    let key = (&borrower, collateral_symbol.as_str(), borrow_symbol.as_str());
    let mut debt = DEBTS.may_load(deps.storage, key)?.unwrap_or_default();
    debt.amount = debt.amount.checked_add(amount)?;
    debt.locked = debt.locked.checked_add(required)?;
    DEBTS.save(deps.storage, key, &debt)?;

    let message = encode_message(
        CROSS_CHAIN_BORROW_MESSAGE,
        &CrossChainBorrow {
            borrower: borrower.to_string(),
            collateral_symbol: collateral_symbol.clone(),
            collateral_locked: required,
            borrow_symbol: borrow_symbol.clone(),
            amount,
        },
    )?;
    let send = cross_chain_send(deps.storage, destination_chain_id, message)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "borrow")
        .add_attribute("borrower", borrower)
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("collateral_symbol", collateral_symbol)
        .add_attribute("collateral_locked", required)
        .add_attribute("borrow_symbol", borrow_symbol)
        .add_attribute("amount", amount))
}

pub fn execute_repay(
    deps: DepsMut,
    token: Addr,
    payer: Addr,
    amount: Uint128,
    destination_chain_id: u64,
    collateral_symbol: String,
) -> Result<Response, ContractError> {
    let borrow_symbol = symbol_of(deps.storage, &token)?;
    INTERACTOR.assert_valid_chain_id(deps.storage, destination_chain_id)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "repayment must be positive".to_string(),
        });
    }

    let liquidity = LIQUIDITY
        .may_load(deps.storage, &borrow_symbol)?
        .unwrap_or_default()
        .checked_add(amount)?;
    LIQUIDITY.save(deps.storage, &borrow_symbol, &liquidity)?;

    let message = encode_message(
        CROSS_CHAIN_REPAY_MESSAGE,
        &CrossChainRepay {
            borrower: payer.to_string(),
            collateral_symbol: collateral_symbol.clone(),
            borrow_symbol: borrow_symbol.clone(),
            amount,
        },
    )?;
    let send = cross_chain_send(deps.storage, destination_chain_id, message)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "repay")
        .add_attribute("payer", payer)
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("collateral_symbol", collateral_symbol)
        .add_attribute("borrow_symbol", borrow_symbol)
        .add_attribute("amount", amount))
}

pub fn execute_claim_refund(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<Response, ContractError> {
    let asset = load_asset(deps.storage, &symbol)?;
    let token = local_asset(&asset, &symbol)?;
    let amount = REFUNDS
        .may_load(deps.storage, (&info.sender, symbol.as_str()))?
        .unwrap_or_default();
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: format!("no refund of {} for {}", symbol, info.sender),
        });
    }

    let available = LIQUIDITY
        .may_load(deps.storage, &symbol)?
        .unwrap_or_default();
    if available < amount {
        return Err(ContractError::InsufficientLiquidity {
            available,
            requested: amount,
        });
    }
    LIQUIDITY.save(deps.storage, &symbol, &(available - amount))?;
    REFUNDS.remove(deps.storage, (&info.sender, symbol.as_str()));

    Ok(Response::new()
        .add_message(token.transfer_msg(&info.sender, amount)?)
        .add_attribute("action", "claim_refund")
        .add_attribute("payer", info.sender)
        .add_attribute("symbol", symbol)
        .add_attribute("amount", amount))
}

// ============================================================================
// Hooks
// ============================================================================

pub fn execute_on_zeta_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: ZetaMessage,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_message(deps.storage, &info.sender, &msg)?;

    let tag = peek_message_type(&msg.message)?;
    if tag == message_type(CROSS_CHAIN_BORROW_MESSAGE) {
        let body: CrossChainBorrow = decode_message(CROSS_CHAIN_BORROW_MESSAGE, &msg.message)?;
        pay_out_loan(deps, msg.source_chain_id, body)
    } else if tag == message_type(CROSS_CHAIN_REPAY_MESSAGE) {
        let body: CrossChainRepay = decode_message(CROSS_CHAIN_REPAY_MESSAGE, &msg.message)?;
        release_collateral(deps, msg.source_chain_id, body)
    } else if tag == message_type(CROSS_CHAIN_REFUND_MESSAGE) {
        let body: CrossChainRefund = decode_message(CROSS_CHAIN_REFUND_MESSAGE, &msg.message)?;
        pay_refund(deps, msg.source_chain_id, body)
    } else {
        Err(InteractorError::InvalidMessageType.into())
    }
}

pub fn execute_on_zeta_revert(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    revert: ZetaRevert,
) -> Result<Response, ContractError> {
    INTERACTOR.validate_revert(deps.storage, &env, &info.sender, &revert)?;

    let tag = peek_message_type(&revert.message)?;
    if tag == message_type(CROSS_CHAIN_BORROW_MESSAGE) {
        let body: CrossChainBorrow =
            decode_message(CROSS_CHAIN_BORROW_MESSAGE, &revert.message)?;
        unlock_collateral(deps, revert.destination_chain_id, body)
    } else if tag == message_type(CROSS_CHAIN_REPAY_MESSAGE) {
        let body: CrossChainRepay = decode_message(CROSS_CHAIN_REPAY_MESSAGE, &revert.message)?;
        refund_repayment(deps, body)
    } else if tag == message_type(CROSS_CHAIN_REFUND_MESSAGE) {
        let body: CrossChainRefund =
            decode_message(CROSS_CHAIN_REFUND_MESSAGE, &revert.message)?;
        Ok(Response::new()
            .add_attribute("action", "refund_reverted")
            .add_attribute("payer", body.payer)
            .add_attribute("borrow_symbol", body.borrow_symbol)
            .add_attribute("amount", body.amount))
    } else {
        Err(InteractorError::InvalidMessageType.into())
    }
}

/// Debt chain: pay the borrowed asset out of pool liquidity.
fn pay_out_loan(
    deps: DepsMut,
    source_chain_id: u64,
    body: CrossChainBorrow,
) -> Result<Response, ContractError> {
    let borrower = deps.api.addr_validate(&body.borrower)?;
    let asset = load_asset(deps.storage, &body.borrow_symbol)?;
    let token = local_asset(&asset, &body.borrow_symbol)?;

    let available = LIQUIDITY
        .may_load(deps.storage, &body.borrow_symbol)?
        .unwrap_or_default();
    if available < body.amount {
        return Err(ContractError::InsufficientLiquidity {
            available,
            requested: body.amount,
        });
    }
    LIQUIDITY.save(deps.storage, &body.borrow_symbol, &(available - body.amount))?;

    Ok(Response::new()
        .add_message(token.transfer_msg(&borrower, body.amount)?)
        .add_attribute("action", "borrowed")
        .add_attribute("borrower", borrower)
        .add_attribute("source_chain_id", source_chain_id.to_string())
        .add_attribute("borrow_symbol", body.borrow_symbol)
        .add_attribute("amount", body.amount))
}

/// Collateral chain: a borrow never arrived, give the collateral back.
///
/// Only the debt and collateral still outstanding are unwound. Whatever part
/// of the borrow was already repaid is sent back to the debt chain as a
/// refund.
fn unlock_collateral(
    deps: DepsMut,
    debt_chain_id: u64,
    body: CrossChainBorrow,
) -> Result<Response, ContractError> {
    let borrower = deps.api.addr_validate(&body.borrower)?;

    let key = (
        &borrower,
        body.collateral_symbol.as_str(),
        body.borrow_symbol.as_str(),
    );
    let mut debt = DEBTS.may_load(deps.storage, key)?.unwrap_or_default();
    let mut position = COLLATERAL
        .may_load(deps.storage, (&borrower, body.collateral_symbol.as_str()))?
        .unwrap_or_default();

    let cleared = min(body.amount, debt.amount);
    let unlocked = min(min(body.collateral_locked, debt.locked), position.locked);
    let uncovered = body.amount - cleared;

    debt.amount -= cleared;
    debt.locked -= unlocked;
    if debt.amount.is_zero() {
        DEBTS.remove(deps.storage, key);
    } else {
        DEBTS.save(deps.storage, key, &debt)?;
    }

    position.locked -= unlocked;
    position.unlocked = position.unlocked.checked_add(unlocked)?;
    COLLATERAL.save(
        deps.storage,
        (&borrower, body.collateral_symbol.as_str()),
        &position,
    )?;

    let mut response = Response::new();
    if !uncovered.is_zero() {
        let message = encode_message(
            CROSS_CHAIN_REFUND_MESSAGE,
            &CrossChainRefund {
                payer: borrower.to_string(),
                borrow_symbol: body.borrow_symbol.clone(),
                amount: uncovered,
            },
        )?;
        response = response.add_message(cross_chain_send(deps.storage, debt_chain_id, message)?);
    }

    Ok(response
        .add_attribute("action", "borrow_reverted")
        .add_attribute("borrower", borrower)
        .add_attribute("collateral_symbol", body.collateral_symbol)
        .add_attribute("collateral_unlocked", unlocked)
        .add_attribute("borrow_symbol", body.borrow_symbol)
        .add_attribute("amount", body.amount)
        .add_attribute("refunded", uncovered))
}

/// Collateral chain: release the repaid share of the locked collateral, less
/// the fee paid to the fee wallet.
fn release_collateral(
    deps: DepsMut,
    source_chain_id: u64,
    body: CrossChainRepay,
) -> Result<Response, ContractError> {
    let borrower = deps.api.addr_validate(&body.borrower)?;
    let config = CONFIG.load(deps.storage)?;

    let key = (
        &borrower,
        body.collateral_symbol.as_str(),
        body.borrow_symbol.as_str(),
    );
    let mut debt = DEBTS
        .may_load(deps.storage, key)?
        .ok_or_else(|| ContractError::NoDebt {
            borrower: borrower.to_string(),
            collateral_symbol: body.collateral_symbol.clone(),
            borrow_symbol: body.borrow_symbol.clone(),
        })?;
    if body.amount > debt.amount {
        return Err(ContractError::RepaymentExceedsDebt {
            repaid: body.amount,
            debt: debt.amount,
        });
    }

    let (released, fee) =
        released_collateral(debt.locked, body.amount, debt.amount, config.fee_bps);
    debt.amount -= body.amount;
    debt.locked -= released;
    if debt.amount.is_zero() {
        DEBTS.remove(deps.storage, key);
    } else {
        DEBTS.save(deps.storage, key, &debt)?;
    }

    let mut position = COLLATERAL
        .may_load(deps.storage, (&borrower, body.collateral_symbol.as_str()))?
        .unwrap_or_default();
    position.locked = position.locked.checked_sub(released)?;
    position.unlocked = position.unlocked.checked_add(released - fee)?;
    COLLATERAL.save(
        deps.storage,
        (&borrower, body.collateral_symbol.as_str()),
        &position,
    )?;

    let mut response = Response::new();
    if !fee.is_zero() {
        let collateral = load_asset(deps.storage, &body.collateral_symbol)?;
        let token = local_asset(&collateral, &body.collateral_symbol)?;
        response = response.add_message(token.transfer_msg(&config.fee_wallet, fee)?);
    }

    Ok(response
        .add_attribute("action", "repaid")
        .add_attribute("borrower", borrower)
        .add_attribute("source_chain_id", source_chain_id.to_string())
        .add_attribute("collateral_symbol", body.collateral_symbol)
        .add_attribute("borrow_symbol", body.borrow_symbol)
        .add_attribute("amount", body.amount)
        .add_attribute("collateral_released", released)
        .add_attribute("fee", fee))
}

/// Debt chain: a repayment never arrived, hand the tokens back.
fn refund_repayment(deps: DepsMut, body: CrossChainRepay) -> Result<Response, ContractError> {
    let payer = deps.api.addr_validate(&body.borrower)?;
    let asset = load_asset(deps.storage, &body.borrow_symbol)?;
    let token = local_asset(&asset, &body.borrow_symbol)?;

    let liquidity = LIQUIDITY
        .may_load(deps.storage, &body.borrow_symbol)?
        .unwrap_or_default()
        .checked_sub(body.amount)?;
    LIQUIDITY.save(deps.storage, &body.borrow_symbol, &liquidity)?;

    Ok(Response::new()
        .add_message(token.transfer_msg(&payer, body.amount)?)
        .add_attribute("action", "repay_reverted")
        .add_attribute("payer", payer)
        .add_attribute("borrow_symbol", body.borrow_symbol)
        .add_attribute("amount", body.amount))
}

/// Debt chain: pay back a repayment whose borrow was reverted. Credited for
/// `ClaimRefund` when liquidity is short.
fn pay_refund(
    deps: DepsMut,
    source_chain_id: u64,
    body: CrossChainRefund,
) -> Result<Response, ContractError> {
    let payer = deps.api.addr_validate(&body.payer)?;
    let asset = load_asset(deps.storage, &body.borrow_symbol)?;
    let token = local_asset(&asset, &body.borrow_symbol)?;

    let available = LIQUIDITY
        .may_load(deps.storage, &body.borrow_symbol)?
        .unwrap_or_default();
    let response = if available < body.amount {
        let credited = REFUNDS
            .may_load(deps.storage, (&payer, body.borrow_symbol.as_str()))?
            .unwrap_or_default()
            .checked_add(body.amount)?;
        REFUNDS.save(
            deps.storage,
            (&payer, body.borrow_symbol.as_str()),
            &credited,
        )?;
        Response::new().add_attribute("credited", credited)
    } else {
        LIQUIDITY.save(deps.storage, &body.borrow_symbol, &(available - body.amount))?;
        Response::new().add_message(token.transfer_msg(&payer, body.amount)?)
    };

    Ok(response
        .add_attribute("action", "refunded")
        .add_attribute("payer", payer)
        .add_attribute("source_chain_id", source_chain_id.to_string())
        .add_attribute("borrow_symbol", body.borrow_symbol)
        .add_attribute("amount", body.amount))
}
