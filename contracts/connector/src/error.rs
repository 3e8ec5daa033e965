//! Error types for the Connector contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("CallerIsNotTss: {caller}")]
    CallerIsNotTss { caller: String },

    #[error("CallerIsNotTssUpdater: {caller}")]
    CallerIsNotTssUpdater { caller: String },

    #[error("CallerIsNotPauser: {caller}")]
    CallerIsNotPauser { caller: String },

    // ========================================================================
    // Pause Errors
    // ========================================================================
    #[error("Connector is paused")]
    ConnectorPaused,

    #[error("Connector is already paused")]
    AlreadyPaused,

    #[error("Connector is not paused")]
    NotPaused,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Supply Errors
    // ========================================================================
    #[error("ExceedsMaxSupply: {max_supply}")]
    ExceedsMaxSupply { max_supply: Uint128 },

    #[error("Insufficient locked amount: locked {locked}, requested {requested}")]
    InsufficientLockedAmount {
        locked: Uint128,
        requested: Uint128,
    },
}
