use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;
use zeta_common::InteractorError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Interactor(#[from] InteractorError),

    // ========================================================================
    // Swap Validation
    // ========================================================================
    #[error("MissingOriginInputTokenAddress")]
    MissingOriginInputTokenAddress,

    #[error("OutTokenInvariant: a destination output token is required unless the output is the bridge token")]
    OutTokenInvariant,

    #[error("Input token mismatch: declared {declared}, received {received}")]
    InputTokenMismatch { declared: String, received: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("MinimumOutputNotMet: got {amount_out}, minimum {min_amount_out}")]
    MinimumOutputNotMet {
        amount_out: Uint128,
        min_amount_out: Uint128,
    },
}
