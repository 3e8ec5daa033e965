use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;
use zeta_common::InteractorError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Ownership(#[from] InteractorError),

    #[error("Pool not found: {asset}")]
    PoolNotFound { asset: String },

    #[error("Pool already exists: {asset}")]
    PoolAlreadyExists { asset: String },

    #[error("The bridge token cannot be paired with itself")]
    InvalidPoolAsset,

    #[error("Unexpected token: {token}")]
    UnexpectedToken { token: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    #[error("MinimumOutputNotMet: got {amount_out}, minimum {min_amount_out}")]
    MinimumOutputNotMet {
        amount_out: Uint128,
        min_amount_out: Uint128,
    },
}
