use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("CallerIsNotConnector: {caller}")]
    CallerIsNotConnector { caller: String },

    #[error("CallerIsNotTssUpdater: {caller}")]
    CallerIsNotTssUpdater { caller: String },

    #[error("CallerIsNotTssOrUpdater: {caller}")]
    CallerIsNotTssOrUpdater { caller: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
