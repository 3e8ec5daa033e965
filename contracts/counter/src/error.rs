use cosmwasm_std::StdError;
use thiserror::Error;
use zeta_common::InteractorError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Interactor(#[from] InteractorError),
}
