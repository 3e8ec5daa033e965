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
    Interactor(#[from] InteractorError),

    // ========================================================================
    // Asset Registry
    // ========================================================================
    #[error("Unknown asset: {symbol}")]
    UnknownAsset { symbol: String },

    #[error("Asset {symbol} has no token on this chain")]
    AssetNotOnChain { symbol: String },

    #[error("Unexpected token: {token}")]
    UnexpectedToken { token: String },

    #[error("Invalid price for {symbol}")]
    InvalidPrice { symbol: String },

    // ========================================================================
    // Positions
    // ========================================================================
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("NotEnoughCollateral: required {required}, available {available}")]
    NotEnoughCollateral {
        required: Uint128,
        available: Uint128,
    },

    #[error("InsufficientLiquidity: available {available}, requested {requested}")]
    InsufficientLiquidity {
        available: Uint128,
        requested: Uint128,
    },

    #[error("No debt for {borrower} against {collateral_symbol} in {borrow_symbol}")]
    NoDebt {
        borrower: String,
        collateral_symbol: String,
        borrow_symbol: String,
    },

    #[error("Repayment {repaid} exceeds debt {debt}")]
    RepaymentExceedsDebt { repaid: Uint128, debt: Uint128 },
}
