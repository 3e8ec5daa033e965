//! Errors raised by the interactor base and ownership helpers.
//!
//! Applications wrap `InteractorError` in their own `ContractError` so the
//! messages surface unchanged to callers and relayers.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InteractorError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Ownership Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    // ========================================================================
    // Inbound Call Validation
    // ========================================================================

    #[error("InvalidCaller: {caller} is not the connector")]
    InvalidCaller { caller: String },

    #[error("InvalidZetaMessageCall: sender is not the registered interactor for chain {chain_id}")]
    InvalidZetaMessageCall { chain_id: u64 },

    #[error("InvalidZetaRevertCall: revert does not belong to this interactor")]
    InvalidZetaRevertCall,

    // ========================================================================
    // Outbound Validation
    // ========================================================================

    #[error("InvalidDestinationChainId: {chain_id}")]
    InvalidDestinationChainId { chain_id: u64 },

    #[error("InvalidMessageType")]
    InvalidMessageType,
}
