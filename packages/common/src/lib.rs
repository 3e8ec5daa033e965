//! Common - Shared Types and Utilities for ZetaLink Contracts
//!
//! This package provides the pieces every chain-local contract agrees on:
//! - `connector` - the Send input and the destination hook payloads
//! - `interactor` - peer registry and inbound call validation for applications
//! - `ownable` - two-step ownership transfer
//! - `envelope` - typed application payloads behind a 32-byte type tag
//! - `asset` - native / CW20 asset handling

pub mod asset;
pub mod connector;
pub mod envelope;
pub mod error;
pub mod interactor;
pub mod ownable;

pub use asset::AssetInfo;
pub use connector::{
    address_bytes, send_msg, ConnectorExecuteMsg, ZetaMessage, ZetaReceiverExecuteMsg, ZetaRevert,
    ZetaSendInput,
};
pub use envelope::{decode_message, encode_message, keccak256, message_type, peek_message_type};
pub use error::InteractorError;
pub use interactor::{
    Interactor, InteractorByChainIdResponse, InteractorConfig, InteractorEntry,
    InteractorsResponse,
};
pub use ownable::{Ownable2Step, OwnershipAction, OwnershipResponse};
