//! Execute handlers for the Connector contract.
//!
//! - `messaging` - Send, OnReceive and OnRevert
//! - `admin` - pause switch and role rotation

mod admin;
mod messaging;

pub use admin::*;
pub use messaging::*;
