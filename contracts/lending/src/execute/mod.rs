//! Execute handlers for the lending contract.
//!
//! - `collateral` - deposits, withdrawals and pool liquidity
//! - `loan` - borrow and repay legs with their hooks
//! - `admin` - asset registry, prices and fee settings

mod admin;
mod collateral;
mod loan;

pub use admin::*;
pub use collateral::*;
pub use loan::*;
