//! Cross-chain lending
//!
//! Collateral is deposited and locked on one chain while the loan is paid out
//! from pool liquidity on another. Repaying on the debt chain releases a
//! proportional share of the locked collateral, less a fee. Reverts undo the
//! local leg: a failed borrow unlocks the collateral, a failed repayment is
//! refunded to the payer. A borrow reverted after it was already repaid sends
//! the repayment back to the debt chain.
//!
//! The implementation is split into:
//! - `execute/` - collateral, loan and asset registry handlers
//! - `math` - USD valuation and collateral requirements
//! - `query` - query handlers

pub mod contract;
pub mod error;
pub mod execute;
pub mod math;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
