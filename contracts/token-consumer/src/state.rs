use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use zeta_common::{AssetInfo, Ownable2Step};

#[cw_serde]
pub struct Config {
    /// Bridge token, one side of every pool
    pub zeta_token: Addr,
}

#[cw_serde]
pub struct Pool {
    pub asset: AssetInfo,
    pub asset_reserve: Uint128,
    pub zeta_reserve: Uint128,
}

pub const CONTRACT_NAME: &str = "crates.io:token-consumer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pool fee in basis points, taken from the input amount
pub const FEE_BPS: u128 = 30;
pub const BPS_DENOMINATOR: u128 = 10_000;

pub const OWNERSHIP: Ownable2Step = Ownable2Step::new("owner", "pending_owner");
pub const CONFIG: Item<Config> = Item::new("config");

/// Pools keyed by `AssetInfo::key`
pub const POOLS: Map<&str, Pool> = Map::new("pools");
