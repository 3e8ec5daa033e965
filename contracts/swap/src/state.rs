use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use zeta_common::Interactor;

#[cw_serde]
pub struct Config {
    pub zeta_token: Addr,
    /// Local pool used to convert to and from the bridge token
    pub token_consumer: Addr,
}

pub const CONTRACT_NAME: &str = "crates.io:cross-chain-swap";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CROSS_CHAIN_SWAP_MESSAGE: &str = "CROSS_CHAIN_SWAP_MESSAGE";

pub const DESTINATION_GAS_LIMIT: u128 = 2_500_000;

pub const INTERACTOR: Interactor = Interactor::new();
pub const CONFIG: Item<Config> = Item::new("config");
