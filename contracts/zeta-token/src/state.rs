//! Role state. Balances, allowances and total supply live in the
//! `cw20-base` storage layout (`BALANCES`, `ALLOWANCES`, `TOKEN_INFO`).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct ZetaConfig {
    /// Relayer signer
    pub tss: Addr,
    /// May rotate `tss` and `connector`
    pub tss_updater: Addr,
    /// Sole minter and burner; unset until the connector is deployed
    pub connector: Option<Addr>,
}

pub const CONTRACT_NAME: &str = "crates.io:zeta-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ZETA_CONFIG: Item<ZetaConfig> = Item::new("zeta_config");
