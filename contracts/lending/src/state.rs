use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use zeta_common::Interactor;

#[cw_serde]
pub struct Config {
    /// Receives the repayment fee in collateral
    pub fee_wallet: Addr,
    pub fee_bps: u64,
}

/// Registry entry for a lendable or pledgeable asset
#[cw_serde]
pub struct AssetConfig {
    pub decimals: u8,
    /// USD price with `PRICE_DECIMALS` decimals
    pub price: Uint128,
    /// Collateral value required per unit of borrowed value, in bps
    pub collateral_ratio_bps: u64,
    /// CW20 for this asset on this chain, if it exists here
    pub local_token: Option<Addr>,
}

#[cw_serde]
#[derive(Default)]
pub struct Collateral {
    pub unlocked: Uint128,
    pub locked: Uint128,
}

#[cw_serde]
#[derive(Default)]
pub struct Debt {
    /// Outstanding amount of the borrowed asset
    pub amount: Uint128,
    /// Collateral locked against it
    pub locked: Uint128,
}

pub const CONTRACT_NAME: &str = "crates.io:cross-chain-lending";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CROSS_CHAIN_BORROW_MESSAGE: &str = "CROSS_CHAIN_BORROW_MESSAGE";
pub const CROSS_CHAIN_REPAY_MESSAGE: &str = "CROSS_CHAIN_REPAY_MESSAGE";
pub const CROSS_CHAIN_REFUND_MESSAGE: &str = "CROSS_CHAIN_REFUND_MESSAGE";

pub const DESTINATION_GAS_LIMIT: u128 = 2_500_000;

pub const PRICE_DECIMALS: u32 = 8;
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const DEFAULT_FEE_BPS: u64 = 100;

pub const INTERACTOR: Interactor = Interactor::new();
pub const CONFIG: Item<Config> = Item::new("config");

/// Asset registry keyed by symbol
pub const ASSETS: Map<&str, AssetConfig> = Map::new("assets");
/// Reverse lookup from local CW20 to symbol
pub const TOKEN_SYMBOLS: Map<&Addr, String> = Map::new("token_symbols");

/// Collateral per (owner, symbol) on the collateral chain
pub const COLLATERAL: Map<(&Addr, &str), Collateral> = Map::new("collateral");
/// Debt per (borrower, collateral symbol, borrowed symbol) on the collateral chain
pub const DEBTS: Map<(&Addr, &str, &str), Debt> = Map::new("debts");
/// Lendable balance per symbol on the debt chain
pub const LIQUIDITY: Map<&str, Uint128> = Map::new("liquidity");
/// Refunds per (payer, symbol) on the debt chain awaiting liquidity
pub const REFUNDS: Map<(&Addr, &str), Uint128> = Map::new("refunds");
