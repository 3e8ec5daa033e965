use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Relayer signer address
    pub tss: String,
    /// Address allowed to rotate the tss and connector
    pub tss_updater: String,
    /// Connector address, if already known
    pub connector: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // CW20
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    // ========================================================================
    // Connector only
    // ========================================================================
    /// Mint bridged value to `recipient`
    Mint {
        recipient: String,
        amount: Uint128,
        internal_send_hash: Binary,
    },

    /// Burn from `owner` using the owner's allowance to the connector
    BurnFrom { owner: String, amount: Uint128 },

    // ========================================================================
    // Roles
    // ========================================================================
    /// Authorization: tss updater or tss
    UpdateTssAndConnectorAddresses { tss: String, connector: String },

    /// Hand the updater role to the current tss (one-way)
    ///
    /// Authorization: tss updater
    RenounceTssAddressUpdater {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(ZetaConfigResponse)]
    ZetaConfig {},
}

#[cw_serde]
pub struct ZetaConfigResponse {
    pub tss: Addr,
    pub tss_updater: Addr,
    pub connector: Option<Addr>,
}
