use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;
use zeta_common::{AssetInfo, OwnershipAction, OwnershipResponse};

use crate::state::Pool;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub zeta_token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Swap the attached native funds into bridge tokens
    GetZetaFromToken {
        /// Defaults to the caller
        destination: Option<String>,
        min_amount_out: Uint128,
    },

    /// CW20 entry point for swaps in either direction
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Owner
    // ========================================================================
    CreatePool { asset: AssetInfo },

    /// Add reserves to a pool. Native assets are attached as funds, CW20
    /// assets and the bridge token are pulled with `TransferFrom`.
    ProvideLiquidity {
        asset: AssetInfo,
        asset_amount: Uint128,
        zeta_amount: Uint128,
    },

    UpdateOwnership(OwnershipAction),
}

/// Hook message carried by `Cw20ReceiveMsg::msg`
#[cw_serde]
pub enum ReceiveMsg {
    /// Sent with a CW20 asset: swap it into bridge tokens
    GetZetaFromToken {
        destination: Option<String>,
        min_amount_out: Uint128,
    },
    /// Sent with bridge tokens: swap them into `output_asset`
    GetTokenFromZeta {
        output_asset: AssetInfo,
        destination: Option<String>,
        min_amount_out: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Pool)]
    Pool { asset: AssetInfo },

    #[returns(PoolsResponse)]
    Pools {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Bridge tokens received for `amount_in` of `asset`
    #[returns(SimulationResponse)]
    SimulateGetZetaFromToken { asset: AssetInfo, amount_in: Uint128 },

    /// `asset` received for `amount_in` bridge tokens
    #[returns(SimulationResponse)]
    SimulateGetTokenFromZeta { asset: AssetInfo, amount_in: Uint128 },

    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub zeta_token: Addr,
}

#[cw_serde]
pub struct PoolsResponse {
    pub pools: Vec<Pool>,
}

#[cw_serde]
pub struct SimulationResponse {
    pub amount_out: Uint128,
}
