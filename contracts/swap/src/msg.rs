use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;
use zeta_common::{
    AssetInfo, InteractorByChainIdResponse, InteractorsResponse, OwnershipAction,
    OwnershipResponse, ZetaMessage, ZetaRevert,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub connector: String,
    pub chain_id: u64,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
    pub zeta_token: String,
    pub token_consumer: String,
}

/// Parameters of an outbound swap
#[cw_serde]
pub struct SwapParams {
    /// Asset being sold; must match the attached funds or the CW20 sent
    pub origin_input_token: Option<AssetInfo>,
    pub destination_chain_id: u64,
    /// Asset bought on the destination chain, absent when the output is
    /// the bridge token itself
    pub destination_out_token: Option<AssetInfo>,
    pub is_out_token_zeta: bool,
    /// Recipient on the destination chain (opaque bytes)
    pub destination_recipient: Binary,
    /// Enforced by the destination pool
    pub min_amount_out: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sell the attached native funds
    SwapTokensForTokensCrossChain(SwapParams),

    /// Sell a CW20 (or the bridge token itself)
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Interactor
    // ========================================================================
    SetInteractorByChainId { chain_id: u64, address: Binary },
    UpdateOwnership(OwnershipAction),
    OnZetaMessage(ZetaMessage),
    OnZetaRevert(ZetaRevert),
}

#[cw_serde]
pub enum ReceiveMsg {
    SwapTokensForTokensCrossChain(SwapParams),
}

/// Body of `CROSS_CHAIN_SWAP_MESSAGE`
#[cw_serde]
pub struct CrossChainSwap {
    /// Origin account, refunded on revert
    pub sender: String,
    pub origin_input_token: AssetInfo,
    pub origin_input_amount: Uint128,
    pub destination_out_token: Option<AssetInfo>,
    pub is_out_token_zeta: bool,
    pub destination_recipient: Binary,
    pub min_amount_out: Uint128,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(InteractorByChainIdResponse)]
    InteractorByChainId { chain_id: u64 },

    #[returns(InteractorsResponse)]
    Interactors {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub connector: Addr,
    pub chain_id: u64,
    pub zeta_token: Addr,
    pub token_consumer: Addr,
}
