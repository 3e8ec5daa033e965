use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;
use zeta_common::{
    InteractorByChainIdResponse, InteractorsResponse, OwnershipAction, OwnershipResponse,
    ZetaMessage, ZetaRevert,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub connector: String,
    /// Id of the chain this instance is deployed on
    pub chain_id: u64,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    CrossChainCount { destination_chain_id: u64 },

    // ========================================================================
    // Interactor
    // ========================================================================
    /// Authorization: owner. An empty address unregisters the chain.
    SetInteractorByChainId { chain_id: u64, address: Binary },
    UpdateOwnership(OwnershipAction),
    OnZetaMessage(ZetaMessage),
    OnZetaRevert(ZetaRevert),
}

/// Body of `CROSS_CHAIN_INCREMENT_MESSAGE`
#[cw_serde]
pub struct CrossChainIncrement {
    pub from: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CounterResponse)]
    Counter { address: String },

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
pub struct CounterResponse {
    pub address: String,
    pub count: u64,
}
