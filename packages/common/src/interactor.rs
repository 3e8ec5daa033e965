//! Interactor base for cross-chain applications.
//!
//! An application composes one `Interactor` and routes its admin, hook and
//! query messages through it. Inbound hooks are trusted only when
//! 1. the immediate caller is this chain's connector, and
//! 2. the claimed source-chain sender equals the peer registered for that
//!    chain (messages) or this contract on this chain (reverts).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, Api, Binary, DepsMut, Env, MessageInfo, Order, Response, StdResult, Storage,
};
use cw_storage_plus::{Bound, Item, Map};

use crate::connector::{ZetaMessage, ZetaRevert};
use crate::error::InteractorError;
use crate::ownable::{Ownable2Step, OwnershipAction, OwnershipResponse};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[cw_serde]
pub struct InteractorConfig {
    /// Chain-local connector; the only accepted caller of the hooks
    pub connector: Addr,
    /// Id of the chain this instance is deployed on
    pub current_chain_id: u64,
}

#[cw_serde]
pub struct InteractorByChainIdResponse {
    pub chain_id: u64,
    /// `None` when no peer is registered
    pub address: Option<Binary>,
}

#[cw_serde]
pub struct InteractorEntry {
    pub chain_id: u64,
    pub address: Binary,
}

#[cw_serde]
pub struct InteractorsResponse {
    pub interactors: Vec<InteractorEntry>,
}

pub struct Interactor<'a> {
    pub ownership: Ownable2Step<'a>,
    config: Item<'a, InteractorConfig>,
    peers: Map<'a, u64, Binary>,
}

impl<'a> Interactor<'a> {
    pub const fn new() -> Self {
        Self {
            ownership: Ownable2Step::new("interactor_owner", "interactor_pending_owner"),
            config: Item::new("interactor_config"),
            peers: Map::new("interactors_by_chain_id"),
        }
    }

    pub fn initialize(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        owner: &str,
        connector: &str,
        current_chain_id: u64,
    ) -> Result<InteractorConfig, InteractorError> {
        self.ownership.initialize(storage, api, owner)?;
        let config = InteractorConfig {
            connector: api.addr_validate(connector)?,
            current_chain_id,
        };
        self.config.save(storage, &config)?;
        Ok(config)
    }

    pub fn config(&self, storage: &dyn Storage) -> StdResult<InteractorConfig> {
        self.config.load(storage)
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Register the trusted peer for `chain_id`. An empty address unregisters.
    pub fn execute_set_interactor_by_chain_id(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        chain_id: u64,
        address: Binary,
    ) -> Result<Response, InteractorError> {
        self.ownership.assert_owner(deps.storage, &info.sender)?;

        if address.is_empty() {
            self.peers.remove(deps.storage, chain_id);
        } else {
            self.peers.save(deps.storage, chain_id, &address)?;
        }

        Ok(Response::new()
            .add_attribute("action", "set_interactor_by_chain_id")
            .add_attribute("chain_id", chain_id.to_string())
            .add_attribute("address", format!("0x{}", hex::encode(&address))))
    }

    pub fn execute_update_ownership(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        action: OwnershipAction,
    ) -> Result<Response, InteractorError> {
        self.ownership.execute(deps, info, action)
    }

    pub fn interactor_by_chain_id(
        &self,
        storage: &dyn Storage,
        chain_id: u64,
    ) -> StdResult<Option<Binary>> {
        self.peers.may_load(storage, chain_id)
    }

    /// Peer registered for a destination chain, or `InvalidDestinationChainId`.
    pub fn assert_valid_chain_id(
        &self,
        storage: &dyn Storage,
        chain_id: u64,
    ) -> Result<Binary, InteractorError> {
        self.interactor_by_chain_id(storage, chain_id)?
            .filter(|peer| !peer.is_empty())
            .ok_or(InteractorError::InvalidDestinationChainId { chain_id })
    }

    // ========================================================================
    // Inbound Validation
    // ========================================================================

    fn assert_connector(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), InteractorError> {
        let config = self.config.load(storage)?;
        if *sender != config.connector {
            return Err(InteractorError::InvalidCaller {
                caller: sender.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_message(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
        msg: &ZetaMessage,
    ) -> Result<(), InteractorError> {
        self.assert_connector(storage, sender)?;

        let peer = self.interactor_by_chain_id(storage, msg.source_chain_id)?;
        if peer.as_ref() != Some(&msg.zeta_tx_sender_address) {
            return Err(InteractorError::InvalidZetaMessageCall {
                chain_id: msg.source_chain_id,
            });
        }
        Ok(())
    }

    pub fn validate_revert(
        &self,
        storage: &dyn Storage,
        env: &Env,
        sender: &Addr,
        revert: &ZetaRevert,
    ) -> Result<(), InteractorError> {
        self.assert_connector(storage, sender)?;

        let config = self.config.load(storage)?;
        if revert.zeta_tx_sender_address != env.contract.address.as_str()
            || revert.source_chain_id != config.current_chain_id
        {
            return Err(InteractorError::InvalidZetaRevertCall);
        }
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn query_ownership(&self, storage: &dyn Storage) -> StdResult<OwnershipResponse> {
        self.ownership.query(storage)
    }

    pub fn query_interactor_by_chain_id(
        &self,
        storage: &dyn Storage,
        chain_id: u64,
    ) -> StdResult<InteractorByChainIdResponse> {
        Ok(InteractorByChainIdResponse {
            chain_id,
            address: self.interactor_by_chain_id(storage, chain_id)?,
        })
    }

    pub fn query_interactors(
        &self,
        storage: &dyn Storage,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<InteractorsResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        let interactors = self
            .peers
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (chain_id, address) = item?;
                Ok(InteractorEntry { chain_id, address })
            })
            .collect::<StdResult<Vec<_>>>()?;

        Ok(InteractorsResponse { interactors })
    }
}

impl<'a> Default for Interactor<'a> {
    fn default() -> Self {
        Self::new()
    }
}
