//! The set of simulated chains and their shared address book.

use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use eyre::{eyre, Result};

use crate::address_book::AddressBook;
use crate::chain::{report, Chain, DEPLOYER};

/// Registry message shared by every interactor application
#[cw_serde]
enum InteractorExecuteMsg {
    SetInteractorByChainId { chain_id: u64, address: Binary },
}

#[derive(Default)]
pub struct Network {
    chains: BTreeMap<u64, Chain>,
    pub book: AddressBook,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a started chain and record its token and connector.
    pub fn add_chain(&mut self, chain: Chain) -> Result<()> {
        let chain_id = chain.chain_id();
        if self.chains.contains_key(&chain_id) {
            return Err(eyre!("chain id {} already in the network", chain_id));
        }
        self.book
            .set(chain.name(), "zeta_token", chain.zeta_token.clone());
        self.book
            .set(chain.name(), "connector", chain.connector.clone());
        self.chains.insert(chain_id, chain);
        Ok(())
    }

    pub fn chain(&self, chain_id: u64) -> Result<&Chain> {
        self.chains
            .get(&chain_id)
            .ok_or_else(|| eyre!("unknown chain id {}", chain_id))
    }

    pub fn chain_mut(&mut self, chain_id: u64) -> Result<&mut Chain> {
        self.chains
            .get_mut(&chain_id)
            .ok_or_else(|| eyre!("unknown chain id {}", chain_id))
    }

    pub fn chain_ids(&self) -> Vec<u64> {
        self.chains.keys().copied().collect()
    }

    /// Address of `name` on `chain_id`, via the address book
    pub fn address(&self, chain_id: u64, name: &str) -> Result<Addr> {
        self.book.get(self.chain(chain_id)?.name(), name)
    }

    /// Deploy an application on every chain, record it under `name` and
    /// register each instance as the peer of every other.
    pub fn deploy<F>(&mut self, name: &str, mut deploy: F) -> Result<()>
    where
        F: FnMut(&mut Chain) -> Result<Addr>,
    {
        for chain in self.chains.values_mut() {
            let address = deploy(chain)?;
            self.book.set(chain.name(), name, address);
        }
        self.register_peers(name)
    }

    /// Register every deployment of `name` with every other one.
    pub fn register_peers(&mut self, name: &str) -> Result<()> {
        let deployments = self
            .chains
            .values()
            .map(|chain| Ok((chain.chain_id(), self.book.get(chain.name(), name)?)))
            .collect::<Result<Vec<_>>>()?;

        for (chain_id, local) in &deployments {
            let chain = self.chain_mut(*chain_id)?;
            for (peer_chain_id, peer) in &deployments {
                if peer_chain_id == chain_id {
                    continue;
                }
                chain
                    .execute(
                        DEPLOYER,
                        local,
                        &InteractorExecuteMsg::SetInteractorByChainId {
                            chain_id: *peer_chain_id,
                            address: Binary::from(peer.as_bytes()),
                        },
                        &[],
                    )
                    .map_err(report)?;
            }
        }
        tracing::debug!(name, peers = deployments.len(), "peers registered");
        Ok(())
    }
}
