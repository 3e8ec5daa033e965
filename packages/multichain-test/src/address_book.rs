//! In-memory `(network, name) -> address` book.

use std::collections::BTreeMap;

use cosmwasm_std::Addr;
use eyre::{eyre, Result};

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: BTreeMap<(String, String), Addr>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `address` under `(network, name)`, replacing any previous entry.
    pub fn set(&mut self, network: &str, name: &str, address: Addr) {
        tracing::debug!(network, name, %address, "address book entry");
        self.entries
            .insert((network.to_string(), name.to_string()), address);
    }

    pub fn get(&self, network: &str, name: &str) -> Result<Addr> {
        self.entries
            .get(&(network.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| eyre!("no address for {} on {}", name, network))
    }

    /// All `(network, address)` pairs recorded under `name`
    pub fn deployments(&self, name: &str) -> Vec<(String, Addr)> {
        self.entries
            .iter()
            .filter(|((_, n), _)| n == name)
            .map(|((network, _), addr)| (network.clone(), addr.clone()))
            .collect()
    }
}
