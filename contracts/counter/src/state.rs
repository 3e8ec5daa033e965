use cw_storage_plus::Map;
use zeta_common::Interactor;

pub const CONTRACT_NAME: &str = "crates.io:counter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CROSS_CHAIN_INCREMENT_MESSAGE: &str = "CROSS_CHAIN_INCREMENT_MESSAGE";

/// Gas budget requested for the remote increment
pub const DESTINATION_GAS_LIMIT: u128 = 2_500_000;

pub const INTERACTOR: Interactor = Interactor::new();

/// Counter per originating account; remote accounts are keyed by their own
/// address string.
pub const COUNTERS: Map<&str, u64> = Map::new("counters");
