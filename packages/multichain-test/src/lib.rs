//! Multi-chain test harness
//!
//! Every chain is its own cw-multi-test `App` with a bridge token and a
//! connector deployed on it. Chains never see each other; the only channel
//! is the [`MockRelayer`], which reads `zeta_sent` events from one chain and
//! calls `OnReceive` on the destination or `OnRevert` on the source as TSS.
//!
//! - `chain` - one chain and its deploy helpers
//! - `network` - the set of chains plus the address book
//! - `events` - wasm event parsing
//! - `relayer` - the mock relayer and its fault injection

pub mod address_book;
pub mod chain;
pub mod events;
pub mod network;
pub mod relayer;

pub use address_book::AddressBook;
pub use chain::{Chain, ChainSpec, DEPLOYER, PAUSER, TSS, TSS_UPDATER};
pub use events::{WasmEvent, ZetaSentEvent};
pub use network::Network;
pub use relayer::{MockRelayer, Outcome, PendingMessage, RelayerConfig};

/// Install a `tracing` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
