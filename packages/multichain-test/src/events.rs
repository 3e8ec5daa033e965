//! Wasm event parsing
//!
//! Turns the flat event list of an `AppResponse` into per-contract events and
//! extracts the connector's `zeta_sent` payloads.

use std::collections::HashMap;

use cosmwasm_std::{Binary, Event, Uint128};

/// A `wasm` event emitted by one contract
#[derive(Debug, Clone, PartialEq)]
pub struct WasmEvent {
    pub contract_address: String,
    pub action: String,
    /// Remaining attributes
    pub attributes: HashMap<String, String>,
}

impl WasmEvent {
    pub fn from_events(events: &[Event]) -> Vec<Self> {
        events
            .iter()
            .filter(|event| event.ty == "wasm")
            .filter_map(|event| {
                let mut contract_address = String::new();
                let mut action = String::new();
                let mut attributes = HashMap::new();

                for attr in &event.attributes {
                    match attr.key.as_str() {
                        "_contract_address" => contract_address = attr.value.clone(),
                        "action" => action = attr.value.clone(),
                        _ => {
                            attributes.insert(attr.key.clone(), attr.value.clone());
                        }
                    }
                }

                (!contract_address.is_empty()).then_some(WasmEvent {
                    contract_address,
                    action,
                    attributes,
                })
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    pub fn is_action(&self, action: &str) -> bool {
        self.action == action
    }
}

/// Decoded `zeta_sent` event
#[derive(Debug, Clone, PartialEq)]
pub struct ZetaSentEvent {
    pub connector: String,
    pub zeta_tx_sender_address: String,
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub destination_address: Binary,
    pub zeta_value_and_gas: Uint128,
    pub destination_gas_limit: Uint128,
    pub message: Binary,
    pub zeta_params: Binary,
    pub nonce: u64,
}

fn decode_hex(value: &str) -> Option<Binary> {
    hex::decode(value.strip_prefix("0x")?).ok().map(Binary::from)
}

impl ZetaSentEvent {
    pub fn from_wasm_event(event: &WasmEvent) -> Option<Self> {
        if !event.is_action("zeta_sent") {
            return None;
        }

        Some(ZetaSentEvent {
            connector: event.contract_address.clone(),
            zeta_tx_sender_address: event.get("zeta_tx_sender_address")?.clone(),
            source_chain_id: event.get("source_chain_id")?.parse().ok()?,
            destination_chain_id: event.get("destination_chain_id")?.parse().ok()?,
            destination_address: decode_hex(event.get("destination_address")?)?,
            zeta_value_and_gas: Uint128::new(event.get("zeta_value_and_gas")?.parse().ok()?),
            destination_gas_limit: Uint128::new(
                event.get("destination_gas_limit")?.parse().ok()?,
            ),
            message: decode_hex(event.get("message")?)?,
            zeta_params: decode_hex(event.get("zeta_params")?)?,
            nonce: event.get("nonce")?.parse().ok()?,
        })
    }

    /// Every `zeta_sent` emitted by `connector` in `events`
    pub fn collect(events: &[Event], connector: &str) -> Vec<Self> {
        WasmEvent::from_events(events)
            .iter()
            .filter(|event| event.contract_address == connector)
            .filter_map(Self::from_wasm_event)
            .collect()
    }
}
