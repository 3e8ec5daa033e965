//! Mock TSS relayer
//!
//! Queues every `zeta_sent` it observes and settles messages on demand.
//! Delivery calls `OnReceive` on the destination connector; when that fails
//! the message is reverted through `OnRevert` on the source connector, unless
//! `revert_on_failure` is off. Fault injection (drop, duplicate, reorder)
//! acts on the queue only, the connectors never learn about it.

use std::collections::VecDeque;

use cosmwasm_std::{Binary, Uint128};
use cw_multi_test::AppResponse;
use eyre::{eyre, Result};
use tracing::{info, info_span, warn};
use zeta_common::keccak256;
use zeta_connector::msg::ExecuteMsg as ConnectorExecuteMsg;

use crate::chain::{report, Chain};
use crate::events::ZetaSentEvent;
use crate::network::Network;

#[derive(Debug, Clone)]
pub struct RelayerConfig {
    /// Account the relayer signs as
    pub tss: String,
    /// Revert on the source chain when delivery fails
    pub revert_on_failure: bool,
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            tss: crate::chain::TSS.to_string(),
            revert_on_failure: true,
        }
    }
}

/// An observed outbound message awaiting settlement
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMessage {
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub zeta_tx_sender_address: String,
    pub destination_address: Binary,
    pub zeta_value: Uint128,
    pub message: Binary,
    pub nonce: u64,
    pub internal_send_hash: Binary,
}

/// keccak256 over source chain id, destination chain id, nonce (all
/// big-endian) and the sender's bytes.
pub fn delivery_hash(source_chain_id: u64, destination_chain_id: u64, nonce: u64, sender: &str) -> Binary {
    let mut data = Vec::with_capacity(24 + sender.len());
    data.extend_from_slice(&source_chain_id.to_be_bytes());
    data.extend_from_slice(&destination_chain_id.to_be_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    data.extend_from_slice(sender.as_bytes());
    Binary::from(keccak256(&data).to_vec())
}

impl From<ZetaSentEvent> for PendingMessage {
    fn from(event: ZetaSentEvent) -> Self {
        let internal_send_hash = delivery_hash(
            event.source_chain_id,
            event.destination_chain_id,
            event.nonce,
            &event.zeta_tx_sender_address,
        );
        Self {
            source_chain_id: event.source_chain_id,
            destination_chain_id: event.destination_chain_id,
            zeta_tx_sender_address: event.zeta_tx_sender_address,
            destination_address: event.destination_address,
            zeta_value: event.zeta_value_and_gas,
            message: event.message,
            nonce: event.nonce,
            internal_send_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Delivered,
    /// Delivery failed with `reason` and the value went back to the sender
    Reverted { reason: String },
    /// Delivery failed with `reason` and nothing was settled
    Failed { reason: String },
}

#[derive(Default)]
pub struct MockRelayer {
    config: RelayerConfig,
    queue: VecDeque<PendingMessage>,
    settled: Vec<(PendingMessage, Outcome)>,
}

impl MockRelayer {
    pub fn new(config: RelayerConfig) -> Self {
        Self {
            config,
            queue: VecDeque::new(),
            settled: Vec::new(),
        }
    }

    /// Queue every `zeta_sent` the chain's connector emitted in `res`.
    pub fn observe(&mut self, chain: &Chain, res: &AppResponse) -> usize {
        let sent = ZetaSentEvent::collect(&res.events, chain.connector.as_str());
        let count = sent.len();
        for event in sent {
            let pending = PendingMessage::from(event);
            info!(
                source = pending.source_chain_id,
                destination = pending.destination_chain_id,
                nonce = pending.nonce,
                value = %pending.zeta_value,
                "observed zeta_sent"
            );
            self.queue.push_back(pending);
        }
        count
    }

    pub fn pending(&self) -> &VecDeque<PendingMessage> {
        &self.queue
    }

    pub fn settled(&self) -> &[(PendingMessage, Outcome)] {
        &self.settled
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Deliver the oldest pending message. When neither delivery nor the
    /// revert succeeds the message stays at the front of the queue.
    pub fn deliver_next(&mut self, net: &mut Network) -> Result<Outcome> {
        let pending = self
            .queue
            .pop_front()
            .ok_or_else(|| eyre!("no pending messages"))?;
        let span = info_span!(
            "deliver",
            source = pending.source_chain_id,
            destination = pending.destination_chain_id,
            nonce = pending.nonce
        );
        let _enter = span.enter();

        let outcome = match self.try_deliver(net, &pending) {
            Ok(()) => {
                info!("delivered");
                Outcome::Delivered
            }
            Err(err) => {
                let reason = err.root_cause().to_string();
                warn!(%reason, "delivery failed");
                if self.config.revert_on_failure {
                    if let Err(err) = self.try_revert(net, &pending) {
                        warn!(%err, "revert failed, message requeued");
                        self.queue.push_front(pending);
                        return Err(err);
                    }
                    info!("reverted");
                    Outcome::Reverted { reason }
                } else {
                    Outcome::Failed { reason }
                }
            }
        };

        self.settled.push((pending, outcome.clone()));
        Ok(outcome)
    }

    /// Deliver until the queue is empty, including follow-up messages sent
    /// by the hooks.
    pub fn deliver_all(&mut self, net: &mut Network) -> Result<Vec<Outcome>> {
        let mut outcomes = vec![];
        while !self.queue.is_empty() {
            outcomes.push(self.deliver_next(net)?);
        }
        Ok(outcomes)
    }

    /// Revert the oldest pending message without attempting delivery. A
    /// failed revert leaves it queued.
    pub fn revert_next(&mut self, net: &mut Network) -> Result<()> {
        let pending = self
            .queue
            .pop_front()
            .ok_or_else(|| eyre!("no pending messages"))?;
        let span = info_span!(
            "revert",
            source = pending.source_chain_id,
            destination = pending.destination_chain_id,
            nonce = pending.nonce
        );
        let _enter = span.enter();

        if let Err(err) = self.try_revert(net, &pending) {
            warn!(%err, "revert failed, message requeued");
            self.queue.push_front(pending);
            return Err(err);
        }
        info!("reverted");
        self.settled.push((
            pending,
            Outcome::Reverted {
                reason: "reverted by relayer".to_string(),
            },
        ));
        Ok(())
    }

    fn try_deliver(&mut self, net: &mut Network, pending: &PendingMessage) -> anyhow::Result<()> {
        let destination = String::from_utf8(pending.destination_address.to_vec())?;
        let chain = net
            .chain_mut(pending.destination_chain_id)
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        let connector = chain.connector.clone();
        let res = chain.execute(
            &self.config.tss,
            &connector,
            &ConnectorExecuteMsg::OnReceive {
                zeta_tx_sender_address: Binary::from(pending.zeta_tx_sender_address.as_bytes()),
                source_chain_id: pending.source_chain_id,
                destination_address: destination,
                zeta_value_and_gas: pending.zeta_value,
                message: pending.message.clone(),
                internal_send_hash: pending.internal_send_hash.clone(),
            },
            &[],
        )?;
        self.observe(chain, &res);
        Ok(())
    }

    fn try_revert(&mut self, net: &mut Network, pending: &PendingMessage) -> Result<()> {
        let chain = net.chain_mut(pending.source_chain_id)?;
        let connector = chain.connector.clone();
        let res = chain
            .execute(
                &self.config.tss,
                &connector,
                &ConnectorExecuteMsg::OnRevert {
                    zeta_tx_sender_address: pending.zeta_tx_sender_address.clone(),
                    source_chain_id: pending.source_chain_id,
                    destination_address: pending.destination_address.clone(),
                    destination_chain_id: pending.destination_chain_id,
                    remaining_zeta_value: pending.zeta_value,
                    message: pending.message.clone(),
                    internal_send_hash: pending.internal_send_hash.clone(),
                },
                &[],
            )
            .map_err(report)?;
        self.observe(chain, &res);
        Ok(())
    }

    // ========================================================================
    // Fault injection
    // ========================================================================

    /// Forget the oldest pending message. Its value stays locked or burnt on
    /// the source chain.
    pub fn drop_next(&mut self) -> Option<PendingMessage> {
        let dropped = self.queue.pop_front();
        if let Some(pending) = &dropped {
            warn!(nonce = pending.nonce, "dropped message");
        }
        dropped
    }

    /// Queue a second copy of the oldest pending message right behind it.
    pub fn duplicate_next(&mut self) -> Result<()> {
        let copy = self
            .queue
            .front()
            .cloned()
            .ok_or_else(|| eyre!("no pending messages"))?;
        warn!(nonce = copy.nonce, "duplicated message");
        self.queue.insert(1, copy);
        Ok(())
    }

    /// Swap two pending messages.
    pub fn reorder(&mut self, i: usize, j: usize) -> Result<()> {
        if i >= self.queue.len() || j >= self.queue.len() {
            return Err(eyre!(
                "reorder {} <-> {} out of range for {} pending",
                i,
                j,
                self.queue.len()
            ));
        }
        self.queue.swap(i, j);
        Ok(())
    }
}
