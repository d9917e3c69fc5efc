use core::time::Duration;
use std::collections::{BTreeMap, HashMap};

use crate::core::channel::channel::ChannelEnd;
use crate::core::channel::context::{ChannelKeeper, ChannelReader};
use crate::core::channel::error::Error as ChannelError;
use crate::core::channel::packet::{Receipt, Sequence};
use crate::core::client::consensus_state::ConsensusState;
use crate::core::client::context::{ClientKeeper, ClientMetadata, ClientReader};
use crate::core::client::error::Error as ClientError;
use crate::core::connection::connection::ConnectionEnd;
use crate::core::host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::Height;

/// Trusting period for clients created through the builder API, mirroring a
/// two-week unbonding window.
pub const DEFAULT_TRUSTING_PERIOD: Duration = Duration::from_secs(14 * 24 * 60 * 60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockClientRecord {
    pub trusting_period: Duration,
    pub consensus_states: BTreeMap<Height, ConsensusState>,
}

impl Default for MockClientRecord {
    fn default() -> Self {
        Self {
            trusting_period: DEFAULT_TRUSTING_PERIOD,
            consensus_states: BTreeMap::new(),
        }
    }
}

/// A context implementing the dependencies necessary for testing the gate.
///
/// Cloning it is cheap enough for tests and gives `Gate::handle` its scoped
/// working view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockContext {
    /// The set of all clients, indexed by their id.
    clients: HashMap<ClientId, MockClientRecord>,

    /// All the connections in the store.
    connections: HashMap<ConnectionId, ConnectionEnd>,

    /// All the channels in the store.
    channels: HashMap<(PortId, ChannelId), ChannelEnd>,

    /// Tracks the sequence number for the next packet to be received.
    next_sequence_recv: HashMap<(PortId, ChannelId), Sequence>,

    /// Receipts recorded for packets delivered on unordered channels.
    packet_receipts: HashMap<(PortId, ChannelId, Sequence), Receipt>,
}

/// Builder interface for use in testing. The methods here should _not_ be
/// accessible to any handler; state transitions in production go through the
/// keeper traits.
impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a consensus snapshot for `client_id`, creating the client
    /// record on first use.
    pub fn with_client(
        mut self,
        client_id: &ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Self {
        let record = self.clients.entry(client_id.clone()).or_default();
        record.consensus_states.insert(height, consensus_state);
        self
    }

    pub fn with_client_metadata(mut self, client_id: &ClientId, trusting_period: Duration) -> Self {
        self.clients.entry(client_id.clone()).or_default().trusting_period = trusting_period;
        self
    }

    pub fn with_connection(
        mut self,
        connection_id: ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Self {
        self.connections.insert(connection_id, connection_end);
        self
    }

    pub fn with_channel(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        channel_end: ChannelEnd,
    ) -> Self {
        self.channels.insert((port_id, channel_id), channel_end);
        self
    }

    pub fn with_recv_sequence(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        seq: Sequence,
    ) -> Self {
        self.next_sequence_recv.insert((port_id, channel_id), seq);
        self
    }

    pub fn with_packet_receipt(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        seq: Sequence,
        receipt: Receipt,
    ) -> Self {
        self.packet_receipts.insert((port_id, channel_id, seq), receipt);
        self
    }

    /// Direct read into the recorded snapshots, bypassing the reader traits.
    pub fn consensus_snapshot(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Option<ConsensusState> {
        self.clients
            .get(client_id)
            .and_then(|record| record.consensus_states.get(&height))
            .cloned()
    }
}

impl ClientReader for MockContext {
    fn consensus_state(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Result<ConsensusState, ClientError> {
        self.consensus_snapshot(client_id, height)
            .ok_or_else(|| ClientError::consensus_state_not_found(client_id.clone(), height))
    }

    fn client_metadata(&self, client_id: &ClientId) -> Result<ClientMetadata, ClientError> {
        self.clients
            .get(client_id)
            .map(|record| ClientMetadata {
                trusting_period: record.trusting_period,
            })
            .ok_or_else(|| ClientError::client_metadata_not_found(client_id.clone()))
    }
}

impl ClientKeeper for MockContext {
    fn store_consensus_state(
        &mut self,
        client_id: ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Result<(), ClientError> {
        let record = self.clients.entry(client_id.clone()).or_default();
        match record.consensus_states.get(&height) {
            Some(existing) if *existing != consensus_state => {
                Err(ClientError::consensus_state_overwrite(client_id, height))
            }
            // re-storing the identical snapshot is a no-op
            Some(_) => Ok(()),
            None => {
                record.consensus_states.insert(height, consensus_state);
                Ok(())
            }
        }
    }

    fn store_client_metadata(
        &mut self,
        client_id: ClientId,
        metadata: ClientMetadata,
    ) -> Result<(), ClientError> {
        self.clients.entry(client_id).or_default().trusting_period = metadata.trusting_period;
        Ok(())
    }
}

impl ChannelReader for MockContext {
    fn channel_end(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<ChannelEnd, ChannelError> {
        self.channels.get(port_channel_id).cloned().ok_or_else(|| {
            ChannelError::channel_not_found(port_channel_id.0.clone(), port_channel_id.1.clone())
        })
    }

    fn connection_end(&self, connection_id: &ConnectionId) -> Result<ConnectionEnd, ChannelError> {
        self.connections
            .get(connection_id)
            .cloned()
            .ok_or_else(|| ChannelError::missing_connection(connection_id.clone()))
    }

    fn client_consensus_state(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Result<ConsensusState, ChannelError> {
        self.consensus_snapshot(client_id, height)
            .ok_or_else(|| ChannelError::missing_client_consensus_state(client_id.clone(), height))
    }

    fn get_next_sequence_recv(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<Sequence, ChannelError> {
        self.next_sequence_recv
            .get(port_channel_id)
            .copied()
            .ok_or_else(|| {
                ChannelError::missing_next_recv_seq(
                    port_channel_id.0.clone(),
                    port_channel_id.1.clone(),
                )
            })
    }

    fn has_packet_receipt(
        &self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<bool, ChannelError> {
        Ok(self.packet_receipts.contains_key(key))
    }
}

impl ChannelKeeper for MockContext {
    fn store_next_sequence_recv(
        &mut self,
        port_channel_id: (PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), ChannelError> {
        self.next_sequence_recv.insert(port_channel_id, seq);
        Ok(())
    }

    fn store_packet_receipt(
        &mut self,
        key: (PortId, ChannelId, Sequence),
        receipt: Receipt,
    ) -> Result<(), ChannelError> {
        self.packet_receipts.insert(key, receipt);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::core::client::error::ErrorDetail;
    use crate::core::commitment::commitment::CommitmentRoot;
    use crate::timestamp::Timestamp;

    fn snapshot(tag: u8) -> ConsensusState {
        ConsensusState::new(
            Timestamp::from_nanoseconds(tag as u64),
            CommitmentRoot::from(vec![tag; 32]),
            vec![0xAB; 32],
        )
    }

    #[test]
    fn consensus_snapshots_are_write_once() {
        let client_id = ClientId::default();
        let mut ctx = MockContext::new();

        for h in 1..=8u64 {
            let height = Height::new(h);
            let recorded = snapshot(h as u8);

            ctx.store_consensus_state(client_id.clone(), height, recorded.clone())
                .unwrap();

            // Re-storing the identical value is a no-op.
            ctx.store_consensus_state(client_id.clone(), height, recorded.clone())
                .unwrap();

            // Any attempt to replace the value must fail and leave the
            // original untouched.
            let err = ctx
                .store_consensus_state(client_id.clone(), height, snapshot(h as u8 + 100))
                .unwrap_err();
            assert!(matches!(err.detail(), ErrorDetail::ConsensusStateOverwrite(_)));

            assert_eq!(
                ctx.consensus_state(&client_id, height).unwrap(),
                recorded,
            );
        }
    }

    #[test]
    fn consensus_lookup_requires_exact_height() {
        let client_id = ClientId::default();
        let ctx = MockContext::new().with_client(&client_id, Height::new(5), snapshot(5));

        assert!(ctx.consensus_state(&client_id, Height::new(5)).is_ok());

        for h in [4u64, 6] {
            let err = ctx.consensus_state(&client_id, Height::new(h)).unwrap_err();
            assert!(matches!(err.detail(), ErrorDetail::ConsensusStateNotFound(_)));
        }
    }

    #[test]
    fn client_metadata_lookup() {
        let client_id = ClientId::default();

        let ctx = MockContext::new();
        assert!(ctx.client_metadata(&client_id).is_err());

        let mut ctx = ctx.with_client(&client_id, Height::new(1), snapshot(1));
        assert_eq!(
            ctx.client_metadata(&client_id).unwrap().trusting_period,
            DEFAULT_TRUSTING_PERIOD
        );

        ctx.store_client_metadata(
            client_id.clone(),
            ClientMetadata {
                trusting_period: Duration::from_secs(3600),
            },
        )
        .unwrap();
        assert_eq!(
            ctx.client_metadata(&client_id).unwrap().trusting_period,
            Duration::from_secs(3600)
        );
    }
}
