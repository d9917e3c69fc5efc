//! Channel context. The two traits `ChannelReader` and `ChannelKeeper` define
//! the interface any host chain must implement for the gate to verify and
//! record inbound packets.

use crate::core::channel::channel::ChannelEnd;
use crate::core::channel::error::Error;
use crate::core::channel::handler::recv_packet::RecvPacketResult;
use crate::core::channel::packet::{Receipt, Sequence};
use crate::core::client::consensus_state::ConsensusState;
use crate::core::connection::connection::ConnectionEnd;
use crate::core::host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::Height;

/// A context supplying all the necessary read-only dependencies for processing
/// an inbound packet message.
pub trait ChannelReader {
    /// Returns the ChannelEnd for the given `port_id` and `chan_id`.
    fn channel_end(&self, port_channel_id: &(PortId, ChannelId)) -> Result<ChannelEnd, Error>;

    /// Returns the ConnectionEnd for the given identifier `connection_id`.
    fn connection_end(&self, connection_id: &ConnectionId) -> Result<ConnectionEnd, Error>;

    /// Returns the consensus snapshot recorded for `client_id` at exactly
    /// `height`. Proof roots always come from here, never from the message.
    fn client_consensus_state(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Result<ConsensusState, Error>;

    /// The next sequence expected on an ordered channel, keyed by the
    /// receiving side's own (port, channel).
    fn get_next_sequence_recv(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<Sequence, Error>;

    /// Whether a receipt exists for the given sequence on an unordered channel.
    fn has_packet_receipt(&self, key: &(PortId, ChannelId, Sequence)) -> Result<bool, Error>;
}

/// A context supplying all the necessary write dependencies (i.e., storage
/// writing facility) for recording the delivery of a verified packet.
pub trait ChannelKeeper {
    /// Applies the bookkeeping half of a successful receive: advance the
    /// expected sequence (ordered) or record a receipt (unordered).
    ///
    /// Must run inside the same working view of state as the checks that
    /// produced `result`, so that both commit or roll back together.
    fn store_packet_result(&mut self, result: RecvPacketResult) -> Result<(), Error> {
        match result {
            RecvPacketResult::Ordered {
                port_id,
                channel_id,
                next_seq_recv,
                ..
            } => self.store_next_sequence_recv((port_id, channel_id), next_seq_recv),
            RecvPacketResult::Unordered {
                port_id,
                channel_id,
                sequence,
                receipt,
            } => self.store_packet_receipt((port_id, channel_id, sequence), receipt),
        }
    }

    fn store_next_sequence_recv(
        &mut self,
        port_channel_id: (PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), Error>;

    fn store_packet_receipt(
        &mut self,
        key: (PortId, ChannelId, Sequence),
        receipt: Receipt,
    ) -> Result<(), Error>;
}
