use flex_error::{define_error, TraceError};

use crate::core::channel::channel::State;
use crate::core::channel::packet::Sequence;
use crate::core::commitment::error::Error as CommitmentError;
use crate::core::host::error::ValidationError;
use crate::core::host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::proofs::ProofError;
use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        Identifier
            [ ValidationError ]
            | _ | { "identifier error" },

        UnknownOrderType
            { type_id: String }
            | e | { format_args!("channel order type unknown: {}", e.type_id) },

        InvalidConnectionHopsLength
            { expected: usize, actual: usize }
            | e | {
                format_args!(
                    "invalid connection hops length: expected {0}; actual {1}",
                    e.expected, e.actual)
            },

        InvalidPacketCounterparty
            { port_id: PortId, channel_id: ChannelId }
            | e | {
                format_args!(
                    "packet source port {} and channel {} doesn't match the counterparty's port/channel",
                    e.port_id, e.channel_id)
            },

        MissingHeight
            | _ | { "invalid proof: missing height" },

        MissingPacket
            | _ | { "there is no packet in this message" },

        ZeroPacketData
            | _ | { "packet data bytes cannot be empty" },

        InvalidPacketData
            { reason: String }
            | e | { format_args!("invalid packet data: {}", e.reason) },

        InvalidProof
            [ ProofError ]
            | _ | { "invalid proof" },

        Commitment
            [ CommitmentError ]
            | _ | { "commitment error" },

        PacketVerificationFailed
            { sequence: Sequence }
            [ CommitmentError ]
            | e | {
                format_args!(
                    "verification fails for the packet with the sequence number {0}",
                    e.sequence)
            },

        IncorrectPacketCommitment
            { sequence: Sequence }
            | e | {
                format_args!(
                    "the stored commitment of the packet {0} is incorrect",
                    e.sequence)
            },

        InvalidPacketSequence
            {
                given_sequence: Sequence,
                next_sequence: Sequence
            }
            | e | {
                format_args!(
                    "invalid packet sequence {0} ≠ next receive sequence {1}",
                    e.given_sequence, e.next_sequence)
            },

        PacketAlreadyReceived
            { sequence: Sequence }
            | e | {
                format_args!(
                    "packet with the sequence number {0} has been already received",
                    e.sequence)
            },

        ChannelNotFound
            { port_id: PortId, channel_id: ChannelId }
            | e | {
                format_args!(
                    "the channel end ({0}, {1}) does not exist",
                    e.port_id, e.channel_id)
            },

        ChannelClosed
            { channel_id: ChannelId }
            | e | {
                format_args!(
                    "channel {0} is Closed",
                    e.channel_id)
            },

        InvalidChannelState
            { channel_id: ChannelId, state: State }
            | e | {
                format_args!(
                    "channel {0} should not be state {1}",
                    e.channel_id, e.state)
            },

        MissingConnection
            { connection_id: ConnectionId }
            | e | {
                format_args!(
                    "given connection hop {0} does not exist",
                    e.connection_id)
            },

        ConnectionNotOpen
            { connection_id: ConnectionId }
            | e | {
                format_args!(
                    "the associated connection {0} is not OPEN",
                    e.connection_id)
            },

        MissingClientConsensusState
            { client_id: ClientId, height: Height }
            | e | {
                format_args!(
                    "missing client consensus state for client id {0} at height {1}",
                    e.client_id, e.height)
            },

        MissingNextRecvSeq
            { port_id: PortId, channel_id: ChannelId }
            | e | {
                format_args!(
                    "missing next receive sequence for channel ({0}, {1})",
                    e.port_id, e.channel_id)
            },

        InvalidStringAsSequence
            { value: String }
            [ TraceError<core::num::ParseIntError> ]
            | e | {
                format_args!(
                    "string {0} cannot be converted to packet sequence",
                    e.value)
            },
    }
}
