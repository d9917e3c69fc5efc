use crate::core::channel::channel::{Counterparty, Order, State};
use crate::core::channel::context::ChannelReader;
use crate::core::channel::error::Error;
use crate::core::channel::events::ReceivePacket;
use crate::core::channel::handler::verify::verify_packet_recv_proofs;
use crate::core::channel::msgs::recv_packet::MsgRecvPacket;
use crate::core::channel::packet::{Receipt, Sequence};
use crate::core::connection::connection::State as ConnectionState;
use crate::core::host::identifier::{ChannelId, PortId};
use crate::handler::{HandlerOutput, HandlerResult};

/// The bookkeeping mutation a successful receive entails, to be applied by the
/// keeper in the same working view of state that the checks ran against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecvPacketResult {
    Ordered {
        port_id: PortId,
        channel_id: ChannelId,
        sequence: Sequence,
        next_seq_recv: Sequence,
    },
    Unordered {
        port_id: PortId,
        channel_id: ChannelId,
        sequence: Sequence,
        receipt: Receipt,
    },
}

/// Admits or rejects one inbound packet message.
///
/// Checks run in order and short-circuit on the first failure: channel lookup
/// and state, counterparty identity, connection lookup and state, proof
/// verification against the recorded snapshot, then delivery bookkeeping under
/// the channel's ordering mode. Reads only; the returned result carries the
/// mutation for the keeper.
pub fn process(
    ctx: &dyn ChannelReader,
    msg: MsgRecvPacket,
) -> HandlerResult<RecvPacketResult, Error> {
    let mut output = HandlerOutput::builder();

    let packet = &msg.packet;

    let dest_port_channel_id = (
        packet.destination_port.clone(),
        packet.destination_channel.clone(),
    );
    let dest_channel_end = ctx.channel_end(&dest_port_channel_id)?;

    if dest_channel_end.state_matches(&State::Closed) {
        return Err(Error::channel_closed(packet.destination_channel.clone()));
    }
    if !dest_channel_end.state_matches(&State::Open) {
        return Err(Error::invalid_channel_state(
            packet.destination_channel.clone(),
            dest_channel_end.state(),
        ));
    }

    let counterparty = Counterparty::new(
        packet.source_port.clone(),
        Some(packet.source_channel.clone()),
    );
    if !dest_channel_end.counterparty_matches(&counterparty) {
        return Err(Error::invalid_packet_counterparty(
            packet.source_port.clone(),
            packet.source_channel.clone(),
        ));
    }

    let connection_id = dest_channel_end
        .connection_hops()
        .first()
        .cloned()
        .ok_or_else(|| Error::invalid_connection_hops_length(1, 0))?;
    let connection_end = ctx.connection_end(&connection_id)?;

    if !connection_end.state_matches(&ConnectionState::Open) {
        return Err(Error::connection_not_open(connection_id));
    }

    verify_packet_recv_proofs(ctx, packet, &connection_end, &msg.proofs)?;

    let result = match dest_channel_end.ordering() {
        Order::Ordered => {
            let next_seq_recv = ctx.get_next_sequence_recv(&dest_port_channel_id)?;

            if packet.sequence != next_seq_recv {
                return Err(Error::invalid_packet_sequence(
                    packet.sequence,
                    next_seq_recv,
                ));
            }

            RecvPacketResult::Ordered {
                port_id: dest_port_channel_id.0,
                channel_id: dest_port_channel_id.1,
                sequence: packet.sequence,
                next_seq_recv: next_seq_recv.increment(),
            }
        }
        Order::Unordered => {
            let receipt_key = (
                dest_port_channel_id.0.clone(),
                dest_port_channel_id.1.clone(),
                packet.sequence,
            );
            if ctx.has_packet_receipt(&receipt_key)? {
                return Err(Error::packet_already_received(packet.sequence));
            }

            RecvPacketResult::Unordered {
                port_id: dest_port_channel_id.0,
                channel_id: dest_port_channel_id.1,
                sequence: packet.sequence,
                receipt: Receipt::Ok,
            }
        }
    };

    output.log("success: packet receive");

    output.emit(ReceivePacket {
        packet: msg.packet,
    });

    Ok(output.with_result(result))
}
