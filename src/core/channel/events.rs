use crate::core::channel::packet::Packet;

/// Emitted once per packet that clears every verification check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivePacket {
    pub packet: Packet,
}

impl ReceivePacket {
    pub fn src_port_id(&self) -> &crate::core::host::identifier::PortId {
        &self.packet.source_port
    }

    pub fn dst_port_id(&self) -> &crate::core::host::identifier::PortId {
        &self.packet.destination_port
    }
}
