use crate::core::channel::events::ReceivePacket;

/// Events emitted by the gate's handlers, surfaced to the transaction caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ReceivePacket(ReceivePacket),
}

impl Event {
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ReceivePacket(_) => "receive_packet",
        }
    }
}

impl From<ReceivePacket> for Event {
    fn from(ev: ReceivePacket) -> Self {
        Event::ReceivePacket(ev)
    }
}
