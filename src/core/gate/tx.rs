use crate::core::channel::msgs::recv_packet::MsgRecvPacket;

/// The messages the gate inspects. Anything else in a transaction belongs to
/// other decorators in the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateMsg {
    RecvPacket(MsgRecvPacket),
}

/// An inbound transaction: an ordered batch of messages, verified and executed
/// as one atomic unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tx {
    msgs: Vec<GateMsg>,
}

impl Tx {
    pub fn new(msgs: Vec<GateMsg>) -> Self {
        Self { msgs }
    }

    pub fn msgs(&self) -> &[GateMsg] {
        &self.msgs
    }
}
