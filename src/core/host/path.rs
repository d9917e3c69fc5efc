//! The path space under which every chain keys its provable state. Some of the
//! entries are written by other subsystems (handshakes, light clients); the
//! gate only ever reads them, but the formats must agree chain-wide or proofs
//! cannot be checked against the counterparty's layout.

use core::fmt::{Display, Formatter, Result};

use crate::core::channel::packet::Sequence;
use crate::core::host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::Height;

/// The Path enum abstracts out the different sub-paths
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Path {
    ConsensusState(ClientId, Height),
    Connections(ConnectionId),
    ChannelEnds(PortId, ChannelId),
    SeqRecvs(PortId, ChannelId),
    Commitments(PortId, ChannelId, Sequence),
    Receipts(PortId, ChannelId, Sequence),
}

impl Path {
    /// Indication if the path is provable.
    pub fn is_provable(&self) -> bool {
        true
    }

    /// into_bytes implementation
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// The Display trait adds the `.to_string()` method to the Path struct.
/// This is where the different path strings are constructed.
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            Path::ConsensusState(client_id, height) => {
                write!(f, "clients/{}/consensusState/{}", client_id, height)
            }
            Path::Connections(connection_id) => write!(f, "connections/{}", connection_id),
            Path::ChannelEnds(port_id, channel_id) => {
                write!(f, "channelEnds/ports/{}/channels/{}", port_id, channel_id)
            }
            Path::SeqRecvs(port_id, channel_id) => write!(
                f,
                "seqRecvs/ports/{}/channels/{}/nextSequenceRecv",
                port_id, channel_id
            ),
            Path::Commitments(port_id, channel_id, seq) => write!(
                f,
                "commitments/ports/{}/channels/{}/packets/{}",
                port_id, channel_id, seq
            ),
            Path::Receipts(port_id, channel_id, seq) => write!(
                f,
                "receipts/ports/{}/channels/{}/sequences/{}",
                port_id, channel_id, seq
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_path_format() {
        let path = Path::Commitments(
            PortId::default(),
            ChannelId::default(),
            Sequence::from(7),
        );
        assert_eq!(
            path.to_string(),
            "commitments/ports/defaultport/channels/defaultchannel/packets/7"
        );
    }

    #[test]
    fn consensus_state_path_format() {
        let path = Path::ConsensusState(ClientId::default(), Height::new(3));
        assert_eq!(path.to_string(), "clients/defaultclient/consensusState/3");
    }
}
