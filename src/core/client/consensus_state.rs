use serde_derive::{Deserialize, Serialize};

use crate::core::commitment::commitment::CommitmentRoot;
use crate::timestamp::Timestamp;

/// A recorded snapshot of the counterparty chain's state at one height: the
/// commitment root proofs are checked against, the block timestamp, and the
/// hash of the validator set taking over at the next height.
///
/// Once recorded for a given (client, height), a snapshot never changes;
/// verification security rests on that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusState {
    pub timestamp: Timestamp,
    pub root: CommitmentRoot,
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    pub next_validators_hash: Vec<u8>,
}

impl ConsensusState {
    pub fn new(timestamp: Timestamp, root: CommitmentRoot, next_validators_hash: Vec<u8>) -> Self {
        Self {
            timestamp,
            root,
            next_validators_hash,
        }
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
