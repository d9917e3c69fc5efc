use serde_derive::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Height;

/// The digest a sending chain stores under the commitments path when a packet
/// goes out. The receiving chain never stores one; it recomputes the digest
/// from the claimed packet and compares against what the proof reveals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketCommitment(
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    Vec<u8>,
);

impl PacketCommitment {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for PacketCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// The commitment digest of a packet: `sha256(timeout_height ++ sha256(data))`.
///
/// Both chains must compute this identically or no packet will ever verify.
pub fn compute_packet_commitment(data: &[u8], timeout_height: Height) -> PacketCommitment {
    let mut hasher = Sha256::new();
    hasher.update(timeout_height.value().to_be_bytes());
    hasher.update(Sha256::digest(data));
    PacketCommitment(hasher.finalize().to_vec())
}
