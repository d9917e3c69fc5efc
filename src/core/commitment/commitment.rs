use serde_derive::{Deserialize, Serialize};

use crate::core::commitment::error::Error;
use crate::keys::STORE_KEY;

/// The digest summarizing a chain's entire committed state at one height.
///
/// Always taken from a recorded consensus snapshot; a root carried inside an
/// inbound message is worthless for verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRoot {
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    bytes: Vec<u8>,
}

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Vec::from(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// The key prefix under which a chain commits its provable relay state.
///
/// Negotiated into the connection during the handshake; proof paths are built
/// by prepending the counterparty's prefix to the canonical path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommitmentPrefix {
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    bytes: Vec<u8>,
}

impl CommitmentPrefix {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentPrefix {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl Default for CommitmentPrefix {
    fn default() -> Self {
        Self {
            bytes: STORE_KEY.as_bytes().to_vec(),
        }
    }
}

/// The opaque byte encoding of a membership proof, as carried on the wire.
///
/// The internal format is owned by the committed-storage layer being proved
/// against; this type only guarantees non-emptiness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentProofBytes {
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    bytes: Vec<u8>,
}

impl CommitmentProofBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<Vec<u8>> for CommitmentProofBytes {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            Err(Error::empty_commitment_proof())
        } else {
            Ok(Self { bytes })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_proof_bytes_rejected() {
        let res = CommitmentProofBytes::try_from(Vec::new());
        assert!(res.is_err());
    }

    #[test]
    fn default_prefix_is_not_empty() {
        assert!(!CommitmentPrefix::default().is_empty());
    }
}
