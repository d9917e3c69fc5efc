use prost::Message;
use sha2::{Digest, Sha256};

use crate::core::commitment::commitment::{CommitmentPrefix, CommitmentProofBytes, CommitmentRoot};
use crate::core::commitment::error::Error;
use crate::core::host::path::Path;
use crate::proto::{RawMerkleProof, RawProofStep};

/// Domain-separation tag hashed into every leaf node.
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain-separation tag hashed into every inner node. Proof producers place it
/// at the start of each step's prefix.
pub const INNER_PREFIX: u8 = 0x01;

/// The fully-qualified key of a committed entry: the counterparty's store
/// prefix followed by the canonical path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    pub key_path: Vec<String>,
}

impl MerklePath {
    /// The flat key the leaf is hashed under.
    pub fn key(&self) -> String {
        self.key_path.join("/")
    }
}

/// Prepends the counterparty's store prefix to a canonical path.
pub fn apply_prefix(prefix: &CommitmentPrefix, path: Path) -> Result<MerklePath, Error> {
    if prefix.is_empty() {
        return Err(Error::empty_commitment_prefix());
    }

    Ok(MerklePath {
        key_path: vec![
            String::from_utf8_lossy(prefix.as_bytes()).into_owned(),
            path.to_string(),
        ],
    })
}

/// One fold step of a membership proof. The verifier recomputes
/// `sha256(prefix ++ child ++ suffix)` per step, leaf to root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofStep {
    pub prefix: Vec<u8>,
    pub suffix: Vec<u8>,
}

/// The decoded form of a membership proof: the value the counterparty actually
/// committed under the key, plus the fold steps up to the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    value: Vec<u8>,
    steps: Vec<ProofStep>,
}

impl MerkleProof {
    pub fn new(value: Vec<u8>, steps: Vec<ProofStep>) -> Self {
        Self { value, steps }
    }

    /// The value the proof claims is committed under the key path.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl TryFrom<&CommitmentProofBytes> for MerkleProof {
    type Error = Error;

    fn try_from(proof_bytes: &CommitmentProofBytes) -> Result<Self, Self::Error> {
        let raw = RawMerkleProof::decode(proof_bytes.as_bytes())
            .map_err(Error::proof_decoding_failed)?;

        if raw.value.is_empty() {
            return Err(Error::empty_proof_value());
        }

        Ok(Self {
            value: raw.value,
            steps: raw
                .steps
                .into_iter()
                .map(|s| ProofStep {
                    prefix: s.prefix,
                    suffix: s.suffix,
                })
                .collect(),
        })
    }
}

impl From<MerkleProof> for RawMerkleProof {
    fn from(proof: MerkleProof) -> Self {
        RawMerkleProof {
            value: proof.value,
            steps: proof
                .steps
                .into_iter()
                .map(|s| RawProofStep {
                    prefix: s.prefix,
                    suffix: s.suffix,
                })
                .collect(),
        }
    }
}

/// Checks that `value` is committed under `path` in the tree summarized by
/// `root`.
///
/// Pure: no side effects, safe to call speculatively. The root must come from
/// a recorded consensus snapshot.
pub fn verify_membership(
    root: &CommitmentRoot,
    proof: &MerkleProof,
    path: &MerklePath,
    value: &[u8],
) -> Result<(), Error> {
    if proof.value() != value {
        return Err(Error::verification_failure());
    }

    let mut hash = leaf_hash(path.key().as_bytes(), proof.value());
    for step in &proof.steps {
        hash = step_hash(step, &hash);
    }

    if hash != root.as_bytes() {
        return Err(Error::verification_failure());
    }

    Ok(())
}

/// Hash of a leaf node. The key length is hashed in to keep the
/// (key, value) split unambiguous.
pub fn leaf_hash(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update((key.len() as u64).to_be_bytes());
    hasher.update(key);
    hasher.update(value);
    hasher.finalize().to_vec()
}

/// Hash of an inner node with two children.
pub fn inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().to_vec()
}

/// The root of a tree with no entries.
pub fn empty_tree_root() -> Vec<u8> {
    Sha256::digest([]).to_vec()
}

fn step_hash(step: &ProofStep, child: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(&step.prefix);
    hasher.update(child);
    hasher.update(&step.suffix);
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::core::channel::packet::Sequence;
    use crate::core::host::identifier::{ChannelId, PortId};
    use crate::mock::chain::MockChain;

    fn sample_chain() -> (MockChain, PortId, ChannelId) {
        let port_id = PortId::default();
        let channel_id = ChannelId::default();
        let mut chain = MockChain::new(CommitmentPrefix::default());
        for seq in 0..4u64 {
            chain.set(
                chain
                    .commitment_path(&port_id, &channel_id, Sequence::from(seq))
                    .key(),
                vec![seq as u8; 8],
            );
        }
        (chain, port_id, channel_id)
    }

    #[test]
    fn verify_membership_of_committed_entries() {
        let (chain, port_id, channel_id) = sample_chain();
        let root = chain.root();

        for seq in 0..4u64 {
            let path = chain.commitment_path(&port_id, &channel_id, Sequence::from(seq));
            let proof_bytes = chain
                .proof(&path)
                .expect("entry was committed, proof must exist");
            let proof = MerkleProof::try_from(&proof_bytes).unwrap();
            assert_eq!(proof.value(), &[seq as u8; 8]);
            verify_membership(&root, &proof, &path, &[seq as u8; 8]).unwrap();
        }
    }

    #[test]
    fn reject_wrong_value() {
        let (chain, port_id, channel_id) = sample_chain();
        let root = chain.root();
        let path = chain.commitment_path(&port_id, &channel_id, Sequence::from(2));
        let proof = MerkleProof::try_from(&chain.proof(&path).unwrap()).unwrap();

        let res = verify_membership(&root, &proof, &path, b"not the committed value");
        assert!(res.is_err());
    }

    #[test]
    fn reject_wrong_path() {
        let (chain, port_id, channel_id) = sample_chain();
        let root = chain.root();
        let path = chain.commitment_path(&port_id, &channel_id, Sequence::from(2));
        let other = chain.commitment_path(&port_id, &channel_id, Sequence::from(3));
        let proof = MerkleProof::try_from(&chain.proof(&path).unwrap()).unwrap();

        let res = verify_membership(&root, &proof, &other, &[2u8; 8]);
        assert!(res.is_err());
    }

    #[test]
    fn reject_wrong_root() {
        let (mut chain, port_id, channel_id) = sample_chain();
        let path = chain.commitment_path(&port_id, &channel_id, Sequence::from(2));
        let proof = MerkleProof::try_from(&chain.proof(&path).unwrap()).unwrap();

        // The tree moves on; the stale proof no longer folds to the new root.
        chain.set("some/other/key".to_string(), vec![0xFF]);
        let res = verify_membership(&chain.root(), &proof, &path, &[2u8; 8]);
        assert!(res.is_err());
    }

    #[test]
    fn reject_fabricated_proof_for_absent_key() {
        let (chain, port_id, channel_id) = sample_chain();
        let root = chain.root();

        // Sequence 9 was never committed; a bare claim cannot fold to the root.
        let path = chain.commitment_path(&port_id, &channel_id, Sequence::from(9));
        let proof = MerkleProof::new(vec![9u8; 8], Vec::new());
        let res = verify_membership(&root, &proof, &path, &[9u8; 8]);
        assert!(res.is_err());
    }

    #[test]
    fn empty_prefix_rejected() {
        let prefix = CommitmentPrefix::from(Vec::new());
        let res = apply_prefix(
            &prefix,
            crate::core::host::path::Path::Connections(Default::default()),
        );
        assert!(res.is_err());
    }
}
