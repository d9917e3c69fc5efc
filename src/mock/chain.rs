use std::collections::BTreeMap;

use prost::Message;

use crate::core::channel::commitment::PacketCommitment;
use crate::core::channel::packet::Sequence;
use crate::core::client::consensus_state::ConsensusState;
use crate::core::commitment::commitment::{
    CommitmentPrefix, CommitmentProofBytes, CommitmentRoot,
};
use crate::core::commitment::merkle::{
    apply_prefix, empty_tree_root, inner_hash, leaf_hash, MerklePath, MerkleProof, ProofStep,
    INNER_PREFIX,
};
use crate::core::host::identifier::{ChannelId, PortId};
use crate::core::host::path::Path;
use crate::proto::RawMerkleProof;
use crate::timestamp::Timestamp;

/// An in-memory counterparty chain: a provable key-value store plus the
/// sending side's packet-commitment writer. Stands in for the chain a relayer
/// queries proofs from.
#[derive(Clone, Debug, Default)]
pub struct MockChain {
    prefix: CommitmentPrefix,
    store: BTreeMap<String, Vec<u8>>,
}

impl MockChain {
    pub fn new(prefix: CommitmentPrefix) -> Self {
        Self {
            prefix,
            store: BTreeMap::new(),
        }
    }

    pub fn prefix(&self) -> &CommitmentPrefix {
        &self.prefix
    }

    /// Writes a raw entry into the committed store.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.store.insert(key, value);
    }

    /// The prefixed path a packet commitment lives under on this chain.
    pub fn commitment_path(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> MerklePath {
        apply_prefix(
            &self.prefix,
            Path::Commitments(port_id.clone(), channel_id.clone(), sequence),
        )
        .expect("mock chain prefix is never empty")
    }

    /// What this chain's channel keeper does when a packet is sent.
    pub fn set_packet_commitment(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        commitment: PacketCommitment,
    ) {
        let key = self.commitment_path(port_id, channel_id, sequence).key();
        self.set(key, commitment.into_vec());
    }

    /// Merkle root over the current store contents.
    pub fn root(&self) -> CommitmentRoot {
        match self.levels().last().and_then(|level| level.first()) {
            Some(root) => CommitmentRoot::from_bytes(root),
            None => CommitmentRoot::from(empty_tree_root()),
        }
    }

    /// The snapshot a light client on the receiving chain records for this
    /// chain's current state.
    pub fn consensus_state(&self, timestamp: Timestamp) -> ConsensusState {
        ConsensusState::new(timestamp, self.root(), vec![0xAB; 32])
    }

    /// Genuine membership proof of the stored value at `path`, if any.
    pub fn proof(&self, path: &MerklePath) -> Option<CommitmentProofBytes> {
        let key = path.key();
        let value = self.store.get(&key)?.clone();
        let steps = self.proof_steps(&key)?;
        Some(Self::encode_proof(MerkleProof::new(value, steps)))
    }

    pub fn commitment_proof(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> Option<CommitmentProofBytes> {
        self.proof(&self.commitment_path(port_id, channel_id, sequence))
    }

    /// The proof a relayer submits while claiming `commitment` is stored at
    /// the commitments path: genuine fold steps when the key is present, a
    /// bare claim otherwise. Whether it verifies is the gate's problem.
    pub fn claim_commitment_proof(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
        commitment: &PacketCommitment,
    ) -> CommitmentProofBytes {
        let key = self.commitment_path(port_id, channel_id, sequence).key();
        let steps = self.proof_steps(&key).unwrap_or_default();
        Self::encode_proof(MerkleProof::new(commitment.as_bytes().to_vec(), steps))
    }

    /// All tree levels, leaves first. Odd nodes are promoted unchanged.
    fn levels(&self) -> Vec<Vec<Vec<u8>>> {
        if self.store.is_empty() {
            return Vec::new();
        }

        let mut level: Vec<Vec<u8>> = self
            .store
            .iter()
            .map(|(key, value)| leaf_hash(key.as_bytes(), value))
            .collect();
        let mut levels = vec![level.clone()];

        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| {
                    if pair.len() == 2 {
                        inner_hash(&pair[0], &pair[1])
                    } else {
                        pair[0].clone()
                    }
                })
                .collect();
            levels.push(level.clone());
        }

        levels
    }

    fn proof_steps(&self, key: &str) -> Option<Vec<ProofStep>> {
        let mut idx = self.store.keys().position(|k| k.as_str() == key)?;
        let levels = self.levels();

        let mut steps = Vec::new();
        for level in &levels[..levels.len() - 1] {
            if idx % 2 == 0 {
                if idx + 1 < level.len() {
                    steps.push(ProofStep {
                        prefix: vec![INNER_PREFIX],
                        suffix: level[idx + 1].clone(),
                    });
                }
                // no sibling: the node was promoted, nothing to fold
            } else {
                let mut prefix = vec![INNER_PREFIX];
                prefix.extend_from_slice(&level[idx - 1]);
                steps.push(ProofStep {
                    prefix,
                    suffix: Vec::new(),
                });
            }
            idx /= 2;
        }

        Some(steps)
    }

    fn encode_proof(proof: MerkleProof) -> CommitmentProofBytes {
        let raw = RawMerkleProof::from(proof);
        CommitmentProofBytes::try_from(raw.encode_to_vec())
            .expect("an encoded proof is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commitment::merkle::verify_membership;

    #[test]
    fn every_entry_is_provable_at_any_store_size() {
        // Exercises odd and even leaf counts, including the single-leaf tree.
        for n in 1..=9u64 {
            let mut chain = MockChain::new(CommitmentPrefix::default());
            for i in 0..n {
                chain.set(format!("key-{}", i), vec![i as u8; 4]);
            }

            let root = chain.root();
            for i in 0..n {
                let path = MerklePath {
                    key_path: vec![format!("key-{}", i)],
                };
                let proof_bytes = chain.proof(&path).unwrap();
                let proof = MerkleProof::try_from(&proof_bytes).unwrap();
                verify_membership(&root, &proof, &path, &[i as u8; 4]).unwrap();
            }
        }
    }

    #[test]
    fn roots_differ_between_stores() {
        let empty = MockChain::new(CommitmentPrefix::default());

        let mut one = MockChain::new(CommitmentPrefix::default());
        one.set("a".to_string(), vec![1]);

        let mut other = one.clone();
        other.set("a".to_string(), vec![2]);

        assert_ne!(empty.root(), one.root());
        assert_ne!(one.root(), other.root());
    }
}
