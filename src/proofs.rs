use flex_error::define_error;
use serde_derive::{Deserialize, Serialize};

use crate::core::commitment::commitment::CommitmentProofBytes;
use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    ProofError {
        ZeroHeight
            | _ | { "proof height cannot be zero" },
    }
}

/// The proof bundle carried by a packet message: the membership proof itself,
/// plus the counterparty height the proof was generated at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proofs {
    object_proof: CommitmentProofBytes,
    /// Height of the counterparty chain at which both the proof and the state
    /// it attests to were recorded.
    height: Height,
}

impl Proofs {
    pub fn new(object_proof: CommitmentProofBytes, height: Height) -> Result<Self, ProofError> {
        if height.is_zero() {
            return Err(ProofError::zero_height());
        }

        Ok(Self {
            object_proof,
            height,
        })
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn object_proof(&self) -> &CommitmentProofBytes {
        &self.object_proof
    }
}
