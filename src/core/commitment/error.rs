use flex_error::{define_error, TraceError};
use prost::DecodeError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        EmptyCommitmentPrefix
            | _ | { "empty commitment prefix" },

        EmptyCommitmentProof
            | _ | { "empty commitment proof" },

        EmptyProofValue
            | _ | { "proof carries no committed value" },

        ProofDecodingFailed
            [ TraceError<DecodeError> ]
            | _ | { "failed to decode commitment proof" },

        VerificationFailure
            | _ | { "proof does not establish the value at the given path under the root" },
    }
}
