//! Raw wire types for gate messages and proofs.
//!
//! These mirror the protobuf schema of the relay protocol; domain types are
//! assembled from them via `TryFrom`, which is where all structural validation
//! happens. Only the receive-packet message family is in scope here — channel,
//! connection, and snapshot state never cross the wire through this crate.

/// Height on the counterparty chain, as carried by packet messages.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawHeight {
    #[prost(uint64, tag = "1")]
    pub height: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawPacket {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(string, tag = "2")]
    pub source_port: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub source_channel: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub destination_port: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub destination_channel: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "6")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub timeout_height: ::core::option::Option<RawHeight>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMsgRecvPacket {
    #[prost(message, optional, tag = "1")]
    pub packet: ::core::option::Option<RawPacket>,
    #[prost(bytes = "vec", tag = "2")]
    pub proof: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub proof_height: ::core::option::Option<RawHeight>,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}

/// One fold step of a membership proof: the verifier recomputes
/// `hash(prefix ++ child ++ suffix)` per step, leaf to root.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawProofStep {
    #[prost(bytes = "vec", tag = "1")]
    pub prefix: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub suffix: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMerkleProof {
    /// The value the proof claims is committed under the key path.
    #[prost(bytes = "vec", tag = "1")]
    pub value: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub steps: ::prost::alloc::vec::Vec<RawProofStep>,
}
