use crate::core::channel::commitment::compute_packet_commitment;
use crate::core::channel::context::ChannelReader;
use crate::core::channel::error::Error;
use crate::core::channel::packet::Packet;
use crate::core::commitment::merkle::{apply_prefix, verify_membership, MerkleProof};
use crate::core::connection::connection::ConnectionEnd;
use crate::core::host::path::Path;
use crate::proofs::Proofs;

/// Entry point for verifying the proofs bundled in a packet message.
///
/// Resolves the trusted root recorded for the connection's client at the
/// claimed proof height, recomputes the packet commitment locally, and checks
/// the membership proof against the counterparty's commitments path.
///
/// A proof that verifies but reveals a different commitment than the one
/// recomputed from the supplied packet fails with a distinct error: the
/// counterparty did commit *something* at that sequence, just not this packet.
pub fn verify_packet_recv_proofs(
    ctx: &dyn ChannelReader,
    packet: &Packet,
    connection_end: &ConnectionEnd,
    proofs: &Proofs,
) -> Result<(), Error> {
    let client_id = connection_end.client_id();
    let consensus_state = ctx.client_consensus_state(client_id, proofs.height())?;
    let root = consensus_state.root;

    let commitment = compute_packet_commitment(&packet.data, packet.timeout_height);

    let path = Path::Commitments(
        packet.source_port.clone(),
        packet.source_channel.clone(),
        packet.sequence,
    );
    let prefixed_path = apply_prefix(connection_end.counterparty().prefix(), path)
        .map_err(|e| Error::packet_verification_failed(packet.sequence, e))?;

    let proof = MerkleProof::try_from(proofs.object_proof())
        .map_err(|e| Error::packet_verification_failed(packet.sequence, e))?;

    if proof.value() != commitment.as_bytes() {
        return Err(Error::incorrect_packet_commitment(packet.sequence));
    }

    verify_membership(&root, &proof, &prefixed_path, commitment.as_bytes())
        .map_err(|e| Error::packet_verification_failed(packet.sequence, e))
}
