use crate::core::channel::error::Error;
use crate::core::channel::packet::Packet;
use crate::core::commitment::commitment::CommitmentProofBytes;
use crate::keys::ROUTER_KEY;
use crate::proofs::Proofs;
use crate::proto::RawMsgRecvPacket;
use crate::signer::Signer;
use crate::tx_msg::Msg;
use crate::Height;

pub const TYPE_URL: &str = "/relay.core.channel.v1.MsgRecvPacket";

///
/// Message definition for the "packet receiving" datagram.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgRecvPacket {
    pub packet: Packet,
    pub proofs: Proofs,
    pub signer: Signer,
}

impl MsgRecvPacket {
    pub fn new(packet: Packet, proofs: Proofs, signer: Signer) -> MsgRecvPacket {
        Self {
            packet,
            proofs,
            signer,
        }
    }
}

impl Msg for MsgRecvPacket {
    type ValidationError = Error;
    type Raw = RawMsgRecvPacket;

    fn route(&self) -> String {
        ROUTER_KEY.to_string()
    }

    fn type_url(&self) -> String {
        TYPE_URL.to_string()
    }
}

impl TryFrom<RawMsgRecvPacket> for MsgRecvPacket {
    type Error = Error;

    fn try_from(raw_msg: RawMsgRecvPacket) -> Result<Self, Self::Error> {
        let proof = CommitmentProofBytes::try_from(raw_msg.proof).map_err(Error::commitment)?;

        let proof_height: Height = raw_msg
            .proof_height
            .ok_or_else(Error::missing_height)?
            .into();

        let proofs = Proofs::new(proof, proof_height).map_err(Error::invalid_proof)?;

        let packet: Packet = raw_msg
            .packet
            .ok_or_else(Error::missing_packet)?
            .try_into()?;

        Ok(MsgRecvPacket {
            packet,
            proofs,
            signer: raw_msg.signer.into(),
        })
    }
}

impl From<MsgRecvPacket> for RawMsgRecvPacket {
    fn from(domain_msg: MsgRecvPacket) -> Self {
        RawMsgRecvPacket {
            packet: Some(domain_msg.packet.into()),
            proof: domain_msg.proofs.object_proof().as_bytes().to_vec(),
            proof_height: Some(domain_msg.proofs.height().into()),
            signer: domain_msg.signer.to_string(),
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
pub mod test_util {
    use super::RawMsgRecvPacket;
    use crate::core::channel::packet::test_utils::get_dummy_raw_packet;
    use crate::proto::RawHeight;

    /// Returns a dummy `RawMsgRecvPacket`, for testing only! The proof bytes
    /// decode to nothing useful; tests that need a verifiable proof build one
    /// through the mock chain instead.
    pub fn get_dummy_raw_msg_recv_packet(proof_height: u64) -> RawMsgRecvPacket {
        RawMsgRecvPacket {
            packet: Some(get_dummy_raw_packet(proof_height + 10)),
            proof: vec![1u8; 32],
            proof_height: Some(RawHeight {
                height: proof_height,
            }),
            signer: "testaddr1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::core::channel::msgs::recv_packet::test_util::get_dummy_raw_msg_recv_packet;
    use crate::core::channel::msgs::recv_packet::MsgRecvPacket;
    use crate::proto::RawMsgRecvPacket;
    use crate::tx_msg::Msg;

    #[test]
    fn msg_recv_packet_try_from_raw() {
        struct Test {
            name: String,
            raw: RawMsgRecvPacket,
            want_pass: bool,
        }

        let height = 20;
        let default_raw_msg = get_dummy_raw_msg_recv_packet(height);

        let tests: Vec<Test> = vec![
            Test {
                name: "Good parameters".to_string(),
                raw: default_raw_msg.clone(),
                want_pass: true,
            },
            Test {
                name: "Missing packet".to_string(),
                raw: RawMsgRecvPacket {
                    packet: None,
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Missing proof".to_string(),
                raw: RawMsgRecvPacket {
                    proof: Vec::new(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Missing proof height".to_string(),
                raw: RawMsgRecvPacket {
                    proof_height: None,
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Empty signer".to_string(),
                raw: RawMsgRecvPacket {
                    signer: "".to_string(),
                    ..default_raw_msg
                },
                want_pass: true,
            },
        ];

        for test in tests {
            let res_msg = MsgRecvPacket::try_from(test.raw.clone());

            assert_eq!(
                test.want_pass,
                res_msg.is_ok(),
                "MsgRecvPacket::try_from failed for test {}, \nraw msg {:?} with error {:?}",
                test.name,
                test.raw,
                res_msg.err(),
            );
        }
    }

    #[test]
    fn to_and_from() {
        let raw = get_dummy_raw_msg_recv_packet(15);
        let msg = MsgRecvPacket::try_from(raw.clone()).unwrap();
        let raw_back = RawMsgRecvPacket::from(msg.clone());
        let msg_back = MsgRecvPacket::try_from(raw_back.clone()).unwrap();
        assert_eq!(raw, raw_back);
        assert_eq!(msg, msg_back);
    }

    #[test]
    fn sign_bytes_are_stable() {
        let msg = MsgRecvPacket::try_from(get_dummy_raw_msg_recv_packet(15)).unwrap();
        assert_eq!(
            msg.clone().get_sign_bytes(),
            msg.get_sign_bytes(),
        );
    }
}
