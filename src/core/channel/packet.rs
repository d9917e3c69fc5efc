use core::fmt::Display;
use core::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::core::channel::error::Error;
use crate::core::host::identifier::{ChannelId, PortId};
use crate::proto::RawPacket;
use crate::Height;

/// The sequence number of a packet enforces ordering among packets from the same source.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
pub struct Sequence(u64);

impl Sequence {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn increment(&self) -> Sequence {
        Sequence(self.0 + 1)
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<u64>().map_err(|e| {
            Error::invalid_string_as_sequence(s.to_string(), e)
        })?))
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(s: Sequence) -> u64 {
        s.0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// The receiving chain's record that a given sequence has been delivered on an
/// unordered channel. Carries no data; existence is the point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Receipt {
    Ok,
}

/// The capability surface a packet payload presents to the gate. Payloads stay
/// opaque beyond these four operations.
pub trait PacketData {
    /// The raw bytes the sending chain committed to.
    fn get_bytes(&self) -> Vec<u8>;

    /// Structural well-formedness check. Runs before any proof work; a payload
    /// failing its own check never reaches verification.
    fn validate_basic(&self) -> Result<(), Error>;

    /// Type tag identifying the payload to the application layer.
    fn get_type(&self) -> String;

    /// Height on the receiving chain after which delivery must not happen.
    fn get_timeout_height(&self) -> Height;
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    pub data: Vec<u8>,
    pub timeout_height: Height,
}

impl Packet {
    /// Builds a packet around a payload, rejecting payloads that fail their own
    /// structural check.
    pub fn new(
        payload: &dyn PacketData,
        sequence: Sequence,
        source_port: PortId,
        source_channel: ChannelId,
        destination_port: PortId,
        destination_channel: ChannelId,
    ) -> Result<Self, Error> {
        payload.validate_basic()?;

        let data = payload.get_bytes();
        if data.is_empty() {
            return Err(Error::zero_packet_data());
        }

        Ok(Packet {
            sequence,
            source_port,
            source_channel,
            destination_port,
            destination_channel,
            data,
            timeout_height: payload.get_timeout_height(),
        })
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "seq:{}, path:{}/{}->{}/{}, toh:{}",
            self.sequence,
            self.source_channel,
            self.source_port,
            self.destination_channel,
            self.destination_port,
            self.timeout_height,
        )
    }
}

impl TryFrom<RawPacket> for Packet {
    type Error = Error;

    fn try_from(raw_pkt: RawPacket) -> Result<Self, Self::Error> {
        if raw_pkt.data.is_empty() {
            return Err(Error::zero_packet_data());
        }

        let timeout_height: Height = raw_pkt
            .timeout_height
            .ok_or_else(Error::missing_height)?
            .into();

        Ok(Packet {
            sequence: Sequence::from(raw_pkt.sequence),
            source_port: raw_pkt.source_port.parse().map_err(Error::identifier)?,
            source_channel: raw_pkt.source_channel.parse().map_err(Error::identifier)?,
            destination_port: raw_pkt
                .destination_port
                .parse()
                .map_err(Error::identifier)?,
            destination_channel: raw_pkt
                .destination_channel
                .parse()
                .map_err(Error::identifier)?,
            data: raw_pkt.data,
            timeout_height,
        })
    }
}

impl From<Packet> for RawPacket {
    fn from(packet: Packet) -> Self {
        RawPacket {
            sequence: packet.sequence.0,
            source_port: packet.source_port.to_string(),
            source_channel: packet.source_channel.to_string(),
            destination_port: packet.destination_port.to_string(),
            destination_channel: packet.destination_channel.to_string(),
            data: packet.data,
            timeout_height: Some(packet.timeout_height.into()),
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
pub mod test_utils {
    use super::PacketData;
    use crate::core::channel::error::Error;
    use crate::proto::{RawHeight, RawPacket};
    use crate::Height;

    /// A payload carrying one counter value, for testing only!
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CounterPayload(pub u64);

    impl PacketData for CounterPayload {
        fn get_bytes(&self) -> Vec<u8> {
            format!("{}", self.0).into_bytes()
        }

        fn validate_basic(&self) -> Result<(), Error> {
            Ok(())
        }

        fn get_type(&self) -> String {
            "valid".to_string()
        }

        fn get_timeout_height(&self) -> Height {
            Height::new(100)
        }
    }

    /// A payload that always fails its own structural check, for testing only!
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct BrokenPayload;

    impl PacketData for BrokenPayload {
        fn get_bytes(&self) -> Vec<u8> {
            Vec::new()
        }

        fn validate_basic(&self) -> Result<(), Error> {
            Err(Error::invalid_packet_data(
                "payload failed structural validation".to_string(),
            ))
        }

        fn get_type(&self) -> String {
            "broken".to_string()
        }

        fn get_timeout_height(&self) -> Height {
            Height::zero()
        }
    }

    /// Returns a dummy `RawPacket`, for testing only!
    pub fn get_dummy_raw_packet(timeout_height: u64) -> RawPacket {
        RawPacket {
            sequence: 1,
            source_port: "sourceportid".to_string(),
            source_channel: "srcchannelid".to_string(),
            destination_port: "destinationport".to_string(),
            destination_channel: "dstchannelid".to_string(),
            data: vec![0],
            timeout_height: Some(RawHeight {
                height: timeout_height,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::core::channel::packet::test_utils::{
        get_dummy_raw_packet, BrokenPayload, CounterPayload,
    };
    use crate::core::channel::packet::{Packet, PacketData, Sequence};
    use crate::core::host::identifier::{ChannelId, PortId};
    use crate::proto::RawPacket;

    #[test]
    fn packet_try_from_raw() {
        struct Test {
            name: String,
            raw: RawPacket,
            want_pass: bool,
        }

        let proof_height = 10;
        let default_raw_msg = get_dummy_raw_packet(proof_height);

        let tests: Vec<Test> = vec![
            Test {
                name: "Good parameters".to_string(),
                raw: default_raw_msg.clone(),
                want_pass: true,
            },
            Test {
                name: "Src port validation: correct".to_string(),
                raw: RawPacket {
                    source_port: "srcportp34".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: true,
            },
            Test {
                name: "Bad src port, name too short".to_string(),
                raw: RawPacket {
                    source_port: "p".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Bad src port, name too long".to_string(),
                raw: RawPacket {
                    source_port: "abcdefghijasdfasdfasdfasdfasdfasdfasdfasdfasdfasdfadgasgasdfasdfasdfasdfaklmnopqrstuabcdefghijasdfasdfasdfasdfasdfasdfasdfasdfasdfasdfadgasgasdfasdfasdfasdfaklmnopqrstu".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Dst port validation: correct".to_string(),
                raw: RawPacket {
                    destination_port: "destportsrcp34".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: true,
            },
            Test {
                name: "Bad dst port, name too short".to_string(),
                raw: RawPacket {
                    destination_port: "p".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Src channel validation: correct".to_string(),
                raw: RawPacket {
                    source_channel: "srcchannelp34".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: true,
            },
            Test {
                name: "Bad src channel, name too short".to_string(),
                raw: RawPacket {
                    source_channel: "p".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Bad dst channel, name too short".to_string(),
                raw: RawPacket {
                    destination_channel: "p".to_string(),
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Empty packet data".to_string(),
                raw: RawPacket {
                    data: vec![],
                    ..default_raw_msg.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Missing timeout height".to_string(),
                raw: RawPacket {
                    timeout_height: None,
                    ..default_raw_msg
                },
                want_pass: false,
            },
        ];

        for test in tests {
            let res_msg = Packet::try_from(test.raw.clone());

            assert_eq!(
                test.want_pass,
                res_msg.is_ok(),
                "Packet::try_from failed for test {}, \nraw packet {:?} with error {:?}",
                test.name,
                test.raw,
                res_msg.err(),
            );
        }
    }

    #[test]
    fn to_and_from() {
        let raw = get_dummy_raw_packet(15);
        let msg = Packet::try_from(raw.clone()).unwrap();
        let raw_back = RawPacket::from(msg.clone());
        let msg_back = Packet::try_from(raw_back.clone()).unwrap();
        assert_eq!(raw, raw_back);
        assert_eq!(msg, msg_back);
    }

    #[test]
    fn packet_from_payload() {
        let payload = CounterPayload(12345);
        let packet = Packet::new(
            &payload,
            Sequence::from(1),
            PortId::default(),
            ChannelId::default(),
            PortId::default(),
            ChannelId::default(),
        )
        .unwrap();

        assert_eq!(packet.data, b"12345".to_vec());
        assert_eq!(packet.timeout_height, payload.get_timeout_height());
    }

    #[test]
    fn malformed_payload_rejected_before_any_proof_work() {
        let res = Packet::new(
            &BrokenPayload,
            Sequence::from(1),
            PortId::default(),
            ChannelId::default(),
            PortId::default(),
            ChannelId::default(),
        );
        assert!(res.is_err());
    }
}
