use serde::{
    de::Error as _,
    ser::{Serialize, Serializer},
    Deserialize, Deserializer,
};
use subtle_encoding::{Encoding, Hex};

pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = Hex::upper_case()
        .encode_to_string(data)
        .map_err(serde::ser::Error::custom)?;
    hex.serialize(serializer)
}

pub fn deser_hex_upper<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<Vec<u8>>,
{
    let hex = String::deserialize(deserializer)?;
    let bytes = Hex::upper_case()
        .decode(hex.as_bytes())
        .map_err(D::Error::custom)?;
    Ok(bytes.into())
}

#[cfg(test)]
mod tests {
    use serde_derive::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            serialize_with = "super::ser_hex_upper",
            deserialize_with = "super::deser_hex_upper"
        )]
        data: Vec<u8>,
    }

    #[test]
    fn hex_round_trip() {
        let w = Wrapper {
            data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"data":"DEADBEEF"}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
