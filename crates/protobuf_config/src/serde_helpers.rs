//! Text-encoding representations of wire fields that have no natural serde form.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

use crate::repr::ProtoEnum;

/// 0x-hex <-> Option<Vec<u8>> (accepts "" or "0x" as empty, and a `0X` prefix)
pub mod opt_bytes_hex {
    use super::*;

    pub fn serialize<S>(val: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match val {
            Some(bytes) => s.serialize_str(&format!("0x{}", hex::encode(bytes))),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(s) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(&s);
        hex::decode(s).map(Some).map_err(D::Error::custom)
    }
}

/// Protobuf enum name <-> Option<i32> (accepts the variant name or a raw number)
pub mod proto_enum {
    use super::*;

    pub fn serialize<E, S>(val: &Option<i32>, s: S) -> Result<S::Ok, S::Error>
    where
        E: ProtoEnum,
        S: Serializer,
    {
        match val {
            None => s.serialize_none(),
            Some(raw) => match E::try_from(*raw) {
                Ok(known) => s.serialize_str(known.as_str_name()),
                // Unrecognized values stay numeric so that they survive a round trip.
                Err(_) => s.serialize_i32(*raw),
            },
        }
    }

    pub fn deserialize<'de, E, D>(d: D) -> Result<Option<i32>, D::Error>
    where
        E: ProtoEnum,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i32),
            Name(String),
        }
        match Option::<Raw>::deserialize(d)? {
            None => Ok(None),
            Some(Raw::Num(raw)) => Ok(Some(raw)),
            Some(Raw::Name(name)) => E::from_str_name(&name)
                .map(|known| Some(known.into()))
                .ok_or_else(|| {
                    D::Error::custom(format!("unknown `{}` variant `{name}`", E::NAME))
                }),
        }
    }
}
