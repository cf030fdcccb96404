use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use kvpress_core::{Error, KvCodec, Result};

/// JSON codec: string keys, serde-driven structured values.
///
/// Values are any `Serialize + DeserializeOwned` type; keys stay plain
/// UTF-8 strings, matching how key-value store clients usually address
/// structured entries. JSON text compresses well, which makes this codec a
/// natural fit under the compression decorator.
pub struct JsonCodec<V> {
    _value: PhantomData<fn() -> V>,
}

impl<V> JsonCodec<V> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<V> Default for JsonCodec<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KvCodec for JsonCodec<V>
where
    V: Serialize + DeserializeOwned + Send + Sync,
{
    type Key = String;
    type Value = V;

    fn encode_key(&self, key: &String) -> Result<Vec<u8>> {
        Ok(key.as_bytes().to_vec())
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(Error::delegate)
    }

    fn encode_value(&self, value: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(Error::delegate)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(Error::delegate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        hits: u64,
    }

    #[test]
    fn struct_roundtrip() {
        let codec = JsonCodec::<Session>::new();
        let value = Session {
            user: "ada".into(),
            hits: 42,
        };
        let bytes = codec.encode_value(&value).unwrap();
        assert_eq!(codec.decode_value(&bytes).unwrap(), value);
    }

    #[test]
    fn malformed_json_is_delegate_error() {
        let codec = JsonCodec::<Session>::new();
        let err = codec.decode_value(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Delegate(_)), "got {err:?}");
    }
}
