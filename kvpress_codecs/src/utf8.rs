use kvpress_core::{Error, KvCodec, Result};

/// UTF-8 string codec for both keys and values.
///
/// Strict: bytes that are not valid UTF-8 fail decoding with a delegate
/// error rather than being replaced, since lossy replacement would break
/// the round-trip contract.
pub struct Utf8Codec;

impl Utf8Codec {
    fn decode(bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(Error::delegate)
    }
}

impl KvCodec for Utf8Codec {
    type Key = String;
    type Value = String;

    fn encode_key(&self, key: &String) -> Result<Vec<u8>> {
        Ok(key.as_bytes().to_vec())
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<String> {
        Self::decode(bytes)
    }

    fn encode_value(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<String> {
        Self::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_roundtrip() {
        let codec = Utf8Codec;
        let value = "héllo wörld".to_string();
        let bytes = codec.encode_value(&value).unwrap();
        assert_eq!(codec.decode_value(&bytes).unwrap(), value);
    }

    #[test]
    fn invalid_utf8_is_delegate_error() {
        let codec = Utf8Codec;
        let err = codec.decode_value(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Delegate(_)), "got {err:?}");
    }
}
