use kvpress_core::{KvCodec, Result};

/// Identity codec: keys and values are already byte vectors.
///
/// Useful for:
/// - Verifying the frame round-trip independently of any structural codec.
/// - Applications that do their own serialization and only want the
///   compression layer.
pub struct BytesCodec;

impl KvCodec for BytesCodec {
    type Key = Vec<u8>;
    type Value = Vec<u8>;

    fn encode_key(&self, key: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(key.clone())
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }

    fn encode_value(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(value.clone())
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}
