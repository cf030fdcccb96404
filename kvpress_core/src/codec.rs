use crate::error::Result;

/// Key/value codec abstraction — the seam between the application's typed
/// keys and values and the byte sequences a key-value store client puts on
/// the wire.
///
/// Each `KvCodec` implementation:
/// - Serializes keys and values independently; a store client may use
///   different representations for each (e.g. UTF-8 keys, binary values).
/// - Must be stateless across calls: `encode_*` and `decode_*` are pure
///   functions of their input, so one codec instance can be shared by any
///   number of threads without locking.
/// - Reports serialize/deserialize failures through
///   [`Error::delegate`](crate::Error::delegate) so wrapping layers can
///   propagate them without inspecting their contents.
///
/// [`CompressingCodec`](crate::CompressingCodec) decorates any `KvCodec`
/// with transparent value compression; because the decorator implements the
/// same trait, it can stand in for the wrapped codec anywhere the host
/// client accepts one.
pub trait KvCodec: Send + Sync {
    /// Application-level key type.
    type Key;
    /// Application-level value type.
    type Value;

    /// Serialize a key to its wire bytes.
    fn encode_key(&self, key: &Self::Key) -> Result<Vec<u8>>;

    /// Deserialize a key from its wire bytes.
    fn decode_key(&self, bytes: &[u8]) -> Result<Self::Key>;

    /// Serialize a value to its wire bytes.
    fn encode_value(&self, value: &Self::Value) -> Result<Vec<u8>>;

    /// Deserialize a value from its wire bytes.
    fn decode_value(&self, bytes: &[u8]) -> Result<Self::Value>;
}
