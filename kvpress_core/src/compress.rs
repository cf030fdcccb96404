use crate::codec::KvCodec;
use crate::error::{Error, Result};
use crate::frame::{Frame, COMPRESSED_HEADER_SIZE, RAW_HEADER_SIZE};

/// Compression policy, fixed at construction time.
///
/// Never read from process-global state; callers who want a different
/// policy build a codec with [`CompressingCodec::with_config`].
#[derive(Debug, Clone, Copy)]
pub struct CompressionConfig {
    /// Serialized values shorter than this skip the compression attempt
    /// entirely and are framed RAW. Short payloads essentially never beat
    /// the 5-byte compressed header plus LZ4's own overhead, so trying is
    /// wasted CPU on both ends.
    pub min_len: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self { min_len: 128 }
    }
}

/// Transparent value-compression decorator over any [`KvCodec`].
///
/// Wraps a delegate codec and implements the same trait, so it can be
/// dropped in anywhere the host client accepts a codec. On the encode path
/// it frames the delegate's serialized bytes per [`Frame`], compressing
/// them with LZ4 when that shrinks the frame; on the decode path it parses
/// the frame, reverses compression if recorded, and hands the recovered
/// bytes to the delegate. Neither the delegate nor the application observes
/// that compression happened.
///
/// # Key handling
///
/// Keys pass through the delegate untouched in both directions. This is a
/// deliberate policy, not an omission: keys are typically small, and the
/// frame header plus compression CPU cost outweighs any size win. Only
/// values go through the compression decision.
///
/// # Decision policy
///
/// A value is framed COMPRESSED only when the complete compressed frame
/// (5-byte header + LZ4 block) is strictly smaller than the complete raw
/// frame (1-byte header + raw bytes). Otherwise the raw bytes are framed
/// unchanged, so the wire encoding never exceeds the delegate's output by
/// more than the 1-byte RAW header. Already-compressed blobs and short
/// payloads therefore cost one byte, never a decompression pass.
///
/// # Concurrency
///
/// Holds only the delegate and an immutable [`CompressionConfig`]; encode
/// and decode are pure functions of their input buffer and may run
/// concurrently from any number of threads without locking.
pub struct CompressingCodec<C> {
    delegate: C,
    config: CompressionConfig,
}

impl<C: KvCodec> CompressingCodec<C> {
    /// Wrap `delegate` with the default compression policy.
    pub fn new(delegate: C) -> Self {
        Self::with_config(delegate, CompressionConfig::default())
    }

    /// Wrap `delegate` with an explicit compression policy.
    pub fn with_config(delegate: C, config: CompressionConfig) -> Self {
        Self { delegate, config }
    }

    /// The wrapped delegate codec.
    pub fn delegate(&self) -> &C {
        &self.delegate
    }

    /// Unwrap, returning the delegate.
    pub fn into_inner(self) -> C {
        self.delegate
    }

    /// Frame serialized value bytes, compressing when it pays off.
    fn frame_value(&self, raw: &[u8]) -> Vec<u8> {
        // Values beyond u32 range cannot record their original length in
        // the fixed-width header; frame them RAW.
        if raw.len() < self.config.min_len || raw.len() > u32::MAX as usize {
            return Frame::Raw(raw).to_bytes();
        }

        let compressed = lz4_flex::block::compress(raw);
        if COMPRESSED_HEADER_SIZE + compressed.len() < RAW_HEADER_SIZE + raw.len() {
            Frame::Compressed {
                original_len: raw.len() as u32,
                payload: &compressed,
            }
            .to_bytes()
        } else {
            Frame::Raw(raw).to_bytes()
        }
    }

    /// Parse a value frame and recover the delegate's serialized bytes.
    fn unframe_value(&self, wire: &[u8]) -> Result<Vec<u8>> {
        match Frame::parse(wire)? {
            Frame::Raw(payload) => Ok(payload.to_vec()),
            Frame::Compressed {
                original_len,
                payload,
            } => {
                let raw = lz4_flex::block::decompress(payload, original_len as usize)
                    .map_err(|e| Error::decompression(e.to_string()))?;
                // decompress() sizes its output buffer from original_len,
                // but a corrupt block can still terminate early; anything
                // other than an exact reconstruction is corruption.
                if raw.len() != original_len as usize {
                    return Err(Error::decompression(format!(
                        "payload reconstructed {} bytes but header declares {}",
                        raw.len(),
                        original_len
                    )));
                }
                Ok(raw)
            }
        }
    }
}

impl<C: KvCodec> KvCodec for CompressingCodec<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn encode_key(&self, key: &Self::Key) -> Result<Vec<u8>> {
        self.delegate.encode_key(key)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<Self::Key> {
        self.delegate.decode_key(bytes)
    }

    fn encode_value(&self, value: &Self::Value) -> Result<Vec<u8>> {
        let raw = self.delegate.encode_value(value)?;
        Ok(self.frame_value(&raw))
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<Self::Value> {
        let raw = self.unframe_value(bytes)?;
        self.delegate.decode_value(&raw)
    }
}
