use crate::error::{Error, Result};

/// Flag byte for an uncompressed frame: payload is the delegate's output,
/// byte for byte.
pub const FLAG_RAW: u8 = 0;

/// Flag byte for a compressed frame: payload is an LZ4 block, preceded by
/// the original length.
pub const FLAG_COMPRESSED: u8 = 1;

/// Header size of a RAW frame: just the flag byte.
pub const RAW_HEADER_SIZE: usize = 1;

/// Header size of a COMPRESSED frame:
///   flag:u8 + original_len:u32 LE = 1 + 4 = 5
pub const COMPRESSED_HEADER_SIZE: usize = 5;

/// The on-wire unit for a single encoded value.
///
/// Layout (interoperability contract — changing the header width or flag
/// encoding is a breaking format change):
/// ```text
/// byte 0:        flag           0 = RAW, 1 = COMPRESSED
/// if flag == 1:
///   bytes 1..5:  original_len   u32 little-endian, pre-compression length
///   bytes 5..:   payload        LZ4 block-compressed bytes
/// if flag == 0:
///   bytes 1..:   payload        raw bytes, unmodified
/// ```
///
/// The flag is an explicit tag recorded at encode time, never inferred from
/// payload contents. `original_len` is carried because the block
/// decompressor needs the exact target buffer size up front.
///
/// A `Frame` borrows its payload and exists only for the duration of one
/// encode or decode call; only its serialized form is ever transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Payload stored verbatim.
    Raw(&'a [u8]),
    /// Payload is LZ4 block-compressed; `original_len` is the exact byte
    /// length of the pre-compression data.
    Compressed { original_len: u32, payload: &'a [u8] },
}

impl<'a> Frame<'a> {
    /// The flag byte this frame serializes with.
    pub fn flag(&self) -> u8 {
        match self {
            Frame::Raw(_) => FLAG_RAW,
            Frame::Compressed { .. } => FLAG_COMPRESSED,
        }
    }

    /// Serialize to header + payload wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Frame::Raw(payload) => {
                let mut buf = Vec::with_capacity(RAW_HEADER_SIZE + payload.len());
                buf.push(FLAG_RAW);
                buf.extend_from_slice(payload);
                buf
            }
            Frame::Compressed {
                original_len,
                payload,
            } => {
                let mut buf = Vec::with_capacity(COMPRESSED_HEADER_SIZE + payload.len());
                buf.push(FLAG_COMPRESSED);
                buf.extend_from_slice(&original_len.to_le_bytes());
                buf.extend_from_slice(payload);
                buf
            }
        }
    }

    /// Parse a frame from wire bytes, checking the flag and header bounds.
    ///
    /// Decoding must fail predictably on externally supplied bytes rather
    /// than misread them, so every malformed header is rejected here:
    /// empty input, an unknown flag byte, or a COMPRESSED frame truncated
    /// inside its 5-byte header.
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        let Some((&flag, rest)) = buf.split_first() else {
            return Err(Error::frame_format("empty input, missing flag byte"));
        };
        match flag {
            FLAG_RAW => Ok(Frame::Raw(rest)),
            FLAG_COMPRESSED => {
                if rest.len() < COMPRESSED_HEADER_SIZE - 1 {
                    return Err(Error::frame_format(format!(
                        "truncated header: compressed frame is {} bytes, need at least {}",
                        buf.len(),
                        COMPRESSED_HEADER_SIZE
                    )));
                }
                let original_len = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
                Ok(Frame::Compressed {
                    original_len,
                    payload: &rest[4..],
                })
            }
            other => Err(Error::frame_format(format!(
                "unknown flag byte 0x{other:02x} (expected 0x00 RAW or 0x01 COMPRESSED)"
            ))),
        }
    }
}
