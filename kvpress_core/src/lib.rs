//! Transparent LZ4 value compression for key-value store client codecs.
//!
//! `kvpress` sits between an application's typed keys/values and the byte
//! encoding a store client sends on the wire. [`CompressingCodec`] wraps
//! any [`KvCodec`] delegate: serialized values are framed per [`Frame`] and
//! LZ4-compressed whenever that makes the frame smaller; decode reverses
//! the recorded decision and hands the original bytes back to the delegate.
//! Keys are never compressed.
//!
//! ```
//! use kvpress_core::{CompressingCodec, KvCodec};
//! # use kvpress_core::error::Result;
//! # struct BytesCodec;
//! # impl KvCodec for BytesCodec {
//! #     type Key = Vec<u8>;
//! #     type Value = Vec<u8>;
//! #     fn encode_key(&self, k: &Vec<u8>) -> Result<Vec<u8>> { Ok(k.clone()) }
//! #     fn decode_key(&self, b: &[u8]) -> Result<Vec<u8>> { Ok(b.to_vec()) }
//! #     fn encode_value(&self, v: &Vec<u8>) -> Result<Vec<u8>> { Ok(v.clone()) }
//! #     fn decode_value(&self, b: &[u8]) -> Result<Vec<u8>> { Ok(b.to_vec()) }
//! # }
//!
//! let codec = CompressingCodec::new(BytesCodec);
//! let value = vec![b'x'; 10_000];
//! let wire = codec.encode_value(&value).unwrap();
//! assert!(wire.len() < value.len());
//! assert_eq!(codec.decode_value(&wire).unwrap(), value);
//! ```

pub mod codec;
pub mod compress;
pub mod error;
pub mod frame;

pub use codec::KvCodec;
pub use compress::{CompressingCodec, CompressionConfig};
pub use error::{Error, Result};
pub use frame::{Frame, COMPRESSED_HEADER_SIZE, FLAG_COMPRESSED, FLAG_RAW, RAW_HEADER_SIZE};
