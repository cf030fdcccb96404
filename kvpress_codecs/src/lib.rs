//! Bundled delegate codecs for kvpress.
//!
//! Each codec implements [`kvpress_core::KvCodec`] and can be used on its
//! own or wrapped in [`kvpress_core::CompressingCodec`] for transparent
//! value compression.

mod bytes;
mod json;
mod utf8;

pub use bytes::BytesCodec;
pub use json::JsonCodec;
pub use utf8::Utf8Codec;
