use thiserror::Error;

/// Failure modes of the compression layer.
///
/// All three variants are local, synchronous failures surfaced at the
/// `encode_*`/`decode_*` call site. None are retried internally: both
/// compression and decompression are deterministic, so retrying the same
/// bytes cannot change the outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// The frame header is malformed: empty input, an unrecognized flag
    /// byte, or a COMPRESSED frame shorter than its fixed header.
    #[error("invalid frame: {reason}")]
    FrameFormat { reason: String },

    /// A COMPRESSED payload could not reconstruct a buffer of the declared
    /// original length. Treated as data corruption; there is no fallback to
    /// interpreting the payload as raw bytes.
    #[error("decompression failed: {reason}")]
    Decompression { reason: String },

    /// The wrapped delegate codec failed to serialize or deserialize.
    /// Propagated unchanged; the compression layer adds no semantics here.
    #[error("delegate codec error")]
    Delegate(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn frame_format(reason: impl Into<String>) -> Self {
        Error::FrameFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn decompression(reason: impl Into<String>) -> Self {
        Error::Decompression {
            reason: reason.into(),
        }
    }

    /// Wrap a delegate codec failure. Bundled codecs and user-supplied
    /// delegates use this to report serialize/deserialize errors.
    pub fn delegate(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Delegate(Box::new(source))
    }
}

/// Result type alias used throughout kvpress.
pub type Result<T, E = Error> = std::result::Result<T, E>;
