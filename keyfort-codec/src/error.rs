//! Error types for the transport codec.

use thiserror::Error;

/// Errors produced when decoding transport text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not valid Base64 (bad alphabet or padding).
    #[error("invalid base64 text: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The byte form of the text is not valid UTF-8.
    #[error("transport text is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
