//! Error types for key management.

use thiserror::Error;

/// Errors produced while generating, encoding, decoding, or storing keys.
///
/// Every variant preserves its underlying cause and is fatal to the calling
/// operation; nothing here is retried.
#[derive(Debug, Error)]
pub enum KeyError {
    /// RSA key generation failed.
    #[error("could not create a new key pair: {0}")]
    Generation(#[source] rsa::Error),

    /// A key could not be encoded into its DER form.
    #[error("could not encode the key: {0}")]
    Encode(#[source] rsa::pkcs8::Error),

    /// The bytes do not contain a valid key of the expected kind.
    #[error("could not load the key: {0}")]
    Decode(#[source] rsa::pkcs8::Error),

    /// Signing failed, usually because the key material is malformed.
    #[error("could not sign with the private key: {0}")]
    Signature(#[source] rsa::signature::Error),

    /// A key file could not be read or written.
    #[error("could not access the key file: {0}")]
    Io(#[from] std::io::Error),

    /// The key file does not contain valid transport text.
    #[error("could not decode the key file: {0}")]
    Transport(#[from] keyfort_codec::CodecError),
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
