//! Error types for license packaging and verification.

use thiserror::Error;

/// Boxed underlying cause, preserved for diagnostics.
type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while creating, saving, or loading license files.
///
/// The two validation failures ([`FingerprintMismatch`] and [`NotValid`])
/// carry fixed messages and no wrapped cause, so callers can distinguish a
/// failed trust decision from a corrupt or unreadable file and branch on the
/// variant.
///
/// [`FingerprintMismatch`]: LicenseError::FingerprintMismatch
/// [`NotValid`]: LicenseError::NotValid
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The public key does not match the pinned fingerprint.
    #[error("the actual fingerprint of the public key does not match the expected fingerprint")]
    FingerprintMismatch,

    /// The digital signature does not match the license content.
    #[error("the license is not valid")]
    NotValid,

    /// Serializing, signing, or packing the archive failed.
    #[error("could not create the license")]
    Create(#[source] Cause),

    /// Writing a license file failed.
    #[error("could not save the license")]
    Save(#[source] Cause),

    /// Reading, unpacking, or parsing a license failed.
    #[error("could not load the license")]
    Load(#[source] Cause),
}

impl LicenseError {
    pub(crate) fn create(cause: impl Into<Cause>) -> Self {
        Self::Create(cause.into())
    }

    pub(crate) fn save(cause: impl Into<Cause>) -> Self {
        Self::Save(cause.into())
    }

    pub(crate) fn load(cause: impl Into<Cause>) -> Self {
        Self::Load(cause.into())
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// A present, non-empty value failed to parse as the requested type.
///
/// This means the license was issued with an incompatible value for the key,
/// a data contract violation between issuer and application. It is propagated
/// to the caller rather than silently replaced with the default.
#[derive(Debug, Error)]
#[error("value {value:?} for key {key:?} is not a valid {expected}")]
pub struct ValueParseError {
    key: String,
    value: String,
    expected: &'static str,
    #[source]
    source: Option<Cause>,
}

impl ValueParseError {
    pub(crate) fn new(
        key: &str,
        value: &str,
        expected: &'static str,
        source: Option<Cause>,
    ) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            expected,
            source,
        }
    }

    /// The key whose value failed to parse.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The offending value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The type the value was expected to parse as.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}
