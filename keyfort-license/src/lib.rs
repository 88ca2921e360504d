//! Signed license files: typed entitlements bound to an RSA signature.
//!
//! A license is a flat string key/value store. Issuing builds the entries
//! with [`LicenseBuilder`], serializes them to canonical bytes, signs those
//! bytes with RSA/SHA-512, and packs content and signature into a two-entry
//! archive ([`create_archive`]). Loading reverses the steps and yields a
//! frozen [`License`] — after optionally pinning the public key to a known
//! fingerprint and verifying the signature over the exact content bytes
//! ([`open_archive`]).
//!
//! The `*_unverified` operations skip every cryptographic check and exist
//! for diagnostics only; they must never feed a trust decision.

mod archive;
mod builder;
mod error;
mod license;

pub use archive::{
    create_archive, create_archive_text, load_license_file, load_license_file_unverified,
    open_archive, open_archive_text, open_archive_unverified, open_archive_unverified_text,
    save_license_file,
};
pub use builder::LicenseBuilder;
pub use error::{LicenseError, LicenseResult, ValueParseError};
pub use license::License;

/// The reserved entry key holding the expiration date.
pub const EXPIRATION_DATE_KEY: &str = "_EXPIRATION_DATE";

/// The canonical date format for license values (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
