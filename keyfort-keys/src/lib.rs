//! RSA key lifecycle for Keyfort license files.
//!
//! This crate handles:
//! - RSA-4096 key pair generation
//! - PKCS#8 / SubjectPublicKeyInfo DER encoding and decoding
//! - SHA-512 public key fingerprints for out-of-band pinning
//! - Base64 key file persistence
//!
//! The signature primitive (RSA PKCS#1 v1.5 with SHA-512) also lives here so
//! that archive signing and verification share one implementation.

mod error;
mod key;
mod store;

pub use error::{KeyError, KeyResult};
pub use key::{fingerprint_from_der, KeyPair, PrivateKey, PublicKey, KEY_BITS};
