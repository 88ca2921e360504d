//! Shared test helpers for key tests.

#![allow(dead_code)]

use keyfort_keys::{PrivateKey, PublicKey};

/// Base64 text of a fixed RSA-4096 private key (PKCS#8 DER).
pub const PRIVATE_KEY_TEXT: &str = include_str!("../fixtures/key.private");

/// Base64 text of the matching public key (SPKI DER).
pub const PUBLIC_KEY_TEXT: &str = include_str!("../fixtures/key.public");

/// Hex SHA-512 fingerprint of the fixture public key's SPKI DER encoding.
pub const PUBLIC_KEY_FINGERPRINT_HEX: &str = "f85817ecbd8ba075ae85d611fabd4660ce589762f45c19ec195a5f5858581e68f8105eaa44964a84ed0b96e10997c5075808b46e80e73294bca12285563d1f2c";

/// Returns the fixture private key.
pub fn fixture_private_key() -> PrivateKey {
    let der = keyfort_codec::from_text(PRIVATE_KEY_TEXT.trim()).expect("fixture base64");
    PrivateKey::from_der(&der).expect("fixture private key")
}

/// Returns the fixture public key.
pub fn fixture_public_key() -> PublicKey {
    let der = keyfort_codec::from_text(PUBLIC_KEY_TEXT.trim()).expect("fixture base64");
    PublicKey::from_der(&der).expect("fixture public key")
}

/// Returns the fixture public key's fingerprint as raw bytes.
pub fn fixture_fingerprint() -> Vec<u8> {
    hex::decode(PUBLIC_KEY_FINGERPRINT_HEX).expect("fixture fingerprint hex")
}
