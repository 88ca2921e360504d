//! Shared test helpers for license tests.

#![allow(dead_code)]

use std::io::Write;

use keyfort_keys::{PrivateKey, PublicKey};
use keyfort_license::LicenseBuilder;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Base64 text of a fixed RSA-4096 private key (PKCS#8 DER).
pub const PRIVATE_KEY_TEXT: &str = include_str!("../fixtures/key.private");

/// Base64 text of the matching public key (SPKI DER).
pub const PUBLIC_KEY_TEXT: &str = include_str!("../fixtures/key.public");

/// Hex SHA-512 fingerprint of the fixture public key's SPKI DER encoding.
pub const PUBLIC_KEY_FINGERPRINT_HEX: &str = "f85817ecbd8ba075ae85d611fabd4660ce589762f45c19ec195a5f5858581e68f8105eaa44964a84ed0b96e10997c5075808b46e80e73294bca12285563d1f2c";

/// A known-good license file (Base64 text) signed with the fixture key:
/// `myFeature.active = true`, expired on 2000-02-01.
pub const VALID_LICENSE_TEXT: &str = include_str!("../fixtures/valid.license");

/// The same archive with its content flipped to `myFeature.active = false`
/// while keeping the original signature, so signature verification fails.
pub const INVALID_LICENSE_TEXT: &str = include_str!("../fixtures/invalid.license");

/// Returns the fixture private key.
pub fn test_private_key() -> PrivateKey {
    let der = keyfort_codec::from_text(PRIVATE_KEY_TEXT.trim()).expect("fixture base64");
    PrivateKey::from_der(&der).expect("fixture private key")
}

/// Returns the fixture public key.
pub fn test_public_key() -> PublicKey {
    let der = keyfort_codec::from_text(PUBLIC_KEY_TEXT.trim()).expect("fixture base64");
    PublicKey::from_der(&der).expect("fixture public key")
}

/// Returns the fixture public key's fingerprint as raw bytes.
pub fn test_fingerprint() -> Vec<u8> {
    hex::decode(PUBLIC_KEY_FINGERPRINT_HEX).expect("fixture fingerprint hex")
}

/// A builder with one active feature flag.
pub fn feature_license() -> LicenseBuilder {
    let mut license = LicenseBuilder::new();
    license.set_value("myFeature.active", "true");
    license
}

/// Builds a raw zip archive with the given named entries, in order.
/// Used to assemble tampered and malformed archives.
pub fn raw_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(data).expect("write entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

/// Splits an archive produced by `create_archive` back into its raw
/// (content, signature) entry bytes.
pub fn split_archive(archive: &[u8]) -> (Vec<u8>, Vec<u8>) {
    use std::io::Read;
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(archive)).expect("parse archive");
    let mut content = Vec::new();
    archive
        .by_index(0)
        .expect("content entry")
        .read_to_end(&mut content)
        .expect("read content");
    let mut signature = Vec::new();
    archive
        .by_index(1)
        .expect("signature entry")
        .read_to_end(&mut signature)
        .expect("read signature");
    (content, signature)
}
