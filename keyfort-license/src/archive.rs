//! Packing, signing, unpacking, and verifying license archives.
//!
//! A license file is a zip archive with exactly two entries in fixed order:
//! `license` (the canonical content bytes) and `signature` (the RSA/SHA-512
//! detached signature over those exact bytes). On disk the archive travels
//! as Base64 text. The content bytes are never re-encoded between signing
//! and verification.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use keyfort_keys::{PrivateKey, PublicKey};
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::builder::LicenseBuilder;
use crate::error::{LicenseError, LicenseResult};
use crate::license::License;

/// Name of the archive entry holding the license content.
const LICENSE_ENTRY: &str = "license";
/// Name of the archive entry holding the detached signature.
const SIGNATURE_ENTRY: &str = "signature";

/// Serializes and signs a license, returning the archive bytes.
pub fn create_archive(
    license: &LicenseBuilder,
    private_key: &PrivateKey,
) -> LicenseResult<Vec<u8>> {
    let content = license.canonical_bytes().map_err(LicenseError::create)?;
    let signature = private_key.sign(&content).map_err(LicenseError::create)?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    writer
        .start_file(LICENSE_ENTRY, options)
        .map_err(LicenseError::create)?;
    writer.write_all(&content).map_err(LicenseError::create)?;
    writer
        .start_file(SIGNATURE_ENTRY, options)
        .map_err(LicenseError::create)?;
    writer.write_all(&signature).map_err(LicenseError::create)?;

    let archive = writer.finish().map_err(LicenseError::create)?.into_inner();
    debug!(bytes = archive.len(), "created license archive");
    Ok(archive)
}

/// Serializes and signs a license, returning the archive as Base64 text.
pub fn create_archive_text(
    license: &LicenseBuilder,
    private_key: &PrivateKey,
) -> LicenseResult<String> {
    Ok(keyfort_codec::to_text(&create_archive(license, private_key)?))
}

/// Opens a license archive, verifying its signature with `public_key`.
///
/// When `pinned_fingerprint` is supplied, the public key is checked against
/// it before any signature work; production deployments are strongly
/// encouraged to pin. The fingerprint check and the signature check fail
/// with their own fixed errors so callers can tell the two apart.
pub fn open_archive(
    archive: &[u8],
    public_key: &PublicKey,
    pinned_fingerprint: Option<&[u8]>,
) -> LicenseResult<License> {
    if let Some(expected) = pinned_fingerprint {
        let matches = public_key
            .fingerprint_matches(expected)
            .map_err(LicenseError::load)?;
        if !matches {
            warn!("public key does not match the pinned fingerprint");
            return Err(LicenseError::FingerprintMismatch);
        }
    }

    let (content, signature) = unpack(archive)?;

    if !public_key.verify(&content, &signature) {
        warn!("license signature verification failed");
        return Err(LicenseError::NotValid);
    }

    parse_content(&content)
}

/// Opens a license archive from its Base64 text form.
///
/// See [`open_archive`]; the text transport changes nothing about
/// verification.
pub fn open_archive_text(
    text: &str,
    public_key: &PublicKey,
    pinned_fingerprint: Option<&[u8]>,
) -> LicenseResult<License> {
    let archive = keyfort_codec::from_text(text.trim()).map_err(LicenseError::load)?;
    open_archive(&archive, public_key, pinned_fingerprint)
}

/// Opens a license archive without verifying anything.
///
/// Neither the signature nor a fingerprint is checked, so the returned
/// entries must not feed trust decisions. Diagnostics only.
pub fn open_archive_unverified(archive: &[u8]) -> LicenseResult<License> {
    let (content, _signature) = unpack(archive)?;
    parse_content(&content)
}

/// Opens a license archive from its Base64 text form without verifying
/// anything. Diagnostics only.
pub fn open_archive_unverified_text(text: &str) -> LicenseResult<License> {
    let archive = keyfort_codec::from_text(text.trim()).map_err(LicenseError::load)?;
    open_archive_unverified(&archive)
}

/// Creates, signs, and writes a license file in its Base64 text form.
/// The file is created if it does not exist and overwritten otherwise.
pub fn save_license_file(
    license: &LicenseBuilder,
    private_key: &PrivateKey,
    path: impl AsRef<Path>,
) -> LicenseResult<()> {
    let text = create_archive_text(license, private_key)?;
    fs::write(path.as_ref(), text).map_err(LicenseError::save)?;
    debug!(path = %path.as_ref().display(), "saved license file");
    Ok(())
}

/// Loads and verifies a license file in its Base64 text form.
pub fn load_license_file(
    path: impl AsRef<Path>,
    public_key: &PublicKey,
    pinned_fingerprint: Option<&[u8]>,
) -> LicenseResult<License> {
    let text = fs::read_to_string(path.as_ref()).map_err(LicenseError::load)?;
    debug!(path = %path.as_ref().display(), "loaded license file");
    open_archive_text(&text, public_key, pinned_fingerprint)
}

/// Loads a license file without verifying it. Diagnostics only.
pub fn load_license_file_unverified(path: impl AsRef<Path>) -> LicenseResult<License> {
    let text = fs::read_to_string(path.as_ref()).map_err(LicenseError::load)?;
    open_archive_unverified_text(&text)
}

/// Splits an archive into its content and signature bytes, enforcing the
/// two-entry fixed-order layout.
fn unpack(archive: &[u8]) -> LicenseResult<(Vec<u8>, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(archive)).map_err(LicenseError::load)?;
    if archive.len() != 2 {
        return Err(LicenseError::load(format!(
            "expected exactly two archive entries, found {}",
            archive.len()
        )));
    }

    let content = read_entry(&mut archive, 0, LICENSE_ENTRY)?;
    let signature = read_entry(&mut archive, 1, SIGNATURE_ENTRY)?;
    Ok((content, signature))
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    index: usize,
    expected_name: &str,
) -> LicenseResult<Vec<u8>> {
    let mut entry = archive.by_index(index).map_err(LicenseError::load)?;
    if entry.name() != expected_name {
        return Err(LicenseError::load(format!(
            "unexpected archive entry {:?} at position {index}, expected {expected_name:?}",
            entry.name()
        )));
    }

    let mut data = Vec::new();
    entry.read_to_end(&mut data).map_err(LicenseError::load)?;
    Ok(data)
}

fn parse_content(content: &[u8]) -> LicenseResult<License> {
    let entries: BTreeMap<String, String> =
        serde_json::from_slice(content).map_err(LicenseError::load)?;
    Ok(License::new(entries))
}
