//! Key file persistence.
//!
//! Keys are stored as Base64 text of their DER encoding: private keys in
//! PKCS#8, public keys in SPKI. Loading trims surrounding whitespace so a
//! hand-edited file with a trailing newline still parses.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::KeyResult;
use crate::key::{PrivateKey, PublicKey};

impl PrivateKey {
    /// Saves this key as Base64 text of its PKCS#8 DER encoding.
    /// The file is created if it does not exist and overwritten otherwise.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> KeyResult<()> {
        save_key(path.as_ref(), &self.to_der()?)
    }

    /// Loads a private key from a Base64 text file.
    pub fn load_from_file(path: impl AsRef<Path>) -> KeyResult<Self> {
        Self::from_der(&load_key(path.as_ref())?)
    }

    /// Loads a private key from a reader containing Base64 text.
    pub fn load_from_reader(reader: impl Read) -> KeyResult<Self> {
        Self::from_der(&read_key(reader)?)
    }
}

impl PublicKey {
    /// Saves this key as Base64 text of its SPKI DER encoding.
    /// The file is created if it does not exist and overwritten otherwise.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> KeyResult<()> {
        save_key(path.as_ref(), &self.to_der()?)
    }

    /// Loads a public key from a Base64 text file.
    pub fn load_from_file(path: impl AsRef<Path>) -> KeyResult<Self> {
        Self::from_der(&load_key(path.as_ref())?)
    }

    /// Loads a public key from a reader containing Base64 text.
    pub fn load_from_reader(reader: impl Read) -> KeyResult<Self> {
        Self::from_der(&read_key(reader)?)
    }
}

fn save_key(path: &Path, der: &[u8]) -> KeyResult<()> {
    fs::write(path, keyfort_codec::to_text_bytes(der))?;
    debug!(path = %path.display(), "saved key file");
    Ok(())
}

fn load_key(path: &Path) -> KeyResult<Vec<u8>> {
    let text = fs::read(path)?;
    debug!(path = %path.display(), "loaded key file");
    decode_text(&text)
}

fn read_key(mut reader: impl Read) -> KeyResult<Vec<u8>> {
    let mut text = Vec::new();
    reader.read_to_end(&mut text)?;
    decode_text(&text)
}

fn decode_text(text: &[u8]) -> KeyResult<Vec<u8>> {
    let text = std::str::from_utf8(text).map_err(keyfort_codec::CodecError::from)?;
    Ok(keyfort_codec::from_text(text.trim())?)
}
