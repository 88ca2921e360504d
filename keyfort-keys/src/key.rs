//! RSA key pairs, DER codecs, fingerprints, and the signature primitive.
//!
//! Private keys are encoded as PKCS#8 DER, public keys as X.509
//! SubjectPublicKeyInfo DER. A fingerprint is the SHA-512 digest of the
//! public key's SPKI encoding; it is compared byte-for-byte against a value
//! the caller obtained out-of-band.

use rand::rngs::OsRng;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};

use crate::error::{KeyError, KeyResult};

/// RSA modulus size in bits.
pub const KEY_BITS: usize = 4096;

/// An RSA private key. Used to sign license archives.
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);

/// An RSA public key. Used to verify license archive signatures.
#[derive(Debug, Clone)]
pub struct PublicKey(RsaPublicKey);

/// A freshly generated pair of private and public keys.
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a new RSA-4096 key pair from the OS secure random source.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Generation`] if the underlying generator fails.
    /// That indicates a broken platform configuration and is not retried.
    pub fn generate() -> KeyResult<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, KEY_BITS).map_err(KeyError::Generation)?;
        let public = RsaPublicKey::from(&private);
        Ok(Self {
            private_key: PrivateKey(private),
            public_key: PublicKey(public),
        })
    }
}

impl PrivateKey {
    /// Parses a private key from PKCS#8 DER bytes.
    ///
    /// Public key encodings are rejected, not detected as a fallback.
    pub fn from_der(der: &[u8]) -> KeyResult<Self> {
        RsaPrivateKey::from_pkcs8_der(der)
            .map(Self)
            .map_err(KeyError::Decode)
    }

    /// Returns the PKCS#8 DER encoding of this key.
    pub fn to_der(&self) -> KeyResult<Vec<u8>> {
        let document = self.0.to_pkcs8_der().map_err(KeyError::Encode)?;
        Ok(document.as_bytes().to_vec())
    }

    /// Returns the public half of this key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey(RsaPublicKey::from(&self.0))
    }

    /// Signs a message with RSA PKCS#1 v1.5 over a SHA-512 digest.
    pub fn sign(&self, message: &[u8]) -> KeyResult<Vec<u8>> {
        let signing_key = SigningKey::<Sha512>::new(self.0.clone());
        let signature = signing_key.try_sign(message).map_err(KeyError::Signature)?;
        Ok(signature.to_vec())
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl PublicKey {
    /// Parses a public key from X.509 SubjectPublicKeyInfo DER bytes.
    ///
    /// Private key encodings are rejected, not detected as a fallback.
    pub fn from_der(der: &[u8]) -> KeyResult<Self> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self)
            .map_err(|e| KeyError::Decode(e.into()))
    }

    /// Returns the SPKI DER encoding of this key.
    pub fn to_der(&self) -> KeyResult<Vec<u8>> {
        let document = self.0.to_public_key_der().map_err(|e| KeyError::Encode(e.into()))?;
        Ok(document.into_vec())
    }

    /// Verifies an RSA PKCS#1 v1.5 / SHA-512 signature over `message`.
    ///
    /// Malformed signature bytes are simply not valid; this never fails.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::try_from(signature) else {
            return false;
        };
        let verifying_key = VerifyingKey::<Sha512>::new(self.0.clone());
        verifying_key.verify(message, &signature).is_ok()
    }

    /// Computes the SHA-512 fingerprint of this key's SPKI DER encoding.
    ///
    /// Deterministic: the same key always yields the same fingerprint.
    pub fn fingerprint(&self) -> KeyResult<Vec<u8>> {
        Ok(Sha512::digest(self.to_der()?).to_vec())
    }

    /// Checks this key's fingerprint against an expected value.
    ///
    /// The comparison is byte-for-byte; a length mismatch is "not equal",
    /// not an error.
    pub fn fingerprint_matches(&self, expected: &[u8]) -> KeyResult<bool> {
        Ok(self.fingerprint()?.as_slice() == expected)
    }
}

/// Computes the fingerprint of a public key given its SPKI DER encoding.
///
/// The bytes must parse as a valid public key; the fingerprint then covers
/// the canonical re-encoded form.
pub fn fingerprint_from_der(der: &[u8]) -> KeyResult<Vec<u8>> {
    PublicKey::from_der(der)?.fingerprint()
}
