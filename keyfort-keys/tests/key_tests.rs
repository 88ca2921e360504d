mod common;

use common::{
    fixture_fingerprint, fixture_private_key, fixture_public_key, PUBLIC_KEY_TEXT,
};
use keyfort_keys::{fingerprint_from_der, KeyPair, PrivateKey, PublicKey};
use pretty_assertions::assert_eq;

// ── DER round-trips ──────────────────────────────────────────────

#[test]
fn private_key_der_roundtrip() {
    let key = fixture_private_key();
    let der = key.to_der().unwrap();
    let reloaded = PrivateKey::from_der(&der).unwrap();
    assert_eq!(reloaded.to_der().unwrap(), der);
}

#[test]
fn public_key_der_roundtrip() {
    let key = fixture_public_key();
    let der = key.to_der().unwrap();
    let reloaded = PublicKey::from_der(&der).unwrap();
    assert_eq!(reloaded.to_der().unwrap(), der);
}

#[test]
fn public_key_derives_from_private() {
    let derived = fixture_private_key().public_key();
    assert_eq!(
        derived.to_der().unwrap(),
        fixture_public_key().to_der().unwrap()
    );
}

#[test]
fn decode_rejects_wrong_key_kind() {
    let public_der = fixture_public_key().to_der().unwrap();
    assert!(PrivateKey::from_der(&public_der).is_err());

    let private_der = fixture_private_key().to_der().unwrap();
    assert!(PublicKey::from_der(&private_der).is_err());
}

#[test]
fn decode_error_message_is_stable() {
    let err = PublicKey::from_der(&[1, 2, 3]).unwrap_err();
    assert!(err.to_string().starts_with("could not load the key"));
}

// ── Fingerprints ─────────────────────────────────────────────────

#[test]
fn fingerprint_is_deterministic() {
    let key = fixture_public_key();
    assert_eq!(key.fingerprint().unwrap(), key.fingerprint().unwrap());
    assert_eq!(key.fingerprint().unwrap(), fixture_fingerprint());
}

#[test]
fn fingerprint_matches_expected() {
    let key = fixture_public_key();
    assert!(key.fingerprint_matches(&fixture_fingerprint()).unwrap());
}

#[test]
fn fingerprint_mismatch_is_false_not_error() {
    let key = fixture_public_key();

    let mut wrong = fixture_fingerprint();
    wrong[0] ^= 0x01;
    assert!(!key.fingerprint_matches(&wrong).unwrap());

    // A truncated fingerprint is "not equal", never an error.
    assert!(!key.fingerprint_matches(&fixture_fingerprint()[..8]).unwrap());
    assert!(!key.fingerprint_matches(&[]).unwrap());
}

#[test]
fn fingerprint_from_encoded_form_matches() {
    let der = keyfort_codec::from_text(PUBLIC_KEY_TEXT.trim()).unwrap();
    assert_eq!(fingerprint_from_der(&der).unwrap(), fixture_fingerprint());
}

// ── Signing ──────────────────────────────────────────────────────

#[test]
fn sign_and_verify_with_fixture_keys() {
    let signature = fixture_private_key().sign(b"entitlements").unwrap();
    let public = fixture_public_key();

    assert!(public.verify(b"entitlements", &signature));
    assert!(!public.verify(b"tampered", &signature));
}

#[test]
fn malformed_signature_is_not_valid() {
    let public = fixture_public_key();
    assert!(!public.verify(b"entitlements", b"not a signature"));
    assert!(!public.verify(b"entitlements", &[]));
}

// ── Generation ───────────────────────────────────────────────────

#[test]
fn generated_pair_signs_and_verifies() {
    let pair = KeyPair::generate().unwrap();

    let signature = pair.private_key.sign(b"fresh pair").unwrap();
    assert!(pair.public_key.verify(b"fresh pair", &signature));

    // A fresh key has a different fingerprint than the fixture key.
    assert_ne!(
        pair.public_key.fingerprint().unwrap(),
        fixture_fingerprint()
    );

    // And the fixture key rejects the fresh key's signature.
    assert!(!fixture_public_key().verify(b"fresh pair", &signature));
}
