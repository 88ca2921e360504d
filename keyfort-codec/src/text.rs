//! The Base64 transform and its byte-oriented variants.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::CodecError;

/// Encodes binary data as Base64 text (standard alphabet, padded).
pub fn to_text(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Decodes Base64 text back into binary data.
pub fn from_text(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(BASE64.decode(text)?)
}

/// Like [`to_text`], but returns the ASCII bytes of the text form.
///
/// Used where the text still travels through byte-oriented I/O, so the file
/// and in-memory paths share one implementation.
pub fn to_text_bytes(data: &[u8]) -> Vec<u8> {
    to_text(data).into_bytes()
}

/// Like [`from_text`], but accepts the ASCII bytes of the text form.
pub fn from_text_bytes(text: &[u8]) -> Result<Vec<u8>, CodecError> {
    from_text(std::str::from_utf8(text)?)
}
