//! Binary⇄text transport encoding for Keyfort.
//!
//! License archives and key material are binary; on disk they travel as
//! Base64 text (standard alphabet, padded, no line wrapping). This crate is
//! the single implementation of that transform, shared by the key store and
//! the license archive paths.

mod error;
mod text;

pub use error::CodecError;
pub use text::{from_text, from_text_bytes, to_text, to_text_bytes};
