// src/key_ops.rs
//! Key supply and representation utilities
//!
//! Keys arrive as raw bytes, most commonly the UTF-8 bytes of a shared key
//! string. No derivation is applied; the caller owns key sizing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use secure_gate::RevealSecret;

use crate::aliases::PayloadKey;
use crate::consts::AES_KEY_SIZES;

/// Wrap the UTF-8 bytes of a shared key string. No KDF is applied, so the
/// string length must already match an AES key size.
pub fn key_from_utf8(key: &str) -> PayloadKey {
    PayloadKey::new(key.as_bytes().to_vec())
}

/// True for the key sizes the cipher accepts (16, 24, 32 bytes).
#[inline]
pub fn is_supported_key_len(len: usize) -> bool {
    AES_KEY_SIZES.contains(&len)
}

/// String representations of a key for diagnostics and export.
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &PayloadKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
    }
}
