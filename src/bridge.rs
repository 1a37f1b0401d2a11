// src/bridge.rs
//! String-channel codec operations for the UI bridge
//!
//! The scripted layer can only pass strings across the bridge, so envelopes
//! travel base64-encoded (standard alphabet, no line wrapping) and payloads
//! arrive either as UTF-8 text or already base64-encoded. These are pure
//! encode/decode wrappers around [`crate::crypto`]; the cryptographic
//! semantics are untouched.
//!
//! The legacy adapter swallowed every failure and handed the caller an
//! empty string. Here each operation returns the distinct [`CodecError`]
//! kind; presentation is the embedding layer's problem.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use secure_gate::RevealSecret;

use crate::aliases::PayloadKey;
use crate::crypto::{decrypt, encrypt};
use crate::enums::Mode;
use crate::error::CodecError;

/// Encrypt a UTF-8 payload, returning the base64 envelope.
pub fn encrypt_utf8(content: &str, key: &PayloadKey, mode: Mode) -> Result<String, CodecError> {
    let envelope = encrypt(content.as_bytes(), key.expose_secret(), mode)?;
    debug!(
        ?mode,
        payload_len = content.len(),
        envelope_len = envelope.len(),
        "payload encrypted"
    );
    Ok(STANDARD.encode(envelope))
}

/// Encrypt a payload that is already base64 text (binary payloads cross the
/// bridge that way), returning the base64 envelope.
pub fn encrypt_base64(content: &str, key: &PayloadKey, mode: Mode) -> Result<String, CodecError> {
    let payload = STANDARD.decode(content)?;
    let envelope = encrypt(&payload, key.expose_secret(), mode)?;
    Ok(STANDARD.encode(envelope))
}

/// Decrypt a base64 envelope into a UTF-8 string.
pub fn decrypt_utf8(envelope: &str, key: &PayloadKey, mode: Mode) -> Result<String, CodecError> {
    let envelope = STANDARD.decode(envelope)?;
    let plaintext = decrypt(&envelope, key.expose_secret(), mode)?;
    debug!(?mode, plaintext_len = plaintext.len(), "payload decrypted");
    Ok(String::from_utf8(plaintext)?)
}

/// Decrypt a base64 envelope, handing the plaintext back as base64 text.
pub fn decrypt_base64(envelope: &str, key: &PayloadKey, mode: Mode) -> Result<String, CodecError> {
    let envelope = STANDARD.decode(envelope)?;
    let plaintext = decrypt(&envelope, key.expose_secret(), mode)?;
    Ok(STANDARD.encode(plaintext))
}
