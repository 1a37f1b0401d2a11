// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::consts::IV_SIZE;

/// Every failure a codec call can surface. One kind per cause; nothing is
/// ever collapsed into an empty result.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unsupported key length: {0} bytes (AES takes 16, 24 or 32)")]
    InvalidKey(usize),

    #[error("envelope too short: {0} bytes, need at least {IV_SIZE} for the IV")]
    MalformedEnvelope(usize),

    #[error("padding check failed: wrong key or corrupted ciphertext")]
    Padding,

    #[error("cipher failure: {0}")]
    Cipher(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
