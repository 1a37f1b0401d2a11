// src/crypto/decrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyInit, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use crate::consts::{BLOCK_SIZE, IV_SIZE};
use crate::enums::Mode;
use crate::error::CodecError;

use super::ensure_key_len;

type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes192EcbDec = ecb::Decryptor<Aes192>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Invert [`super::encrypt`]: unframe `envelope` per `mode`, decrypt and
/// strip the padding.
///
/// A CBC envelope shorter than the IV block is rejected as malformed before
/// any cipher work. A ciphertext body that is empty or not block-aligned
/// can never hold a valid padded block and fails the padding check, as does
/// a wrong key or corrupted ciphertext.
pub fn decrypt(envelope: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>, CodecError> {
    ensure_key_len(key)?;
    match mode {
        Mode::Cbc => {
            if envelope.len() < IV_SIZE {
                return Err(CodecError::MalformedEnvelope(envelope.len()));
            }
            let (iv, body) = envelope.split_at(IV_SIZE);
            decrypt_cbc(body, key, iv)
        }
        Mode::Ecb => decrypt_ecb(envelope, key),
    }
}

fn decrypt_cbc(body: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_block_aligned(body)?;
    match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        n => Err(CodecError::InvalidKey(n)),
    }
}

fn decrypt_ecb(body: &[u8], key: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_block_aligned(body)?;
    match key.len() {
        16 => Aes128EcbDec::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        24 => Aes192EcbDec::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        32 => Aes256EcbDec::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding),
        n => Err(CodecError::InvalidKey(n)),
    }
}

// Every valid ciphertext carries at least the padded block, so an empty or
// ragged body is a padding failure, not a cipher failure.
fn check_block_aligned(body: &[u8]) -> Result<(), CodecError> {
    if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
        return Err(CodecError::Padding);
    }
    Ok(())
}
