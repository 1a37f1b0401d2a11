// src/crypto/encrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyInit, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use rand::{rng, RngCore};

use crate::consts::IV_SIZE;
use crate::enums::Mode;
use crate::error::CodecError;

use super::ensure_key_len;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes192EcbEnc = ecb::Encryptor<Aes192>;
type Aes256EcbEnc = ecb::Encryptor<Aes256>;

/// Encrypt `plaintext` under `key`, framing the result per `mode`.
///
/// Plaintext may be empty; PKCS#7 pads it to the next block boundary (a
/// full block when the input is already aligned). CBC draws a fresh IV from
/// the thread CSPRNG and prepends it, so identical inputs produce distinct
/// envelopes. ECB output is the raw ciphertext and is deterministic.
pub fn encrypt(plaintext: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>, CodecError> {
    ensure_key_len(key)?;
    match mode {
        Mode::Cbc => encrypt_cbc(plaintext, key),
        Mode::Ecb => encrypt_ecb(plaintext, key),
    }
}

fn encrypt_cbc(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut iv = [0u8; IV_SIZE];
    rng().fill_bytes(&mut iv);

    let body = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, &iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        24 => Aes192CbcEnc::new_from_slices(key, &iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => Aes256CbcEnc::new_from_slices(key, &iv)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        n => return Err(CodecError::InvalidKey(n)),
    };

    let mut envelope = Vec::with_capacity(IV_SIZE + body.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&body);
    Ok(envelope)
}

fn encrypt_ecb(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CodecError> {
    let body = match key.len() {
        16 => Aes128EcbEnc::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        24 => Aes192EcbEnc::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => Aes256EcbEnc::new_from_slice(key)
            .map_err(|e| CodecError::Cipher(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        n => return Err(CodecError::InvalidKey(n)),
    };
    Ok(body)
}
