//! Envelope cipher (component C4): AES-256-GCM seal/open over the whole
//! container blob.
//!
//! Uses `aes_gcm::{aead::Aead, Aes256Gcm, KeyInit, Nonce}` directly —
//! the LZ4 block engine this crate otherwise builds on operates purely on
//! plaintext blocks and has no cryptography of its own.
//!
//! Associated data is always empty; a fresh random nonce is drawn for every
//! [`seal`] call from the OS CSPRNG via `rand`, never derived or reused.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

use crate::config::KEY_LEN;
use crate::error::{FastLogError, Result};

/// Nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length in bytes (128 bits), appended to
/// the ciphertext by the cipher itself — not a separate header field.
pub const TAG_LEN: usize = 16;

/// Generates a fresh 256-bit session key from the OS CSPRNG.
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rand::rngs::OsRng.fill_bytes(&mut key);
    key
}

/// Seals `plaintext` under `key`: draws a fresh random nonce, encrypts with
/// empty associated data, and returns `nonce || ciphertext || tag`.
///
/// Never reuses a nonce under the same key for the lifetime of the process
/// (each call draws independently from the CSPRNG) — the invariant AES-GCM
/// safety depends on.
pub fn seal(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| FastLogError::AuthFailed)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Opens a blob produced by [`seal`]: splits off the leading 12-byte nonce,
/// then decrypts and authenticates the remainder.
///
/// Any authentication failure — tampered ciphertext, tampered tag, or a
/// blob too short to contain a nonce and tag — is surfaced as
/// [`FastLogError::AuthFailed`]; no partial plaintext is ever returned.
pub fn open(key: &[u8; KEY_LEN], sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(FastLogError::AuthFailed);
    }
    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| FastLogError::AuthFailed)
}
