//! Password-protected envelope codec for note bodies and image blobs.
//!
//! An envelope is `salt(16) || nonce(12) || ciphertext+tag`: everything
//! needed to decrypt except the password travels inside it, so it is the
//! only artifact the storage layer ever persists. Note bodies use a base64
//! form of the same layout; image blobs use the raw bytes. The layout is
//! frozen — there is no version byte.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{CryptoError, CryptoResult};
use crate::key::{KdfParams, SALT_SIZE, Salt, derive_key};

/// AES-GCM nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Fixed envelope header: salt followed by nonce.
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// Encrypts raw bytes (image blobs) into a self-contained envelope.
///
/// A fresh salt and nonce are drawn from the OS CSPRNG on every call, so
/// encrypting the same data twice never yields the same envelope. Empty
/// input is valid and produces a 44-byte envelope (header plus tag).
pub fn encrypt_bytes(data: &[u8], password: &str) -> CryptoResult<Vec<u8>> {
    let salt = Salt::random();
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt, &KdfParams::default());
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), data)
        .map_err(|e| CryptoError::Encryption(format!("AES-GCM seal failed: {e}")))?;

    let mut envelope = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    envelope.extend_from_slice(salt.as_bytes());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Decrypts an envelope produced by [`encrypt_bytes`].
///
/// Fails with [`CryptoError::Decryption`] on a wrong password and on a
/// tampered or truncated envelope; the causes are indistinguishable by
/// design. Either full, verified plaintext comes back or nothing does.
pub fn decrypt_bytes(envelope: &[u8], password: &str) -> CryptoResult<Vec<u8>> {
    if envelope.len() < HEADER_SIZE {
        return Err(CryptoError::Decryption);
    }

    let mut salt_bytes = [0u8; SALT_SIZE];
    salt_bytes.copy_from_slice(&envelope[..SALT_SIZE]);
    let salt = Salt::from_bytes(salt_bytes);
    let nonce = Nonce::from_slice(&envelope[SALT_SIZE..HEADER_SIZE]);
    let ciphertext = &envelope[HEADER_SIZE..];

    let key = derive_key(password, &salt, &KdfParams::default());
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CryptoError::Decryption)
}

/// Encrypts a note body into a printable base64 envelope.
///
/// Standard base64 with padding and no line wrapping.
pub fn encrypt_text(content: &str, password: &str) -> CryptoResult<String> {
    let envelope = encrypt_bytes(content.as_bytes(), password)?;
    Ok(BASE64.encode(envelope))
}

/// Decrypts a base64 envelope produced by [`encrypt_text`].
///
/// Malformed base64 fails the same way as a wrong password.
pub fn decrypt_text(envelope: &str, password: &str) -> CryptoResult<String> {
    let bytes = BASE64
        .decode(envelope)
        .map_err(|_| CryptoError::Decryption)?;
    let plaintext = decrypt_bytes(&bytes, password)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::Decryption)
}
