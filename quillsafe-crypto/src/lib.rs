//! Encryption core for Quillsafe.
//!
//! Provides client-side encryption of note bodies and image attachments so
//! the storage backend never sees plaintext:
//! - PBKDF2-HMAC-SHA-256 key derivation from the user's password
//! - AES-256-GCM authenticated encryption
//! - A self-contained `salt || nonce || ciphertext+tag` envelope, with a
//!   base64 form for note bodies and a raw-byte form for image blobs
//!
//! # Security guarantees
//! - Key material is zeroized on drop and never outlives a single call
//! - No plaintext, password, or key material is ever logged or embedded
//!   in an error
//! - A wrong password and a corrupted envelope are indistinguishable to
//!   callers — both surface as [`CryptoError::Decryption`]

pub mod envelope;
mod error;
pub mod key;

pub use envelope::{
    HEADER_SIZE, NONCE_SIZE, TAG_SIZE, decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text,
};
pub use error::{CryptoError, CryptoResult};
pub use key::{DerivedKey, KEY_SIZE, KdfParams, SALT_SIZE, Salt, derive_key};
