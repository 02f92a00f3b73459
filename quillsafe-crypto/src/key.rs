//! Key derivation from user passwords.
//!
//! PBKDF2-HMAC-SHA-256 at a deliberately high iteration count turns a
//! password plus a random salt into a 256-bit AES key. Derivation is
//! deterministic, so the same password combined with the salt stored in an
//! envelope reproduces the key at decryption time. The iteration count is
//! the only brute-force cost knob; the derived key itself is never stored.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// Salt length in bytes.
pub const SALT_SIZE: usize = 16;

/// Random salt for key derivation.
///
/// Travels with the ciphertext inside the envelope; not secret.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Salt([u8; SALT_SIZE]);

impl Salt {
    /// Generates a fresh salt from the OS CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.0
    }
}

/// Symmetric key derived from a password.
///
/// Zeroized on drop. A key lives only for the duration of the single
/// encrypt or decrypt call that derived it; it is never serialized,
/// logged, or cached.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Key bytes. Use immediately; do not store.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED])")
    }
}

/// PBKDF2 parameters.
///
/// The default iteration count is part of the frozen envelope wire format:
/// an envelope written at one count cannot be read at another, and the
/// format carries no version byte. Do not change the default.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: 100_000,
        }
    }
}

/// Derives a 256-bit key from a password and salt using PBKDF2-HMAC-SHA-256.
///
/// Deterministic: identical `(password, salt, params)` always yields the
/// identical key. An empty password is accepted and produces a valid (if
/// weak) key rather than an error.
pub fn derive_key(password: &str, salt: &Salt, params: &KdfParams) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        &mut key,
    );
    DerivedKey::from_bytes(key)
}
