//! Error types for the encryption core.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors surfaced by the encryption core.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Decrypt could not produce verified plaintext.
    ///
    /// Wrong passwords, tampered or truncated envelopes, and malformed
    /// base64 all collapse into this variant. The underlying cause is
    /// dropped so callers (and their UIs) cannot distinguish them.
    #[error("decryption failed: incorrect password or corrupted data")]
    Decryption,

    /// Cipher-level failure during encryption. Indicates an environment
    /// problem rather than bad caller input; not expected to be retried.
    #[error("encryption failed: {0}")]
    Encryption(String),
}
