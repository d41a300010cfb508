//! Pipeline error taxonomy.
//!
//! Four kinds, each a distinct variant so callers classify failures by
//! matching on the enum, never by inspecting message text. `Authentication`
//! deliberately carries no detail: wrong password and tampered ciphertext
//! are indistinguishable by design of authenticated encryption, and the
//! message must not become an oracle.

use thiserror::Error;

/// Result type for pipeline operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the sealing pipeline.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Password outside the accepted length policy. Fires before any
    /// cryptographic material is touched.
    #[error("password must be {min}-{max} characters, got {actual}")]
    Validation {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Payload text is not valid base64. Fires before any key is used,
    /// so it leaks nothing about password correctness.
    #[error("payload is not valid base64: {0}")]
    Format(String),

    /// AEAD tag verification failed, or the payload is too short to hold
    /// a nonce and a tag-bearing ciphertext.
    #[error("invalid input or password")]
    Authentication,

    /// Decryption succeeded but the plaintext is not valid UTF-8 text.
    /// Surfaced to users exactly like `Authentication` so a partially
    /// "successful" decrypt never leaks through the message.
    #[error("invalid input or password")]
    Decoding,
}
