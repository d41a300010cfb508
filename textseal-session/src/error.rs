//! Session error types and user-facing failure classification.

use textseal_crypto::CryptoError;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur at the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("background task failed: {0}")]
    Background(String),
}

impl SessionError {
    /// Display-ready classification, when one applies.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Crypto(err) => Some(FailureKind::classify(err)),
            Self::Background(_) => None,
        }
    }
}

/// How a pipeline failure should be presented to the user.
///
/// `MalformedInput` is the only kind allowed a more specific message: it
/// fires before any key is used, so it leaks nothing about password
/// correctness. Authentication and UTF-8 decoding failures collapse into
/// one generic category so the message never hints at how far decryption
/// got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Password outside the length policy; re-prompt the user.
    PasswordPolicy,
    /// Input text is not a valid payload; worth a "check the input
    /// format" warning rather than a credential error.
    MalformedInput,
    /// Wrong password, tampered payload, or non-text plaintext — all
    /// presented identically.
    InvalidCredentials,
}

impl FailureKind {
    pub fn classify(err: &CryptoError) -> Self {
        match err {
            CryptoError::Validation { .. } => Self::PasswordPolicy,
            CryptoError::Format(_) => Self::MalformedInput,
            CryptoError::Authentication | CryptoError::Decoding => Self::InvalidCredentials,
        }
    }

    /// The message the UI collaborator should render.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PasswordPolicy => "password must be 3-20 characters",
            Self::MalformedInput => "check the input format",
            Self::InvalidCredentials => "invalid input or password",
        }
    }
}
