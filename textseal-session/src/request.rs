//! One-shot seal/open requests.
//!
//! A request is the complete input for a single pipeline call. Mode is
//! always explicit — the pipeline never guesses from the text whether it
//! is looking at plaintext or a payload.

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Pipeline direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plaintext in, base64 payload out.
    Seal,
    /// Base64 payload in, plaintext out.
    Open,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seal => f.write_str("seal"),
            Self::Open => f.write_str("open"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seal" => Ok(Self::Seal),
            "open" => Ok(Self::Open),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Inputs for one pipeline call. Text and password are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SealRequest {
    #[zeroize(skip)]
    pub mode: Mode,
    pub text: String,
    pub password: String,
}

impl SealRequest {
    pub fn new(mode: Mode, text: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for SealRequest {
    // Log-safe: lengths only, never content
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealRequest")
            .field("mode", &self.mode)
            .field("text_chars", &self.text.chars().count())
            .field("password_chars", &self.password.chars().count())
            .finish()
    }
}

/// Runs one pipeline call synchronously.
pub fn process(request: &SealRequest) -> SessionResult<String> {
    debug!("[SESSION] processing {request:?}");

    let result = match request.mode {
        Mode::Seal => textseal_crypto::seal(&request.text, &request.password),
        Mode::Open => textseal_crypto::open(&request.text, &request.password),
    };

    match result {
        Ok(output) => {
            debug!(
                "[SESSION] {} succeeded, {} chars out",
                request.mode,
                output.chars().count()
            );
            Ok(output)
        }
        Err(err) => {
            warn!("[SESSION] {} failed: {err}", request.mode);
            Err(err.into())
        }
    }
}

/// Runs one pipeline call off the async runtime.
///
/// Key derivation is CPU-bound (100k PBKDF2 iterations, tens of
/// milliseconds), so an interactive caller should not run it on the
/// event loop. The request moves into a blocking task; cancellation is
/// abandonment — there are no partial side effects to roll back.
pub async fn process_async(request: SealRequest) -> SessionResult<String> {
    tokio::task::spawn_blocking(move || process(&request))
        .await
        .map_err(|e| SessionError::Background(e.to_string()))?
}
