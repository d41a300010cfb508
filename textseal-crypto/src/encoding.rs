//! Text-safe payload encoding.
//!
//! Standard base64 with padding — not the URL-safe alphabet — so the
//! encoded payload round-trips through display, clipboard, and file
//! export unchanged.

use crate::cipher::SealedPayload;
use crate::error::{CryptoError, CryptoResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Renders a sealed payload as base64 text.
pub fn encode_payload(payload: &SealedPayload) -> String {
    STANDARD.encode(payload.to_bytes())
}

/// Parses base64 text back into a sealed payload.
///
/// Characters outside the base64 alphabet or invalid padding fail with
/// [`CryptoError::Format`] before any key is touched, which keeps this
/// failure distinguishable from a wrong password.
pub fn decode_payload(text: &str) -> CryptoResult<SealedPayload> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| CryptoError::Format(e.to_string()))?;
    SealedPayload::from_bytes(&bytes)
}
