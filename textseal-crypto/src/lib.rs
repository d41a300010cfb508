//! Sealing pipeline for TextSeal.
//!
//! Turns a password and a piece of text into a transport-safe payload using:
//! - PBKDF2-HMAC-SHA256 for key derivation from passwords
//! - AES-256-GCM for authenticated encryption
//! - Standard base64 for the textual rendering
//!
//! # Architecture
//!
//! The pipeline composes three layers, leaf-first:
//!
//! 1. **Key derivation** ([`derive_key`]): password -> 256-bit key, using a
//!    fixed process-wide salt and iteration count. Deterministic, so the
//!    same password always opens what it sealed.
//!
//! 2. **Cipher codec** ([`cipher::seal`] / [`cipher::open`]): AES-256-GCM
//!    with a fresh random 12-byte nonce per seal. The nonce is bundled in
//!    front of the ciphertext, so the payload is self-contained.
//!
//! 3. **Payload encoding** ([`encode_payload`] / [`decode_payload`]):
//!    standard base64 with padding, for display, copy, and export.
//!
//! [`pipeline::seal`] and [`pipeline::open`] tie the layers together and
//! classify failures into the [`CryptoError`] taxonomy. The pipeline is
//! stateless per call; the only process-wide value is [`FIXED_SALT`].

pub mod cipher;
pub mod encoding;
mod error;
mod key;
pub mod pipeline;

pub use cipher::{SealedPayload, NONCE_SIZE, TAG_SIZE};
pub use encoding::{decode_payload, encode_payload};
pub use error::{CryptoError, CryptoResult};
pub use key::{derive_key, DerivedKey, KdfParams, Salt, FIXED_SALT, KEY_SIZE, SALT_SIZE};
pub use pipeline::{open, seal, PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS};
