//! Authenticated encryption and the sealed binary layout.
//!
//! AES-256-GCM with a fresh random 12-byte nonce per seal and no
//! additional authenticated data. The wire layout is
//! `nonce (12) || ciphertext_with_tag`, split at a fixed byte offset —
//! never negotiated.

use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Nonce size in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes (128 bits). Appended to the
/// ciphertext by the AEAD convention, not tracked separately.
pub const TAG_SIZE: usize = 16;

/// Smallest byte length a sealed payload can have: the nonce plus at
/// least one ciphertext byte. Anything shorter is malformed.
const MIN_SEALED_LEN: usize = NONCE_SIZE + 1;

/// A sealed payload: random nonce plus tag-bearing ciphertext.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedPayload {
    /// Fresh random nonce generated at seal time.
    pub nonce: [u8; NONCE_SIZE],
    /// AES-256-GCM ciphertext with the 16-byte tag appended.
    pub ciphertext: Vec<u8>,
}

impl SealedPayload {
    /// Renders the fixed binary layout `nonce || ciphertext_with_tag`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(NONCE_SIZE + self.ciphertext.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Splits raw bytes back into nonce and ciphertext at byte 12.
    ///
    /// Payloads shorter than 13 bytes cannot hold a nonce and any
    /// ciphertext; they fail the same way a bad tag does so that
    /// truncation is indistinguishable from tampering.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < MIN_SEALED_LEN {
            return Err(CryptoError::Authentication);
        }
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        Ok(Self {
            nonce,
            ciphertext: bytes[NONCE_SIZE..].to_vec(),
        })
    }
}

/// Encrypts plaintext under the derived key with a fresh random nonce.
///
/// The nonce comes from the OS CSPRNG on every call, which is what keeps
/// nonces unique for a given key across the process lifetime.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<SealedPayload> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::Authentication)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CryptoError::Authentication)?;

    Ok(SealedPayload {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypts a sealed payload, verifying the authentication tag.
///
/// A wrong key and a corrupted ciphertext fail identically — the tag
/// check cannot tell them apart, and callers must not try to.
pub fn open(key: &DerivedKey, payload: &SealedPayload) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::Authentication)?;

    let nonce = Nonce::from_slice(&payload.nonce);
    cipher
        .decrypt(nonce, payload.ciphertext.as_ref())
        .map_err(|_| CryptoError::Authentication)
}
