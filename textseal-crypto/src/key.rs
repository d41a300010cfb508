//! Password-based key derivation.
//!
//! PBKDF2-HMAC-SHA256 over the password with a fixed process-wide salt.
//! Derivation is deterministic: the same (password, salt, iterations)
//! always yields the same key, which is what lets the same password open
//! a payload it sealed. Derived keys are zeroized on drop.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a derived key in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Size of the derivation salt in bytes.
pub const SALT_SIZE: usize = 15;

/// The process-wide derivation salt.
///
/// Fixed across all invocations for compatibility with existing payloads:
/// every password maps to exactly one key. A future format version that
/// prepends a random per-message salt to the sealed payload would replace
/// this constant with a per-call value.
pub const FIXED_SALT: &[u8; SALT_SIZE] = b"SecureVaultSalt";

/// Salt for key derivation.
#[derive(Clone, Debug)]
pub struct Salt([u8; SALT_SIZE]);

impl Salt {
    /// The fixed process-wide salt every derivation uses today.
    pub fn fixed() -> Self {
        Self(*FIXED_SALT)
    }

    /// Reconstructs a salt from raw bytes.
    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.0
    }
}

/// PBKDF2 tuning parameters.
#[derive(Clone, Debug)]
pub struct KdfParams {
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: 100_000,
        }
    }
}

/// A derived symmetric key. Zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    // Never print key material
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derives a 256-bit key from a password.
///
/// Cannot fail for any accepted password; a wrong password surfaces later
/// as an authentication failure during `open`, never here. Password length
/// policy is enforced by the pipeline, not the deriver.
pub fn derive_key(password: &str, salt: &Salt, params: &KdfParams) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        &mut key,
    );
    DerivedKey(key)
}
