//! The sealing pipeline: validate, derive, encrypt/decrypt, encode/decode.
//!
//! Stateless per call. Mode is the caller's choice of function — never
//! inferred from the input text. The derived key lives only for the span
//! of one call and is zeroized when it drops.

use crate::cipher;
use crate::encoding::{decode_payload, encode_payload};
use crate::error::{CryptoError, CryptoResult};
use crate::key::{derive_key, KdfParams, Salt};

/// Minimum password length in characters.
pub const PASSWORD_MIN_CHARS: usize = 3;

/// Maximum password length in characters.
pub const PASSWORD_MAX_CHARS: usize = 20;

/// Checks the password against the length policy before any key material
/// is derived. Counted in characters, not bytes, so multi-byte input is
/// measured the way the user typed it.
fn validate_password(password: &str) -> CryptoResult<()> {
    let actual = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&actual) {
        return Err(CryptoError::Validation {
            min: PASSWORD_MIN_CHARS,
            max: PASSWORD_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Seals plaintext under a password, returning base64 text.
///
/// Beyond password validation this cannot fail: any text encrypts.
pub fn seal(plaintext: &str, password: &str) -> CryptoResult<String> {
    validate_password(password)?;
    let key = derive_key(password, &Salt::fixed(), &KdfParams::default());
    let payload = cipher::seal(&key, plaintext.as_bytes())?;
    Ok(encode_payload(&payload))
}

/// Opens base64 ciphertext text under a password, returning the plaintext.
///
/// Fails with [`CryptoError::Format`] on malformed base64 (before any key
/// is derived), [`CryptoError::Authentication`] on a wrong password or
/// tampered payload, and [`CryptoError::Decoding`] when the recovered
/// bytes are not valid UTF-8.
pub fn open(encoded: &str, password: &str) -> CryptoResult<String> {
    validate_password(password)?;
    let payload = decode_payload(encoded)?;
    let key = derive_key(password, &Salt::fixed(), &KdfParams::default());
    let plaintext = cipher::open(&key, &payload)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::Decoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Three multi-byte characters: 3 chars, 9 bytes
        assert!(validate_password("日本語").is_ok());
        // Two multi-byte characters: under the minimum
        assert!(matches!(
            validate_password("日本"),
            Err(CryptoError::Validation { actual: 2, .. })
        ));
    }

    #[test]
    fn validation_reports_the_offending_length() {
        let err = validate_password("abcdefghijklmnopqrstu").unwrap_err();
        match err {
            CryptoError::Validation { min, max, actual } => {
                assert_eq!(min, PASSWORD_MIN_CHARS);
                assert_eq!(max, PASSWORD_MAX_CHARS);
                assert_eq!(actual, 21);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
