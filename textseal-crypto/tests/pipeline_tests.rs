use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use textseal_crypto::{
    cipher, decode_payload, derive_key, open, seal, CryptoError, KdfParams, Salt, NONCE_SIZE,
    TAG_SIZE,
};

#[test]
fn seal_open_roundtrip() {
    let sealed = seal("attack at dawn", "pass123").unwrap();
    let opened = open(&sealed, "pass123").unwrap();
    assert_eq!(opened, "attack at dawn");
}

#[test]
fn roundtrip_preserves_unicode_text() {
    let plaintext = "héllo wörld — 日本語テキスト 🔒";
    let sealed = seal(plaintext, "pass123").unwrap();
    assert_eq!(open(&sealed, "pass123").unwrap(), plaintext);
}

#[test]
fn roundtrip_preserves_empty_text() {
    let sealed = seal("", "pass123").unwrap();
    assert_eq!(open(&sealed, "pass123").unwrap(), "");
}

#[test]
fn wrong_password_fails_authentication() {
    let sealed = seal("attack at dawn", "pass123").unwrap();
    assert!(matches!(
        open(&sealed, "wrong12"),
        Err(CryptoError::Authentication)
    ));
}

#[test]
fn two_seals_of_the_same_input_differ() {
    let s1 = seal("same message", "pass123").unwrap();
    let s2 = seal("same message", "pass123").unwrap();
    // Independent random nonces make the payloads differ
    assert_ne!(s1, s2);
    assert_eq!(open(&s1, "pass123").unwrap(), "same message");
    assert_eq!(open(&s2, "pass123").unwrap(), "same message");
}

#[test]
fn malformed_base64_fails_with_format_not_authentication() {
    assert!(matches!(
        open("not-valid-base64!!", "pass123"),
        Err(CryptoError::Format(_))
    ));
}

#[test]
fn format_check_fires_before_password_use() {
    // Even with a wrong password, malformed input reports Format:
    // the decode step runs before any key is derived
    let sealed = seal("text", "pass123").unwrap();
    let mangled = format!("{sealed}!!");
    assert!(matches!(
        open(&mangled, "wrong12"),
        Err(CryptoError::Format(_))
    ));
}

#[test]
fn any_single_bit_flip_in_ciphertext_is_detected() {
    let sealed = seal("tamper target", "pass123").unwrap();
    let bytes = STANDARD.decode(&sealed).unwrap();

    for i in NONCE_SIZE..bytes.len() {
        for bit in 0..8 {
            let mut tampered = bytes.clone();
            tampered[i] ^= 1 << bit;
            let text = STANDARD.encode(&tampered);
            assert!(
                matches!(open(&text, "pass123"), Err(CryptoError::Authentication)),
                "bit {bit} of byte {i} slipped through"
            );
        }
    }
}

#[test]
fn truncated_payload_fails_authentication() {
    // A bare nonce with the ciphertext stripped off
    let sealed = seal("text", "pass123").unwrap();
    let bytes = STANDARD.decode(&sealed).unwrap();
    let truncated = STANDARD.encode(&bytes[..NONCE_SIZE]);
    assert!(matches!(
        open(&truncated, "pass123"),
        Err(CryptoError::Authentication)
    ));
}

#[test]
fn password_length_boundaries() {
    for pw in ["ab", "abcdefghijklmnopqrstu"] {
        assert!(matches!(
            seal("text", pw),
            Err(CryptoError::Validation { .. })
        ));
        assert!(matches!(
            open("AAAA", pw),
            Err(CryptoError::Validation { .. })
        ));
    }
    for pw in ["abc", "abcdefghijklmnopqrst"] {
        let sealed = seal("text", pw).unwrap();
        assert_eq!(open(&sealed, pw).unwrap(), "text");
    }
}

#[test]
fn hello_world_payload_is_39_bytes() {
    let sealed = seal("hello world", "pass123").unwrap();
    let bytes = STANDARD.decode(&sealed).unwrap();
    // 12-byte nonce + 11 plaintext bytes + 16-byte tag
    assert_eq!(bytes.len(), NONCE_SIZE + 11 + TAG_SIZE);

    assert_eq!(open(&sealed, "pass123").unwrap(), "hello world");
    assert!(matches!(
        open(&sealed, "wrong12"),
        Err(CryptoError::Authentication)
    ));
}

#[test]
fn non_utf8_plaintext_surfaces_as_decoding_error() {
    // Seal raw non-text bytes through the codec directly, then open the
    // encoded payload through the pipeline with the right password
    let key = derive_key("pass123", &Salt::fixed(), &KdfParams::default());
    let payload = cipher::seal(&key, &[0xFF, 0xFE, 0x80]).unwrap();
    let encoded = textseal_crypto::encode_payload(&payload);

    assert!(matches!(
        open(&encoded, "pass123"),
        Err(CryptoError::Decoding)
    ));
}

#[test]
fn sealed_payload_survives_json_serialization() {
    let sealed = seal("serialize me", "pass123").unwrap();
    let payload = decode_payload(&sealed).unwrap();

    let json = serde_json::to_string(&payload).unwrap();
    let restored: textseal_crypto::SealedPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.nonce, payload.nonce);
    assert_eq!(restored.ciphertext, payload.ciphertext);
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // KDF at full iteration count dominates runtime; keep case counts low
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn seal_open_always_roundtrips(
            plaintext in ".{0,200}",
            password in "[a-zA-Z0-9]{3,20}",
        ) {
            let sealed = seal(&plaintext, &password).unwrap();
            prop_assert_eq!(open(&sealed, &password).unwrap(), plaintext);
        }

        #[test]
        fn encode_decode_always_roundtrips(
            ciphertext in proptest::collection::vec(any::<u8>(), 1..256),
            nonce in proptest::array::uniform12(any::<u8>()),
        ) {
            let payload = textseal_crypto::SealedPayload { nonce, ciphertext };
            let text = textseal_crypto::encode_payload(&payload);
            let restored = decode_payload(&text).unwrap();
            prop_assert_eq!(restored.nonce, payload.nonce);
            prop_assert_eq!(restored.ciphertext, payload.ciphertext);
        }
    }
}
