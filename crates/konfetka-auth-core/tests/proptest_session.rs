//! Property-based tests for session cookie signing and validation
//!
//! These tests verify:
//! - Minted cookie pairs always validate back to their subject
//! - Malformed cookie pairs never cause panics
//! - Any payload tampering is detected

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use konfetka_auth_core::{AuthError, SessionCodec};
use konfetka_types::UserId;
use proptest::prelude::*;

fn codec() -> SessionCodec {
    SessionCodec::new("property-testing-secret-0123456789", 30)
}

/// Generate arbitrary cookie-shaped garbage
fn arb_malformed_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        // Random printable strings in both slots
        ("[ -~]{0,60}", "[ -~]{0,60}"),
        // Base64-ish payloads with random signatures
        ("[a-zA-Z0-9_-]{10,80}", "[a-zA-Z0-9_-]{10,60}"),
        // Valid base64 of random bytes, unsigned
        (
            any::<Vec<u8>>().prop_map(|b| URL_SAFE_NO_PAD.encode(b)),
            "[a-zA-Z0-9_-]{0,50}"
        ),
        // Empty slots
        (Just(String::new()), "[a-zA-Z0-9_-]{0,50}"),
        ("[a-zA-Z0-9_-]{0,50}", Just(String::new())),
    ]
}

proptest! {
    #[test]
    fn minted_tokens_roundtrip(id_bytes in any::<[u8; 16]>(), ttl in 1u32..365) {
        let codec = SessionCodec::new("property-testing-secret-0123456789", ttl);
        let user_id = UserId(uuid::Uuid::from_bytes(id_bytes));

        let token = codec.mint(user_id).unwrap();
        let payload = codec.validate(&token.payload, &token.signature).unwrap();

        prop_assert_eq!(payload.user_id(), Some(user_id));
        prop_assert!(payload.issued <= payload.expires);
    }

    #[test]
    fn malformed_pairs_never_panic(pair in arb_malformed_pair()) {
        let codec = codec();
        // Either outcome is acceptable; panicking is not. Random garbage
        // virtually never carries a valid signature, so expect Err.
        let result = codec.validate(&pair.0, &pair.1);
        prop_assert!(result.is_err());
    }

    #[test]
    fn payload_tampering_is_detected(
        id_bytes in any::<[u8; 16]>(),
        flip_pos in any::<prop::sample::Index>(),
    ) {
        let codec = codec();
        let token = codec.mint(UserId(uuid::Uuid::from_bytes(id_bytes))).unwrap();

        // Replace one character of the payload with a different one
        let mut chars: Vec<char> = token.payload.chars().collect();
        let pos = flip_pos.index(chars.len());
        chars[pos] = if chars[pos] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        if tampered != token.payload {
            let result = codec.validate(&tampered, &token.signature);
            prop_assert!(matches!(result, Err(AuthError::InvalidSession)));
        }
    }

    #[test]
    fn truncated_signatures_are_rejected(id_bytes in any::<[u8; 16]>(), keep in 0usize..40) {
        let codec = codec();
        let token = codec.mint(UserId(uuid::Uuid::from_bytes(id_bytes))).unwrap();

        let truncated: String = token.signature.chars().take(keep).collect();
        if truncated != token.signature {
            let result = codec.validate(&token.payload, &truncated);
            prop_assert!(matches!(result, Err(AuthError::InvalidSession)));
        }
    }
}
