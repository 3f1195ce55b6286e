//! Cryptographic primitives for session signing
//!
//! Signature checks must run in constant time; everything here exists to
//! keep that property in one place.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

/// Pre-validated HMAC key for repeated signing operations.
#[derive(Clone)]
pub struct HmacKey {
    key_bytes: Arc<[u8]>,
}

impl HmacKey {
    /// Minimum allowed key length in bytes (256 bits)
    pub const MIN_KEY_LENGTH: usize = 32;

    /// Create a new HMAC key from bytes.
    ///
    /// # Errors
    /// Returns an error if the key is shorter than 32 bytes.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, HmacKeyError> {
        let key_bytes = key.as_ref();
        if key_bytes.len() < Self::MIN_KEY_LENGTH {
            return Err(HmacKeyError::KeyTooShort {
                actual: key_bytes.len(),
                minimum: Self::MIN_KEY_LENGTH,
            });
        }
        Ok(Self {
            key_bytes: Arc::from(key_bytes),
        })
    }

    /// Sign data and return the MAC bytes
    pub fn sign(&self, data: &[u8]) -> [u8; 32] {
        // Key length was validated in new(), so this cannot fail
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key_bytes)
            .expect("HMAC key length already validated");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }

    /// Verify a signature in constant time
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let expected = self.sign(data);
        constant_time_eq(&expected, signature)
    }
}

impl std::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacKey")
            .field("key_length", &self.key_bytes.len())
            .finish_non_exhaustive()
    }
}

/// Errors that can occur when creating an HMAC key
#[derive(Debug, Clone, thiserror::Error)]
pub enum HmacKeyError {
    #[error("HMAC key too short: got {actual} bytes, need at least {minimum}")]
    KeyTooShort { actual: usize, minimum: usize },
}

/// Constant-time byte slice comparison.
///
/// Comparison time depends only on the slice lengths, not their contents.
/// Length mismatch returns `false` immediately (length is not secret).
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // XOR accumulator: zero only if every byte pair matches, and every
    // byte pair is visited regardless of where a difference appears.
    let result = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));

    result == 0
}
