#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the counter-mode KDF
//!
//! Arbitrary secrets, labels, contexts and lengths must never panic, and every
//! successful derivation must have the requested length and be deterministic.

use kbkdf_primitives::{CmacKey, HashAlgorithm, cmac_counter, keyed_hash_counter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let algorithm = HashAlgorithm::ALL[usize::from(data[0]) % HashAlgorithm::ALL.len()];
    // Keep lengths small enough for fast iterations while still crossing block boundaries
    let key_length = usize::from(u16::from_be_bytes([data[1], data[2]])) % 1024;
    let rest = &data[3..];

    let third = rest.len() / 3;
    let secret = &rest[..third];
    let label = &rest[third..2 * third];
    let context = &rest[2 * third..];

    test_keyed_hash(algorithm, key_length, secret, label, context);
    test_cmac(key_length, secret, label, context);
    test_negative_length(secret, label, context);
});

fn test_keyed_hash(
    algorithm: HashAlgorithm,
    key_length: usize,
    secret: &[u8],
    label: &[u8],
    context: &[u8],
) {
    match keyed_hash_counter(algorithm, key_length, secret, label, context) {
        Ok(key) => {
            assert_eq!(key.len(), key_length, "Output length must match requested");

            if let Ok(again) = keyed_hash_counter(algorithm, key_length, secret, label, context) {
                assert_eq!(key, again, "Derivation must be deterministic");
            }

            // L differs, so only the size is comparable
            if key_length > 0 {
                let shorter = keyed_hash_counter(algorithm, key_length - 1, secret, label, context);
                assert_eq!(shorter.map(|k| k.len()).ok(), Some(key_length - 1));
            }
        }
        Err(_) => panic!("HMAC derivation within protocol limits must succeed"),
    }
}

fn test_cmac(key_length: usize, secret: &[u8], label: &[u8], context: &[u8]) {
    let valid_key = matches!(secret.len(), 16 | 24 | 32);
    assert_eq!(CmacKey::new(secret).is_ok(), valid_key, "CMAC accepts only AES key sizes");

    if let Ok(key) = cmac_counter(secret, key_length, label, context) {
        assert!(valid_key);
        assert_eq!(key.len(), key_length);
    }
}

fn test_negative_length(secret: &[u8], label: &[u8], context: &[u8]) {
    let result = keyed_hash_counter(HashAlgorithm::Sha256, -1i64, secret, label, context);
    assert!(result.is_err(), "Negative length must be rejected");
}
