#![deny(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

//! Property-based tests for the counter-mode KDF
//!
//! Random secrets, labels, contexts and lengths; the properties must hold for
//! every input, not just the fixed vectors.

use kbkdf_primitives::{HashAlgorithm, cmac_counter, keyed_hash_counter};
use proptest::prelude::*;

fn arb_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

fn arb_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_length_exact(
        alg in arb_algorithm(),
        secret in arb_bytes(64),
        label in arb_bytes(32),
        context in arb_bytes(32),
        len in 0usize..300,
    ) {
        let key = keyed_hash_counter(alg, len, &secret, &label, &context).unwrap();
        prop_assert_eq!(key.len(), len);
    }

    #[test]
    fn prop_deterministic(
        alg in arb_algorithm(),
        secret in arb_bytes(64),
        label in arb_bytes(32),
        context in arb_bytes(32),
        len in 0usize..200,
    ) {
        let a = keyed_hash_counter(alg, len, &secret, &label, &context).unwrap();
        let b = keyed_hash_counter(alg, len, &secret, &label, &context).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_label_separates(
        secret in arb_bytes(64),
        label_a in arb_bytes(32),
        label_b in arb_bytes(32),
        context in arb_bytes(32),
    ) {
        prop_assume!(label_a != label_b);
        let a = keyed_hash_counter(HashAlgorithm::Sha256, 32, &secret, &label_a, &context).unwrap();
        let b = keyed_hash_counter(HashAlgorithm::Sha256, 32, &secret, &label_b, &context).unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn prop_context_separates(
        secret in arb_bytes(64),
        label in arb_bytes(32),
        context_a in arb_bytes(32),
        context_b in arb_bytes(32),
    ) {
        prop_assume!(context_a != context_b);
        let a = keyed_hash_counter(HashAlgorithm::Sha256, 32, &secret, &label, &context_a).unwrap();
        let b = keyed_hash_counter(HashAlgorithm::Sha256, 32, &secret, &label, &context_b).unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn prop_secret_bit_flip_changes_output(
        secret in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = secret.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;

        let a = keyed_hash_counter(HashAlgorithm::Sha256, 32, &secret, b"label", b"ctx").unwrap();
        let b = keyed_hash_counter(HashAlgorithm::Sha256, 32, &flipped, b"label", b"ctx").unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn prop_negative_lengths_rejected(len in i64::MIN..0) {
        prop_assert!(keyed_hash_counter(HashAlgorithm::Sha256, len, b"s", b"", b"").is_err());
    }

    #[test]
    fn prop_cmac_length_exact(
        key in prop::collection::vec(any::<u8>(), 16..=16),
        label in arb_bytes(40),
        len in 0usize..100,
    ) {
        let derived = cmac_counter(&key, len, &label, b"").unwrap();
        prop_assert_eq!(derived.len(), len);
    }
}
