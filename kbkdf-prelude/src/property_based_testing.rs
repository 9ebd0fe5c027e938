//! Property-based tests for the error taxonomy.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use crate::error::{ErrorCategory, KbkdfError};

fn arb_error_message() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?_-]{1,100}")
        .expect("valid regex pattern for error messages")
}

fn arb_kbkdf_error() -> impl Strategy<Value = KbkdfError> {
    arb_error_message().prop_flat_map(|msg| {
        prop_oneof![
            Just(KbkdfError::InvalidArgument(msg.clone())),
            Just(KbkdfError::InvalidPrf(msg.clone())),
            Just(KbkdfError::InvalidKey(msg.clone())),
            Just(KbkdfError::InvalidConfiguration(msg)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_error_display_contains_message(msg in arb_error_message()) {
        let err = KbkdfError::InvalidArgument(msg.clone());
        let display = err.to_string();
        prop_assert!(display.ends_with(&msg));
        prop_assert!(display.starts_with("Invalid argument: "));
    }

    #[test]
    fn prop_error_serialization_roundtrip(err in arb_kbkdf_error()) {
        let json = serde_json::to_string(&err).unwrap();
        let back: KbkdfError = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&err, &back);
        prop_assert_eq!(err.category(), back.category());
    }

    #[test]
    fn prop_only_argument_errors_blame_caller(err in arb_kbkdf_error()) {
        let is_argument = matches!(err, KbkdfError::InvalidArgument(_));
        prop_assert_eq!(err.category() == ErrorCategory::Caller, is_argument);
        prop_assert!(!err.is_retryable());
    }
}
