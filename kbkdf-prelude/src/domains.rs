//! Domain Separation Labels
//!
//! Standard labels for the purpose-bound keys most applications derive from a
//! single master secret. Deriving two keys with different labels from the same
//! secret yields independent outputs.
//!
//! These are conveniences only. The counter-mode KDF accepts any byte string as
//! a label, including the empty one.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Label for symmetric encryption keys.
pub const ENCRYPTION_KEY: &[u8] = b"Encryption Key";

/// Label for message authentication keys.
pub const MAC_KEY: &[u8] = b"MAC Key";

/// Label for initialization vectors and nonces.
pub const IV_GENERATION: &[u8] = b"IV Generation";

/// Label used when the caller does not pick one.
pub const DEFAULT_LABEL: &[u8] = b"Default KDF Label";

/// All standard labels, for uniqueness checks.
pub const ALL_LABELS: [&[u8]; 4] = [ENCRYPTION_KEY, MAC_KEY, IV_GENERATION, DEFAULT_LABEL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        for (i, a) in ALL_LABELS.iter().enumerate() {
            for b in ALL_LABELS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_labels_do_not_contain_separator() {
        // A zero byte inside a label could collide with the label/context separator.
        for label in ALL_LABELS {
            assert!(!label.contains(&0x00));
        }
    }
}
