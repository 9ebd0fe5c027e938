#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Keyed-hash counter KDF
//!
//! Binds HMAC over a selected hash as the PRF of the counter-mode KDF. No
//! derivation logic lives here.

use kbkdf_prelude::error::Result;
use tracing::instrument;

use crate::hash::HashAlgorithm;
use crate::kdf::counter::{IntoKeyLength, counter};
use crate::mac::hmac::HmacPrf;

/// SP 800-108 Counter KDF with `HMAC(hash_algorithm, secret)` as the PRF.
///
/// # Arguments
/// * `hash_algorithm` - Hash function underneath HMAC
/// * `key_length` - Desired output length in bytes
/// * `secret` - Master secret (the HMAC key)
/// * `label` - Purpose of the derived key
/// * `context` - Non-secret derivation context
///
/// # Example
/// ```rust
/// use kbkdf_primitives::{HashAlgorithm, keyed_hash_counter};
///
/// let key = keyed_hash_counter(HashAlgorithm::Sha384, 48, b"master", b"enc", b"")?;
/// assert_eq!(key.len(), 48);
/// # Ok::<(), kbkdf_prelude::KbkdfError>(())
/// ```
///
/// # Errors
/// Returns `KbkdfError::InvalidArgument` if `key_length` is negative or over
/// the protocol limit.
#[instrument(
    level = "debug",
    skip(key_length, secret, label, context),
    fields(secret_len = secret.len())
)]
pub fn keyed_hash_counter(
    hash_algorithm: HashAlgorithm,
    key_length: impl IntoKeyLength,
    secret: &[u8],
    label: &[u8],
    context: &[u8],
) -> Result<Vec<u8>> {
    counter(|| HmacPrf::new(hash_algorithm, secret), key_length, label, context)
}
