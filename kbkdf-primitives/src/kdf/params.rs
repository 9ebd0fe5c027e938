#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Labelled key derivation
//!
//! Helpers for the common case of expanding one primary secret into several
//! purpose-bound keys (encryption, MAC, IV), each separated by its label.

use kbkdf_prelude::domains;
use kbkdf_prelude::error::Result;
use tracing::{debug, instrument};

use crate::hash::HashAlgorithm;
use crate::kdf::counter::IntoKeyLength;
use crate::kdf::keyed_hash::keyed_hash_counter;

/// Label and context for one derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterKdfParams {
    /// Label identifying the purpose of the derived key
    pub label: Vec<u8>,
    /// Non-secret context information
    pub context: Vec<u8>,
}

impl Default for CounterKdfParams {
    fn default() -> Self {
        Self::new(domains::DEFAULT_LABEL)
    }
}

impl CounterKdfParams {
    /// Parameters with a custom label and empty context
    #[must_use]
    pub fn new(label: &[u8]) -> Self {
        Self { label: label.to_vec(), context: vec![] }
    }

    /// Set context information
    #[must_use]
    pub fn with_context(mut self, context: &[u8]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// Parameters for an encryption key
    #[must_use]
    pub fn for_encryption() -> Self {
        Self::new(domains::ENCRYPTION_KEY)
    }

    /// Parameters for a MAC key
    #[must_use]
    pub fn for_mac() -> Self {
        Self::new(domains::MAC_KEY)
    }

    /// Parameters for an IV/nonce
    #[must_use]
    pub fn for_iv() -> Self {
        Self::new(domains::IV_GENERATION)
    }
}

/// Derive one key using `params` as label and context.
///
/// # Errors
/// Returns an error if `key_length` is negative or over the protocol limit.
pub fn derive_with_params(
    hash_algorithm: HashAlgorithm,
    secret: &[u8],
    params: &CounterKdfParams,
    key_length: impl IntoKeyLength,
) -> Result<Vec<u8>> {
    keyed_hash_counter(hash_algorithm, key_length, secret, &params.label, &params.context)
}

/// Derive multiple keys from the same secret and context.
///
/// Each `(label, length)` pair yields one key, returned in the same order.
///
/// # Example
/// ```rust
/// use kbkdf_primitives::{HashAlgorithm, derive_multiple_keys};
///
/// let specs: [(&[u8], usize); 3] = [(b"encryption", 32), (b"mac", 32), (b"iv", 16)];
/// let keys = derive_multiple_keys(HashAlgorithm::Sha256, b"master", b"my-app-v1", &specs)?;
/// assert_eq!(keys.len(), 3);
/// assert_eq!(keys[2].len(), 16);
/// # Ok::<(), kbkdf_prelude::KbkdfError>(())
/// ```
///
/// # Errors
/// Returns the first error from any individual derivation.
#[instrument(level = "debug", skip(secret, context, key_specs), fields(keys = key_specs.len()))]
pub fn derive_multiple_keys(
    hash_algorithm: HashAlgorithm,
    secret: &[u8],
    context: &[u8],
    key_specs: &[(&[u8], usize)],
) -> Result<Vec<Vec<u8>>> {
    let keys = key_specs
        .iter()
        .map(|(label, length)| keyed_hash_counter(hash_algorithm, *length, secret, label, context))
        .collect::<Result<Vec<_>>>()?;
    debug!("Derived {} labelled keys", keys.len());
    Ok(keys)
}
