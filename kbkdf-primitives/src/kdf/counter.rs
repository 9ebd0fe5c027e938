#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SP 800-108: KDF in Counter Mode
//!
//! NIST SP 800-108 specifies key derivation using pseudorandom functions.
//! The counter-mode construction computes, for `i = 1..=n`,
//!
//! ```text
//! K(i) = PRF(KI, [i]_2 || Label || 0x00 || Context || [L]_2)
//! ```
//!
//! and returns the first `L` bits of `K(1) || K(2) || ... || K(n)`, where:
//! - KI: keying material held inside the PRF
//! - i: iteration counter (32-bit big-endian, starting at 1)
//! - Label: purpose of the derived key
//! - Context: non-secret derivation context (nonces, peer identifiers)
//! - L: total output length in bits (32-bit big-endian, same in every iteration)
//!
//! SP 800-108 allows some fixed input fields to be omitted. None are omitted
//! here, and the zero separator is written even when label or context is empty.

use kbkdf_prelude::error::{KbkdfError, Result};
use tracing::{Span, debug, field, instrument, warn};

use crate::prf::Prf;

/// Largest output length in bytes whose bit count fits the 32-bit `L` field.
pub const MAX_KEY_LENGTH: usize = (u32::MAX / 8) as usize;

const NEGATIVE_LENGTH: &str = "negative key length requested";
const LENGTH_OVER_LIMIT: &str = "requested output length exceeds protocol limit";

/// A requested output length, validated against the protocol limit.
///
/// Carries both the byte count and the `L` field value (bits) so the two can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyLength {
    bytes: usize,
    bits: u32,
}

impl KeyLength {
    /// Validate a length in bytes.
    ///
    /// # Errors
    /// Returns `KbkdfError::InvalidArgument` if `bytes * 8` does not fit in 32 bits.
    pub fn new(bytes: usize) -> Result<Self> {
        let bits = bytes
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| KbkdfError::InvalidArgument(LENGTH_OVER_LIMIT.to_string()))?;
        Ok(Self { bytes, bits })
    }

    /// Length in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bytes
    }

    /// Length in bits, as encoded in the `L` field.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }
}

/// Conversion of caller-supplied lengths into a [`KeyLength`].
///
/// Implemented for the common integer types so that lengths computed in
/// signed arithmetic are checked for negativity rather than silently wrapped.
pub trait IntoKeyLength {
    /// Validate and convert.
    ///
    /// # Errors
    /// Returns `KbkdfError::InvalidArgument` for negative or over-limit values.
    fn into_key_length(self) -> Result<KeyLength>;
}

impl IntoKeyLength for KeyLength {
    fn into_key_length(self) -> Result<KeyLength> {
        Ok(self)
    }
}

macro_rules! impl_into_key_length_unsigned {
    ($($t:ty),*) => {$(
        impl IntoKeyLength for $t {
            fn into_key_length(self) -> Result<KeyLength> {
                let bytes = usize::try_from(self)
                    .map_err(|_e| KbkdfError::InvalidArgument(LENGTH_OVER_LIMIT.to_string()))?;
                KeyLength::new(bytes)
            }
        }
    )*};
}

macro_rules! impl_into_key_length_signed {
    ($($t:ty),*) => {$(
        impl IntoKeyLength for $t {
            fn into_key_length(self) -> Result<KeyLength> {
                if self < 0 {
                    return Err(KbkdfError::InvalidArgument(NEGATIVE_LENGTH.to_string()));
                }
                let bytes = usize::try_from(self)
                    .map_err(|_e| KbkdfError::InvalidArgument(LENGTH_OVER_LIMIT.to_string()))?;
                KeyLength::new(bytes)
            }
        }
    )*};
}

impl_into_key_length_unsigned!(u8, u16, u32, u64, usize);
impl_into_key_length_signed!(i8, i16, i32, i64, isize);

/// SP 800-108 KDF in Counter Mode
///
/// Derives `key_length` bytes from the keying material held by the PRFs that
/// `prf_factory` produces. The factory is called once to learn the digest size
/// and then once per iteration; every iteration runs on a fresh instance.
///
/// # Arguments
/// * `prf_factory` - Returns a fresh PRF keyed with the master secret
/// * `key_length` - Desired output length in bytes
/// * `label` - Purpose of the derived key (any bytes, may be empty)
/// * `context` - Non-secret derivation context (any bytes, may be empty)
///
/// # Example
/// ```rust
/// use kbkdf_primitives::{HashAlgorithm, HmacPrf, counter};
///
/// let secret = b"master secret";
/// let prf = || HmacPrf::new(HashAlgorithm::Sha256, secret);
/// let enc_key = counter(prf, 32, b"encryption", b"session-1")?;
/// let mac_key = counter(prf, 32, b"authentication", b"session-1")?;
/// assert_ne!(enc_key, mac_key);
/// # Ok::<(), kbkdf_prelude::KbkdfError>(())
/// ```
///
/// # Errors
/// - `KbkdfError::InvalidArgument` if `key_length` is negative or its bit
///   count does not fit in 32 bits
/// - `KbkdfError::InvalidPrf` if the PRF reports a zero digest size or emits
///   a digest of a different size than it reported
/// - Any error returned by `prf_factory`
#[instrument(
    level = "debug",
    skip_all,
    fields(key_length = field::Empty, label_len = label.len(), context_len = context.len())
)]
pub fn counter<F, P>(
    prf_factory: F,
    key_length: impl IntoKeyLength,
    label: &[u8],
    context: &[u8],
) -> Result<Vec<u8>>
where
    F: Fn() -> Result<P>,
    P: Prf,
{
    let key_length = key_length.into_key_length().inspect_err(|e| {
        warn!(error = %e, "Rejected key derivation request");
    })?;
    Span::current().record("key_length", key_length.bytes());

    let hash_len = prf_factory()?.output_size();
    if hash_len == 0 {
        warn!("PRF reports a zero-length digest");
        return Err(KbkdfError::InvalidPrf("PRF reports a zero-length digest".to_string()));
    }

    let iterations = key_length.bytes().div_ceil(hash_len);
    // Bounded by MAX_KEY_LENGTH, since hash_len >= 1
    let iterations_u32 = u32::try_from(iterations)
        .map_err(|_e| KbkdfError::InvalidArgument(LENGTH_OVER_LIMIT.to_string()))?;
    let capacity = iterations.checked_mul(hash_len).ok_or_else(|| {
        KbkdfError::InvalidPrf(format!("PRF digest size {hash_len} overflows the output buffer"))
    })?;

    let mut result = Vec::with_capacity(capacity);
    let l_field = key_length.bits().to_be_bytes();

    for ctr in 1..=iterations_u32 {
        let mut prf = prf_factory()?;
        prf.update(&ctr.to_be_bytes());
        prf.update(label);
        prf.update(&[0x00]);
        prf.update(context);
        prf.update(&l_field);

        let before = result.len();
        prf.finalize_into(&mut result);
        let produced = result.len().saturating_sub(before);
        if produced != hash_len {
            return Err(KbkdfError::InvalidPrf(format!(
                "PRF reported a {hash_len}-byte digest but produced {produced} bytes"
            )));
        }
    }

    result.truncate(key_length.bytes());
    debug!(iterations, hash_len, "Derived key material");
    Ok(result)
}
