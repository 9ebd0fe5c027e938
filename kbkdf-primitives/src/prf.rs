#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Pseudorandom Function capability
//!
//! The counter-mode KDF never picks or implements a PRF. It is handed a
//! factory, a closure returning a fresh, identically keyed instance each time
//! it is called, and drives each instance through exactly one
//! update-then-finalize cycle.

use hmac::digest::{KeyInit, Mac, OutputSizeUser};
use kbkdf_prelude::error::{KbkdfError, Result};

/// A keyed pseudorandom function producing a fixed-size digest.
///
/// Implementations must be deterministic for a given key and input sequence,
/// and `output_size` must be answerable before any input is supplied.
pub trait Prf {
    /// Digest size in bytes.
    fn output_size(&self) -> usize;

    /// Append `data` to the input. May be called any number of times.
    fn update(&mut self, data: &[u8]);

    /// Consume the instance and append its digest to `out`.
    fn finalize_into(self, out: &mut Vec<u8>);
}

/// Adapter exposing any RustCrypto [`Mac`] as a [`Prf`].
///
/// ```rust
/// use hmac::Hmac;
/// use kbkdf_primitives::{MacPrf, Prf};
/// use sha2::Sha256;
///
/// let prf = MacPrf::<Hmac<Sha256>>::new_from_slice(b"secret")?;
/// assert_eq!(prf.output_size(), 32);
/// # Ok::<(), kbkdf_prelude::KbkdfError>(())
/// ```
#[derive(Clone)]
pub struct MacPrf<M>(M);

impl<M: Mac + KeyInit> MacPrf<M> {
    /// Key a fresh MAC instance.
    ///
    /// # Errors
    /// Returns `KbkdfError::InvalidKey` if the MAC rejects the key length.
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        <M as KeyInit>::new_from_slice(key).map(Self).map_err(|_e| {
            KbkdfError::InvalidKey(format!("MAC rejected a {}-byte key", key.len()))
        })
    }
}

impl<M: Mac> From<M> for MacPrf<M> {
    fn from(mac: M) -> Self {
        Self(mac)
    }
}

impl<M: Mac> Prf for MacPrf<M> {
    fn output_size(&self) -> usize {
        <M as OutputSizeUser>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Mac::update(&mut self.0, data);
    }

    fn finalize_into(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0.finalize().into_bytes());
    }
}
