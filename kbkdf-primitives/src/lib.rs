#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # kbkdf Primitives
//!
//! NIST SP 800-108 key-based key derivation in counter mode.
//!
//! One high-entropy secret is expanded into any number of purpose-bound
//! subkeys. Each derivation is bound to a label and a context, and the bytes
//! fed to the pseudorandom function on iteration `i` are
//!
//! ```text
//! [i]_32be || Label || 0x00 || Context || [L]_32be
//! ```
//!
//! where `L` is the total requested output length in bits.
//!
//! ## Modules
//!
//! - **prf**: the [`Prf`] capability the KDF is generic over
//! - **kdf::counter**: the counter-mode construction itself
//! - **kdf::keyed_hash**: HMAC-bound convenience entry point
//! - **kdf::params**: labelled-key helpers (encryption, MAC, IV)
//! - **hash**: hash algorithm selector for the HMAC binding
//! - **mac**: HMAC (FIPS 198-1) and AES-CMAC (NIST SP 800-38B) PRFs
//!
//! ## Example
//!
//! ```rust
//! use kbkdf_primitives::{HashAlgorithm, keyed_hash_counter};
//!
//! let secret = [0x00, 0x01, 0x02, 0x03];
//! let key = keyed_hash_counter(HashAlgorithm::Sha256, 16, &secret, b"", b"")?;
//! assert_eq!(key.len(), 16);
//! # Ok::<(), kbkdf_prelude::KbkdfError>(())
//! ```

pub mod hash;
pub mod kdf;
pub mod mac;
pub mod prf;

pub use hash::HashAlgorithm;
pub use kdf::*;
pub use mac::{CMAC_BLOCK_SIZE, CmacKey, CmacPrf, HmacPrf, cmac_counter};
pub use prf::{MacPrf, Prf};
