#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! HMAC (Hash-based Message Authentication Code) PRF
//!
//! HMAC is specified in FIPS 198-1. All HMAC arithmetic is delegated to the
//! `hmac` crate from RustCrypto; this module only selects the hash function at
//! runtime so the KDF can be driven by a [`HashAlgorithm`] value.
//!
//! HMAC accepts keys of any length, including the empty key. Keys longer than
//! the hash block size are hashed first.

use hmac::Hmac;
use kbkdf_prelude::error::Result;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::hash::HashAlgorithm;
use crate::prf::{MacPrf, Prf};

/// HMAC keyed with a caller secret, over a runtime-selected hash.
#[derive(Clone)]
pub enum HmacPrf {
    /// HMAC-SHA224
    Sha224(MacPrf<Hmac<Sha224>>),
    /// HMAC-SHA256
    Sha256(MacPrf<Hmac<Sha256>>),
    /// HMAC-SHA384
    Sha384(MacPrf<Hmac<Sha384>>),
    /// HMAC-SHA512
    Sha512(MacPrf<Hmac<Sha512>>),
    /// HMAC-SHA3-256
    Sha3_256(MacPrf<Hmac<Sha3_256>>),
    /// HMAC-SHA3-384
    Sha3_384(MacPrf<Hmac<Sha3_384>>),
    /// HMAC-SHA3-512
    Sha3_512(MacPrf<Hmac<Sha3_512>>),
}

macro_rules! with_inner {
    ($self:expr, $prf:ident => $body:expr) => {
        match $self {
            HmacPrf::Sha224($prf) => $body,
            HmacPrf::Sha256($prf) => $body,
            HmacPrf::Sha384($prf) => $body,
            HmacPrf::Sha512($prf) => $body,
            HmacPrf::Sha3_256($prf) => $body,
            HmacPrf::Sha3_384($prf) => $body,
            HmacPrf::Sha3_512($prf) => $body,
        }
    };
}

impl HmacPrf {
    /// Key a fresh HMAC instance over `algorithm`.
    ///
    /// # Errors
    /// Never fails for HMAC, which accepts any key length; the `Result` is
    /// kept so the constructor can be used directly as a PRF factory.
    pub fn new(algorithm: HashAlgorithm, secret: &[u8]) -> Result<Self> {
        Ok(match algorithm {
            HashAlgorithm::Sha224 => Self::Sha224(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha256 => Self::Sha256(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha384 => Self::Sha384(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha512 => Self::Sha512(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha3_256 => Self::Sha3_256(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha3_384 => Self::Sha3_384(MacPrf::new_from_slice(secret)?),
            HashAlgorithm::Sha3_512 => Self::Sha3_512(MacPrf::new_from_slice(secret)?),
        })
    }

    /// The hash algorithm this instance was keyed over.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Sha224(_) => HashAlgorithm::Sha224,
            Self::Sha256(_) => HashAlgorithm::Sha256,
            Self::Sha384(_) => HashAlgorithm::Sha384,
            Self::Sha512(_) => HashAlgorithm::Sha512,
            Self::Sha3_256(_) => HashAlgorithm::Sha3_256,
            Self::Sha3_384(_) => HashAlgorithm::Sha3_384,
            Self::Sha3_512(_) => HashAlgorithm::Sha3_512,
        }
    }
}

impl Prf for HmacPrf {
    fn output_size(&self) -> usize {
        with_inner!(self, prf => prf.output_size())
    }

    fn update(&mut self, data: &[u8]) {
        with_inner!(self, prf => prf.update(data))
    }

    fn finalize_into(self, out: &mut Vec<u8>) {
        with_inner!(self, prf => prf.finalize_into(out))
    }
}
