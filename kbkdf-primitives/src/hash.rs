#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash Algorithm Selector
//!
//! Names the hash function underneath the keyed-hash (HMAC) PRF: SHA-2 per
//! FIPS 180-4 and SHA-3 per FIPS 202.

use std::fmt;
use std::str::FromStr;

use kbkdf_prelude::error::KbkdfError;

/// Hash function used to key an HMAC PRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum HashAlgorithm {
    /// SHA-224 (28-byte digest)
    Sha224,
    /// SHA-256 (32-byte digest)
    #[default]
    Sha256,
    /// SHA-384 (48-byte digest)
    Sha384,
    /// SHA-512 (64-byte digest)
    Sha512,
    /// SHA3-256 (32-byte digest)
    Sha3_256,
    /// SHA3-384 (48-byte digest)
    Sha3_384,
    /// SHA3-512 (64-byte digest)
    Sha3_512,
}

impl HashAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [HashAlgorithm; 7] = [
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Digest size in bytes, which is also the HMAC output size.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }

    /// Canonical name, e.g. `"SHA-256"` or `"SHA3-256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = KbkdfError;

    /// Accepts the canonical name case-insensitively, with or without the
    /// dash or underscore (`"SHA-256"`, `"sha256"`, `"sha3_256"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.chars().filter(|c| !matches!(c, '-' | '_')).collect::<String>().to_ascii_lowercase();
        match normalized.as_str() {
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "sha3256" => Ok(Self::Sha3_256),
            "sha3384" => Ok(Self::Sha3_384),
            "sha3512" => Ok(Self::Sha3_512),
            _ => Err(KbkdfError::InvalidConfiguration(format!("Unknown hash algorithm: {s}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(alg.name().parse::<HashAlgorithm>().unwrap(), alg);
            assert_eq!(alg.to_string().parse::<HashAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_loose_spellings() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha3_512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_512);
        assert_eq!("Sha-384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, KbkdfError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        for alg in HashAlgorithm::ALL {
            let json = serde_json::to_string(&alg).unwrap();
            assert_eq!(serde_json::from_str::<HashAlgorithm>(&json).unwrap(), alg);
        }
        assert_eq!(serde_json::to_string(&HashAlgorithm::Sha3_256).unwrap(), r#""Sha3_256""#);
        assert!(serde_json::from_str::<HashAlgorithm>(r#""Md5""#).is_err());
    }

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }
}
