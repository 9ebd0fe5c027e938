//! Configuration types for kbkdf key derivation.
//!
//! Selects the PRF hash and the policy limits a [`KeyDeriver`](crate::KeyDeriver)
//! enforces on top of the protocol limits of the counter-mode KDF.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use kbkdf_prelude::error::{KbkdfError, Result};
use kbkdf_primitives::{HashAlgorithm, MAX_KEY_LENGTH};

/// Key derivation configuration.
///
/// # Examples
/// ```rust
/// use kbkdf_core::config::KdfConfig;
/// use kbkdf_primitives::HashAlgorithm;
///
/// let config = KdfConfig::new()
///     .with_hash_algorithm(HashAlgorithm::Sha384)
///     .with_min_secret_length(32)
///     .build()
///     .expect("Failed to build config");
///
/// let prod_config = KdfConfig::for_production();
/// assert_eq!(prod_config.hash_algorithm, HashAlgorithm::Sha512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KdfConfig {
    /// Hash function underneath the HMAC PRF.
    ///
    /// Default: `HashAlgorithm::Sha256`
    pub hash_algorithm: HashAlgorithm,

    /// Shortest secret, in bytes, the deriver accepts.
    ///
    /// Default: `0` (no minimum)
    pub min_secret_length: usize,

    /// Largest output, in bytes, a single derivation may request. Cannot exceed
    /// the protocol limit `MAX_KEY_LENGTH`.
    ///
    /// Default: `MAX_KEY_LENGTH`
    pub max_key_length: usize,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::Sha256,
            min_secret_length: 0,
            max_key_length: MAX_KEY_LENGTH,
        }
    }
}

impl KdfConfig {
    /// Configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// HMAC-SHA512 and a 32-byte minimum secret.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_hash_algorithm(HashAlgorithm::Sha512).with_min_secret_length(32)
    }

    /// Set the PRF hash algorithm.
    #[must_use]
    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Set the minimum secret length in bytes.
    #[must_use]
    pub fn with_min_secret_length(mut self, min_secret_length: usize) -> Self {
        self.min_secret_length = min_secret_length;
        self
    }

    /// Set the maximum output length in bytes.
    #[must_use]
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Check the configuration for consistency.
    ///
    /// # Errors
    /// Returns `KbkdfError::InvalidConfiguration` if `max_key_length` exceeds
    /// the protocol limit.
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length > MAX_KEY_LENGTH {
            return Err(KbkdfError::InvalidConfiguration(format!(
                "max_key_length {} exceeds protocol limit {}",
                self.max_key_length, MAX_KEY_LENGTH
            )));
        }
        Ok(())
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    /// Returns the first validation failure.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KdfConfig::default();
        assert_eq!(config.hash_algorithm, HashAlgorithm::Sha256);
        assert_eq!(config.min_secret_length, 0);
        assert_eq!(config.max_key_length, MAX_KEY_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_production() {
        let config = KdfConfig::for_production();
        assert_eq!(config.hash_algorithm, HashAlgorithm::Sha512);
        assert_eq!(config.min_secret_length, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = KdfConfig::new()
            .with_hash_algorithm(HashAlgorithm::Sha3_256)
            .with_min_secret_length(16)
            .with_max_key_length(1024)
            .build()
            .unwrap();
        assert_eq!(config.hash_algorithm, HashAlgorithm::Sha3_256);
        assert_eq!(config.min_secret_length, 16);
        assert_eq!(config.max_key_length, 1024);
    }

    #[test]
    fn test_max_key_length_over_protocol_limit() {
        let err = KdfConfig::new().with_max_key_length(MAX_KEY_LENGTH + 1).build().unwrap_err();
        assert!(matches!(err, KbkdfError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = KdfConfig::for_production().with_max_key_length(4096);
        let json = serde_json::to_string(&config).unwrap();
        let back: KdfConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let config: KdfConfig = serde_json::from_str(r#"{"hash_algorithm":"Sha384"}"#).unwrap();
        assert_eq!(config.hash_algorithm, HashAlgorithm::Sha384);
        assert_eq!(config.max_key_length, MAX_KEY_LENGTH);
        assert_eq!(config.min_secret_length, 0);
    }
}
