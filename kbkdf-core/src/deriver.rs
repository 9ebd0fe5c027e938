#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key deriver bound to one primary secret and configuration.

use kbkdf_prelude::error::{KbkdfError, Result};
use kbkdf_primitives::{
    CounterKdfParams, IntoKeyLength, KeyLength, derive_multiple_keys, derive_with_params,
    keyed_hash_counter,
};
use tracing::{debug, instrument, warn};

use crate::config::KdfConfig;
use crate::logging::sanitize_data;

/// Length of keys returned by [`KeyDeriver::encryption_key`] and [`KeyDeriver::mac_key`].
pub const SYMMETRIC_KEY_LENGTH: usize = 32;
/// Length of IVs returned by [`KeyDeriver::iv`].
pub const IV_LENGTH: usize = 16;

/// Derives keys from a borrowed secret under a validated [`KdfConfig`].
///
/// The secret is only borrowed; the caller owns it and is responsible for
/// clearing it.
///
/// # Example
/// ```rust
/// use kbkdf_core::{KdfConfig, KeyDeriver};
///
/// let secret = [0x42u8; 32];
/// let deriver = KeyDeriver::new(KdfConfig::for_production(), &secret)?;
/// let enc = deriver.encryption_key(b"session-1")?;
/// let mac = deriver.mac_key(b"session-1")?;
/// assert_ne!(enc, mac);
/// # Ok::<(), kbkdf_prelude::KbkdfError>(())
/// ```
#[derive(Clone)]
pub struct KeyDeriver<'a> {
    config: KdfConfig,
    secret: &'a [u8],
}

impl std::fmt::Debug for KeyDeriver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDeriver")
            .field("config", &self.config)
            .field("secret", &sanitize_data(self.secret))
            .finish()
    }
}

impl<'a> KeyDeriver<'a> {
    /// Bind `secret` to `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the config fails validation, or
    /// `InvalidKey` if the secret is shorter than `min_secret_length`.
    pub fn new(config: KdfConfig, secret: &'a [u8]) -> Result<Self> {
        config.validate()?;
        if secret.len() < config.min_secret_length {
            warn!(
                "Rejected secret {}, minimum is {} bytes",
                sanitize_data(secret),
                config.min_secret_length
            );
            return Err(KbkdfError::InvalidKey(format!(
                "secret must be at least {} bytes, got {}",
                config.min_secret_length,
                secret.len()
            )));
        }
        debug!(
            hash = %config.hash_algorithm,
            "Key deriver created with secret {}",
            sanitize_data(secret)
        );
        Ok(Self { config, secret })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &KdfConfig {
        &self.config
    }

    fn check_length(&self, key_length: impl IntoKeyLength) -> Result<KeyLength> {
        let key_length = key_length.into_key_length()?;
        if key_length.bytes() > self.config.max_key_length {
            return Err(KbkdfError::InvalidArgument(format!(
                "requested {} bytes, configured maximum is {}",
                key_length.bytes(),
                self.config.max_key_length
            )));
        }
        Ok(key_length)
    }

    /// Derive `key_length` bytes for `label` and `context`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the length is negative or above the
    /// configured maximum.
    #[instrument(
        level = "debug",
        skip(self, label, context, key_length),
        fields(hash = %self.config.hash_algorithm)
    )]
    pub fn derive(
        &self,
        label: &[u8],
        context: &[u8],
        key_length: impl IntoKeyLength,
    ) -> Result<Vec<u8>> {
        let key_length = self.check_length(key_length)?;
        keyed_hash_counter(self.config.hash_algorithm, key_length, self.secret, label, context)
    }

    /// Derive with label and context taken from `params`.
    ///
    /// # Errors
    /// Same as [`KeyDeriver::derive`].
    pub fn derive_with(
        &self,
        params: &CounterKdfParams,
        key_length: impl IntoKeyLength,
    ) -> Result<Vec<u8>> {
        let key_length = self.check_length(key_length)?;
        derive_with_params(self.config.hash_algorithm, self.secret, params, key_length)
    }

    /// Derive one key per `(label, length)` pair under a shared context.
    ///
    /// # Errors
    /// Fails as a whole if any requested length is above the configured maximum.
    pub fn derive_many(
        &self,
        context: &[u8],
        key_specs: &[(&[u8], usize)],
    ) -> Result<Vec<Vec<u8>>> {
        for (_, length) in key_specs {
            self.check_length(*length)?;
        }
        derive_multiple_keys(self.config.hash_algorithm, self.secret, context, key_specs)
    }

    /// 32-byte encryption key for `context`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configured maximum is below 32 bytes.
    pub fn encryption_key(&self, context: &[u8]) -> Result<Vec<u8>> {
        let params = CounterKdfParams::for_encryption().with_context(context);
        self.derive_with(&params, SYMMETRIC_KEY_LENGTH)
    }

    /// 32-byte MAC key for `context`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configured maximum is below 32 bytes.
    pub fn mac_key(&self, context: &[u8]) -> Result<Vec<u8>> {
        let params = CounterKdfParams::for_mac().with_context(context);
        self.derive_with(&params, SYMMETRIC_KEY_LENGTH)
    }

    /// 16-byte IV for `context`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configured maximum is below 16 bytes.
    pub fn iv(&self, context: &[u8]) -> Result<Vec<u8>> {
        let params = CounterKdfParams::for_iv().with_context(context);
        self.derive_with(&params, IV_LENGTH)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use kbkdf_prelude::domains;
    use kbkdf_primitives::HashAlgorithm;

    const SECRET: [u8; 32] = [0x0b; 32];

    #[test]
    fn test_short_secret_rejected() {
        let err = KeyDeriver::new(KdfConfig::for_production(), &[0u8; 31]).unwrap_err();
        assert!(matches!(err, KbkdfError::InvalidKey(_)));
        assert!(KeyDeriver::new(KdfConfig::for_production(), &SECRET).is_ok());
    }

    #[test]
    fn test_empty_secret_allowed_by_default() {
        let deriver = KeyDeriver::new(KdfConfig::default(), &[]).unwrap();
        assert_eq!(deriver.derive(b"label", b"", 16).unwrap().len(), 16);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = KdfConfig::new().with_max_key_length(usize::MAX);
        let err = KeyDeriver::new(config, &SECRET).unwrap_err();
        assert!(matches!(err, KbkdfError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_derive_matches_primitive() {
        let config = KdfConfig::new().with_hash_algorithm(HashAlgorithm::Sha384);
        let deriver = KeyDeriver::new(config, &SECRET).unwrap();
        let a = deriver.derive(b"label", b"context", 70).unwrap();
        let b = keyed_hash_counter(HashAlgorithm::Sha384, 70, &SECRET, b"label", b"context")
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_configured_maximum_enforced() {
        let config = KdfConfig::new().with_max_key_length(24);
        let deriver = KeyDeriver::new(config, &SECRET).unwrap();
        assert_eq!(deriver.derive(b"l", b"c", 24).unwrap().len(), 24);
        assert!(matches!(deriver.derive(b"l", b"c", 25), Err(KbkdfError::InvalidArgument(_))));
        assert!(matches!(deriver.encryption_key(b"c"), Err(KbkdfError::InvalidArgument(_))));
        assert_eq!(deriver.iv(b"c").unwrap().len(), IV_LENGTH);
    }

    #[test]
    fn test_negative_length_rejected() {
        let deriver = KeyDeriver::new(KdfConfig::default(), &SECRET).unwrap();
        assert!(matches!(deriver.derive(b"l", b"c", -1), Err(KbkdfError::InvalidArgument(_))));
    }

    #[test]
    fn test_purpose_keys_use_domain_labels() {
        let deriver = KeyDeriver::new(KdfConfig::default(), &SECRET).unwrap();
        let ctx = b"session-7";
        assert_eq!(
            deriver.encryption_key(ctx).unwrap(),
            deriver.derive(domains::ENCRYPTION_KEY, ctx, 32).unwrap()
        );
        assert_eq!(
            deriver.mac_key(ctx).unwrap(),
            deriver.derive(domains::MAC_KEY, ctx, 32).unwrap()
        );
        assert_eq!(
            deriver.iv(ctx).unwrap(),
            deriver.derive(domains::IV_GENERATION, ctx, 16).unwrap()
        );
    }

    #[test]
    fn test_derive_many_checks_every_length() {
        let config = KdfConfig::new().with_max_key_length(32);
        let deriver = KeyDeriver::new(config, &SECRET).unwrap();
        let ok: [(&[u8], usize); 2] = [(b"a", 32), (b"b", 16)];
        assert_eq!(deriver.derive_many(b"ctx", &ok).unwrap().len(), 2);

        let too_long: [(&[u8], usize); 2] = [(b"a", 16), (b"b", 33)];
        assert!(matches!(
            deriver.derive_many(b"ctx", &too_long),
            Err(KbkdfError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let deriver = KeyDeriver::new(KdfConfig::default(), b"hunter2hunter2").unwrap();
        let shown = format!("{deriver:?}");
        assert!(shown.contains("[14 bytes]"));
        assert!(!shown.contains("hunter2"));
    }
}
