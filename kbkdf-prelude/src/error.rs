//! Core Error Types for kbkdf
//!
//! Key derivation is a pure function over in-memory data, so every failure is
//! a logic error in the caller or in the PRF it supplied. Nothing here is
//! transient and nothing is retried.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use thiserror::Error;

/// Result type alias for kbkdf operations
pub type Result<T> = std::result::Result<T, KbkdfError>;

/// Error type for all kbkdf operations
#[derive(Debug, Error, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KbkdfError {
    /// The caller passed an argument the derivation cannot honor, such as a
    /// negative or over-limit output length.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller-supplied PRF is malformed (e.g. reports a zero-length digest)
    /// or could not be instantiated.
    #[error("Invalid PRF: {0}")]
    InvalidPrf(String),

    /// A PRF binding rejected the secret keying material.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Which party is responsible for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorCategory {
    /// The calling code passed invalid inputs.
    Caller,
    /// A dependency supplied by the caller (the PRF or its key) is malformed.
    Dependency,
    /// The configuration handed to the deriver is inconsistent.
    Configuration,
}

impl KbkdfError {
    /// Classify the error by responsible party.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument(_) => ErrorCategory::Caller,
            Self::InvalidPrf(_) | Self::InvalidKey(_) => ErrorCategory::Dependency,
            Self::InvalidConfiguration(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether retrying the same call could succeed. Always `false`: derivation
    /// is deterministic, so a failed call fails identically every time.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
