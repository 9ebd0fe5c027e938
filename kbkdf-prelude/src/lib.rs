//! kbkdf Prelude Crate
//!
//! Common types shared by the kbkdf crates: the error taxonomy used by every
//! derivation entry point and the standard purpose labels used for domain
//! separation.
//!
//! # Example
//!
//! ```rust
//! use kbkdf_prelude::{KbkdfError, Result};
//!
//! fn checked_length(len: i64) -> Result<usize> {
//!     usize::try_from(len)
//!         .map_err(|_e| KbkdfError::InvalidArgument("negative key length requested".to_string()))
//! }
//!
//! assert!(checked_length(-1).is_err());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Domain separation labels for common key purposes.
pub mod domains;
/// Error taxonomy for key derivation.
pub mod error;

#[cfg(test)]
mod property_based_testing;

pub use error::{ErrorCategory, KbkdfError, Result};
