//! # kbkdf Core
//!
//! Application-facing layer over the counter-mode KDF in `kbkdf-primitives`:
//!
//! - [`KdfConfig`]: PRF hash selection and policy limits, with builders
//! - [`KeyDeriver`]: derives labelled keys from one borrowed primary secret
//! - [`logging`]: `tracing` subscriber setup and length-only redaction
//!
//! ## Quick Start
//!
//! ```rust
//! use kbkdf_core::{KdfConfig, KeyDeriver};
//! use kbkdf_primitives::HashAlgorithm;
//!
//! let config = KdfConfig::new().with_hash_algorithm(HashAlgorithm::Sha384).build()?;
//! let secret = b"primary secret from key agreement";
//! let deriver = KeyDeriver::new(config, secret)?;
//!
//! let key = deriver.derive(b"record layer", b"conn-42", 48)?;
//! assert_eq!(key.len(), 48);
//! # Ok::<(), kbkdf_prelude::KbkdfError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod deriver;
pub mod logging;

pub use config::KdfConfig;
pub use deriver::{IV_LENGTH, KeyDeriver, SYMMETRIC_KEY_LENGTH};
pub use logging::{init_tracing, sanitize_data};

pub use kbkdf_prelude::{ErrorCategory, KbkdfError, Result};
pub use kbkdf_primitives::{HashAlgorithm, MAX_KEY_LENGTH};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
