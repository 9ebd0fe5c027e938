//! # kbkdf Logging Utilities
//!
//! Structured logging through `tracing`. Derivation spans carry lengths only;
//! secrets, labels, contexts and derived keys are never written to a log.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kbkdf_core::logging::{init_tracing, sanitize_data};
//!
//! // Sets the global tracing subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let secret = b"sensitive_key_material";
//! tracing::info!("Deriver created with secret {}", sanitize_data(secret));
//! ```

use std::fmt;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "kbkdf=info";

/// Install a compact fmt subscriber filtered by `RUST_LOG` (default
/// [`DEFAULT_FILTER`]).
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("kbkdf logging initialized");
    Ok(())
}

/// Wrap bytes so that formatting them reveals only their length.
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedData<'_> {
    SanitizedData(data)
}

/// Display wrapper that prints `[N bytes]` instead of content.
pub struct SanitizedData<'a>(&'a [u8]);

impl fmt::Display for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} bytes]", self.0.len())
    }
}

impl fmt::Debug for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
