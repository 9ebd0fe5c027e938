#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key Derivation Functions
//!
//! - **counter**: SP 800-108 KDF in Counter Mode over any [`Prf`](crate::Prf)
//! - **keyed_hash**: the same construction with HMAC bound as the PRF
//! - **params**: labelled-key helpers built on the keyed-hash variant

pub mod counter;
pub mod keyed_hash;
pub mod params;

pub use counter::*;
pub use keyed_hash::*;
pub use params::*;
