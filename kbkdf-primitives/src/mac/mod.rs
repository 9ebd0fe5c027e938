#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Message Authentication Codes
//!
//! PRF bindings for the counter-mode KDF (HMAC, CMAC).

pub mod cmac;
pub mod hmac;

pub use self::cmac::*;
pub use self::hmac::*;
