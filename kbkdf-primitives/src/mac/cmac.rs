#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! CMAC (Cipher-based Message Authentication Code) PRF
//!
//! AES-CMAC as specified in NIST SP 800-38B, usable as the PRF of the
//! counter-mode KDF (SP 800-108 names both HMAC and CMAC).
//!
//! - Subkeys K1 and K2 are derived once per key from `L = AES_K(0^128)`
//! - A complete final block is XORed with K1; an incomplete one is padded
//!   with `10..0` and XORed with K2
//! - The tag is the last CBC-MAC state (16 bytes)
//!
//! Input is buffered until finalization so the padding decision can be made
//! on the real final block.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use kbkdf_prelude::error::{KbkdfError, Result};
use tracing::instrument;

use crate::kdf::counter::{IntoKeyLength, counter};
use crate::prf::Prf;

/// AES block size, which is also the CMAC tag size.
pub const CMAC_BLOCK_SIZE: usize = 16;

/// Reduction constant for 128-bit blocks.
const RB: u8 = 0x87;

type Block = [u8; CMAC_BLOCK_SIZE];

#[derive(Clone)]
enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    fn encrypt(&self, block: &mut Block) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block.into()),
            Self::Aes192(cipher) => cipher.encrypt_block(block.into()),
            Self::Aes256(cipher) => cipher.encrypt_block(block.into()),
        }
    }
}

/// An AES key with its precomputed CMAC subkeys.
#[derive(Clone)]
pub struct CmacKey {
    cipher: BlockCipher,
    k1: Block,
    k2: Block,
}

impl std::fmt::Debug for CmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmacKey").field("key_bits", &self.key_bits()).finish_non_exhaustive()
    }
}

impl CmacKey {
    /// Validate an AES-128/192/256 key and derive K1, K2.
    ///
    /// # Errors
    /// Returns `KbkdfError::InvalidKey` unless `key` is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_e: aes::cipher::InvalidLength| {
            KbkdfError::InvalidKey(format!(
                "CMAC keys must be 16, 24, or 32 bytes, got {}",
                key.len()
            ))
        };
        let cipher = match key.len() {
            16 => BlockCipher::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            24 => BlockCipher::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            32 => BlockCipher::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
            _ => return Err(invalid(aes::cipher::InvalidLength)),
        };

        let mut l = [0u8; CMAC_BLOCK_SIZE];
        cipher.encrypt(&mut l);
        let k1 = double(&l);
        let k2 = double(&k1);

        Ok(Self { cipher, k1, k2 })
    }

    /// AES key size in bits.
    #[must_use]
    pub fn key_bits(&self) -> usize {
        match self.cipher {
            BlockCipher::Aes128(_) => 128,
            BlockCipher::Aes192(_) => 192,
            BlockCipher::Aes256(_) => 256,
        }
    }

    /// One-shot AES-CMAC tag.
    #[must_use]
    pub fn tag(&self, data: &[u8]) -> Block {
        let mut state = [0u8; CMAC_BLOCK_SIZE];

        // The final block gets special treatment, even when the message is empty.
        let rem = data.len() % CMAC_BLOCK_SIZE;
        let split =
            if rem == 0 { data.len().saturating_sub(CMAC_BLOCK_SIZE) } else { data.len() - rem };
        let (head, tail) = data.split_at(split);

        for chunk in head.chunks_exact(CMAC_BLOCK_SIZE) {
            xor_into(&mut state, chunk);
            self.cipher.encrypt(&mut state);
        }

        let mut last = [0u8; CMAC_BLOCK_SIZE];
        if tail.len() == CMAC_BLOCK_SIZE {
            last.copy_from_slice(tail);
            xor_into(&mut last, &self.k1);
        } else {
            let (filled, pad) = last.split_at_mut(tail.len());
            filled.copy_from_slice(tail);
            if let Some(first) = pad.first_mut() {
                *first = 0x80;
            }
            xor_into(&mut last, &self.k2);
        }

        xor_into(&mut state, &last);
        self.cipher.encrypt(&mut state);
        state
    }
}

/// Multiply by `x` in GF(2^128): shift left one bit, reduce by `RB` on carry.
fn double(block: &Block) -> Block {
    let mut out = [0u8; CMAC_BLOCK_SIZE];
    let mut carry = 0u8;
    for (o, &b) in out.iter_mut().zip(block.iter()).rev() {
        *o = (b << 1) | carry;
        carry = b >> 7;
    }
    if carry == 1 {
        if let Some(last) = out.last_mut() {
            *last ^= RB;
        }
    }
    out
}

fn xor_into(acc: &mut Block, other: &[u8]) {
    for (a, b) in acc.iter_mut().zip(other) {
        *a ^= b;
    }
}

/// AES-CMAC as a [`Prf`]. Cheap to create: the key schedule and subkeys live
/// in the borrowed [`CmacKey`].
#[derive(Clone)]
pub struct CmacPrf<'k> {
    key: &'k CmacKey,
    buffer: Vec<u8>,
}

impl<'k> CmacPrf<'k> {
    /// Fresh PRF instance over `key`.
    #[must_use]
    pub fn new(key: &'k CmacKey) -> Self {
        Self { key, buffer: Vec::new() }
    }
}

impl Prf for CmacPrf<'_> {
    fn output_size(&self) -> usize {
        CMAC_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    fn finalize_into(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.key.tag(&self.buffer));
    }
}

/// Counter-mode KDF with AES-CMAC as the PRF.
///
/// A thin composition over [`counter`]: every iteration uses a fresh
/// [`CmacPrf`] over the same key.
///
/// # Errors
/// Returns `KbkdfError::InvalidKey` for a key that is not 16, 24 or 32 bytes,
/// and `KbkdfError::InvalidArgument` for an out-of-range `key_length`.
#[instrument(level = "debug", skip_all, fields(key_len = key.len()))]
pub fn cmac_counter(
    key: &[u8],
    key_length: impl IntoKeyLength,
    label: &[u8],
    context: &[u8],
) -> Result<Vec<u8>> {
    let key = CmacKey::new(key)?;
    counter(|| Ok(CmacPrf::new(&key)), key_length, label, context)
}
