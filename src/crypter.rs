// src/crypter.rs
//! Encrypt/Decrypt entry points — pad, transform, unpad
//!
//! A [`Crypter`] owns its [`CipherCache`]; all methods take `&self`, so one
//! instance shared by reference (or in an `Arc`) serves any number of
//! threads.

use crate::cache::CipherCache;
use crate::error::CryptoError;
use crate::padding;

pub struct Crypter {
    cache: CipherCache,
}

impl Crypter {
    pub fn new() -> Self {
        Self {
            cache: CipherCache::new(),
        }
    }

    /// AES-CBC encrypt `plaintext` under `key`
    ///
    /// The key must be 16, 24, or 32 bytes. Output length is the plaintext
    /// length rounded up to the next block multiple (always strictly
    /// larger, since padding adds at least one byte).
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let ctx = self.cache.get_or_create(key)?;
        let mut buf = padding::pad(plaintext, ctx.block_size());
        ctx.encrypt_in_place(&mut buf);
        Ok(buf)
    }

    /// AES-CBC decrypt `ciphertext` under `key`
    ///
    /// Fails with `InvalidKeyLength` for an unsupported key, and with
    /// `MalformedCiphertext` when the input is empty, is not a multiple of
    /// the block size, or carries an out-of-range pad byte.
    pub fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let ctx = self.cache.get_or_create(key)?;

        // An empty input is trivially block-aligned but can never carry
        // valid padding; reject it before running the transform.
        if ciphertext.is_empty() || ciphertext.len() % ctx.block_size() != 0 {
            return Err(CryptoError::MalformedCiphertext(format!(
                "length {} is not a positive multiple of the {}-byte block size",
                ciphertext.len(),
                ctx.block_size()
            )));
        }

        let mut buf = ciphertext.to_vec();
        ctx.decrypt_in_place(&mut buf)?;

        let plaintext_len = padding::unpad(&buf)?.len();
        buf.truncate(plaintext_len);
        Ok(buf)
    }

    /// The underlying context cache
    pub fn cache(&self) -> &CipherCache {
        &self.cache
    }
}

impl Default for Crypter {
    fn default() -> Self {
        Self::new()
    }
}
