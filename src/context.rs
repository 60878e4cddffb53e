// src/context.rs
//! CipherContext — one initialized AES cipher bound to one key
//!
//! The expensive part of AES setup is the key schedule expansion; a context
//! holds the expanded schedule plus the IV and is built once per key, then
//! shared by every caller through [`crate::cache::CipherCache`].
//!
//! The IV is the first block-size bytes of the key itself. This mirrors the
//! behavior this crate replaces and keeps ciphertext byte-compatible with
//! it; it also makes encryption deterministic per key+plaintext, which
//! callers rely on. See DESIGN.md before reusing this scheme elsewhere.

use aes::cipher::block_padding::NoPadding;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::consts::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use crate::error::CryptoError;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Expanded key schedule for whichever AES variant the key length selects
#[derive(Debug)]
enum AesKind {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// A fully initialized, reusable cipher for a specific key
///
/// Immutable after construction. Each transform starts a fresh CBC chain
/// from the stored IV, so identical inputs always produce identical
/// outputs.
#[derive(Debug)]
pub struct CipherContext {
    kind: AesKind,
    iv: [u8; AES_BLOCK_SIZE],
}

impl CipherContext {
    /// Expand the key schedule and derive the IV
    ///
    /// Fails with `InvalidKeyLength` for any key that is not exactly
    /// 16, 24, or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let kind = match key.len() {
            AES128_KEY_SIZE => Aes128::new_from_slice(key).map(AesKind::Aes128),
            AES192_KEY_SIZE => Aes192::new_from_slice(key).map(AesKind::Aes192),
            AES256_KEY_SIZE => Aes256::new_from_slice(key).map(AesKind::Aes256),
            other => return Err(CryptoError::InvalidKeyLength(other)),
        }
        .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;

        // Valid keys are always at least one block long
        let mut iv = [0u8; AES_BLOCK_SIZE];
        iv.copy_from_slice(&key[..AES_BLOCK_SIZE]);

        Ok(Self { kind, iv })
    }

    /// Block size of the underlying cipher — 16 for every AES key size
    pub fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    /// CBC-encrypt `buf` in place
    ///
    /// `buf` must already be padded to a block multiple.
    pub(crate) fn encrypt_in_place(&self, buf: &mut [u8]) {
        let iv = GenericArray::from_slice(&self.iv);
        let len = buf.len();
        // NoPadding never fails on a block-aligned, exact-size buffer
        let result = match &self.kind {
            AesKind::Aes128(c) => Aes128CbcEnc::inner_iv_init(c.clone(), iv)
                .encrypt_padded_mut::<NoPadding>(buf, len),
            AesKind::Aes192(c) => Aes192CbcEnc::inner_iv_init(c.clone(), iv)
                .encrypt_padded_mut::<NoPadding>(buf, len),
            AesKind::Aes256(c) => Aes256CbcEnc::inner_iv_init(c.clone(), iv)
                .encrypt_padded_mut::<NoPadding>(buf, len),
        };
        result.expect("buffer is padded to a block multiple");
    }

    /// CBC-decrypt `buf` in place
    ///
    /// Fails with `MalformedCiphertext` when `buf` is not a block multiple.
    pub(crate) fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        let iv = GenericArray::from_slice(&self.iv);
        let result = match &self.kind {
            AesKind::Aes128(c) => Aes128CbcDec::inner_iv_init(c.clone(), iv)
                .decrypt_padded_mut::<NoPadding>(buf),
            AesKind::Aes192(c) => Aes192CbcDec::inner_iv_init(c.clone(), iv)
                .decrypt_padded_mut::<NoPadding>(buf),
            AesKind::Aes256(c) => Aes256CbcDec::inner_iv_init(c.clone(), iv)
                .decrypt_padded_mut::<NoPadding>(buf),
        };
        result
            .map(|_| ())
            .map_err(|_| CryptoError::MalformedCiphertext(
                "length is not a multiple of the block size".into(),
            ))
    }
}
