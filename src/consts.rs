// src/consts.rs
//! Shared constants — cipher parameters

/// AES block size in bytes — identical for all three key sizes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Initial capacity of the key → context cache
// Most processes use a handful of keys at most
pub const CACHE_INITIAL_CAPACITY: usize = 5;
