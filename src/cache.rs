// src/cache.rs
//! CipherCache — process-wide memoization of cipher contexts
//!
//! Expanding an AES key schedule on every call is wasteful when the same
//! handful of keys is used over and over. The cache maps raw key bytes to a
//! shared [`CipherContext`], guaranteeing single initialization per key even
//! when many threads miss on the same key at once.
//!
//! The cache is an explicit value rather than a package-level global:
//! construct one per process (usually inside a [`crate::crypter::Crypter`])
//! and share it by reference. Tests get isolation for free.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::consts::CACHE_INITIAL_CAPACITY;
use crate::context::CipherContext;
use crate::error::CryptoError;

/// Key-indexed cache of initialized cipher contexts
///
/// No eviction: contexts live as long as the cache. Acceptable because a
/// process's key set is small and bounded by caller behavior; callers with
/// unbounded key diversity should front this with their own policy.
pub struct CipherCache {
    map: RwLock<HashMap<Vec<u8>, Arc<CipherContext>>>,
}

impl CipherCache {
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(CACHE_INITIAL_CAPACITY)),
        }
    }

    /// Return the context for `key`, constructing it on first use
    ///
    /// The fast path takes only the read lock. On a miss the write lock is
    /// held across the re-check, construction, and insert, so concurrent
    /// first users of the same key construct exactly one context. Hold time
    /// is bounded by one key schedule expansion.
    ///
    /// Construction failures are returned but never cached: an invalid key
    /// fails identically on every call and cannot shadow a later valid key.
    pub fn get_or_create(&self, key: &[u8]) -> Result<Arc<CipherContext>, CryptoError> {
        if let Some(ctx) = self.map.read().unwrap().get(key) {
            return Ok(Arc::clone(ctx));
        }

        let mut map = self.map.write().unwrap();
        // Another thread may have inserted while we waited on the lock
        if let Some(ctx) = map.get(key) {
            return Ok(Arc::clone(ctx));
        }

        #[cfg(feature = "logging")]
        tracing::debug!(key_len = key.len(), "cipher cache miss, initializing context");

        let ctx = Arc::new(CipherContext::new(key)?);
        map.insert(key.to_vec(), Arc::clone(&ctx));
        Ok(ctx)
    }

    /// Number of cached contexts
    pub fn len(&self) -> usize {
        self.map.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CipherCache {
    fn default() -> Self {
        Self::new()
    }
}
