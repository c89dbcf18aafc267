//! Signature-keyed cache for generated recipe drafts.
//!
//! Two backends share the [`RecipeCache`] trait: Redis when a URL is
//! configured, and a process-local map otherwise. Values are stored as JSON
//! strings so the trait stays object safe.

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::AppResult, services::signature::Signature};

pub mod memory;
pub mod redis;

mod macros;

pub use self::memory::MemoryCache;
pub use self::redis::{create_redis_client, CacheWriterHandle, RedisCache};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Draft generated for a recipe idea on an ingredient profile
    RecipeDraft { signature: Signature, title: String },
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::RecipeDraft { signature, title } => {
                write!(f, "draft:{}:{}", signature.digest(), title.trim().to_lowercase())
            }
        }
    }
}

/// Storage backend for cached JSON values
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeCache: Send + Sync {
    /// Fetches the raw JSON stored under `key`, if any
    async fn get(&self, key: &CacheKey) -> AppResult<Option<String>>;

    /// Queues a write without waiting for it to land
    fn set_in_background(&self, key: &CacheKey, value: String, ttl: u64);

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Reads and deserializes a cached value.
///
/// Backend and decoding failures are logged and reported as a miss.
pub async fn get_json<T: DeserializeOwned>(cache: &dyn RecipeCache, key: &CacheKey) -> Option<T> {
    let raw = match cache.get(key).await {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, backend = cache.name(), key = %key, "Cache read failed");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            tracing::debug!(backend = cache.name(), key = %key, "Cache hit");
            Some(value)
        }
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Cache deserialization error");
            None
        }
    }
}

/// Serializes a value and hands it to the backend's background writer
pub fn set_json_in_background<T: Serialize>(cache: &dyn RecipeCache, key: &CacheKey, value: &T, ttl: u64) {
    match serde_json::to_string(value) {
        Ok(json) => cache.set_in_background(key, json, ttl),
        Err(e) => tracing::error!(error = %e, "Cache serialization error"),
    }
}
