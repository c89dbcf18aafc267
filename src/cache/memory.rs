use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::{CacheKey, RecipeCache};
use crate::error::AppResult;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Process-local draft cache used when no Redis URL is configured
///
/// Entries expire lazily: a stale entry is dropped on the read that finds it.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl RecipeCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<String>> {
        let key = key.to_string();
        let mut entries = self.lock();
        match entries.get(&key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(&key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set_in_background(&self, key: &CacheKey, value: String, ttl: u64) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        };
        self.lock().insert(key.to_string(), entry);
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
