//! In-memory implementation of the VisaCache trait. Entries are kept as
//! encoded bytes so that it behaves like the durable backend, corrupt entries
//! included. Nothing survives a restart.
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::{collections::HashMap, marker::PhantomData, sync::Mutex, time::Duration};

use crate::{CacheEntry, CacheError, VisaCache};

pub struct InMemoryVisaCache<T> {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    ttl: Duration,
    _marker: PhantomData<T>,
}

impl<T> InMemoryVisaCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            _marker: PhantomData,
        }
    }

    pub fn raw(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    pub fn put_raw(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> std::fmt::Debug for InMemoryVisaCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryVisaCache")
            .field("ttl", &self.ttl)
            .field("len", &self.len())
            .finish()
    }
}

#[async_trait]
impl<T> VisaCache<T> for InMemoryVisaCache<T>
where
    T: Send + Sync + Serialize + DeserializeOwned + 'static,
{
    fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get_at(&self, key: &str, now_ms: i64) -> Result<Option<T>, CacheError> {
        let Some(bytes) = self.raw(key)? else {
            return Ok(None);
        };
        Ok(CacheEntry::<T>::from_bytes(key, &bytes)
            .filter(|entry| entry.is_fresh_at(now_ms, self.ttl))
            .map(|entry| entry.data))
    }

    async fn put_at(
        &self,
        key: &str,
        data: T,
        timestamp_ms: i64,
    ) -> Result<(), CacheError> {
        let bytes = CacheEntry::new(data, timestamp_ms).to_bytes()?;
        self.put_raw(key, &bytes)
    }
}
