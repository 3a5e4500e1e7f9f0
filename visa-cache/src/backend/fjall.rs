use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use serde::{Serialize, de::DeserializeOwned};
use std::{marker::PhantomData, path::Path, time::Duration};
use tracing::{debug, info};

use crate::{CacheClass, CacheEntry, CacheError, VisaCache};

/// Durable store backing every cache class.
///
/// Layout: one fjall keyspace, one partition per [`CacheClass`], keys are the
/// cache keys, values are JSON encoded [`CacheEntry`] values.
#[derive(Clone)]
pub struct CacheStore {
    keyspace: Keyspace,
}

impl CacheStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        let keyspace = Config::new(path).open()?;
        info!(path = %path.display(), "Cache store opened");
        Ok(Self { keyspace })
    }

    /// Typed cache for `class` with its own TTL.
    pub fn cache<T>(
        &self,
        class: CacheClass,
        ttl: Duration,
    ) -> Result<FjallVisaCache<T>, CacheError> {
        let partition = self
            .keyspace
            .open_partition(class.partition(), PartitionCreateOptions::default())?;
        Ok(FjallVisaCache {
            keyspace: self.keyspace.clone(),
            partition,
            class,
            ttl,
            _marker: PhantomData,
        })
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore").finish()
    }
}

/// fjall-backed [`VisaCache`].
///
/// No lock is taken: fjall partitions accept concurrent readers and writers,
/// and concurrent writes to one key resolve as last write wins.
pub struct FjallVisaCache<T> {
    keyspace: Keyspace,
    partition: PartitionHandle,
    class: CacheClass,
    ttl: Duration,
    _marker: PhantomData<T>,
}

impl<T> FjallVisaCache<T> {
    pub fn class(&self) -> CacheClass {
        self.class
    }

    /// Stored bytes for `key`, regardless of freshness.
    pub fn raw(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.partition.get(key)?.map(|v| v.to_vec()))
    }

    /// Overwrite the stored bytes for `key` verbatim.
    pub fn put_raw(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        self.partition.insert(key, bytes)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

impl<T> std::fmt::Debug for FjallVisaCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FjallVisaCache")
            .field("class", &self.class)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[async_trait]
impl<T> VisaCache<T> for FjallVisaCache<T>
where
    T: Send + Sync + Serialize + DeserializeOwned + 'static,
{
    fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get_at(&self, key: &str, now_ms: i64) -> Result<Option<T>, CacheError> {
        let Some(bytes) = self.partition.get(key)? else {
            debug!(class = ?self.class, key, "Cache miss");
            return Ok(None);
        };

        let Some(entry) = CacheEntry::<T>::from_bytes(key, &bytes) else {
            return Ok(None);
        };

        if entry.is_fresh_at(now_ms, self.ttl) {
            debug!(class = ?self.class, key, "Cache hit");
            Ok(Some(entry.data))
        } else {
            debug!(class = ?self.class, key, "Cache entry expired");
            Ok(None)
        }
    }

    async fn put_at(
        &self,
        key: &str,
        data: T,
        timestamp_ms: i64,
    ) -> Result<(), CacheError> {
        let bytes = CacheEntry::new(data, timestamp_ms).to_bytes()?;
        self.partition.insert(key, bytes)?;

        // Sync so a restart within the TTL does not force a refetch.
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(class = ?self.class, key, "Cached entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Payload {
        value: String,
    }

    fn payload(value: &str) -> Payload {
        Payload {
            value: value.to_string(),
        }
    }

    fn make_cache(
        class: CacheClass,
    ) -> (tempfile::TempDir, FjallVisaCache<Payload>) {
        let dir = tempdir().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let cache = store.cache(class, class.default_ttl()).unwrap();
        (dir, cache)
    }

    #[tokio::test]
    async fn put_and_get() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Check);
        cache.put("SA-FR", payload("fr")).await?;
        assert_eq!(cache.get("SA-FR").await?, Some(payload("fr")));
        assert_eq!(cache.get("SA-DE").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn ttl_boundary_check_class() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Check);
        let t = 1_700_000_000_000;
        let ttl = CacheClass::Check.default_ttl().as_millis() as i64;
        cache.put_at("SA-FR", payload("fr"), t).await?;

        assert!(cache.get_at("SA-FR", t + ttl - 1).await?.is_some());
        assert!(cache.get_at("SA-FR", t + ttl + 1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn ttl_boundary_map_class() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Map);
        let t = 1_700_000_000_000;
        let ttl = CacheClass::Map.default_ttl().as_millis() as i64;
        cache.put_at(crate::MAP_KEY, payload("map"), t).await?;

        assert!(cache.get_at(crate::MAP_KEY, t + ttl - 1).await?.is_some());
        assert!(cache.get_at(crate::MAP_KEY, t + ttl + 1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn expired_entry_is_kept_on_disk() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Check);
        cache.put_at("SA-FR", payload("old"), 0).await?;
        assert!(cache.get("SA-FR").await?.is_none());
        // never purged, only ignored
        assert!(cache.raw("SA-FR")?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn last_write_wins() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Check);
        cache.put("SA-FR", payload("first")).await?;
        cache.put("SA-FR", payload("second")).await?;
        assert_eq!(cache.get("SA-FR").await?, Some(payload("second")));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_entry_is_a_miss() -> Result<(), CacheError> {
        let (_dir, cache) = make_cache(CacheClass::Check);
        cache.put_raw("SA-FR", b"\x00garbage")?;
        assert_eq!(cache.get("SA-FR").await?, None);

        // next successful write repairs it
        cache.put("SA-FR", payload("fr")).await?;
        assert_eq!(cache.get("SA-FR").await?, Some(payload("fr")));
        Ok(())
    }

    #[tokio::test]
    async fn classes_do_not_share_keys() -> Result<(), CacheError> {
        let dir = tempdir().unwrap();
        let store = CacheStore::open(dir.path())?;
        let check: FjallVisaCache<Payload> =
            store.cache(CacheClass::Check, CacheClass::Check.default_ttl())?;
        let map: FjallVisaCache<Payload> =
            store.cache(CacheClass::Map, CacheClass::Map.default_ttl())?;

        check.put("same", payload("check")).await?;
        assert_eq!(map.get("same").await?, None);
        Ok(())
    }
}
