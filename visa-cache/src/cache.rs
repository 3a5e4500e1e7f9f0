use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::warn;

use crate::CacheError;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Key of the singleton visa map entry.
pub const MAP_KEY: &str = "visa-map";

/// Current wall clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Route key for the check cache, `"SA-FR"`.
pub fn check_key(passport: &str, destination: &str) -> String {
    format!(
        "{}-{}",
        passport.trim().to_ascii_uppercase(),
        destination.trim().to_ascii_uppercase()
    )
}

/// Cache classes with independent expiry policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheClass {
    /// Per-route detailed visa checks
    Check,
    /// Bulk color map for the home passport
    Map,
}

impl CacheClass {
    pub fn default_ttl(&self) -> Duration {
        match self {
            CacheClass::Check => DAY,
            CacheClass::Map => DAY * 7,
        }
    }

    /// Storage partition holding entries of this class.
    pub fn partition(&self) -> &'static str {
        match self {
            CacheClass::Check => "visa_check",
            CacheClass::Map => "visa_map",
        }
    }
}

/// Cached payload stamped with its write time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Epoch milliseconds of the write
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: i64) -> Self {
        Self { data, timestamp }
    }

    /// Binary hit/miss: usable iff `now - timestamp < ttl`.
    pub fn is_fresh_at(&self, now_ms: i64, ttl: Duration) -> bool {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(self.timestamp) < ttl_ms
    }
}

impl<T: Serialize> CacheEntry<T> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(self).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

impl<T: DeserializeOwned> CacheEntry<T> {
    /// Decode a stored entry. Corrupt bytes are logged and reported as `None`
    /// so the caller sees an ordinary miss.
    pub fn from_bytes(key: &str, bytes: &[u8]) -> Option<Self> {
        match serde_json::from_slice(bytes) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(key, error = %err, "Corrupt cache entry, treating as miss");
                None
            }
        }
    }
}

/// Key-value cache with a fixed TTL per instance.
///
/// Expired and missing entries are indistinguishable to callers. Writes
/// overwrite unconditionally (last write wins).
#[async_trait]
pub trait VisaCache<T>: Send + Sync
where
    T: Send + Sync + Serialize + DeserializeOwned + 'static,
{
    fn ttl(&self) -> Duration;

    /// Read `key` as of `now_ms`.
    async fn get_at(&self, key: &str, now_ms: i64) -> Result<Option<T>, CacheError>;

    /// Store `data` under `key` stamped with `timestamp_ms`.
    async fn put_at(
        &self,
        key: &str,
        data: T,
        timestamp_ms: i64,
    ) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<T>, CacheError> {
        self.get_at(key, now_millis()).await
    }

    async fn put(&self, key: &str, data: T) -> Result<(), CacheError> {
        self.put_at(key, data, now_millis()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key_is_uppercase() {
        assert_eq!(check_key("sa", " fr "), "SA-FR");
    }

    #[test]
    fn test_default_ttls() {
        assert_eq!(CacheClass::Check.default_ttl(), Duration::from_secs(86_400));
        assert_eq!(CacheClass::Map.default_ttl(), Duration::from_secs(604_800));
    }

    #[test]
    fn test_freshness_is_binary() {
        let ttl = Duration::from_secs(10);
        let entry = CacheEntry::new("x", 1_000);
        assert!(entry.is_fresh_at(1_000, ttl));
        assert!(entry.is_fresh_at(10_999, ttl));
        assert!(!entry.is_fresh_at(11_000, ttl));
        assert!(!entry.is_fresh_at(11_001, ttl));
    }

    #[test]
    fn test_corrupt_bytes_decode_to_none() {
        assert!(CacheEntry::<String>::from_bytes("k", b"{not json").is_none());
        assert!(CacheEntry::<String>::from_bytes("k", b"{\"data\":1}").is_none());
    }
}
