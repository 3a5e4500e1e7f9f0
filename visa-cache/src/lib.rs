//! TTL caches for visa provider responses.
//!
//! Provider calls are paid, so every response is cached under a cache class
//! with its own expiry policy. The crate offers a trait-based API with two
//! backends:
//! - `FjallVisaCache`: durable, survives restarts (fjall LSM keyspace)
//! - `InMemoryVisaCache`: same semantics, process lifetime only

mod backend;
mod cache;
mod error;

pub use backend::{CacheStore, FjallVisaCache, InMemoryVisaCache};
pub use cache::{
    CacheClass, CacheEntry, MAP_KEY, VisaCache, check_key, now_millis,
};
pub use error::CacheError;
