pub mod fjall;
pub mod memory;

pub use self::fjall::{CacheStore, FjallVisaCache};
pub use memory::InMemoryVisaCache;
