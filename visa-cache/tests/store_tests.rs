use serde::{Deserialize, Serialize};
use tempfile::tempdir;
use visa_cache::{
    CacheClass, CacheError, CacheStore, FjallVisaCache, VisaCache, check_key,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Rule {
    passport: String,
    destination: String,
    rule: String,
}

fn rule() -> Rule {
    Rule {
        passport: "SA".to_string(),
        destination: "FR".to_string(),
        rule: "Visa required".to_string(),
    }
}

#[tokio::test]
async fn entries_survive_reopen() -> Result<(), CacheError> {
    let dir = tempdir().unwrap();
    let key = check_key("sa", "fr");

    {
        let store = CacheStore::open(dir.path())?;
        let cache: FjallVisaCache<Rule> =
            store.cache(CacheClass::Check, CacheClass::Check.default_ttl())?;
        cache.put(&key, rule()).await?;
    }

    let store = CacheStore::open(dir.path())?;
    let cache: FjallVisaCache<Rule> =
        store.cache(CacheClass::Check, CacheClass::Check.default_ttl())?;
    assert_eq!(cache.get(&key).await?, Some(rule()));
    Ok(())
}

#[tokio::test]
async fn configured_ttl_overrides_class_default() -> Result<(), CacheError> {
    let dir = tempdir().unwrap();
    let store = CacheStore::open(dir.path())?;
    let cache: FjallVisaCache<Rule> =
        store.cache(CacheClass::Check, std::time::Duration::from_secs(1))?;

    cache.put_at("SA-FR", rule(), 0).await?;
    assert!(cache.get_at("SA-FR", 999).await?.is_some());
    assert!(cache.get_at("SA-FR", 1_000).await?.is_none());
    assert_eq!(cache.ttl(), std::time::Duration::from_secs(1));
    Ok(())
}

#[tokio::test]
async fn concurrent_writers_last_write_wins() -> Result<(), CacheError> {
    let dir = tempdir().unwrap();
    let store = CacheStore::open(dir.path())?;
    let cache = std::sync::Arc::new(
        store.cache::<Rule>(CacheClass::Check, CacheClass::Check.default_ttl())?,
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let mut r = rule();
            r.rule = format!("write-{i}");
            cache.put("SA-FR", r).await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    let stored = cache.get("SA-FR").await?.unwrap();
    assert!(stored.rule.starts_with("write-"));
    Ok(())
}
