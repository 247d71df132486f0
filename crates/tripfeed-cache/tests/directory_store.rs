//! Integration tests for the durable directory-backed cache.

use std::time::Duration;

use tripfeed_cache::{ExpiringCache, Store};

const TTL: Duration = Duration::from_secs(3600);

#[tokio::test]
async fn entries_survive_reopening_the_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    let cache = ExpiringCache::new(Store::directory(dir.path()));
    cache
        .set("cached_google_hotels_Goa", &vec!["Taj", "Leela"])
        .await;
    drop(cache);

    let reopened = ExpiringCache::new(Store::directory(dir.path()));
    let hit: Option<Vec<String>> = reopened.get("cached_google_hotels_Goa", TTL).await;
    assert_eq!(hit, Some(vec!["Taj".to_string(), "Leela".to_string()]));
}

#[tokio::test]
async fn directory_is_created_on_first_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("app").join("cache");

    let cache = ExpiringCache::new(Store::directory(&nested));
    assert_eq!(cache.get::<u32>("k", TTL).await, None);
    cache.set("k", &7u32).await;

    assert!(nested.is_dir());
    assert_eq!(cache.get::<u32>("k", TTL).await, Some(7));
}

#[tokio::test]
async fn keys_with_spaces_and_slashes_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = ExpiringCache::new(Store::directory(dir.path()));

    let key = "weather_cache_Panaji / North Goa";
    cache.set(key, &42u32).await;
    assert_eq!(cache.get::<u32>(key, TTL).await, Some(42));

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, ["weather_cache_Panaji%20%2F%20North%20Goa.json"]);
}

#[tokio::test]
async fn non_ascii_keys_are_listed_back_decoded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = ExpiringCache::new(Store::directory(dir.path()));

    cache.set("weather_cache_São_Paulo", &1u32).await;
    cache.set("weather_cache_Zürich", &2u32).await;
    cache.set("cached_google_hotels_Goa", &3u32).await;

    assert_eq!(cache.clear("weather_cache_").await, 2);
    assert_eq!(cache.get::<u32>("weather_cache_Zürich", TTL).await, None);
    assert_eq!(cache.get::<u32>("cached_google_hotels_Goa", TTL).await, Some(3));
}

#[tokio::test]
async fn clear_by_prefix_deletes_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = ExpiringCache::new(Store::directory(dir.path()));

    cache.set("weather_cache_Goa", &1u32).await;
    cache.set("weather_cache_Mumbai", &2u32).await;
    cache.set("cached_google_restaurants_Goa", &3u32).await;

    assert_eq!(cache.clear("weather_cache_").await, 2);

    let remaining = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(remaining, 1);
    assert_eq!(
        cache.get::<u32>("cached_google_restaurants_Goa", TTL).await,
        Some(3)
    );
}

#[tokio::test]
async fn clear_on_missing_directory_removes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = ExpiringCache::new(Store::directory(dir.path().join("never-created")));
    assert_eq!(cache.clear("weather_cache_").await, 0);
}

#[tokio::test]
async fn corrupt_file_is_treated_as_miss() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("k.json"), "{ not json").unwrap();

    let cache = ExpiringCache::new(Store::directory(dir.path()));
    assert_eq!(cache.get::<u32>("k", TTL).await, None);

    cache.set("k", &5u32).await;
    assert_eq!(cache.get::<u32>("k", TTL).await, Some(5));
}
