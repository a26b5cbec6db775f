//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use asset_fs::app::{
    AssetCategory, AssetId, AssetIdentity, AssetStore, CacheConfig, CacheManager, DiskCache,
};
use tempfile::TempDir;

/// Wraps a [`DiskCache`] and counts recency notifications
///
/// Assets of category `Unknown` resolve into a directory that never exists,
/// which makes every OS operation on them fail.
#[derive(Debug)]
pub struct CountingCache {
    inner: DiskCache,
    touches: AtomicUsize,
}

impl CountingCache {
    pub fn touches(&self) -> usize {
        self.touches.load(Ordering::SeqCst)
    }
}

impl CacheManager for CountingCache {
    fn resolve_path(&self, asset_id: &AssetId, category: AssetCategory, extra_info: &str) -> PathBuf {
        let path = self.inner.resolve_path(asset_id, category, extra_info);
        if category == AssetCategory::Unknown {
            let name = path.file_name().map(PathBuf::from).unwrap_or_default();
            return self.inner.cache_root().join("missing").join(name);
        }
        path
    }

    fn touch_access_time(&self, path: &Path) {
        self.touches.fetch_add(1, Ordering::SeqCst);
        self.inner.touch_access_time(path);
    }
}

pub struct Fixture {
    pub temp_dir: TempDir,
    pub cache: Arc<CountingCache>,
    pub store: AssetStore,
}

pub fn fixture() -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let config = CacheConfig::with_cache_root(temp_dir.path().join("cache"));
    let cache = Arc::new(CountingCache {
        inner: DiskCache::new(config).unwrap(),
        touches: AtomicUsize::new(0),
    });
    let store = AssetStore::new(cache.clone());

    Fixture {
        temp_dir,
        cache,
        store,
    }
}

pub fn asset(category: AssetCategory) -> AssetIdentity {
    AssetIdentity::new(AssetId::new_random(), category)
}
