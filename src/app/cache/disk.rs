//! Disk-backed cache manager
//!
//! [`DiskCache`] keeps every asset in one flat directory and uses each file's
//! modification time as its "last accessed" stamp. Eviction policies read that
//! stamp; this type only maintains it.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, error, info};

use crate::app::asset::{AssetCategory, AssetId};
use crate::constants::cache;
use crate::errors::{CacheError, CacheResult};

use super::config::CacheConfig;
use super::manager::CacheManager;
use super::path::PathGenerator;

/// Cache manager storing assets as files under a single root directory
#[derive(Debug, Clone)]
pub struct DiskCache {
    /// Configuration
    config: CacheConfig,
    /// Cache root directory
    cache_root: PathBuf,
}

impl DiskCache {
    /// Create a new disk cache
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the cache directory cannot be located or created
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        let cache_root = match &config.cache_root {
            Some(path) => path.clone(),
            None => Self::get_default_cache_dir()?,
        };

        Self::ensure_directory_exists(&cache_root)?;

        info!(
            "Initialized disk cache with root: {}",
            cache_root.display()
        );

        Ok(Self { config, cache_root })
    }

    /// Get the cache root directory
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Get the cache configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Last recorded access time for a cache file, if it can be read
    pub fn last_access(&self, path: &Path) -> Option<SystemTime> {
        fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    /// Get the default cache directory for the current OS
    ///
    /// - macOS: ~/Library/Caches/asset-fs
    /// - Linux: ~/.cache/asset-fs
    /// - Windows: %LOCALAPPDATA%/asset-fs
    fn get_default_cache_dir() -> CacheResult<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| CacheError::DirectoryNotAccessible {
                path: PathBuf::from("system cache directory"),
            })?
            .join(cache::APP_DIR_NAME);

        Ok(cache_dir)
    }

    /// Ensure a directory exists, creating it if necessary
    fn ensure_directory_exists(path: &Path) -> CacheResult<()> {
        if !path.is_dir() {
            fs::create_dir_all(path).map_err(|e| {
                error!("Failed to create cache directory: {}", e);
                CacheError::DirectoryNotAccessible {
                    path: path.to_path_buf(),
                }
            })?;
            debug!("Created cache directory: {}", path.display());
        }
        Ok(())
    }

    /// Whether a file last stamped at `modified` is due a refresh at `now`
    fn needs_touch(&self, modified: SystemTime, now: SystemTime) -> bool {
        match now.duration_since(modified) {
            Ok(age) => age >= self.config.touch_threshold,
            // Stamp is in the future; only a zero threshold rewrites it
            Err(_) => self.config.touch_threshold == Duration::ZERO,
        }
    }

    fn stamp(path: &Path, now: SystemTime) -> std::io::Result<()> {
        let file = File::options().write(true).open(path)?;
        file.set_modified(now)
    }
}

impl CacheManager for DiskCache {
    fn resolve_path(
        &self,
        asset_id: &AssetId,
        category: AssetCategory,
        extra_info: &str,
    ) -> PathBuf {
        PathGenerator::get_file_path(
            &self.cache_root,
            &self.config.filename_prefix,
            asset_id,
            category,
            extra_info,
        )
    }

    fn touch_access_time(&self, path: &Path) {
        let now = SystemTime::now();
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                debug!("Cannot read access time of {}: {}", path.display(), e);
                return;
            }
        };

        if !self.needs_touch(modified, now) {
            return;
        }

        match Self::stamp(path, now) {
            Ok(()) => debug!("Updated access time: {}", path.display()),
            Err(e) => debug!("Failed to update access time of {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache(threshold: Duration) -> (TempDir, DiskCache) {
        let temp_dir = TempDir::new().unwrap();
        let config = CacheConfig::with_cache_root(temp_dir.path().join("assets"))
            .with_touch_threshold(threshold);
        let cache = DiskCache::new(config).unwrap();
        (temp_dir, cache)
    }

    fn backdate(path: &Path, age: Duration) -> SystemTime {
        let stamp = SystemTime::now() - age;
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(stamp)
            .unwrap();
        stamp
    }

    #[test]
    fn test_new_creates_root() {
        let (temp_dir, cache) = test_cache(Duration::ZERO);
        assert!(cache.cache_root().is_dir());
        assert_eq!(cache.cache_root(), temp_dir.path().join("assets"));
    }

    #[test]
    fn test_new_fails_when_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let result = DiskCache::new(CacheConfig::with_cache_root(blocker.join("assets")));
        assert!(matches!(
            result,
            Err(CacheError::DirectoryNotAccessible { .. })
        ));
    }

    #[test]
    fn test_resolve_path_is_deterministic() {
        let (_temp_dir, cache) = test_cache(Duration::ZERO);
        let id = AssetId::new_random();

        let a = cache.resolve_path(&id, AssetCategory::Texture, "");
        let b = cache.resolve_path(&id, AssetCategory::Texture, "");
        assert_eq!(a, b);
        assert_eq!(a.parent().unwrap(), cache.cache_root());
        assert!(PathGenerator::is_cache_file_path(&a, "sl_cache"));
    }

    #[test]
    fn test_touch_refreshes_stale_file() {
        let (_temp_dir, cache) = test_cache(Duration::from_secs(60));
        let path = cache.resolve_path(&AssetId::new_random(), AssetCategory::Sound, "");
        fs::write(&path, b"data").unwrap();
        let old = backdate(&path, Duration::from_secs(2 * 3600));

        cache.touch_access_time(&path);

        let touched = cache.last_access(&path).unwrap();
        assert!(touched > old + Duration::from_secs(3600));
    }

    #[test]
    fn test_touch_skips_recent_file() {
        let (_temp_dir, cache) = test_cache(Duration::from_secs(3600));
        let path = cache.resolve_path(&AssetId::new_random(), AssetCategory::Sound, "");
        fs::write(&path, b"data").unwrap();
        backdate(&path, Duration::from_secs(60));
        let before = cache.last_access(&path).unwrap();

        cache.touch_access_time(&path);

        assert_eq!(cache.last_access(&path).unwrap(), before);
    }

    #[test]
    fn test_touch_missing_file_is_harmless() {
        let (_temp_dir, cache) = test_cache(Duration::ZERO);
        let path = cache.resolve_path(&AssetId::new_random(), AssetCategory::Mesh, "");

        cache.touch_access_time(&path);

        assert!(!path.exists());
        assert_eq!(cache.last_access(&path), None);
    }
}
