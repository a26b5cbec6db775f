//! Cache configuration types and defaults
//!
//! This module contains the configuration structure for the disk cache,
//! including default values and builder methods.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::cache;

/// Configuration for the disk cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Root directory for cache storage (OS-specific if None)
    pub cache_root: Option<PathBuf>,
    /// Prefix for every cache file name
    pub filename_prefix: String,
    /// Access times newer than this are left alone on touch
    #[serde(with = "humantime_serde")]
    pub touch_threshold: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_root: None, // Will use OS-specific cache directory
            filename_prefix: cache::DEFAULT_FILENAME_PREFIX.to_string(),
            touch_threshold: cache::DEFAULT_TOUCH_THRESHOLD,
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with custom cache root
    pub fn with_cache_root(cache_root: PathBuf) -> Self {
        Self {
            cache_root: Some(cache_root),
            ..Default::default()
        }
    }

    /// Set the cache file name prefix
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Set the touch threshold; zero refreshes the access time on every touch
    pub fn with_touch_threshold(mut self, threshold: Duration) -> Self {
        self.touch_threshold = threshold;
        self
    }
}
