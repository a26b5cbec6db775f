//! The cache manager contract
//!
//! Asset file handles never decide where an asset lives or how recency is
//! recorded. They ask a [`CacheManager`], which is injected at construction so
//! tests can substitute a fake resolver.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::app::asset::{AssetCategory, AssetId};

/// Resolves asset identities to file paths and records access recency
pub trait CacheManager: fmt::Debug + Send + Sync {
    /// Map an identity to its backing file path
    ///
    /// Must be deterministic: the same inputs always produce the same path.
    fn resolve_path(&self, asset_id: &AssetId, category: AssetCategory, extra_info: &str)
        -> PathBuf;

    /// Record that `path` was just accessed
    ///
    /// Best-effort. Implementations swallow their own failures.
    fn touch_access_time(&self, path: &Path);
}
