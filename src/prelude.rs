//! Prelude module for asset_fs
//!
//! Re-exports the items most callers need, so a single
//! `use asset_fs::prelude::*;` covers typical usage.
//!
//! # Usage
//!
//! ```rust,no_run
//! use asset_fs::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let cache = Arc::new(DiskCache::new(CacheConfig::default())?);
//!     let store = AssetStore::new(cache);
//!
//!     let asset = AssetIdentity::new(AssetId::new_random(), AssetCategory::Notecard);
//!     let mut file = store.open(asset, AccessMode::Write);
//!     file.write(b"hello");
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Asset identities and file handles
pub use crate::app::{
    AccessMode, AssetCategory, AssetFile, AssetId, AssetIdentity, AssetStore, SeekOrigin,
};

// Cache layer
pub use crate::app::{CacheConfig, CacheManager, DiskCache};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};
pub use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prelude_integration_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let cache_config = CacheConfig::with_cache_root(temp_dir.path().to_path_buf());

        let cache = Arc::new(DiskCache::new(cache_config).unwrap());
        let store = AssetStore::new(cache);
        let asset = AssetIdentity::new(AssetId::new_random(), AssetCategory::Texture);

        let mut file = store.open(asset, AccessMode::Write);
        assert!(file.write(b"pixels"));
        assert!(store.exists(&asset));
        assert_eq!(store.file_size(&asset), 6);
    }

    #[test]
    fn test_std_reexports() {
        let _path = PathBuf::from("/tmp/test");

        let data = Arc::new(42);
        assert_eq!(*data, 42);
    }
}
