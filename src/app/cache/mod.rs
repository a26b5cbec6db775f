//! Cache manager contract and the disk-backed implementation
//!
//! The asset file layer only needs two things from a cache: turning an
//! identity into a path, and recording that a path was accessed. The
//! [`CacheManager`] trait captures exactly that; [`DiskCache`] is the
//! implementation used by the command-line tool.
//!
//! # Module Organization
//!
//! - [`config`] - Configuration types and defaults
//! - [`path`] - Cache file name generation
//! - [`manager`] - The [`CacheManager`] trait
//! - [`disk`] - [`DiskCache`], a flat-directory cache keyed by file name
//!
//! # Examples
//!
//! ```rust,no_run
//! use asset_fs::app::cache::{CacheConfig, CacheManager, DiskCache};
//! use asset_fs::app::{AssetCategory, AssetId};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = DiskCache::new(CacheConfig::with_cache_root(PathBuf::from("/tmp/assets")))?;
//! let path = cache.resolve_path(&AssetId::new_random(), AssetCategory::Texture, "");
//! println!("Asset lives at {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod disk;
pub mod manager;
pub mod path;

pub use config::CacheConfig;
pub use disk::DiskCache;
pub use manager::CacheManager;
pub use path::PathGenerator;
