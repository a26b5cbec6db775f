//! Asset files: positional I/O over cached assets
//!
//! - [`AssetStore`] resolves identities through a [`CacheManager`] and offers
//!   the identity-level operations (exists, size, remove, rename).
//! - [`AssetFile`] is a handle with a mode and a position for reading,
//!   writing and seeking within one asset.
//! - [`AccessMode`] decides how writes open the backing file.
//!
//! [`CacheManager`]: crate::app::cache::CacheManager
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use asset_fs::app::cache::{CacheConfig, DiskCache};
//! use asset_fs::app::{AccessMode, AssetCategory, AssetId, AssetIdentity, AssetStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = AssetStore::new(Arc::new(DiskCache::new(CacheConfig::default())?));
//! let asset = AssetIdentity::new(AssetId::new_random(), AssetCategory::Notecard);
//!
//! let mut writer = store.open(asset, AccessMode::Write);
//! assert!(writer.write(b"hello"));
//!
//! let mut reader = store.open(asset, AccessMode::Read);
//! let mut buf = [0u8; 5];
//! assert!(reader.read(&mut buf));
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod mode;
pub mod store;

pub use file::{AssetFile, SeekOrigin};
pub use mode::AccessMode;
pub use store::AssetStore;
