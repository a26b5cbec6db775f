//! Core library components
//!
//! Asset identities, the cache manager contract with its disk-backed
//! implementation, and the asset file handles built on top of them.

pub mod asset;
pub mod cache;
pub mod filesystem;

// Re-export main public API
pub use asset::{AssetCategory, AssetId, AssetIdentity};
pub use cache::{CacheConfig, CacheManager, DiskCache};
pub use filesystem::{AccessMode, AssetFile, AssetStore, SeekOrigin};
