//! Identity-level operations
//!
//! [`AssetStore`] answers questions about an asset by identity alone: whether
//! it exists, how large it is, and removing or renaming it. None of these need
//! an open handle. Remove and rename keep a never-failing contract; real OS
//! failures are reported as `warn` events on the `asset_fs::diagnostics`
//! target with `operation`, `path` and `error` fields.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::asset::AssetIdentity;
use crate::app::cache::CacheManager;
use crate::constants::files::{DIAGNOSTICS_TARGET, NO_EXTRA_INFO};

use super::file::AssetFile;
use super::mode::AccessMode;

/// Entry point for asset files backed by a cache manager
#[derive(Debug, Clone)]
pub struct AssetStore {
    cache: Arc<dyn CacheManager>,
}

impl AssetStore {
    /// Create a store resolving paths through `cache`
    pub fn new(cache: Arc<dyn CacheManager>) -> Self {
        Self { cache }
    }

    /// Get the underlying cache manager
    pub fn cache(&self) -> &Arc<dyn CacheManager> {
        &self.cache
    }

    /// Resolve the backing file path of an asset
    pub fn path_of(&self, identity: &AssetIdentity) -> PathBuf {
        self.cache
            .resolve_path(&identity.id, identity.category, NO_EXTRA_INFO)
    }

    /// Open a handle on an asset
    ///
    /// No file is opened here. A `Read` handle on an asset whose file exists
    /// refreshes the asset's access time.
    pub fn open(&self, identity: AssetIdentity, mode: AccessMode) -> AssetFile {
        AssetFile::new(self.clone(), identity, mode)
    }

    /// Check whether an asset has data
    ///
    /// True only for a regular file with at least one byte. Empty files count
    /// as missing.
    pub fn exists(&self, identity: &AssetIdentity) -> bool {
        fs::metadata(self.path_of(identity))
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    /// On-disk size of an asset, or 0 if it cannot be statted
    pub fn file_size(&self, identity: &AssetIdentity) -> u64 {
        fs::metadata(self.path_of(identity))
            .map(|meta| meta.len())
            .unwrap_or(0)
    }

    /// Delete an asset's backing file
    ///
    /// Always returns `true`. Failures whose kind matches `suppress` are
    /// logged at debug level only; any other failure is a diagnostic warning.
    pub fn remove_file(&self, identity: &AssetIdentity, suppress: Option<io::ErrorKind>) -> bool {
        let path = self.path_of(identity);

        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed asset file: {}", path.display()),
            Err(e) if Some(e.kind()) == suppress => {
                debug!("Ignoring remove failure for {}: {}", path.display(), e);
            }
            Err(e) => {
                warn!(
                    target: DIAGNOSTICS_TARGET,
                    operation = "remove",
                    path = %path.display(),
                    error = %e,
                    "Failed to remove asset {}",
                    identity
                );
            }
        }

        true
    }

    /// Move an asset's data to a new identity
    ///
    /// Any file already at the destination is removed first. Always returns
    /// `true`, even when the OS rename fails; the failure is only reported as
    /// a diagnostic warning.
    ///
    /// When both identities resolve to the same path nothing is touched.
    /// Removing the destination first would delete the only copy, so this
    /// case skips the remove-then-rename sequence used for distinct paths.
    pub fn rename_file(&self, old: &AssetIdentity, new: &AssetIdentity) -> bool {
        let old_path = self.path_of(old);
        let new_path = self.path_of(new);

        if old_path == new_path {
            debug!("Rename of {} onto itself ignored", old);
            return true;
        }

        // Rename needs the destination to not exist
        self.remove_file(new, Some(io::ErrorKind::NotFound));

        match fs::rename(&old_path, &new_path) {
            Ok(()) => debug!("Renamed asset {} to {}", old, new),
            Err(e) => {
                warn!(
                    target: DIAGNOSTICS_TARGET,
                    operation = "rename",
                    path = %old_path.display(),
                    destination = %new_path.display(),
                    error = %e,
                    "Failed to rename {} to {}",
                    old.id,
                    new.id
                );
            }
        }

        true
    }
}
