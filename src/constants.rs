//! Application constants for asset_fs
//!
//! Centralizes the constants used throughout the crate, organized by
//! functional domain.

use std::time::Duration;

/// Environment variable names
pub mod env {
    /// Overrides the configured cache root directory
    pub const CACHE_DIR: &str = "ASSET_FS_CACHE_DIR";
}

/// Disk cache layout and bookkeeping
pub mod cache {
    use super::Duration;

    /// Directory name used under the OS cache/config directories
    pub const APP_DIR_NAME: &str = "asset-fs";

    /// Default prefix for every cache file name
    pub const DEFAULT_FILENAME_PREFIX: &str = "sl_cache";

    /// Extension of every cache file
    pub const FILE_EXTENSION: &str = "asset";

    /// Placeholder written into the file name when no extra info is supplied
    pub const EMPTY_EXTRA_INFO: &str = "0";

    /// Access times newer than this are not rewritten on touch
    pub const DEFAULT_TOUCH_THRESHOLD: Duration = Duration::from_secs(60 * 60);
}

/// Asset file handle constants
pub mod files {
    /// Extra info passed to path resolution by every handle operation
    pub const NO_EXTRA_INFO: &str = "";

    /// Chunk size used by the command-line copy loops (64KB)
    pub const COPY_CHUNK_SIZE: usize = 64 * 1024;

    /// Tracing target for remove/rename failures
    pub const DIAGNOSTICS_TARGET: &str = "asset_fs::diagnostics";
}

/// Configuration file constants
pub mod config {
    /// Configuration file name inside the application config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
