//! Error types for asset_fs
//!
//! The positional I/O surface of [`AssetFile`](crate::app::AssetFile) reports
//! failure through boolean results, so the types here only cover the fallible
//! setup paths: identifier parsing, cache initialization, configuration loading
//! and the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

/// Asset identifier and category errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Identifier is not a valid 128-bit UUID string
    #[error("Invalid asset id: {value}")]
    InvalidId { value: String },

    /// Unknown category name
    #[error("Unknown asset category: {name}")]
    UnknownCategory { name: String },

    /// Unknown legacy category code
    #[error("Unknown asset category code: {code}")]
    UnknownCategoryCode { code: i8 },

    /// Unknown access mode name
    #[error("Unknown access mode: {name}. Expected read, write, read-write or append")]
    UnknownMode { name: String },
}

/// Cache management errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache directory not found or could not be created
    #[error("Cache directory not accessible: {path}")]
    DirectoryNotAccessible { path: PathBuf },

    /// Asset has no data in the cache
    #[error("Asset not found in cache: {identity}")]
    AssetNotFound { identity: String },

    /// A handle operation reported failure
    #[error("Asset {operation} failed for {identity}")]
    OperationFailed { operation: String, identity: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Could not serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration directory could not be located
    #[error("Could not determine the system configuration directory")]
    NoConfigDirectory,

    /// I/O error while reading or writing configuration
    #[error("Configuration I/O error: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Asset identity error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Cache error
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Asset(_) => "asset",
            AppError::Cache(_) => "cache",
            AppError::Config(_) => "config",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Asset identity result type alias
pub type AssetResult<T> = std::result::Result<T, AssetError>;

/// Cache result type alias
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
