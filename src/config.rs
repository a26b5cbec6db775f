//! Configuration management for asset_fs
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment overrides. Command-line flags are applied on top by the
//! caller.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::CacheConfig;
use crate::constants::{cache, config, env as env_vars};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Disk cache settings
    pub cache: CacheConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfigToml {
    /// Cache directory path (OS cache directory if unset)
    pub cache_root: Option<PathBuf>,
    /// Prefix for cache file names
    pub filename_prefix: String,
    /// Minimum age before an access time is rewritten, e.g. "1h" or "30m"
    #[serde(with = "humantime_serde")]
    pub touch_threshold: Duration,
}

impl Default for CacheConfigToml {
    fn default() -> Self {
        Self {
            cache_root: None,
            filename_prefix: cache::DEFAULT_FILENAME_PREFIX.to_string(),
            touch_threshold: cache::DEFAULT_TOUCH_THRESHOLD,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub level: String,
    /// Include module targets in log lines
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            show_target: false,
        }
    }
}

impl AppConfig {
    /// Convert TOML-friendly configuration to runtime configuration
    pub fn to_runtime_config(&self) -> CacheConfig {
        self.cache.to_runtime_config()
    }

    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (explicit path, else the default location if present)
    /// 3. Environment variables
    pub fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::get_default_config_path()
                .ok()
                .filter(|path| path.exists()),
        };

        if let Some(path) = config_path {
            debug!("Loading config from: {}", path.display());
            config = Self::load_from_file(&path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Some(dir) = env::var_os(env_vars::CACHE_DIR).filter(|v| !v.is_empty()) {
            debug!("Cache root overridden by {}", env_vars::CACHE_DIR);
            self.cache.cache_root = Some(PathBuf::from(dir));
        }
    }

    /// Write a commented default config file unless one already exists
    pub fn initialize_default_file(path: &Path) -> ConfigResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, Self::generate_default_config_content()).map_err(|source| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!("Created default configuration file: {}", path.display());
        Ok(true)
    }

    /// Default configuration file location
    ///
    /// - macOS: ~/Library/Application Support/asset-fs/config.toml
    /// - Linux: ~/.config/asset-fs/config.toml
    /// - Windows: %APPDATA%/asset-fs/config.toml
    pub fn get_default_config_path() -> ConfigResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDirectory)?;
        Ok(dir.join(cache::APP_DIR_NAME).join(config::CONFIG_FILE_NAME))
    }

    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Render the default configuration with explanatory comments
    pub fn generate_default_config_content() -> String {
        format!(
            r#"# asset-fs Configuration
#
# Every value below is the built-in default.

[cache]
# Directory holding one file per cached asset.
# Leave unset to use the OS cache directory; {env} overrides it.
# cache_root = "/path/to/cache"

# Prefix of every cache file name
filename_prefix = "{prefix}"

# Access times younger than this are not rewritten when an asset is read
touch_threshold = "1h"

[logging]
# Log level used when no -v/-q flag is given (error, warn, info, debug, trace)
level = "warn"

# Include module targets in log lines
show_target = false
"#,
            env = env_vars::CACHE_DIR,
            prefix = cache::DEFAULT_FILENAME_PREFIX,
        )
    }
}

impl CacheConfigToml {
    /// Convert to runtime CacheConfig
    pub fn to_runtime_config(&self) -> CacheConfig {
        CacheConfig {
            cache_root: self.cache_root.clone(),
            filename_prefix: self.filename_prefix.clone(),
            touch_threshold: self.touch_threshold,
        }
    }
}
