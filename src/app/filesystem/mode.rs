//! Access modes for asset file handles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AssetError;

/// How a handle opens its backing file when writing
///
/// Reads ignore the mode and always open read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Read-only intent; opening refreshes the asset's access time
    Read,
    /// Truncate and rewrite from the start
    #[default]
    Write,
    /// Update in place at the current position, creating the file if absent
    ReadWrite,
    /// Always write at end of file, creating the file if absent
    Append,
}

impl AccessMode {
    /// Legacy read flag
    pub const READ_FLAG: u32 = 0x1;
    /// Legacy write flag
    pub const WRITE_FLAG: u32 = 0x2;
    /// Legacy read|write flag word
    pub const READ_WRITE_FLAGS: u32 = 0x3;
    /// Legacy append flag word (append bit plus write)
    pub const APPEND_FLAGS: u32 = 0x6;

    /// Map a legacy flag word onto a mode
    ///
    /// Only the exact words for read, read-write and append select those
    /// modes. Every other combination falls back to [`AccessMode::Write`].
    pub fn from_flags(flags: u32) -> Self {
        match flags {
            Self::READ_FLAG => AccessMode::Read,
            Self::READ_WRITE_FLAGS => AccessMode::ReadWrite,
            Self::APPEND_FLAGS => AccessMode::Append,
            _ => AccessMode::Write,
        }
    }

    /// Legacy flag word for this mode
    pub fn flags(self) -> u32 {
        match self {
            AccessMode::Read => Self::READ_FLAG,
            AccessMode::Write => Self::WRITE_FLAG,
            AccessMode::ReadWrite => Self::READ_WRITE_FLAGS,
            AccessMode::Append => Self::APPEND_FLAGS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::ReadWrite => "read-write",
            AccessMode::Append => "append",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccessMode {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "read" => Ok(AccessMode::Read),
            "write" => Ok(AccessMode::Write),
            "read-write" | "readwrite" => Ok(AccessMode::ReadWrite),
            "append" => Ok(AccessMode::Append),
            _ => Err(AssetError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}
