//! Command-line argument parsing for asset-fs
//!
//! Defines the CLI structure using clap derive macros. Every command names an
//! asset by its identifier and category.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::{AccessMode, AssetCategory, AssetId, AssetIdentity};

/// asset-fs - inspect and edit assets in a local disk cache
#[derive(Parser, Debug)]
#[command(
    name = "asset-fs",
    version,
    about = "Inspect and edit assets stored in a local disk cache",
    long_about = "Reads, writes, renames and removes cached assets by identifier and category.
Every operation goes through the same file handles the library exposes."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Cache directory path
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// An asset named on the command line
#[derive(Args, Debug, Clone)]
pub struct AssetArgs {
    /// Asset identifier (UUID)
    pub id: AssetId,

    /// Asset category (name such as "texture", or numeric code)
    pub category: AssetCategory,
}

impl AssetArgs {
    pub fn identity(&self) -> AssetIdentity {
        AssetIdentity::new(self.id, self.category)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the file path an asset resolves to
    Path(AssetArgs),

    /// Show whether an asset exists, its size and last access time
    Info(InfoArgs),

    /// Write asset bytes to stdout
    Cat(CatArgs),

    /// Copy a local file into an asset
    Put(PutArgs),

    /// Remove an asset
    Rm(AssetArgs),

    /// Move an asset to a new identifier and category
    Mv(MvArgs),

    /// Configuration file management
    Config(ConfigArgs),
}

/// Arguments for the info command
#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    #[command(flatten)]
    pub asset: AssetArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the cat command
#[derive(Args, Debug, Clone)]
pub struct CatArgs {
    #[command(flatten)]
    pub asset: AssetArgs,

    /// Byte offset to start reading from
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Maximum number of bytes to print (default: to end of asset)
    #[arg(long)]
    pub length: Option<u64>,
}

/// Arguments for the put command
#[derive(Args, Debug, Clone)]
pub struct PutArgs {
    #[command(flatten)]
    pub asset: AssetArgs,

    /// Local file to copy from
    pub source: PathBuf,

    /// How the asset is opened: write, append or read-write
    #[arg(long, default_value_t = AccessMode::Write)]
    pub mode: AccessMode,

    /// Starting offset (read-write mode only)
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
}

/// Arguments for the mv command
#[derive(Args, Debug, Clone)]
pub struct MvArgs {
    #[command(flatten)]
    pub asset: AssetArgs,

    /// New asset identifier
    pub new_id: AssetId,

    /// New asset category
    pub new_category: AssetCategory,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a commented default configuration file
    Init {
        /// Where to write it (default: the platform config directory)
        path: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Show,
}

impl MvArgs {
    pub fn new_identity(&self) -> AssetIdentity {
        AssetIdentity::new(self.new_id, self.new_category)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level implied by the verbosity flags, if any was given
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl PutArgs {
    /// Reject modes and offsets that make no sense for a copy
    pub fn validate(&self) -> Result<(), String> {
        if self.mode == AccessMode::Read {
            return Err("put needs --mode write, append or read-write".to_string());
        }
        if self.offset > 0 && self.mode != AccessMode::ReadWrite {
            return Err("--offset requires --mode read-write".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const ID: &str = "89556747-24cb-43ed-920b-47caed15465f";

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cat() {
        let cli = Cli::try_parse_from([
            "asset-fs", "cat", ID, "texture", "--offset", "10", "--length", "4",
        ])
        .unwrap();

        match cli.command {
            Commands::Cat(args) => {
                assert_eq!(args.asset.identity().category, AssetCategory::Texture);
                assert_eq!(args.offset, 10);
                assert_eq!(args.length, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_put_mode() {
        let cli = Cli::try_parse_from([
            "asset-fs", "put", ID, "49", "mesh.bin", "--mode", "append",
        ])
        .unwrap();

        match cli.command {
            Commands::Put(args) => {
                assert_eq!(args.mode, AccessMode::Append);
                assert_eq!(args.asset.category, AssetCategory::Mesh);
                assert!(args.validate().is_ok());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_put_offset_validation() {
        let cli = Cli::try_parse_from(["asset-fs", "put", ID, "sound", "a.wav", "--offset", "3"])
            .unwrap();

        match cli.command {
            Commands::Put(args) => assert!(args.validate().is_err()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_identity_rejected() {
        assert!(Cli::try_parse_from(["asset-fs", "path", "nope", "texture"]).is_err());
        assert!(Cli::try_parse_from(["asset-fs", "path", ID, "hologram"]).is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["asset-fs", "config", "init", "/tmp/asset-fs.toml"]).unwrap();

        match cli.command {
            Commands::Config(ConfigArgs {
                action: ConfigAction::Init { path },
            }) => assert_eq!(path, Some(PathBuf::from("/tmp/asset-fs.toml"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["asset-fs", "-q", "rm", ID, "texture"]).unwrap();
        assert_eq!(cli.log_level(), Some(tracing::Level::ERROR));

        let cli = Cli::try_parse_from(["asset-fs", "rm", ID, "texture"]).unwrap();
        assert_eq!(cli.log_level(), None);
    }
}
