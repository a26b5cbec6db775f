//! Command-line interface components
//!
//! Argument parsing and the command handlers for the `asset-fs` binary.

pub mod args;
pub mod commands;

pub use args::{
    AssetArgs, CatArgs, Cli, Commands, ConfigAction, ConfigArgs, GlobalArgs, InfoArgs, MvArgs,
    PutArgs,
};
pub use commands::{
    asset_info, copy_in, handle_cat, init_config_file, render_config, run_command, AssetInfo,
    CommandContext,
};
