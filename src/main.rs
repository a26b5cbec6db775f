//! asset-fs CLI application
//!
//! Command-line access to assets in a local disk cache: print paths, inspect,
//! read, write, remove and rename assets by identifier and category.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

use asset_fs::cli::{run_command, Cli, CommandContext};
use asset_fs::config::AppConfig;
use asset_fs::errors::{AppError, Result};

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();

    let mut config = AppConfig::load(cli.global.config.clone())?;
    if let Some(dir) = &cli.global.cache_dir {
        config.cache.cache_root = Some(dir.clone());
    }

    init_logging(&cli, &config)?;

    info!("asset-fs v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Effective configuration: {:?}", config);

    let ctx = CommandContext::new(&config)?;
    run_command(&ctx, cli.command)
}

/// Initialize logging from the verbosity flags, falling back to the config
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    let directive: Directive = format!("asset_fs={}", level).parse().map_err(|e| {
        AppError::generic(format!("Invalid log level '{}': {}", level, e))
    })?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    fmt()
        .with_env_filter(filter)
        .with_target(config.logging.show_target)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
    Ok(())
}
