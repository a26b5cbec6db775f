//! Command handlers for the asset-fs CLI
//!
//! Each handler works through [`AssetStore`] and [`AssetFile`] exactly as a
//! library caller would, so the tool doubles as a manual test harness.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info};

use crate::app::{AccessMode, AssetFile, AssetIdentity, AssetStore, DiskCache, SeekOrigin};
use crate::config::AppConfig;
use crate::constants::files::COPY_CHUNK_SIZE;
use crate::errors::{AppError, CacheError, ConfigError, Result};

use super::args::{
    AssetArgs, CatArgs, Commands, ConfigAction, ConfigArgs, InfoArgs, MvArgs, PutArgs,
};

/// Summary printed by the info command
#[derive(Debug, Serialize)]
pub struct AssetInfo {
    pub identity: AssetIdentity,
    pub path: String,
    pub exists: bool,
    pub size: u64,
    pub last_access: Option<DateTime<Local>>,
}

/// Shared state for command handlers
pub struct CommandContext {
    config: AppConfig,
    cache: Arc<DiskCache>,
    store: AssetStore,
}

impl CommandContext {
    /// Build the disk cache from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let cache = Arc::new(DiskCache::new(config.to_runtime_config())?);
        let store = AssetStore::new(cache.clone());
        Ok(Self {
            config: config.clone(),
            cache,
            store,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }
}

/// Dispatch a parsed command
pub fn run_command(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Path(args) => handle_path(ctx, args),
        Commands::Info(args) => handle_info(ctx, args),
        Commands::Cat(args) => handle_cat(ctx, args, &mut io::stdout().lock()),
        Commands::Put(args) => handle_put(ctx, args),
        Commands::Rm(args) => handle_rm(ctx, args),
        Commands::Mv(args) => handle_mv(ctx, args),
        Commands::Config(args) => handle_config(ctx, args),
    }
}

fn handle_path(ctx: &CommandContext, args: AssetArgs) -> Result<()> {
    println!("{}", ctx.store.path_of(&args.identity()).display());
    Ok(())
}

/// Collect exists/size/last access for an asset
pub fn asset_info(ctx: &CommandContext, identity: AssetIdentity) -> AssetInfo {
    let path = ctx.store.path_of(&identity);
    AssetInfo {
        identity,
        path: path.display().to_string(),
        exists: ctx.store.exists(&identity),
        size: ctx.store.file_size(&identity),
        last_access: ctx.cache.last_access(&path).map(DateTime::<Local>::from),
    }
}

fn handle_info(ctx: &CommandContext, args: InfoArgs) -> Result<()> {
    let info = asset_info(ctx, args.asset.identity());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Asset:       {}", info.identity);
    println!("Path:        {}", info.path);
    println!("Exists:      {}", if info.exists { "yes" } else { "no" });
    println!("Size:        {} bytes", info.size);
    match info.last_access {
        Some(time) => println!("Last access: {}", time.format("%Y-%m-%d %H:%M:%S %Z")),
        None => println!("Last access: -"),
    }
    Ok(())
}

/// Stream asset bytes into `out`, starting at `args.offset`
///
/// Fails if the asset is missing or the offset lies past its end.
pub fn handle_cat(ctx: &CommandContext, args: CatArgs, out: &mut impl Write) -> Result<()> {
    let identity = args.asset.identity();
    if !ctx.store.exists(&identity) {
        return Err(CacheError::AssetNotFound {
            identity: identity.to_string(),
        }
        .into());
    }

    let mut file = ctx.store.open(identity, AccessMode::Read);
    let offset = i64::try_from(args.offset)
        .map_err(|_| AppError::generic(format!("Offset {} is too large", args.offset)))?;
    if !file.seek(offset, SeekOrigin::Absolute(0)) {
        return Err(AppError::generic(format!(
            "Offset {} is past the end of {} ({} bytes)",
            args.offset,
            identity,
            file.size()
        )));
    }

    let copied = copy_out(&mut file, args.length, out)?;
    debug!("Copied {} bytes from {}", copied, identity);
    Ok(())
}

fn copy_out(file: &mut AssetFile, limit: Option<u64>, out: &mut impl Write) -> Result<u64> {
    let mut remaining = limit.unwrap_or(u64::MAX);
    let mut buf = vec![0u8; COPY_CHUNK_SIZE];
    let mut copied = 0u64;

    while remaining > 0 {
        let want = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        if !file.read(&mut buf[..want]) {
            break;
        }
        let got = file.last_transfer_count();
        out.write_all(&buf[..got])?;
        copied += got as u64;
        remaining -= got as u64;
    }

    out.flush()?;
    Ok(copied)
}

fn handle_put(ctx: &CommandContext, args: PutArgs) -> Result<()> {
    args.validate().map_err(AppError::generic)?;

    let identity = args.asset.identity();
    let mut file = ctx.store.open(identity, args.mode);
    if args.offset > 0 && !file.seek(0, SeekOrigin::Absolute(args.offset)) {
        return Err(AppError::generic(format!(
            "Offset {} is past the end of {} ({} bytes)",
            args.offset,
            identity,
            file.size()
        )));
    }

    let written = copy_in(&mut file, &args.source)?;
    info!("Wrote {} bytes to {}", written, identity);
    println!("{} bytes written to {}", written, identity);
    Ok(())
}

/// Copy a local file into an asset handle chunk by chunk
///
/// The first chunk always goes through `file`, even when the source is empty,
/// so write mode still truncates. Write mode truncates on every call, so the
/// remaining chunks continue through an append handle.
pub fn copy_in(file: &mut AssetFile, source: &Path) -> Result<u64> {
    let mut input = File::open(source)?;
    let mut buf = vec![0u8; COPY_CHUNK_SIZE];

    let n = input.read(&mut buf)?;
    write_chunk(file, &buf[..n])?;
    let mut written = n as u64;

    let mut appender = match file.mode() {
        AccessMode::Write | AccessMode::Read => {
            Some(file.store().open(*file.identity(), AccessMode::Append))
        }
        AccessMode::ReadWrite | AccessMode::Append => None,
    };
    let target = appender.as_mut().unwrap_or(file);

    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        write_chunk(target, &buf[..n])?;
        written += n as u64;
    }

    Ok(written)
}

fn write_chunk(file: &mut AssetFile, chunk: &[u8]) -> Result<()> {
    if file.write(chunk) {
        return Ok(());
    }
    Err(CacheError::OperationFailed {
        operation: "write".to_string(),
        identity: file.identity().to_string(),
    }
    .into())
}

fn handle_rm(ctx: &CommandContext, args: AssetArgs) -> Result<()> {
    let identity = args.identity();
    ctx.store.open(identity, AccessMode::Write).remove();
    info!("Removed {}", identity);
    Ok(())
}

fn handle_mv(ctx: &CommandContext, args: MvArgs) -> Result<()> {
    let from = args.asset.identity();
    let to = args.new_identity();
    if !ctx.store.exists(&from) {
        return Err(CacheError::AssetNotFound {
            identity: from.to_string(),
        }
        .into());
    }

    let mut file = ctx.store.open(from, AccessMode::ReadWrite);
    file.rename(to);

    if !ctx.store.exists(&to) {
        return Err(CacheError::OperationFailed {
            operation: "rename".to_string(),
            identity: from.to_string(),
        }
        .into());
    }
    println!("{} -> {}", from, to);
    Ok(())
}

fn handle_config(ctx: &CommandContext, args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Init { path } => {
            let (path, created) = init_config_file(path)?;
            if created {
                println!("Created {}", path.display());
            } else {
                println!("Configuration already exists: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", render_config(ctx)?);
            Ok(())
        }
    }
}

/// Write the default configuration file, at `path` or the platform default
///
/// Returns the file's location and whether it was created. An existing file
/// is left untouched.
pub fn init_config_file(path: Option<PathBuf>) -> Result<(PathBuf, bool)> {
    let path = match path {
        Some(path) => path,
        None => AppConfig::get_default_config_path()?,
    };
    let created = AppConfig::initialize_default_file(&path)?;
    Ok((path, created))
}

/// Effective configuration rendered as TOML
pub fn render_config(ctx: &CommandContext) -> Result<String> {
    let rendered = toml::to_string_pretty(&ctx.config).map_err(ConfigError::from)?;
    Ok(rendered)
}
