//! Integration tests for the command handlers, driven through the library

mod common;

use std::fs;

use asset_fs::app::{AccessMode, AssetCategory};
use asset_fs::cli::{
    asset_info, copy_in, handle_cat, init_config_file, render_config, AssetArgs, CatArgs,
    CommandContext,
};
use asset_fs::config::AppConfig;
use asset_fs::errors::{AppError, CacheError};
use common::asset;
use tempfile::TempDir;

fn context() -> (TempDir, CommandContext) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.cache.cache_root = Some(temp_dir.path().join("cache"));
    let ctx = CommandContext::new(&config).unwrap();
    (temp_dir, ctx)
}

fn cat_args(identity: asset_fs::app::AssetIdentity, offset: u64, length: Option<u64>) -> CatArgs {
    CatArgs {
        asset: AssetArgs {
            id: identity.id,
            category: identity.category,
        },
        offset,
        length,
    }
}

#[test]
fn test_copy_in_spans_many_chunks() {
    let (temp_dir, ctx) = context();
    let id = asset(AssetCategory::Texture);

    // Larger than one copy chunk, with a recognisable pattern
    let source = temp_dir.path().join("texture.j2c");
    let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&source, &data).unwrap();

    let mut file = ctx.store().open(id, AccessMode::Write);
    let written = copy_in(&mut file, &source).unwrap();

    assert_eq!(written, data.len() as u64);
    assert_eq!(fs::read(ctx.store().path_of(&id)).unwrap(), data);
}

#[test]
fn test_copy_in_write_mode_replaces_existing() {
    let (temp_dir, ctx) = context();
    let id = asset(AssetCategory::Notecard);
    ctx.store().open(id, AccessMode::Write).write(b"a much longer old body");

    let source = temp_dir.path().join("note.txt");
    fs::write(&source, b"new").unwrap();

    let mut file = ctx.store().open(id, AccessMode::Write);
    copy_in(&mut file, &source).unwrap();

    assert_eq!(fs::read(ctx.store().path_of(&id)).unwrap(), b"new");
}

#[test]
fn test_copy_in_empty_source_truncates() {
    let (temp_dir, ctx) = context();
    let id = asset(AssetCategory::Notecard);
    ctx.store().open(id, AccessMode::Write).write(b"old");

    let source = temp_dir.path().join("empty");
    fs::write(&source, b"").unwrap();

    let mut file = ctx.store().open(id, AccessMode::Write);
    assert_eq!(copy_in(&mut file, &source).unwrap(), 0);

    assert!(!ctx.store().exists(&id));
}

#[test]
fn test_copy_in_append_mode() {
    let (temp_dir, ctx) = context();
    let id = asset(AssetCategory::LslText);
    ctx.store().open(id, AccessMode::Write).write(b"head-");

    let source = temp_dir.path().join("tail");
    fs::write(&source, b"tail").unwrap();

    let mut file = ctx.store().open(id, AccessMode::Append);
    copy_in(&mut file, &source).unwrap();

    assert_eq!(fs::read(ctx.store().path_of(&id)).unwrap(), b"head-tail");
    assert_eq!(file.tell(), 9);
}

#[test]
fn test_cat_with_offset_and_length() {
    let (_temp_dir, ctx) = context();
    let id = asset(AssetCategory::Script);
    ctx.store().open(id, AccessMode::Write).write(b"0123456789");

    let mut out = Vec::new();
    handle_cat(&ctx, cat_args(id, 3, Some(4)), &mut out).unwrap();
    assert_eq!(out, b"3456");

    let mut out = Vec::new();
    handle_cat(&ctx, cat_args(id, 7, None), &mut out).unwrap();
    assert_eq!(out, b"789");
}

#[test]
fn test_cat_missing_asset_fails() {
    let (_temp_dir, ctx) = context();
    let id = asset(AssetCategory::Sound);

    let mut out = Vec::new();
    let result = handle_cat(&ctx, cat_args(id, 0, None), &mut out);

    assert!(matches!(
        result,
        Err(AppError::Cache(CacheError::AssetNotFound { .. }))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_cat_offset_past_end_fails() {
    let (_temp_dir, ctx) = context();
    let id = asset(AssetCategory::Sound);
    ctx.store().open(id, AccessMode::Write).write(b"short");

    let mut out = Vec::new();
    let result = handle_cat(&ctx, cat_args(id, 6, None), &mut out);

    assert!(matches!(result, Err(AppError::Generic { .. })));
}

#[test]
fn test_asset_info_reports_state() {
    let (_temp_dir, ctx) = context();
    let id = asset(AssetCategory::Mesh);

    let missing = asset_info(&ctx, id);
    assert!(!missing.exists);
    assert_eq!(missing.size, 0);
    assert!(missing.last_access.is_none());

    ctx.store().open(id, AccessMode::Write).write(b"vertices");

    let present = asset_info(&ctx, id);
    assert!(present.exists);
    assert_eq!(present.size, 8);
    assert!(present.last_access.is_some());

    let json = serde_json::to_value(&present).unwrap();
    assert_eq!(json["identity"]["category"], "mesh");
    assert_eq!(json["size"], 8);
}

#[test]
fn test_config_init_writes_loadable_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("config.toml");

    let (written, created) = init_config_file(Some(path.clone())).unwrap();
    assert_eq!(written, path);
    assert!(created);

    // Existing file is kept
    fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
    let (_, created) = init_config_file(Some(path.clone())).unwrap();
    assert!(!created);

    let loaded = AppConfig::load(Some(path)).unwrap();
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_config_show_round_trips() {
    let (_temp_dir, ctx) = context();

    let rendered = render_config(&ctx).unwrap();
    let parsed: AppConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(&parsed, ctx.config());
    assert!(rendered.contains("touch_threshold = \"1h\""));
}
