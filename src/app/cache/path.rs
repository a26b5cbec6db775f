//! Cache file path generation
//!
//! Every asset lives in a single flat directory. The file name encodes the
//! identity so that resolution is a pure function of its inputs:
//!
//! `{cache_root}/{prefix}_{asset_id}_{category}_{extra_info or "0"}.asset`

use std::path::{Path, PathBuf};

use crate::app::asset::{AssetCategory, AssetId};
use crate::constants::cache;

/// Path generation utility for cache files
pub struct PathGenerator;

impl PathGenerator {
    /// Build the file name for an asset
    pub fn file_name(
        prefix: &str,
        asset_id: &AssetId,
        category: AssetCategory,
        extra_info: &str,
    ) -> String {
        let extra = if extra_info.is_empty() {
            cache::EMPTY_EXTRA_INFO
        } else {
            extra_info
        };
        format!(
            "{}_{}_{}_{}.{}",
            prefix,
            asset_id,
            category.name(),
            extra,
            cache::FILE_EXTENSION
        )
    }

    /// Get the cache path for an asset
    pub fn get_file_path(
        cache_root: &Path,
        prefix: &str,
        asset_id: &AssetId,
        category: AssetCategory,
        extra_info: &str,
    ) -> PathBuf {
        cache_root.join(Self::file_name(prefix, asset_id, category, extra_info))
    }

    /// Check whether a path looks like a cache file produced with `prefix`
    pub fn is_cache_file_path(path: &Path, prefix: &str) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        name.starts_with(prefix)
            && name[prefix.len()..].starts_with('_')
            && path
                .extension()
                .is_some_and(|ext| ext == cache::FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> AssetId {
        AssetId::parse("89556747-24cb-43ed-920b-47caed15465f").unwrap()
    }

    #[test]
    fn test_file_path_generation() {
        let path = PathGenerator::get_file_path(
            Path::new("/cache"),
            "sl_cache",
            &test_id(),
            AssetCategory::Texture,
            "",
        );
        assert_eq!(
            path,
            PathBuf::from("/cache/sl_cache_89556747-24cb-43ed-920b-47caed15465f_texture_0.asset")
        );
    }

    #[test]
    fn test_extra_info_in_file_name() {
        let name =
            PathGenerator::file_name("sl_cache", &test_id(), AssetCategory::Mesh, "lod2");
        assert_eq!(
            name,
            "sl_cache_89556747-24cb-43ed-920b-47caed15465f_mesh_lod2.asset"
        );
    }

    #[test]
    fn test_categories_resolve_to_distinct_paths() {
        let root = Path::new("/cache");
        let a = PathGenerator::get_file_path(root, "p", &test_id(), AssetCategory::Sound, "");
        let b = PathGenerator::get_file_path(root, "p", &test_id(), AssetCategory::SoundWav, "");
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_cache_file_path() {
        let path = PathGenerator::get_file_path(
            Path::new("/cache"),
            "sl_cache",
            &test_id(),
            AssetCategory::Object,
            "",
        );
        assert!(PathGenerator::is_cache_file_path(&path, "sl_cache"));
        assert!(!PathGenerator::is_cache_file_path(&path, "other"));
        assert!(!PathGenerator::is_cache_file_path(
            Path::new("/cache/sl_cache_notes.txt"),
            "sl_cache"
        ));
    }
}
