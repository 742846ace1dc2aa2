use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::{pagination::SlotBudget, post::PostsPerPage};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files loaded after the default config.
pub const CONFIG_PATHS_VAR: &str = "FOLIO_CONFIG";

/// Loads the default config, followed by every file listed in `FOLIO_CONFIG`.
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATHS_VAR).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|path| !path.is_empty()))
        .collect::<Vec<_>>();
    load_paths(&paths)
}

const META_PATH_KEY: &str = "posts.meta_path";
const STORAGE_PATH_KEY: &str = "theme.storage_path";

/// Loads and merges the given config files. Later files override earlier ones.
///
/// Relative paths in the config are resolved against the directory of the
/// file that set them, not the working directory.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let mut base_dirs = HashMap::new();
    let mut config: Config = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;

            let file = config::Config::builder()
                .add_source(File::from_str(&content, FileFormat::Toml))
                .build()
                .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
            let dir = path.parent().unwrap_or(Path::new(""));
            for key in [META_PATH_KEY, STORAGE_PATH_KEY] {
                if file.get_string(key).is_ok() {
                    base_dirs.insert(key, dir.to_owned());
                }
            }

            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    // joining an absolute path replaces the base
    if let Some(dir) = base_dirs.get(META_PATH_KEY) {
        config.posts.meta_path = dir.join(&config.posts.meta_path);
    }
    if let Some(dir) = base_dirs.get(STORAGE_PATH_KEY) {
        config.theme.storage_path = dir.join(&config.theme.storage_path);
    }

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub pagination: PaginationConfig,
    pub posts: PostsConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize)]
pub struct PaginationConfig {
    pub max_slots: SlotBudget,
}

#[derive(Debug, Deserialize)]
pub struct PostsConfig {
    pub per_page: PostsPerPage,
    pub meta_path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    pub storage_path: PathBuf,
}
