use crate::api::{ShelfApi, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory (used by tests and portable setups).
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub paths: ShelfPaths,
    pub config: ShelfConfig,
}

/// Directory holding the shelf and its config.
///
/// `$SHELF_HOME` wins when set and non-empty; otherwise the platform data dir.
pub fn data_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = home_override.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine a data directory".to_string()))
}

pub fn paths_from_env() -> Result<ShelfPaths> {
    let data_dir = data_dir(std::env::var_os(HOME_ENV).map(PathBuf::from))?;
    Ok(ShelfPaths { data_dir })
}

pub fn initialize(paths: ShelfPaths) -> Result<ShelfContext> {
    let config = ShelfConfig::load(&paths.data_dir)?;
    let store = FileStore::new(paths.data_dir.clone());
    let api = ShelfApi::open(store, &config)?;

    Ok(ShelfContext { api, paths, config })
}
