use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys whose files hold something other than shelf data.
const RESERVED_KEYS: &[&str] = &["config"];

/// Checks that `key` names a plain file inside the store root and does not
/// collide with the configuration file.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.contains("..")
        || RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key))
    {
        return Err(ShelfError::Store(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

/// File-backed key-value store: every key is a `{key}.json` file under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(text))
    }

    fn set(&mut self, key: &str, text: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Write to a temp file first so a crash never leaves a half-written shelf
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_path, text).map_err(ShelfError::Io)?;
        fs::rename(&tmp_path, path).map_err(ShelfError::Io)?;

        Ok(())
    }

    fn is_available(&self) -> bool {
        if self.ensure_dir().is_err() {
            return false;
        }
        match fs::metadata(&self.root) {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("BOOKSHELF_APPS").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_text() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("BOOKSHELF_APPS", "[]").unwrap();

        assert_eq!(store.get("BOOKSHELF_APPS").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("BOOKSHELF_APPS.json").exists());
    }

    #[test]
    fn set_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("shelf", "[1]").unwrap();
        store.set("shelf", "[2]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["shelf.json".to_string()]);
        assert_eq!(store.get("shelf").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(store.set("../outside", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.get("").is_err());
        assert!(store.get("a..b").is_err());
    }

    #[test]
    fn config_file_is_not_a_storage_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        fs::write(dir.path().join("config.json"), "{}").unwrap();

        assert!(store.set("config", "[]").is_err());
        assert!(store.get("Config").is_err());
        assert_eq!(fs::read_to_string(dir.path().join("config.json")).unwrap(), "{}");
    }

    #[test]
    fn directory_is_available() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("fresh"));
        assert!(store.is_available());
        assert!(dir.path().join("fresh").is_dir());
    }

    #[test]
    fn root_that_is_a_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let store = FileStore::new(&file);
        assert!(!store.is_available());
    }
}
