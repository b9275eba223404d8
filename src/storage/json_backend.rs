use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::utils::paths::{app_data_dir, key_file};

use super::{Result, StorageBackend};

/// File-backed key-value storage keeping one JSON document per key.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens storage at the default application data directory.
    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Absolute path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        key_file(&self.root, key)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.key_path(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Writes `data` atomically by staging to a temporary file and renaming.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}
