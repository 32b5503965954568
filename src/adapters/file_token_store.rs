//! File-based bearer token storage.
//!
//! The token lives in `~/.viralforge/auth.json` as `{"auth_token": "..."}`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{TokenStore, TokenStoreError};

/// The storage directory name under the home directory.
pub const STORAGE_DIR: &str = ".viralforge";

/// The token file name.
const TOKEN_FILE: &str = "auth.json";

/// On-disk shape of the token file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct StoredToken {
    auth_token: Option<String>,
}

/// Token store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            path: home.join(STORAGE_DIR).join(TOKEN_FILE),
        })
    }

    /// Create a store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let file = File::open(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_reader(BufReader::new(file)).ok()?;
        stored.auth_token.filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let stored = StoredToken {
            auth_token: Some(token.to_string()),
        };
        serde_json::to_writer_pretty(&mut writer, &stored)?;
        writer.flush()?;

        tracing::debug!("Auth token saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileTokenStore {
        FileTokenStore::at(dir.path().join("nested").join("auth.json"))
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("abc123").unwrap();

        assert_eq!(store.load(), Some("abc123".to_string()));
        assert!(store.path().exists());
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("abc123").unwrap();

        store.clear().unwrap();

        assert_eq!(store.load(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_without_file_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.load(), None);
    }
}
