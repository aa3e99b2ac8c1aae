//! # Durable Preference Storage / 持久化偏好存储
//!
//! A JSON object file in the per-user config directory, used as the
//! [`StorageMedium`] behind the preference store.
//!
//! 位于用户配置目录中的 JSON 对象文件，作为偏好存储背后的 [`StorageMedium`]。

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::core::store::{StorageMedium, StoredValue};
use crate::error::StorageError;

/// Environment variable overriding the preference file location.
pub const STORAGE_ENV: &str = "LIFECYCLE_DIAGRAM_STORAGE";

const APP_DIR: &str = "lifecycle-diagram";
const FILENAME: &str = "preferences.json";

/// `<config dir>/lifecycle-diagram/preferences.json`, or the working directory if there is no config dir.
pub fn default_storage_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(FILENAME);
    path
}

/// Picks the preference file: explicit path, then [`STORAGE_ENV`], then the default.
/// A leading `~` is expanded.
pub fn resolve_storage_path(explicit: Option<&Path>) -> PathBuf {
    let raw = explicit
        .map(|p| p.to_string_lossy().into_owned())
        .or_else(|| env::var(STORAGE_ENV).ok().filter(|v| !v.trim().is_empty()));

    match raw {
        Some(raw) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
        None => default_storage_path(),
    }
}

/// Preference file medium. Every write rewrites the whole file atomically.
#[derive(Debug)]
pub struct JsonFileMedium {
    path: PathBuf,
    entries: BTreeMap<String, StoredValue>,
}

impl JsonFileMedium {
    /// Opens `path`. A missing file is an empty medium; an unreadable or corrupt one
    /// is logged and treated as empty (it is replaced on the next write).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, StoredValue>>(&content) {
                Ok(entries) => {
                    debug!(path = %path.display(), count = entries.len(), "Loaded preference file");
                    entries
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Preference file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read preference file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, StoredValue>) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;
        let mut file = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        file.write_all(encoded.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| self.write_error(source))?;
        file.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;
        Ok(())
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl StorageMedium for JsonFileMedium {
    fn read(&self, key: &str) -> Option<StoredValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }
}
