//! # Persistent Preference Store / 持久化偏好存储
//!
//! Key/value access to the durable per-user storage medium, with fallback
//! defaults. The store owns the medium; nothing else reads or writes it.
//!
//! 对持久化的用户存储介质进行键值访问，并提供回退默认值。
//! 存储拥有该介质，其他组件不得直接读写。
//!
//! Writes are best-effort: a failing medium is logged and otherwise ignored,
//! so callers keep their in-memory value for the rest of the session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::StorageError;

/// Storage key of the advanced-mode flag.
pub const SHOW_ADVANCED: &str = "showAdvanced";
/// Storage key of the locale tag.
pub const LOCALE: &str = "locale";
/// Storage key of the selected feature-set version.
pub const REACT_VERSION: &str = "reactVersion";

/// A raw value as it sits in the medium.
///
/// Mediums hold strings or booleans; anything else (numbers, objects written by
/// some other tool) is kept verbatim in `Other` and decoded by string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl StoredValue {
    /// The value's string serialization (`true` -> `"true"`).
    pub fn string_form(&self) -> String {
        match self {
            StoredValue::Flag(flag) => flag.to_string(),
            StoredValue::Text(text) => text.clone(),
            StoredValue::Other(serde_json::Value::String(text)) => text.clone(),
            StoredValue::Other(other) => other.to_string(),
        }
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_form())
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        StoredValue::Flag(value)
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_string())
    }
}

/// Decodes a text preference. Every shape has a string form, so this never fails.
pub fn decode_text(raw: &StoredValue) -> String {
    raw.string_form()
}

/// A synchronous key -> value medium.
pub trait StorageMedium {
    /// Returns the stored value for `key`, or `None` when the key was never written.
    fn read(&self, key: &str) -> Option<StoredValue>;

    /// Stores `value` under `key`. On error the medium must be left as it was.
    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), StorageError>;
}

/// Session-only medium. Also models disabled storage and quota limits.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: BTreeMap<String, StoredValue>,
    unavailable: bool,
    quota: Option<usize>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// A medium that rejects every write, like storage disabled by the browser.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// A medium that holds at most `limit` distinct keys.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Seeds the medium with pre-existing entries.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StoredValue>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Option<StoredValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        if let Some(limit) = self.quota {
            if !self.entries.contains_key(key) && self.entries.len() >= limit {
                return Err(StorageError::QuotaExceeded { limit });
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// The only accessor of the durable medium.
pub struct PreferenceStore {
    medium: Box<dyn StorageMedium>,
}

impl PreferenceStore {
    pub fn new(medium: impl StorageMedium + 'static) -> Self {
        Self {
            medium: Box::new(medium),
        }
    }

    /// Returns the stored value if `key` exists, else `default`. Never writes.
    pub fn get(&self, key: &str, default: impl Into<StoredValue>) -> StoredValue {
        match self.medium.read(key) {
            Some(value) => value,
            None => {
                debug!(key, "No stored preference, using default");
                default.into()
            }
        }
    }

    /// Whether `key` has ever been written. An explicit `false` or `""` counts.
    pub fn contains(&self, key: &str) -> bool {
        self.medium.read(key).is_some()
    }

    /// Persists `value` under `key`, best-effort.
    pub fn set(&mut self, key: &str, value: impl Into<StoredValue>) {
        let value = value.into();
        let shown = value.string_form();
        match self.medium.write(key, value) {
            Ok(()) => info!(key, value = %shown, "Saved preference"),
            Err(err) => warn!(key, error = %err, "Failed to save settings; keeping the value for this session only"),
        }
    }
}

/// A preference bound to its key, holding the session value.
///
/// The in-memory value is updated before the write is attempted, so it stays
/// correct even when the medium rejects the write.
#[derive(Debug, Clone)]
pub struct Preference {
    key: &'static str,
    value: StoredValue,
}

impl Preference {
    /// Reads `key` from the store, falling back to `default`. Storage stays untouched.
    pub fn load(store: &PreferenceStore, key: &'static str, default: impl Into<StoredValue>) -> Self {
        Self {
            key,
            value: store.get(key, default),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn raw(&self) -> &StoredValue {
        &self.value
    }

    /// The value decoded as text.
    pub fn text(&self) -> String {
        decode_text(&self.value)
    }

    /// Replaces the session value and persists it.
    pub fn replace(&mut self, store: &mut PreferenceStore, value: impl Into<StoredValue>) {
        self.value = value.into();
        store.set(self.key, self.value.clone());
    }
}
