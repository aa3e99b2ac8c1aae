//! # Boolean Preferences / 布尔偏好
//!
//! Two-state preferences whose stored form may be a native boolean or its
//! string serialization. Anything that is not `true` or `"true"` reads as
//! `false`.
//!
//! 存储形式可能是原生布尔值或其字符串序列化的二态偏好。
//! 除 `true` 或 `"true"` 之外的任何值都读取为 `false`。

use tracing::debug;

use crate::core::store::{Preference, PreferenceStore, StoredValue};
use crate::core::update::{apply_update, Update};

/// Normalizes a stored value to a strict boolean.
pub fn decode_flag(raw: &StoredValue) -> bool {
    match raw {
        StoredValue::Flag(flag) => *flag,
        StoredValue::Text(text) => text == "true",
        other => {
            debug!(value = %other, "Malformed boolean preference, comparing its string form");
            other.string_form() == "true"
        }
    }
}

/// Reads `key` as a boolean, falling back to `default` when unset.
pub fn read(store: &PreferenceStore, key: &str, default: bool) -> bool {
    decode_flag(&store.get(key, default))
}

/// Resolves `next` against the current value of `key` and writes the literal result.
pub fn update(store: &mut PreferenceStore, key: &str, default: bool, next: impl Into<Update<bool>>) -> bool {
    let resolved = apply_update(read(store, key, default), next.into());
    store.set(key, resolved);
    resolved
}

/// A boolean preference holding its session value.
#[derive(Debug, Clone)]
pub struct FlagPreference {
    inner: Preference,
}

impl FlagPreference {
    pub fn load(store: &PreferenceStore, key: &'static str, default: bool) -> Self {
        Self {
            inner: Preference::load(store, key, default),
        }
    }

    pub fn key(&self) -> &'static str {
        self.inner.key()
    }

    pub fn get(&self) -> bool {
        decode_flag(self.inner.raw())
    }

    /// Applies `next` to the session value, persists it, and returns the new value.
    pub fn update(&mut self, store: &mut PreferenceStore, next: impl Into<Update<bool>>) -> bool {
        let resolved = apply_update(self.get(), next.into());
        self.inner.replace(store, resolved);
        resolved
    }
}
