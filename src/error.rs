//! # Error Types / 错误类型
//!
//! Errors raised by the preference layer. Storage failures never leave the
//! preference store (they are logged and swallowed there); configuration
//! errors surface at the CLI boundary only.
//!
//! 偏好层产生的错误。存储失败不会离开偏好存储（在那里记录并吞掉）；
//! 配置错误只会在 CLI 边界处暴露。

use std::path::PathBuf;
use thiserror::Error;

/// A durable-medium write that did not happen.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium refuses writes altogether (disabled or private storage).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The medium is full.
    #[error("preference storage quota exceeded ({limit} entries)")]
    QuotaExceeded { limit: usize },

    /// The preference file could not be written.
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference map could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Invalid static or user-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the supported locale set must not be empty")]
    EmptyLocaleSet,

    #[error("the supported version set must not be empty")]
    EmptyVersionSet,

    /// Light and dark palettes disagree on their role names.
    #[error("theme palettes define different roles (light only: {light_only:?}, dark only: {dark_only:?})")]
    MismatchedThemeRoles {
        light_only: Vec<String>,
        dark_only: Vec<String>,
    },

    /// A palette lacks one of the semantic roles the renderer needs.
    #[error("theme palettes are missing the '{0}' role")]
    MissingThemeRole(String),

    #[error("failed to read theme file {path}: {source}")]
    ThemeFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme file {path}: {source}")]
    ThemeFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
